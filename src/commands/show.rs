use anyhow::Result;

use super::TerminalApp;

pub async fn run(app: &TerminalApp, select: Option<i64>) -> Result<()> {
    if let Some(id) = select {
        super::select(app, id).await?;
    }
    Ok(())
}
