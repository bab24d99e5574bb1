use anyhow::Result;
use party_core::Action;

use super::TerminalApp;

pub async fn run(app: &TerminalApp, id: i64, select: Option<i64>) -> Result<()> {
    if let Some(selected) = select {
        super::select(app, selected).await?;
    }

    // Unknown ids are reported by the service.
    app.dispatch(Action::DeleteParty(id)).await;
    Ok(())
}
