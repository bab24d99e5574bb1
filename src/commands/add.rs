use anyhow::Result;
use party_core::{Action, Field};

use super::TerminalApp;

/// Form input as given on the command line.
pub struct Draft {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

pub async fn run(app: &TerminalApp, draft: Draft, select: Option<i64>) -> Result<()> {
    if let Some(id) = select {
        super::select(app, id).await?;
    }

    app.set_field(Field::Name, draft.name).await;
    app.set_field(Field::Description, draft.description).await;
    app.set_field(Field::Date, draft.date).await;
    app.set_field(Field::Location, draft.location).await;

    app.dispatch(Action::SubmitParty).await;
    Ok(())
}
