pub mod add;
pub mod delete;
pub mod show;

use anyhow::Result;
use party_core::{Action, App, HttpApi, Node};

use crate::Format;
use crate::host::TerminalHost;
use crate::render::Render;

pub type TerminalApp = App<HttpApi, TerminalHost>;

/// Click a party's row, the way a user would. Only listed parties can be clicked.
pub async fn select(app: &TerminalApp, id: i64) -> Result<()> {
    let tree = app
        .host()
        .mounted()
        .ok_or_else(|| anyhow::anyhow!("Nothing has been rendered yet"))?;
    ensure_listed(&tree, id)?;

    app.dispatch(Action::SelectParty(id)).await;
    Ok(())
}

/// Fail unless `tree` has a clickable row for party `id`.
fn ensure_listed(tree: &Node, id: i64) -> Result<()> {
    let listed: Vec<i64> = tree
        .actions()
        .into_iter()
        .filter_map(|action| match action {
            Action::SelectParty(listed) => Some(listed),
            _ => None,
        })
        .collect();

    if !listed.contains(&id) {
        let available: Vec<_> = listed.iter().map(|id| id.to_string()).collect();
        anyhow::bail!(
            "Party #{} not found. Available: {}",
            id,
            if available.is_empty() { "(none)".to_string() } else { available.join(", ") }
        );
    }

    Ok(())
}

fn output(tree: &Node, format: Format) -> String {
    match format {
        Format::Text => tree.render(),
        Format::Html => tree.to_html(),
    }
}

/// Print the last mounted view, failing if any write was rejected.
pub fn print(host: &TerminalHost, format: Format) -> Result<()> {
    let tree = host
        .mounted()
        .ok_or_else(|| anyhow::anyhow!("Nothing has been rendered yet"))?;

    println!("{}", output(&tree, format));

    if host.alert_count() > 0 {
        anyhow::bail!("The party service rejected the request");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use party_core::view::{PartyDraft, build};
    use party_core::{Host, Party, State};

    fn party(id: i64, name: &str) -> Party {
        Party {
            id,
            name: name.to_string(),
            description: "Bring snacks".to_string(),
            date: "2024-01-01T00:00:00.000Z".to_string(),
            location: "Rooftop".to_string(),
        }
    }

    fn tree(parties: Vec<Party>) -> Node {
        let mut state = State::new();
        state.set_parties(parties);
        build(&state, &PartyDraft::default())
    }

    #[test]
    fn listed_party_can_be_selected() {
        let tree = tree(vec![party(1, "Gala"), party(4, "Brunch")]);
        assert!(ensure_listed(&tree, 4).is_ok());
    }

    #[test]
    fn unlisted_party_names_the_available_ones() {
        let tree = tree(vec![party(1, "Gala"), party(4, "Brunch")]);
        let err = ensure_listed(&tree, 9).unwrap_err();
        assert_eq!(err.to_string(), "Party #9 not found. Available: 1, 4");
    }

    #[test]
    fn unlisted_party_with_empty_list() {
        let err = ensure_listed(&tree(vec![]), 1).unwrap_err();
        assert_eq!(err.to_string(), "Party #1 not found. Available: (none)");
    }

    #[test]
    fn html_format_prints_the_fragment() {
        let html = output(&tree(vec![party(1, "Gala")]), Format::Html);
        assert!(html.starts_with("<div><h1>Party Planner</h1>"));
        assert!(html.contains(r##"<ul class="parties"><li><a href="#selected">Gala</a></li></ul>"##));
    }

    #[test]
    fn print_fails_after_an_alert() {
        let host = TerminalHost::default();
        host.mount(tree(vec![party(1, "Gala")]));
        assert!(print(&host, Format::Html).is_ok());

        host.alert("Name is required");
        let err = print(&host, Format::Text).unwrap_err();
        assert_eq!(err.to_string(), "The party service rejected the request");
    }

    #[test]
    fn print_needs_a_mounted_view() {
        assert!(print(&TerminalHost::default(), Format::Html).is_err());
    }
}
