//! View builder: the whole visible fragment, rebuilt from state on every render.

mod form;
mod node;

pub use form::{Field, PartyDraft, party_form};
pub use node::{Action, Element, Handler, Node};

use crate::party::Party;
use crate::state::State;

static PLACEHOLDER: &str = "Please select a party to learn more.";

/// Build the full fragment: party list, creation form, selected party details.
pub fn build(state: &State, draft: &PartyDraft) -> Node {
    Element::new("div")
        .child(Element::new("h1").text("Party Planner"))
        .child(
            Element::new("main")
                .child(
                    Element::new("section")
                        .child(Element::new("h2").text("Upcoming Parties"))
                        .child(party_list(state)),
                )
                .child(Element::new("section").child(party_form(draft)))
                .child(
                    Element::new("section")
                        .attr("id", "selected")
                        .child(Element::new("h2").text("Party Details"))
                        .child(selected_party(state)),
                ),
        )
        .into()
}

/// One row per party, in the order the service returned them.
pub fn party_list(state: &State) -> Node {
    let rows = state.parties().iter().map(|party| party_row(state, party));
    Element::new("ul").class("parties").children(rows).into()
}

fn party_row(state: &State, party: &Party) -> Node {
    let mut li = Element::new("li");
    if state.is_selected(party.id) {
        li = li.class("selected");
    }
    li.child(Element::new("a").attr("href", "#selected").text(&party.name))
        .on(Handler::Click(Action::SelectParty(party.id)))
        .into()
}

pub fn selected_party(state: &State) -> Node {
    let Some(party) = state.selected() else {
        return Element::new("p").text(PLACEHOLDER).into();
    };

    Element::new("section")
        .child(Element::new("h3").text(format!("{} #{}", party.name, party.id)))
        .child(
            Element::new("time")
                .attr("datetime", &party.date)
                .text(party.calendar_date()),
        )
        .child(Element::new("address").text(&party.location))
        .child(Element::new("p").text(&party.description))
        .child(
            Element::new("button")
                .attr("id", "delete")
                .text("Delete Party")
                .on(Handler::Click(Action::DeleteParty(party.id))),
        )
        .child(guest_list(state))
        .into()
}

/// Guests with an RSVP for the selected party. Empty without a selection.
pub fn guest_list(state: &State) -> Node {
    let ul = Element::new("ul").class("guests");
    let Some(party) = state.selected() else {
        return ul.into();
    };

    let rows = state
        .guests_for(party.id)
        .into_iter()
        .map(|guest| Node::from(Element::new("li").text(&guest.name)));
    ul.children(rows).into()
}
