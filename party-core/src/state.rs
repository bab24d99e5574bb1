//! In-memory state shown by the view.

use crate::party::{Guest, Party, PartyId, Rsvp};

/// The four pieces of state the view is built from.
///
/// Collections are only ever replaced whole, with the result of a successful fetch.
#[derive(Debug, Default, Clone)]
pub struct State {
    parties: Vec<Party>,
    selected: Option<Party>,
    rsvps: Vec<Rsvp>,
    guests: Vec<Guest>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn selected(&self) -> Option<&Party> {
        self.selected.as_ref()
    }

    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn set_parties(&mut self, parties: Vec<Party>) {
        self.parties = parties;
    }

    pub fn select(&mut self, party: Party) {
        self.selected = Some(party);
    }

    pub fn set_rsvps(&mut self, rsvps: Vec<Rsvp>) {
        self.rsvps = rsvps;
    }

    pub fn set_guests(&mut self, guests: Vec<Guest>) {
        self.guests = guests;
    }

    /// Drop the selection if it points at `id`. Returns whether it did.
    pub fn clear_selection_if(&mut self, id: PartyId) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }

    /// Selection is compared by id, so a stale selected copy still matches.
    pub fn is_selected(&self, id: PartyId) -> bool {
        self.selected.as_ref().is_some_and(|p| p.id == id)
    }

    /// Guests with an RSVP for `party_id`, in guest-list order.
    ///
    /// A guest appears once per matching guest entry; duplicate guest entries
    /// are kept as-is.
    pub fn guests_for(&self, party_id: PartyId) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|guest| {
                self.rsvps
                    .iter()
                    .any(|rsvp| rsvp.guest_id == guest.id && rsvp.event_id == party_id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{guest, party, rsvp};

    #[test]
    fn starts_empty() {
        let state = State::new();
        assert!(state.parties().is_empty());
        assert!(state.selected().is_none());
        assert!(state.rsvps().is_empty());
        assert!(state.guests().is_empty());
    }

    #[test]
    fn guests_for_follows_rsvps_in_guest_order() {
        let mut state = State::new();
        state.set_guests(vec![guest(1, "Ada"), guest(2, "Bo"), guest(3, "Cy")]);
        state.set_rsvps(vec![rsvp(3, 10), rsvp(1, 10), rsvp(2, 11)]);

        let names: Vec<_> = state.guests_for(10).iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Ada", "Cy"]);
        assert!(state.guests_for(99).is_empty());
    }

    #[test]
    fn guests_for_keeps_duplicate_guest_entries() {
        let mut state = State::new();
        state.set_guests(vec![guest(1, "Ada"), guest(1, "Ada")]);
        state.set_rsvps(vec![rsvp(1, 10), rsvp(1, 10)]);

        assert_eq!(state.guests_for(10).len(), 2);
    }

    #[test]
    fn clear_selection_only_for_matching_id() {
        let mut state = State::new();
        state.select(party(4, "Picnic"));

        assert!(!state.clear_selection_if(5));
        assert!(state.is_selected(4));

        assert!(state.clear_selection_if(4));
        assert!(state.selected().is_none());
    }

    #[test]
    fn selection_survives_party_list_refresh() {
        let mut state = State::new();
        state.set_parties(vec![party(1, "A")]);
        state.select(party(1, "A"));
        state.set_parties(vec![party(2, "B")]);

        assert!(state.is_selected(1));
        assert!(!state.is_selected(2));
    }
}
