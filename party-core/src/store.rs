//! State store: fetch from the service, commit into `State`.
//!
//! Read operations swallow their failures after logging them, leaving the
//! previous value in place. Write operations hand server rejections back to
//! the caller so they can be shown to the user.

use tracing::{debug, error};

use crate::api::PartyApi;
use crate::error::ApiResult;
use crate::party::{NewParty, PartyId};
use crate::state::State;

pub struct Store<A> {
    api: A,
    state: State,
}

impl<A: PartyApi> Store<A> {
    pub fn new(api: A) -> Self {
        Store {
            api,
            state: State::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Startup sequence: parties, then RSVPs, then guests.
    pub async fn prime(&mut self) {
        self.load_parties().await;
        self.load_rsvps().await;
        self.load_guests().await;
    }

    pub async fn load_parties(&mut self) {
        match self.api.list_parties().await {
            Ok(parties) => {
                debug!(count = parties.len(), "loaded parties");
                self.state.set_parties(parties);
            }
            Err(e) => error!(error = %e, "failed to load parties"),
        }
    }

    /// Fetch one party and make it the selection.
    pub async fn load_party(&mut self, id: PartyId) {
        match self.api.get_party(id).await {
            Ok(party) => self.state.select(party),
            Err(e) => error!(error = %e, id, "failed to load party"),
        }
    }

    pub async fn load_rsvps(&mut self) {
        match self.api.list_rsvps().await {
            Ok(rsvps) => {
                debug!(count = rsvps.len(), "loaded rsvps");
                self.state.set_rsvps(rsvps);
            }
            Err(e) => error!(error = %e, "failed to load rsvps"),
        }
    }

    pub async fn load_guests(&mut self) {
        match self.api.list_guests().await {
            Ok(guests) => {
                debug!(count = guests.len(), "loaded guests");
                self.state.set_guests(guests);
            }
            Err(e) => error!(error = %e, "failed to load guests"),
        }
    }

    /// Create a party, then refetch the list. Nothing is inserted locally.
    pub async fn create_party(&mut self, party: NewParty) -> ApiResult<()> {
        if let Err(e) = self.api.create_party(&party).await {
            error!(error = %e, name = %party.name, "failed to create party");
            return Err(e);
        }

        self.load_parties().await;
        Ok(())
    }

    /// Delete a party, drop it from the selection if needed, then refetch the list.
    pub async fn delete_party(&mut self, id: PartyId) -> ApiResult<()> {
        if let Err(e) = self.api.delete_party(id).await {
            error!(error = %e, id, "failed to delete party");
            return Err(e);
        }

        if self.state.clear_selection_if(id) {
            debug!(id, "cleared selection of deleted party");
        }
        self.load_parties().await;
        Ok(())
    }
}
