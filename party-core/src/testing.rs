//! In-memory party service and fixtures for unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::PartyApi;
use crate::app::Host;
use crate::error::{ApiError, ApiResult};
use crate::party::{Guest, NewParty, Party, PartyId, Rsvp};
use crate::view::Node;

pub fn party(id: PartyId, name: &str) -> Party {
    Party {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        date: "2024-01-01T00:00:00.000Z".to_string(),
        location: format!("{name} location"),
    }
}

pub fn guest(id: i64, name: &str) -> Guest {
    Guest {
        id,
        name: name.to_string(),
    }
}

pub fn rsvp(guest_id: i64, event_id: PartyId) -> Rsvp {
    Rsvp { guest_id, event_id }
}

#[derive(Default)]
struct Service {
    parties: Vec<Party>,
    rsvps: Vec<Rsvp>,
    guests: Vec<Guest>,
    next_id: PartyId,
    reads_fail: bool,
    reject_writes: Option<Option<String>>,
    calls: Vec<String>,
    delete_delay: Option<Duration>,
}

/// A party service kept in memory, with switches for failure modes.
#[derive(Default)]
pub struct FakeApi {
    inner: Mutex<Service>,
}

impl FakeApi {
    pub fn new(parties: Vec<Party>, rsvps: Vec<Rsvp>, guests: Vec<Guest>) -> Self {
        let next_id = parties.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        FakeApi {
            inner: Mutex::new(Service {
                parties,
                rsvps,
                guests,
                next_id,
                ..Default::default()
            }),
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.inner.lock().unwrap().reads_fail = fail;
    }

    /// Make creates and deletes answer non-2xx with the given message.
    pub fn reject_writes(&self, message: Option<&str>) {
        self.inner.lock().unwrap().reject_writes = Some(message.map(str::to_string));
    }

    pub fn slow_deletes(&self, delay: Duration) {
        self.inner.lock().unwrap().delete_delay = Some(delay);
    }

    /// Remove a party behind the client's back.
    pub fn remove(&self, id: PartyId) {
        self.inner.lock().unwrap().parties.retain(|p| p.id != id);
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call.clone());
        if inner.reads_fail && call.starts_with("GET") {
            return Err(ApiError::Status {
                status: 503,
                url: call,
            });
        }
        Ok(())
    }

    fn write_rejection(&self) -> ApiResult<()> {
        match &self.inner.lock().unwrap().reject_writes {
            Some(message) => Err(ApiError::Rejected {
                status: 400,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PartyApi for FakeApi {
    async fn list_parties(&self) -> ApiResult<Vec<Party>> {
        self.record("GET /events".into())?;
        Ok(self.inner.lock().unwrap().parties.clone())
    }

    async fn get_party(&self, id: PartyId) -> ApiResult<Party> {
        let path = format!("/events/{id}");
        self.record(format!("GET {path}"))?;
        let inner = self.inner.lock().unwrap();
        inner
            .parties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::MissingData(path))
    }

    async fn create_party(&self, new: &NewParty) -> ApiResult<()> {
        self.record("POST /events".into())?;
        self.write_rejection()?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.parties.push(Party {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            date: new.date.clone(),
            location: new.location.clone(),
        });
        Ok(())
    }

    async fn delete_party(&self, id: PartyId) -> ApiResult<()> {
        self.record(format!("DELETE /events/{id}"))?;
        self.write_rejection()?;
        let delay = self.inner.lock().unwrap().delete_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.lock().unwrap().parties.retain(|p| p.id != id);
        Ok(())
    }

    async fn list_rsvps(&self) -> ApiResult<Vec<Rsvp>> {
        self.record("GET /rsvps".into())?;
        Ok(self.inner.lock().unwrap().rsvps.clone())
    }

    async fn list_guests(&self) -> ApiResult<Vec<Guest>> {
        self.record("GET /guests".into())?;
        Ok(self.inner.lock().unwrap().guests.clone())
    }
}

/// Host that remembers every mount and alert.
#[derive(Default)]
pub struct RecordingHost {
    mounts: Mutex<Vec<Node>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn mounted(&self) -> Node {
        self.mounts
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("nothing mounted yet")
    }

    pub fn mount_count(&self) -> usize {
        self.mounts.lock().unwrap().len()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn mount(&self, tree: Node) {
        self.mounts.lock().unwrap().push(tree);
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
