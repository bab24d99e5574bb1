//! Party, guest and RSVP types as the service sends them.

use serde::{Deserialize, Deserializer, Serialize};

pub type PartyId = i64;
pub type GuestId = i64;

/// A scheduled party (the service calls these "events").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// ISO-8601 instant, e.g. "2024-01-01T00:00:00.000Z"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

impl Party {
    /// The calendar-date portion of `date` (its first 10 characters).
    pub fn calendar_date(&self) -> &str {
        match self.date.char_indices().nth(10) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}

/// Body of a create request. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewParty {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

/// Links a guest to a party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub guest_id: GuestId,
    pub event_id: PartyId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Success envelope: `{ "data": ... }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// Failure envelope: `{ "error": { "message": ... } }`
///
/// `error` is kept loose so a malformed error value still counts as an error.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        self.error
            .as_ref()?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }
}

/// Text fields may come back as `null`; treat that like a missing field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
