//! Core of the party planner.
//!
//! This crate holds everything the host binary drives:
//! - `party` data types and the `{ data }` / `{ error }` response envelopes
//! - `api`, the REST client for the events/rsvps/guests service
//! - `store`, the state container and its fetch-and-commit mutators
//! - `view`, the virtual tree rebuilt from state on every render
//! - `app`, which ties mutators to renders and talks to the host

pub mod api;
pub mod app;
pub mod config;
pub mod date;
pub mod error;
pub mod party;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{HttpApi, PartyApi};
pub use app::{App, Host};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use party::*;
pub use state::State;
pub use store::Store;
pub use view::{Action, Field, Handler, Node, PartyDraft};
