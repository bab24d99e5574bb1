//! HTTP client for the party service.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::party::{Envelope, ErrorBody, Guest, NewParty, Party, PartyId, Rsvp};

/// The remote CRUD service the store reads from and writes to.
#[async_trait]
pub trait PartyApi: Send + Sync {
    /// GET /events
    async fn list_parties(&self) -> ApiResult<Vec<Party>>;

    /// GET /events/:id
    async fn get_party(&self, id: PartyId) -> ApiResult<Party>;

    /// POST /events
    async fn create_party(&self, party: &NewParty) -> ApiResult<()>;

    /// DELETE /events/:id
    async fn delete_party(&self, id: PartyId) -> ApiResult<()>;

    /// GET /rsvps
    async fn list_rsvps(&self) -> ApiResult<Vec<Rsvp>>;

    /// GET /guests
    async fn list_guests(&self) -> ApiResult<Vec<Guest>>;
}

/// `PartyApi` over HTTPS/JSON
pub struct HttpApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        HttpApi {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// GET a `{ data }` envelope and hand back its payload.
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<T>> {
        let url = self.config.endpoint(path);
        debug!(%url, "GET");

        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status().as_u16(),
                url,
            });
        }

        let body = resp.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl PartyApi for HttpApi {
    async fn list_parties(&self) -> ApiResult<Vec<Party>> {
        Ok(self.get_data("/events").await?.unwrap_or_default())
    }

    async fn get_party(&self, id: PartyId) -> ApiResult<Party> {
        let path = format!("/events/{id}");
        self.get_data(&path)
            .await?
            .ok_or_else(|| ApiError::MissingData(path))
    }

    async fn create_party(&self, party: &NewParty) -> ApiResult<()> {
        let url = self.config.endpoint("/events");
        debug!(%url, name = %party.name, "POST");

        let resp = self.http.post(&url).json(party).send().await?;
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        // The created party is not used: the caller refetches the whole list.
        let body = resp.bytes().await?;
        if let Ok(Envelope { data: Some(created) }) = serde_json::from_slice::<Envelope<Party>>(&body) {
            debug!(id = created.id, "party created");
        }
        Ok(())
    }

    async fn delete_party(&self, id: PartyId) -> ApiResult<()> {
        let url = self.config.endpoint(&format!("/events/{id}"));
        debug!(%url, "DELETE");

        let resp = self.http.delete(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(rejection(resp).await);
        }

        // A 2xx is only trusted if the body doesn't carry an error object.
        let body = resp.bytes().await?;
        check_delete_body(status, &body)
    }

    async fn list_rsvps(&self) -> ApiResult<Vec<Rsvp>> {
        Ok(self.get_data("/rsvps").await?.unwrap_or_default())
    }

    async fn list_guests(&self) -> ApiResult<Vec<Guest>> {
        Ok(self.get_data("/guests").await?.unwrap_or_default())
    }
}

/// Turn a non-2xx write response into `ApiError::Rejected`.
async fn rejection(resp: Response) -> ApiError {
    let status = resp.status().as_u16();
    let message = match resp.bytes().await {
        Ok(body) => error_message(&body),
        Err(_) => None,
    };
    ApiError::Rejected { status, message }
}

fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
}

fn check_delete_body(status: StatusCode, body: &[u8]) -> ApiResult<()> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(body) if body.error.is_some() => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: body.message(),
        }),
        _ => Ok(()),
    }
}
