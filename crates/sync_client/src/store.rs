use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::{GuestId, GuestRecord},
    error::{ApiError, ErrorCode},
    protocol::GuestFields,
};
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Store-level classification of a failed remote call. The controller maps
/// `Unavailable` onto the per-operation taxonomy entry; `NotFound` and
/// `DuplicateEmail` keep their identity across the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no record for the given id")]
    NotFound,
    #[error("email is already taken")]
    DuplicateEmail,
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// The opaque remote record store, per logical collection of guests.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The complete current set, in one logical call. No pagination.
    async fn list(&self) -> Result<Vec<GuestRecord>, StoreError>;
    async fn get(&self, id: &GuestId) -> Result<GuestRecord, StoreError>;
    /// Returns the stored record carrying its newly assigned id.
    async fn create(&self, fields: &GuestFields) -> Result<GuestRecord, StoreError>;
    /// Full replacement of the mutable fields keyed by `id`.
    async fn update(&self, id: &GuestId, fields: &GuestFields) -> Result<GuestRecord, StoreError>;
    async fn delete(&self, id: &GuestId) -> Result<(), StoreError>;
}

/// [`RecordStore`] over HTTP: `GET|POST /guests`, `GET|PUT|DELETE /guests/:id`.
///
/// Status mapping: 404 is `NotFound`, 409 is `DuplicateEmail`, anything else
/// non-2xx (or a transport failure) is `Unavailable` with the body's
/// [`ApiError`] message when one is present.
pub struct HttpRecordStore {
    http: Client,
    base_url: Url,
}

impl HttpRecordStore {
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| StoreError::Unavailable(format!("invalid base url: {err}")))?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    fn guests_url(&self) -> String {
        format!("{}/guests", self.base_url.as_str().trim_end_matches('/'))
    }

    fn guest_url(&self, id: &GuestId) -> String {
        format!("{}/{}", self.guests_url(), id)
    }

    async fn rejection(response: Response) -> StoreError {
        let status = response.status();
        let body: Option<ApiError> = response.json().await.ok();
        warn!(status = %status, body = ?body, "record store rejected request");

        match status {
            StatusCode::NOT_FOUND => StoreError::NotFound,
            StatusCode::CONFLICT => StoreError::DuplicateEmail,
            _ => match body {
                Some(api) => match api.code {
                    ErrorCode::NotFound => StoreError::NotFound,
                    ErrorCode::DuplicateEmail => StoreError::DuplicateEmail,
                    ErrorCode::Validation | ErrorCode::Internal => {
                        StoreError::Unavailable(api.message)
                    }
                },
                None => StoreError::Unavailable(format!("record store returned {status}")),
            },
        }
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn list(&self) -> Result<Vec<GuestRecord>, StoreError> {
        let response = self.http.get(self.guests_url()).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn get(&self, id: &GuestId) -> Result<GuestRecord, StoreError> {
        let response = self.http.get(self.guest_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn create(&self, fields: &GuestFields) -> Result<GuestRecord, StoreError> {
        let response = self
            .http
            .post(self.guests_url())
            .json(fields)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn update(&self, id: &GuestId, fields: &GuestFields) -> Result<GuestRecord, StoreError> {
        let response = self
            .http
            .put(self.guest_url(id))
            .json(fields)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &GuestId) -> Result<(), StoreError> {
        let response = self.http.delete(self.guest_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}
