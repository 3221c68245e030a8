//! # sunset-client
//!
//! ThoughtSpot REST API v2 client for sunset.
//!
//! Covers the endpoints the archive pipeline and its preview commands need:
//! - `auth/token/full` and `auth/session/user`
//! - `metadata/search` (catalog listing and dependent lookup)
//! - `searchdata` (impression counts from the usage worksheet)
//! - `metadata/tml/export` (alert artifact detection and export previews)
//! - `security/metadata/fetch-permissions`
//!
//! The client is an explicit capability object: it is constructed once, holds
//! its own bearer token, and is handed to every stage that needs the platform.

mod auth;
mod error;
mod http;
mod metadata;
mod platform;
mod searchdata;
mod security;
mod tml;

pub use error::ClientError;
pub use metadata::{DependentGroup, DependentHeader};
pub use platform::Platform;
pub use tml::TmlArtifact;

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

use crate::http::check_response;

const API_PREFIX: &str = "/api/rest/2.0";

/// HTTP client for one ThoughtSpot instance.
#[derive(Debug, Clone)]
pub struct ThoughtSpotClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
    usage_worksheet_id: Option<String>,
}

impl ThoughtSpotClient {
    /// Create an unauthenticated client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sunset/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
            usage_worksheet_id: None,
        })
    }

    /// Set the worksheet that impression queries run against.
    #[must_use]
    pub fn with_usage_worksheet(mut self, logical_table_id: impl Into<String>) -> Self {
        let id = logical_table_id.into();
        self.usage_worksheet_id = (!id.is_empty()).then_some(id);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    fn token(&self) -> Result<&str, ClientError> {
        self.bearer_token
            .as_deref()
            .ok_or(ClientError::NotAuthenticated)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(self.token()?)
            .json(body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Parse(format!("{path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(self.token()?)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Parse(format!("{path}: {e}")))
    }
}
