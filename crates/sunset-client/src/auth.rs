//! Username/password login.

use serde::{Deserialize, Serialize};

use crate::{ClientError, ThoughtSpotClient, http::check_response};

#[derive(Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
    validity_time_in_sec: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: Option<String>,
}

impl ThoughtSpotClient {
    /// Exchange credentials for a bearer token and keep it on the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthorized`] for rejected credentials,
    /// [`ClientError::MissingField`] if the response has no token, or any
    /// transport error.
    pub async fn authenticate(
        &mut self,
        username: &str,
        password: &str,
        validity_secs: u64,
    ) -> Result<(), ClientError> {
        let body = TokenRequest {
            username,
            password,
            validity_time_in_sec: validity_secs,
        };
        let resp = self
            .http
            .post(self.url("/auth/token/full"))
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let data: TokenResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("auth token: {e}")))?;
        let token = data
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::MissingField("token".into()))?;

        tracing::debug!(user = username, "authenticated");
        self.bearer_token = Some(token);
        Ok(())
    }
}
