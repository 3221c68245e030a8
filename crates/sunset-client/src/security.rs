//! Read-only previews: object permissions and the current session.

use serde_json::{Value, json};

use crate::{ClientError, ThoughtSpotClient};

impl ThoughtSpotClient {
    /// Fetch the principals and access levels on `id`, as returned by the platform.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not JSON.
    pub async fn fetch_permissions(&self, id: &str) -> Result<Value, ClientError> {
        let body = json!({ "metadata": [{ "identifier": id }] });
        self.post_json("/security/metadata/fetch-permissions", &body)
            .await
    }

    /// Describe the user the bearer token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not JSON.
    pub async fn session_user(&self) -> Result<Value, ClientError> {
        self.get_json("/auth/session/user").await
    }
}
