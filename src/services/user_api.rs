//! User API Client
//!
//! One-shot `GET` of the user list. Failures are classified into network,
//! status and parse errors; the caller decides how to present them.

use snafu::ResultExt;

use crate::domain::User;
use crate::error::{HttpStatusSnafu, NetworkSnafu, ParseSnafu, Result};

/// HTTP client for the user list endpoint
#[derive(Debug, Clone)]
pub struct UserApi {
    client: reqwest::Client,
    users_url: String,
}

impl UserApi {
    /// Create a client for `users_url`
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            users_url: users_url.into(),
        }
    }

    /// Fetch the user list
    ///
    /// No headers, no retry, no timeout beyond the client's defaults. The body
    /// is read in full before parsing so a decode failure is reported as a
    /// parse error rather than a network error.
    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        tracing::debug!("GET {}", self.users_url);

        let response = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .context(NetworkSnafu)?;

        let status = response.status();
        if !status.is_success() {
            return HttpStatusSnafu {
                status: status.as_u16(),
            }
            .fail();
        }

        let body = response.bytes().await.context(NetworkSnafu)?;
        let users: Vec<User> = serde_json::from_slice(&body).context(ParseSnafu)?;

        tracing::debug!("Fetched {} users", users.len());
        Ok(users)
    }
}
