// HookLog - app/client.rs
//
// HTTP page source backed by a blocking reqwest client. Always called from a
// fetch worker thread, never from the UI thread.
//
// Every request carries the bearer token when one is configured. The token
// is never logged.

use crate::app::fetch::PageSource;
use crate::core::envelope;
use crate::core::model::{PageRequest, PageResult};
use crate::util::error::FetchError;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;

/// Reads pages from the backend's list endpoint.
pub struct HttpPageSource {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpPageSource {
    /// Build a source for `{base_url}{endpoint}`.
    pub fn new(
        base_url: &str,
        endpoint: &str,
        timeout: Duration,
        token: Option<String>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Client { source })?;

        let url = join_url(base_url, endpoint);
        let token = token.filter(|t| !t.trim().is_empty());
        tracing::info!(
            url = %url,
            timeout_secs = timeout.as_secs(),
            authenticated = token.is_some(),
            "HTTP page source ready"
        );

        Ok(Self { client, url, token })
    }

    /// Full endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, FetchError> {
        let mut builder = self
            .client
            .get(&self.url)
            .query(&request.query_params())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().map_err(|source| FetchError::Transport {
            url: self.url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            log_failed_status(status);
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FetchError::Transport {
            url: self.url.clone(),
            source,
        })?;

        envelope::decode_page(&body).map_err(|source| FetchError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

/// Log auth and server failures distinctly. The UI shows them all the same.
fn log_failed_status(status: StatusCode) {
    match status {
        StatusCode::UNAUTHORIZED => {
            tracing::warn!("Backend rejected the bearer token (401); supply a fresh token")
        }
        StatusCode::FORBIDDEN => {
            tracing::warn!("Insufficient permissions for webhook logs (403)")
        }
        s if s.is_server_error() => tracing::error!(status = s.as_u16(), "Server error occurred"),
        s => tracing::warn!(status = s.as_u16(), "Unexpected HTTP status"),
    }
}

/// Join a base URL and an endpoint path with exactly one slash between them.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = endpoint.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}
