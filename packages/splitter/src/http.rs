//! HTTP client wrapper for conditional source downloads.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ETAG, IF_NONE_MATCH};
use reqwest::StatusCode;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{Result, SplitterError};

/// User agent string identifying this tool.
const USER_AGENT: &str = concat!("tiku-splitter/", env!("CARGO_PKG_VERSION"));

/// Maximum number of attempts for transient failures.
pub const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Response to a conditional GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionalResponse {
    /// The server confirmed the stored ETag is current (304).
    NotModified,
    /// New content (200), with the server's ETag if it sent one.
    Modified { body: String, etag: Option<String> },
}

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with appropriate timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET `url`, sending `etag` as `If-None-Match` when present.
///
/// Uses exponential backoff for transient failures (network errors, 5xx
/// responses). Any status other than 200 or 304 is an error.
pub fn conditional_get(
    client: &Client,
    url: &str,
    etag: Option<&str>,
) -> Result<ConditionalResponse> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms, 2000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        let mut request = client.get(url);
        if let Some(etag) = etag {
            request = request.header(IF_NONE_MATCH, etag);
        }

        match request.send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                if status == StatusCode::NOT_MODIFIED {
                    return Ok(ConditionalResponse::NotModified);
                }

                if status != StatusCode::OK {
                    return Err(SplitterError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let etag = response
                    .headers()
                    .get(ETAG)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                let body = response.text()?;
                return Ok(ConditionalResponse::Modified { body, etag });
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(SplitterError::Http(e));
            }
        }
    }

    Err(SplitterError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}
