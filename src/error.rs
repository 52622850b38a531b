use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the Gmail API client and the fetch orchestrator.
///
/// Body-decoding problems inside one message never show up here; the
/// normalizer absorbs those locally and degrades the affected field.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request to {endpoint} failed with status {status}")]
    RemoteRequest {
        status: StatusCode,
        endpoint: String,
    },
    /// Connection, TLS, timeout, or response-body failure below HTTP.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failures in the credential glue (keyring access and the OAuth flow).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("stored credentials are not valid JSON: {0}")]
    Credentials(#[from] serde_json::Error),
    #[error("oauth flow failed: {0}")]
    OAuth(String),
}
