use thiserror::Error;

/// Failure talking to the RajaOngkir API. Never cached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("RajaOngkir API request failed: {0}")]
    Transport(String),

    #[error("RajaOngkir API error: status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("RajaOngkir API returned invalid JSON: {0}")]
    Decode(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
