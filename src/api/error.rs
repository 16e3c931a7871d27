use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the backend, split by where the request died.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: connection refused, DNS
    /// failure, timeout.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{resource} request failed with status {status}")]
    Status {
        resource: &'static str,
        status: StatusCode,
    },

    /// The response body did not match the expected shape.
    #[error("could not decode {resource} response")]
    Decode {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Text suitable for the status line and notifications. Decode
    /// failures hide the serde detail behind a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport { .. } | ApiError::Status { .. } => self.to_string(),
            ApiError::Decode { resource, .. } => {
                format!("received an unexpected response for {resource}")
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}
