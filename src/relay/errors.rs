use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure reaching or understanding the Remote Generation Service.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream did not respond within {0:?}")]
    Timeout(Duration),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("upstream returned an unusable payload: {0}")]
    UpstreamProtocol(String),
}

impl RelayError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Timeout(_) => "timeout",
            Self::Upstream { .. } => "upstream",
            Self::UpstreamProtocol(_) => "upstream_protocol",
        }
    }
}
