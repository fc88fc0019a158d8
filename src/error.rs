//! Error taxonomy for gateway and startup failures.
//!
//! ERROR HANDLING
//! ==============
//! The gateway surfaces these raw; the dashboard controller is the only place
//! they are recovered, each one becoming a localized alert plus a log line.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures surfaced by configuration and the remote data gateway.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("API base URL is not defined")]
    MissingBaseUrl,
    #[error("invalid API base URL `{url}`: {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },
    #[error("gateway used before a base URL was configured")]
    Unconfigured,
    #[error("{request} failed: {message}")]
    Transport { request: String, message: String },
    #[error("{request} failed with status {status}")]
    Status { request: String, status: u16 },
    #[error("malformed response from {request}: {message}")]
    Parse { request: String, message: String },
}

#[cfg(test)]
impl DashboardError {
    /// Whether this failure comes from missing or invalid configuration
    /// rather than from talking to the backend.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingBaseUrl | Self::InvalidBaseUrl { .. } | Self::Unconfigured
        )
    }

    /// Whether the request never produced a usable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
