use thiserror::Error;

/// Failures the users service client can report.
///
/// The split mirrors what callers can act on: [`ApiError::Network`] covers
/// everything that went wrong before a status line arrived (connection
/// refused, DNS, aborted transfer, undecodable body), [`ApiError::Server`]
/// means the service answered but with a non-2xx status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure or an unreadable response body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("server returned status {status}")]
    Server { status: u16 },
}

impl ApiError {
    /// HTTP status of the failed response, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(_) => None,
            ApiError::Server { status } => Some(*status),
        }
    }
}
