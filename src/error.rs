//! API Errors

use std::error::Error as _;

use thiserror::Error;

/// Failure of a single backend request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or request could not be built
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("invalid response body: {}", source_chain(.0))]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Error message followed by each underlying cause
fn source_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP error! status: 404");
    }
}
