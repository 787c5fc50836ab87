//! Error types for source fetchers.

use reqwest::StatusCode;

/// Result type for fallible fetch steps.
pub type SourceResult<T> = Result<T, SourceError>;

/// Reasons a source could not be read.
///
/// The public `fetch_*` functions never return these; they log them and fall
/// back to an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or timed out.
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// The response body could not be read or decoded.
    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = SourceError::Status {
            url: "https://api.github.com/repos/o/r/commits".to_string(),
            status: StatusCode::FORBIDDEN,
        };
        assert_eq!(
            err.to_string(),
            "request to https://api.github.com/repos/o/r/commits returned 403 Forbidden"
        );
    }
}
