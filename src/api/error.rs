//! Error types for backend calls.
//!
//! None of these ever reach the session store as errors: screens convert
//! them into displayable history entries or status lines at the call site.

use thiserror::Error;

/// Errors that can occur while talking to the AI backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {status} for '{endpoint}'")]
    Status { endpoint: &'static str, status: u16 },

    /// The response body did not match the expected shape.
    #[error("could not decode response from '{endpoint}': {reason}")]
    Decode {
        endpoint: &'static str,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_endpoint() {
        let err = ApiError::Status {
            endpoint: "/api/llm",
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "backend returned HTTP 503 for '/api/llm'"
        );
    }
}
