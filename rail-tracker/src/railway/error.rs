//! Railway client error types.

use std::fmt;

/// Errors from the railway HTTP client.
#[derive(Debug)]
pub enum RailwayError {
    /// Caller named an HTTP method the API does not use.
    ///
    /// Produced by [`Method::parse`](super::Method::parse) before any
    /// request descriptor exists, so no network call is ever made.
    UnsupportedMethod { method: String },

    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// API returned an error status code
    Status { status: u16, message: String },

    /// Response body was not valid JSON
    Json {
        message: String,
        body: Option<String>,
    },
}

impl RailwayError {
    /// True when the underlying cause was the request timeout expiring.
    pub fn is_timeout(&self) -> bool {
        match self {
            RailwayError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

impl fmt::Display for RailwayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RailwayError::UnsupportedMethod { method } => {
                write!(f, "unsupported HTTP method: {method}")
            }
            RailwayError::Http(e) => write!(f, "HTTP error: {e}"),
            RailwayError::Status { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            RailwayError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for RailwayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RailwayError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RailwayError {
    fn from(err: reqwest::Error) -> Self {
        RailwayError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RailwayError::UnsupportedMethod {
            method: "DELETE".into(),
        };
        assert_eq!(err.to_string(), "unsupported HTTP method: DELETE");

        let err = RailwayError::Status {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = RailwayError::Json {
            message: "EOF while parsing an object".into(),
            body: Some("{\"truncated\":".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("{\"truncated\":"));

        let err = RailwayError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }

    #[test]
    fn is_timeout_false_for_non_http() {
        let err = RailwayError::Status {
            status: 404,
            message: String::new(),
        };
        assert!(!err.is_timeout());

        let err = RailwayError::UnsupportedMethod {
            method: "PATCH".into(),
        };
        assert!(!err.is_timeout());
    }
}
