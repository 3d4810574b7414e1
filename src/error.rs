//! Error types for the media API client

use thiserror::Error;

/// Result type alias using the client's error
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by API calls and form validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response at all (network failure, CORS, aborted request)
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response arrived but its body was not a valid envelope
    #[error("Malformed response: {0}")]
    Decode(String),

    /// `success=true` but the payload the call needs is absent
    #[error("Response carried no payload")]
    MissingPayload,

    /// Well-formed response reporting that the operation did not succeed
    #[error("{}", message.as_deref().unwrap_or("Request was rejected"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// Client-side validation failure
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Domain failure (as opposed to a transport-level one)
    pub fn is_domain_failure(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Text shown to the user.
    ///
    /// Domain failures prefer the backend message; validation errors show
    /// their own text; everything else uses `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::InvalidInput(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_text_for_domain_failures() {
        let err = ApiError::Rejected {
            status: 404,
            message: Some("not found".into()),
        };
        assert!(err.is_domain_failure());
        assert_eq!(err.user_message("Failed"), "not found");

        let silent = ApiError::Rejected {
            status: 200,
            message: None,
        };
        assert_eq!(silent.user_message("Failed"), "Failed");
        assert_eq!(silent.to_string(), "Request was rejected");
    }

    #[test]
    fn transport_failures_use_fallback() {
        let err = ApiError::Transport("connection refused".into());
        assert!(!err.is_domain_failure());
        assert_eq!(err.user_message("Try again later."), "Try again later.");
        assert_eq!(ApiError::MissingPayload.user_message("x"), "x");
    }

    #[test]
    fn validation_errors_show_their_own_text() {
        let err = ApiError::InvalidInput("Title is required".into());
        assert_eq!(err.user_message("Failed"), "Title is required");
    }
}
