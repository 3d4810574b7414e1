//! Response Envelope
//!
//! Every API response is `{ success, payload?, message? }`. This module turns
//! an HTTP status plus body text into either the envelope or an [`ApiError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// `{ success, payload, message }` wrapper returned by every endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub payload: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Payload of a successful envelope, required to be present
    pub fn into_payload(self) -> Result<T> {
        self.payload.ok_or(ApiError::MissingPayload)
    }
}

/// Shape of an error body; any JSON object, with or without a message
#[derive(Deserialize)]
struct FailureBody {
    #[serde(default)]
    message: Option<String>,
}

/// Classifies a finished HTTP exchange
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>> {
    if !(200..300).contains(&status) {
        return match serde_json::from_str::<FailureBody>(body) {
            Ok(failure) => Err(ApiError::Rejected {
                status,
                message: failure.message,
            }),
            Err(_) => Err(ApiError::Transport(format!("HTTP {status}"))),
        };
    }

    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected {
            status,
            message: envelope.message,
        });
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaId, MediaItem};
    use pretty_assertions::assert_eq;
    use serde::de::IgnoredAny;

    #[test]
    fn success_with_payload() {
        let env: Envelope<Vec<MediaItem>> = interpret(
            200,
            r#"{"success":true,"payload":[{"id":1,"title":"Dune","type":"movie","status":"watched","rating":5}]}"#,
        )
        .unwrap();
        let items = env.into_payload().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, MediaId::new("1"));
    }

    #[test]
    fn success_false_is_a_domain_failure() {
        let err = interpret::<MediaItem>(200, r#"{"success":false,"message":"not found"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 200,
                message: Some("not found".into())
            }
        );
        assert!(err.is_domain_failure());
    }

    #[test]
    fn error_status_with_envelope_body_keeps_message() {
        let err = interpret::<IgnoredAny>(404, r#"{"success":false,"message":"Media not found"}"#)
            .unwrap_err();
        assert!(err.is_domain_failure());
        assert_eq!(err.user_message("fallback"), "Media not found");
    }

    #[test]
    fn error_status_with_bare_message_keeps_it() {
        let err = interpret::<IgnoredAny>(400, r#"{"message":"Title is required"}"#).unwrap_err();
        assert!(err.is_domain_failure());
        assert_eq!(err.user_message("fallback"), "Title is required");
    }

    #[test]
    fn error_status_without_message_uses_fallback() {
        let err = interpret::<IgnoredAny>(500, r#"{"error":"boom"}"#).unwrap_err();
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn error_status_without_envelope_is_transport() {
        let err = interpret::<IgnoredAny>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Transport("HTTP 502".into()));
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = interpret::<Vec<MediaItem>>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn missing_payload_is_reported() {
        let env: Envelope<MediaItem> = interpret(200, r#"{"success":true}"#).unwrap();
        assert_eq!(env.into_payload(), Err(ApiError::MissingPayload));
    }

    #[test]
    fn delete_ignores_payload_shape() {
        let env: Envelope<IgnoredAny> =
            interpret(200, r#"{"success":true,"message":"deleted","payload":{"n":1}}"#).unwrap();
        assert_eq!(env.message.as_deref(), Some("deleted"));
    }
}
