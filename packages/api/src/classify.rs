//! # Login response classification
//!
//! Maps a raw HTTP outcome to a user-facing category. Two classifiers live
//! here, deliberately separated:
//!
//! - the **structured** path ([`LoginError::from_status`] and
//!   [`interpret_response`]) for JSON responses, which maps status codes in
//!   a fixed precedence order and reads the server's `message` field;
//! - the **degraded** path ([`LoginError::from_unstructured`]) for the HTML
//!   error pages some upstream failure modes still produce, which scans the
//!   raw text for known phrases. String-matching server prose is fragile;
//!   it exists only until the server guarantees structured errors and
//!   should be removed when that lands.
//!
//! Everything in this module is pure: identical input yields identical
//! output on every call.

use serde::Deserialize;
use thiserror::Error;

use crate::models::UserProfile;

/// Fallback message for a non-2xx JSON response without a `message` field.
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong. Please try again.";

/// Classified login failure. `Display` is the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// HTTP 401.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// HTTP 404.
    #[error("User not found")]
    UserNotFound,
    /// Any other non-2xx status; carries the server-provided message or
    /// [`GENERIC_SERVER_ERROR`].
    #[error("{0}")]
    Server(String),
    /// Non-JSON body that also matched no known phrase.
    #[error("Unexpected server response. Please try again later.")]
    MalformedResponse,
    /// Transport-level failure before any response arrived. The payload is
    /// the transport's own description, kept for logging only.
    #[error("Could not reach the server. Please try again.")]
    Network(String),
}

impl LoginError {
    /// Classify a non-success HTTP status, with the response's optional
    /// `message` field as context. Precedence: 401, then 404, then the
    /// server message, then the generic fallback.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        match status {
            401 => Self::InvalidCredentials,
            404 => Self::UserNotFound,
            _ => Self::Server(server_message.unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())),
        }
    }

    /// Degraded-mode classifier for non-JSON (typically HTML) error bodies.
    ///
    /// Recovers a category by scanning for the phrases the upstream service
    /// is known to embed in its error pages.
    pub fn from_unstructured(body: &str) -> Self {
        if body.contains("Invalid username or password") || body.contains("Invalid credentials") {
            Self::InvalidCredentials
        } else if body.contains("User not found") {
            Self::UserNotFound
        } else {
            Self::MalformedResponse
        }
    }
}

/// Envelope the login endpoint wraps its responses in.
#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    #[serde(default)]
    data: Option<UserProfile>,
    #[serde(default)]
    message: Option<String>,
}

/// Interpret a settled login response.
///
/// The content-type decides the path: a JSON body goes through the
/// structured classifier, anything else (including a JSON content type with
/// an unparsable body) falls back to phrase scanning. A 2xx JSON response
/// must carry a `data` profile to count as success.
pub fn interpret_response(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<UserProfile, LoginError> {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        return Err(LoginError::from_unstructured(body));
    }

    let Ok(envelope) = serde_json::from_str::<LoginEnvelope>(body) else {
        return Err(LoginError::from_unstructured(body));
    };

    if (200..300).contains(&status) {
        envelope.data.ok_or(LoginError::MalformedResponse)
    } else {
        Err(LoginError::from_status(status, envelope.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_401_maps_to_invalid_credentials() {
        for message in [None, Some("ignored".to_string())] {
            let err = LoginError::from_status(401, message);
            assert_eq!(err, LoginError::InvalidCredentials);
            assert_eq!(err.to_string(), "Invalid username or password");
        }
    }

    #[test]
    fn test_404_maps_to_user_not_found() {
        let err = LoginError::from_status(404, Some("ignored".to_string()));
        assert_eq!(err, LoginError::UserNotFound);
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_other_status_prefers_server_message() {
        let err = LoginError::from_status(500, Some("Database is down".to_string()));
        assert_eq!(err.to_string(), "Database is down");
    }

    #[test]
    fn test_other_status_without_message_is_generic() {
        let err = LoginError::from_status(503, None);
        assert_eq!(err.to_string(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_unstructured_recovers_known_phrases() {
        assert_eq!(
            LoginError::from_unstructured("<html>Error: Invalid username or password</html>"),
            LoginError::InvalidCredentials
        );
        assert_eq!(
            LoginError::from_unstructured("<html>User not found</html>"),
            LoginError::UserNotFound
        );
    }

    #[test]
    fn test_unstructured_unknown_body_is_malformed() {
        let err = LoginError::from_unstructured("<html><h1>502 Bad Gateway</h1></html>");
        assert_eq!(err, LoginError::MalformedResponse);
        assert_eq!(
            err.to_string(),
            "Unexpected server response. Please try again later."
        );
    }

    #[test]
    fn test_success_response_yields_profile() {
        let result = interpret_response(200, JSON, r#"{"data":{"id":1,"name":"A"}}"#);
        let profile = result.unwrap();
        assert_eq!(profile.id, 1);
        assert_eq!(profile.name, "A");
    }

    #[test]
    fn test_401_with_empty_json_body() {
        let result = interpret_response(401, JSON, "{}");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_500_html_without_known_phrase() {
        let result = interpret_response(500, Some("text/html"), "<html>oops</html>");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unexpected server response. Please try again later."
        );
    }

    #[test]
    fn test_json_content_type_with_garbage_body_degrades() {
        let result = interpret_response(200, JSON, "not json at all");
        assert_eq!(result.unwrap_err(), LoginError::MalformedResponse);
    }

    #[test]
    fn test_missing_content_type_degrades() {
        let result = interpret_response(200, None, r#"{"data":{"id":1,"name":"A"}}"#);
        assert_eq!(result.unwrap_err(), LoginError::MalformedResponse);
    }

    #[test]
    fn test_success_without_data_field_is_malformed() {
        let result = interpret_response(200, JSON, r#"{"message":"ok"}"#);
        assert_eq!(result.unwrap_err(), LoginError::MalformedResponse);
    }

    #[test]
    fn test_non_2xx_json_uses_message_field() {
        let result = interpret_response(500, JSON, r#"{"message":"Maintenance window"}"#);
        assert_eq!(result.unwrap_err().to_string(), "Maintenance window");
    }
}
