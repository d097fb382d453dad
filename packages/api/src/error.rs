//! Error type for remote store operations.
//!
//! The backend reports failures as free-text messages, so classification is
//! substring matching over the message body. The UI maps the classes to its
//! own wording; anything unclassified gets the generic failure message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, body decode).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response, carrying the server's message text.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// An operation that needs a signed-in session was called without one.
    #[error("not signed in")]
    NotSignedIn,

    /// Account creation succeeded but the dependent profile insert did not,
    /// even after a retry. The session is kept so the user can re-submit
    /// just the profile.
    #[error("account created, but saving the profile failed: {0}")]
    ProfileIncomplete(String),
}

impl ApiError {
    /// True when the failure is a unique-constraint violation on the
    /// profile identifier or alias.
    pub fn is_duplicate(&self) -> bool {
        match self {
            ApiError::Remote { message, .. } => {
                let m = message.to_lowercase();
                m.contains("duplicate") || m.contains("already exists") || m.contains("alias")
            }
            _ => false,
        }
    }

    /// True when the auth backend rejected a sign-up because the email is
    /// already registered.
    pub fn is_email_taken(&self) -> bool {
        match self {
            ApiError::Remote { message, .. } => {
                message.to_lowercase().contains("already registered")
            }
            _ => false,
        }
    }
}

/// Pull a human-readable message out of an error response body. The REST
/// and auth endpoints use different field names.
pub(crate) fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    if body.is_empty() {
        "remote store error".to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(message: &str) -> ApiError {
        ApiError::Remote {
            status: 409,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_duplicate_classification() {
        assert!(remote("duplicate key value violates unique constraint \"profiles_pkey\"").is_duplicate());
        assert!(remote("Alias already exists").is_duplicate());
        assert!(!remote("permission denied for table profiles").is_duplicate());
        assert!(!ApiError::NotSignedIn.is_duplicate());
    }

    #[test]
    fn test_email_taken_classification() {
        assert!(remote("User already registered").is_email_taken());
        assert!(!remote("Invalid login credentials").is_email_taken());
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"message":"duplicate key value"}"#),
            "duplicate key value"
        );
        assert_eq!(
            extract_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(extract_message("gateway timeout"), "gateway timeout");
        assert_eq!(extract_message(""), "remote store error");
    }
}
