//! Error hierarchy for Trickle.

use thiserror::Error;

/// Errors from the streaming relay.
///
/// Only [`RelayError::Config`] ever reaches a caller, at client construction
/// time. The other variants exist so the stream layer can record and log why
/// a chunk sequence ended; the sequence itself just terminates.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP error: {status} {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = RelayError::Config {
            message: "invalid proxy URL".into(),
        };
        assert_eq!(err.to_string(), "Configuration error: invalid proxy URL");
    }

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = RelayError::Http {
            status: 403,
            body: r#"{"error":"forbidden"}"#.into(),
        };
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("forbidden"));
    }
}
