//! Error types for color parsing.

use thiserror::Error;

/// Errors produced while reading color input.
///
/// Numeric input is never rejected; it is clamped into range instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A hex string contained non-hex characters or more than 6 digits.
    #[error("invalid hex color '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_includes_input_and_reason() {
        let err = ColorError::invalid_format("zzz", "non-hex character 'z'");
        let msg = format!("{err}");
        assert!(msg.contains("zzz"), "missing input in: {msg}");
        assert!(msg.contains("non-hex"), "missing reason in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
