//! Conversion errors.

use std::borrow::Cow;

/// Broad category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value is not the expected structural kind (wrong primitive, not an
    /// array, or an array of the wrong length).
    ShapeMismatch,
    /// The value is a string, but not a member of the enumeration.
    MembershipMismatch,
    /// The value is a string, but does not match a domain grammar (colors).
    GrammarMismatch,
    /// A sequence element failed and its error was passed through unchanged.
    ElementFailure,
}

impl ErrorKind {
    /// Returns a short, stable name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ShapeMismatch => "shape mismatch",
            ErrorKind::MembershipMismatch => "membership mismatch",
            ErrorKind::GrammarMismatch => "grammar mismatch",
            ErrorKind::ElementFailure => "element failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a style value cannot be converted.
///
/// `Display` prints the message alone. Message texts are stable: style
/// loaders surface them to users and snapshot them in tests, so a converter
/// must never reword one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConversionError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl ConversionError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ShapeMismatch, message)
    }

    pub fn membership(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::MembershipMismatch, message)
    }

    pub fn grammar(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::GrammarMismatch, message)
    }

    /// Re-tags an element error raised inside a sequence.
    ///
    /// The message is kept byte for byte; no index or prefix is added.
    pub fn element(self) -> Self {
        Self {
            kind: ErrorKind::ElementFailure,
            message: self.message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let err = ConversionError::shape("value must be a boolean");
        assert_eq!(err.to_string(), "value must be a boolean");
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_owned_message() {
        let err = ConversionError::shape(format!("value must be an array of {} numbers", 3));
        assert_eq!(err.message(), "value must be an array of 3 numbers");
    }

    #[test]
    fn test_element_keeps_message() {
        let inner = ConversionError::membership("value must be a valid enumeration value");
        let err = inner.clone().element();
        assert_eq!(err.kind(), ErrorKind::ElementFailure);
        assert_eq!(err.message(), inner.message());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::GrammarMismatch.to_string(), "grammar mismatch");
        assert_eq!(ErrorKind::ElementFailure.to_string(), "element failure");
    }
}
