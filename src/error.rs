//! Error types for Lienzo.
//!
//! All errors implement `std::error::Error` and provide human-readable messages.
//! The pixel and geometry codecs are total and never fail; errors only come
//! from table lookups with no native answer (format masks), palette argument
//! checks, and the native library boundary.
//!
//! # Falsification Claims
//! - F081: All errors implement std::error::Error
//! - F082: Error messages are human-readable
//! - F083: Unsupported format errors include the raw format value

use std::fmt;
use thiserror::Error;

/// Primary error type for Lienzo operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The native library (or one of its subsystems) is not linked in.
    ///
    /// This is the normal outcome when the crate is built without the
    /// `native` feature.
    #[error("native library not available: {subsystem}")]
    NotAvailable {
        /// The native subsystem that was requested.
        subsystem: Subsystem,
    },

    /// The native library reported a failure.
    ///
    /// Carries the text of the native error string at the time of failure.
    #[error("native error: {message}")]
    Native {
        /// Message reported by the native library.
        message: String,
    },

    /// Invalid input was provided to an API.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of what was invalid.
        reason: String,
    },

    /// The pixel format has no channel mask layout.
    #[error("unsupported pixel format 0x{format:08x}")]
    UnsupportedFormat {
        /// Raw 32-bit format value.
        format: u32,
    },
}

/// Native subsystems fronted by the bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    /// Video: surfaces, palettes, pixel formats.
    Video,
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "Video"),
        }
    }
}

/// Result type alias for Lienzo operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new `NotAvailable` error.
    #[must_use]
    pub const fn not_available(subsystem: Subsystem) -> Self {
        Self::NotAvailable { subsystem }
    }

    /// Create a new `Native` error.
    #[must_use]
    pub fn native(message: impl Into<String>) -> Self {
        Self::Native {
            message: message.into(),
        }
    }

    /// Create a new `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a new `UnsupportedFormat` error from a raw format value.
    #[must_use]
    pub const fn unsupported_format(format: u32) -> Self {
        Self::UnsupportedFormat { format }
    }

    /// Check if this error indicates the native library is unavailable.
    #[must_use]
    pub const fn is_not_available(&self) -> bool {
        matches!(self, Self::NotAvailable { .. })
    }

    /// Check if this error came from the native library.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native { .. })
    }

    /// Get the raw pixel format if this is an `UnsupportedFormat` error.
    #[must_use]
    pub const fn format(&self) -> Option<u32> {
        match self {
            Self::UnsupportedFormat { format } => Some(*format),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // F081: All errors implement std::error::Error
    #[test]
    fn test_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<Error>();
    }

    // F082: Error messages are human-readable
    #[test]
    fn test_error_messages_are_readable() {
        let err = Error::not_available(Subsystem::Video);
        let msg = err.to_string();
        assert!(msg.contains("Video"));
        assert!(msg.contains("not available"));
    }

    // F083: Unsupported format errors include the raw format value
    #[test]
    fn test_unsupported_format_includes_value() {
        let err = Error::unsupported_format(0x1600_0004);
        assert_eq!(err.to_string(), "unsupported pixel format 0x16000004");
    }

    #[test]
    fn test_display_impl_not_generic() {
        let errors = vec![
            Error::not_available(Subsystem::Video),
            Error::native("Parameter 'ncolors' is invalid"),
            Error::invalid_input("test"),
            Error::unsupported_format(0),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(msg.len() > 10, "Message too short: {msg}");
            assert!(!msg.eq_ignore_ascii_case("error"), "Generic message: {msg}");
        }
    }

    #[test]
    fn test_subsystem_display() {
        assert_eq!(Subsystem::Video.to_string(), "Video");
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::not_available(Subsystem::Video).is_not_available());
        assert!(!Error::native("x").is_not_available());

        assert!(Error::native("x").is_native());
        assert!(!Error::invalid_input("x").is_native());
    }

    #[test]
    fn test_format_extraction() {
        assert_eq!(Error::unsupported_format(42).format(), Some(42));
        assert_eq!(Error::invalid_input("x").format(), None);
    }

    #[test]
    fn test_error_equality() {
        let e1 = Error::not_available(Subsystem::Video);
        let e2 = Error::not_available(Subsystem::Video);
        let e3 = Error::native("SDL not initialized");

        assert_eq!(e1, e2);
        assert_ne!(e1, e3);
    }

    #[test]
    fn test_error_debug() {
        let err = Error::not_available(Subsystem::Video);
        let debug = format!("{err:?}");
        assert!(debug.contains("NotAvailable"));
        assert!(debug.contains("Video"));
    }
}
