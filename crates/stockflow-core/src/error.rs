//! Error handling for Stockflow
//!
//! Diagram operations themselves never fail: referencing an unknown element or
//! connection is a silent no-op, and lookups return `Option`. The errors here
//! cover the places where untrusted text enters the system, such as parsing
//! enum names or key chords, and constructing geometry from raw numbers.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A string did not name any variant of the expected enum
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant {
        /// The enum being parsed (e.g. "element type").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A key chord such as `Ctrl+Shift+Z` could not be parsed
    #[error("Invalid key chord: '{0}'")]
    InvalidKeyChord(String),

    /// A width or height was negative, NaN, or infinite
    #[error("Invalid dimension for {name}: {value}")]
    InvalidDimension {
        /// The dimension name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl Error {
    /// Builds an [`Error::UnknownVariant`] for the given enum kind.
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
