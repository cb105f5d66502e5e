//! Identifiers for diagram elements and connections.
//!
//! Ids are opaque strings supplied by the caller when an element or connection
//! is added. The engine only generates ids itself when pasting or when an
//! element is created from a canvas click; generated ids embed a v4 UUID so
//! they stay unique for the whole session.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generates a fresh id of the form `<prefix>-<uuid>`.
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4().simple()))
            }

            /// Derives a fresh id for a pasted copy of `self`.
            pub fn copy_of(&self) -> Self {
                Self(format!("{}-copy-{}", self.0, Uuid::new_v4().simple()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a diagram element (stock, flow, connector, or cloud).
    ElementId,
    "element"
);

string_id!(
    /// Identifier of a connection between two elements.
    ConnectionId,
    "connection"
);
