//! # Stockflow Core
//!
//! Core value types shared by the Stockflow crates: 2D geometry primitives,
//! element and connection kinds and identifiers, and the common error type.

pub mod error;
pub mod geometry;
pub mod ids;
pub mod kinds;

pub use error::{Error, Result};
pub use geometry::{Bounds, Point, Size};
pub use ids::{ConnectionId, ElementId};
pub use kinds::{ConnectionType, ElementType};
