//! Element and connection kinds for stock-and-flow diagrams.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of a diagram element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// An accumulation quantity, drawn as a rectangle
    Stock,
    /// A rate of change between stocks
    Flow,
    /// An auxiliary variable
    Connector,
    /// A source or sink outside the model boundary
    Cloud,
}

impl ElementType {
    pub const ALL: [ElementType; 4] = [Self::Stock, Self::Flow, Self::Connector, Self::Cloud];

    /// Fill colour used when an element has no explicit colour.
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Stock => "#3B82F6",
            Self::Flow => "#10B981",
            Self::Connector => "#8B5CF6",
            Self::Cloud => "#6B7280",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Flow => "flow",
            Self::Connector => "connector",
            Self::Cloud => "cloud",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock" => Ok(Self::Stock),
            "flow" => Ok(Self::Flow),
            "connector" => Ok(Self::Connector),
            "cloud" => Ok(Self::Cloud),
            other => Err(Error::unknown_variant("element type", other)),
        }
    }
}

/// Kind of a connection line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// Material flow, drawn as a solid arrow
    Flow,
    /// Information influence, drawn as a dashed line
    Connector,
}

impl ConnectionType {
    pub fn stroke_color(&self) -> &'static str {
        match self {
            Self::Flow => "#10B981",
            Self::Connector => "#8B5CF6",
        }
    }

    pub fn is_dashed(&self) -> bool {
        matches!(self, Self::Connector)
    }

    pub fn has_arrow_head(&self) -> bool {
        matches!(self, Self::Flow)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Connector => "connector",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flow" => Ok(Self::Flow),
            "connector" => Ok(Self::Connector),
            other => Err(Error::unknown_variant("connection type", other)),
        }
    }
}
