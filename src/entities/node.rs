//! Node entity - a point on the beam axis

use serde::{Deserialize, Serialize};

/// Idealized support condition at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Support {
    /// No restraint
    Free,
    /// Vertical translation restrained
    Roller,
    /// Vertical translation restrained
    Pin,
    /// Vertical translation and rotation restrained
    Fixed,
}

impl Support {
    /// Whether the vertical DOF is restrained
    pub fn restrained_y(&self) -> bool {
        !matches!(self, Support::Free)
    }

    /// Whether the rotational DOF is restrained
    pub fn restrained_rotation(&self) -> bool {
        matches!(self, Support::Fixed)
    }
}

/// A node on the beam axis, immutable once built by the mesh builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Stable opaque identifier, unique within an analysis
    pub id: String,
    /// Axial coordinate (metres), >= 0
    pub x: f64,
    /// Support condition at this node
    pub support: Support,
}

impl Node {
    /// Create a new node
    pub fn new(id: impl Into<String>, x: f64, support: Support) -> Self {
        Self {
            id: id.into(),
            x,
            support,
        }
    }

    /// Whether the vertical DOF is restrained
    pub fn restrained_y(&self) -> bool {
        self.support.restrained_y()
    }

    /// Whether the rotational DOF is restrained
    pub fn restrained_rotation(&self) -> bool {
        self.support.restrained_rotation()
    }
}
