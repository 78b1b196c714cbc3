//! Element entity - a beam segment between two consecutive nodes

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// Geometric tolerance below which an element length is considered degenerate
pub const EPS_GEOM: f64 = 1e-6;

/// A beam segment connecting two consecutive mesh nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Stable opaque identifier, unique within an analysis
    pub id: String,
    /// Id of the start node
    pub start_node: String,
    /// Id of the end node
    pub end_node: String,
    /// Modulus of elasticity (Pa), > 0
    pub e: f64,
    /// Second moment of area (m^4), > 0
    pub i: f64,
    /// Element length (m), computed from the node coordinates
    pub length: f64,
}

impl Element {
    /// Create a new element, validating its length
    pub fn new(
        id: impl Into<String>,
        start_node: impl Into<String>,
        end_node: impl Into<String>,
        e: f64,
        i: f64,
        start_x: f64,
        end_x: f64,
    ) -> BeamResult<Self> {
        let length = (end_x - start_x).abs();
        if length <= EPS_GEOM {
            return Err(BeamError::InvalidGeometry(format!(
                "element length {length} at or below tolerance {EPS_GEOM}"
            )));
        }

        Ok(Self {
            id: id.into(),
            start_node: start_node.into(),
            end_node: end_node.into(),
            e,
            i,
            length,
        })
    }
}
