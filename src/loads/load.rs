//! The tagged load sum type

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::{BeamError, BeamResult};

/// A single applied load. Re-expressed from the source's class hierarchy
/// plus discriminating field as one tagged sum type, matched exhaustively
/// by the resolver and the diagram calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Load {
    /// A concentrated force at a point, signed along +y
    PointForce {
        id: String,
        x: f64,
        magnitude: f64,
        category: Category,
    },
    /// A concentrated moment at a point, signed about +z
    PointMoment {
        id: String,
        x: f64,
        magnitude: f64,
        category: Category,
    },
    /// A uniform load over a span, signed along +y per unit length
    DistributedForce {
        id: String,
        start_x: f64,
        end_x: f64,
        magnitude_per_length: f64,
        category: Category,
    },
}

impl Load {
    /// Construct a point force
    pub fn point_force(id: impl Into<String>, x: f64, magnitude: f64, category: Category) -> Self {
        Load::PointForce {
            id: id.into(),
            x,
            magnitude,
            category,
        }
    }

    /// Construct a point moment
    pub fn point_moment(id: impl Into<String>, x: f64, magnitude: f64, category: Category) -> Self {
        Load::PointMoment {
            id: id.into(),
            x,
            magnitude,
            category,
        }
    }

    /// Construct a distributed force, validating `start_x < end_x`
    pub fn distributed_force(
        id: impl Into<String>,
        start_x: f64,
        end_x: f64,
        magnitude_per_length: f64,
        category: Category,
    ) -> BeamResult<Self> {
        if !(start_x < end_x) {
            return Err(BeamError::InvalidGeometry(format!(
                "distributed load span [{start_x}, {end_x}] is not increasing"
            )));
        }

        Ok(Load::DistributedForce {
            id: id.into(),
            start_x,
            end_x,
            magnitude_per_length,
            category,
        })
    }

    /// The load's category, for diagram filtering
    pub fn category(&self) -> Category {
        match self {
            Load::PointForce { category, .. } => *category,
            Load::PointMoment { category, .. } => *category,
            Load::DistributedForce { category, .. } => *category,
        }
    }

    /// Feature coordinates this load contributes to the mesh builder (§4.C)
    pub fn feature_coordinates(&self) -> Vec<f64> {
        match self {
            Load::PointForce { x, .. } | Load::PointMoment { x, .. } => vec![*x],
            Load::DistributedForce {
                start_x, end_x, ..
            } => vec![*start_x, *end_x],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_increasing_span() {
        let err = Load::distributed_force("L0", 5.0, 5.0, -1000.0, Category::Dead).unwrap_err();
        assert!(matches!(err, BeamError::InvalidGeometry(_)));
    }

    #[test]
    fn point_force_feature_is_singleton() {
        let l = Load::point_force("L0", 2.5, -1000.0, Category::Live);
        assert_eq!(l.feature_coordinates(), vec![2.5]);
    }

    #[test]
    fn distributed_feature_is_endpoints() {
        let l = Load::distributed_force("L0", 1.0, 4.0, -500.0, Category::Snow).unwrap();
        assert_eq!(l.feature_coordinates(), vec![1.0, 4.0]);
    }
}
