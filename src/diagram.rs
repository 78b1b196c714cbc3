//! Diagram calculator (component F) - method of sections and Hermite deflection

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::Node;
use crate::error::{BeamError, BeamResult};
use crate::loads::{Category, Load};
use crate::mesh::EPS_MERGE;
use crate::solver::{NodeDisplacement, Reactions};

/// Tolerance for deciding whether a point contribution lies at or left of a section
const EPS_SECTION: f64 = EPS_MERGE;
/// Tolerance for Hermite interval containment (spec.md 4.F)
const EPS_HERMITE: f64 = 1e-3;
/// Values below this magnitude snap to zero for cosmetic cleanliness
const SNAP_TOLERANCE: f64 = 1e-4;

/// Three equal-length sequences of `(x, value)` samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    /// Shear force samples
    pub shear: Vec<(f64, f64)>,
    /// Bending moment samples
    pub moment: Vec<(f64, f64)>,
    /// Deflected shape samples
    pub deflection: Vec<(f64, f64)>,
}

/// Compute shear, moment, and deflection diagrams at `resolution + 1` samples
///
/// Implements spec.md 4.F: method of sections for V(x)/M(x) (including the
/// right-edge exclusion rule and the reaction-moment sign inversion) and
/// cubic Hermite interpolation of the deflected shape between nodes.
pub fn diagrams(
    length: f64,
    nodes: &[Node],
    loads: &[Load],
    reactions: &HashMap<String, Reactions>,
    displacements: &HashMap<String, NodeDisplacement>,
    resolution: usize,
    category: Category,
) -> BeamResult<Diagram> {
    if resolution < 1 {
        return Err(BeamError::InvalidGeometry(
            "diagram resolution must be at least 1".to_string(),
        ));
    }

    let mut shear = Vec::with_capacity(resolution + 1);
    let mut moment = Vec::with_capacity(resolution + 1);
    let mut deflection = Vec::with_capacity(resolution + 1);

    for k in 0..=resolution {
        let x = length * (k as f64) / (resolution as f64);

        let (v, m) = section_forces(x, length, nodes, loads, reactions, category);
        shear.push((x, snap(v)));
        moment.push((x, snap(m)));
        deflection.push((x, hermite_deflection(x, nodes, displacements)));
    }

    Ok(Diagram {
        shear,
        moment,
        deflection,
    })
}

/// Whether a point contribution at `x_f` is included in the section cut at `x`
fn included(x_f: f64, x: f64, length: f64) -> bool {
    x_f <= x + EPS_SECTION && x_f < length - EPS_SECTION
}

fn section_forces(
    x: f64,
    length: f64,
    nodes: &[Node],
    loads: &[Load],
    reactions: &HashMap<String, Reactions>,
    category: Category,
) -> (f64, f64) {
    let mut v = 0.0;
    let mut m = 0.0;

    for load in loads.iter().filter(|l| l.category() == category) {
        match load {
            Load::PointForce { x: xf, magnitude, .. } => {
                if included(*xf, x, length) {
                    v += magnitude;
                    m += magnitude * (x - xf);
                }
            }
            Load::PointMoment { x: xf, magnitude, .. } => {
                if included(*xf, x, length) {
                    // a pure couple's moment is position-independent, no arm
                    m += magnitude;
                }
            }
            Load::DistributedForce {
                start_x,
                end_x,
                magnitude_per_length,
                ..
            } => {
                if x > *start_x {
                    let width = (x.min(*end_x) - start_x).max(0.0);
                    let centroid = start_x + width / 2.0;
                    v += magnitude_per_length * width;
                    m += magnitude_per_length * width * (x - centroid);
                }
            }
        }
    }

    for node in nodes {
        if let Some(r) = reactions.get(&node.id) {
            if included(node.x, x, length) {
                v += r.fy;
                m += r.fy * (x - node.x);
                m += -r.m;
            }
        }
    }

    (v, m)
}

fn snap(value: f64) -> f64 {
    if value.abs() < SNAP_TOLERANCE {
        0.0
    } else {
        value
    }
}

fn hermite_deflection(
    x: f64,
    nodes: &[Node],
    displacements: &HashMap<String, NodeDisplacement>,
) -> f64 {
    for pair in nodes.windows(2) {
        let (start, end) = (&pair[0], &pair[1]);
        if x < start.x - EPS_HERMITE || x > end.x + EPS_HERMITE {
            continue;
        }

        let l = end.x - start.x;
        let xi = ((x - start.x) / l).clamp(0.0, 1.0);
        let xi2 = xi * xi;
        let xi3 = xi2 * xi;

        let n1 = 1.0 - 3.0 * xi2 + 2.0 * xi3;
        let n2 = l * (xi - 2.0 * xi2 + xi3);
        let n3 = 3.0 * xi2 - 2.0 * xi3;
        let n4 = l * (xi3 - xi2);

        let d_start = displacements.get(&start.id);
        let d_end = displacements.get(&end.id);
        if let (Some(d_start), Some(d_end)) = (d_start, d_end) {
            return n1 * d_start.y
                + n2 * d_start.rotation
                + n3 * d_end.y
                + n4 * d_end.rotation;
        }
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Support;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_zero_resolution() {
        let nodes = vec![Node::new("N0", 0.0, Support::Pin)];
        let err = diagrams(10.0, &nodes, &[], &HashMap::new(), &HashMap::new(), 0, Category::Dead)
            .unwrap_err();
        assert!(matches!(err, BeamError::InvalidGeometry(_)));
    }

    #[test]
    fn simply_supported_point_load_shear_jump() {
        let mesh = crate::mesh::build(
            10.0,
            200e9,
            1e-4,
            &[(0.0, Support::Pin), (10.0, Support::Roller)],
            &[Load::point_force("L0", 5.0, -10000.0, Category::Dead)],
        )
        .unwrap();
        let loads = vec![Load::point_force("L0", 5.0, -10000.0, Category::Dead)];
        let result = crate::solver::solve(&mesh, &loads).unwrap();

        let d = diagrams(
            10.0,
            &mesh.nodes,
            &loads,
            &result.reactions,
            &result.displacements,
            200,
            Category::Dead,
        )
        .unwrap();

        let v_at = |target: f64| {
            d.shear
                .iter()
                .min_by(|a, b| (a.0 - target).abs().partial_cmp(&(b.0 - target).abs()).unwrap())
                .unwrap()
                .1
        };

        assert_relative_eq!(v_at(4.9), 5000.0, epsilon = 50.0);
        assert_relative_eq!(v_at(5.1), -5000.0, epsilon = 50.0);

        let m_at_mid = d
            .moment
            .iter()
            .find(|(x, _)| (x - 5.0).abs() < 1e-9)
            .unwrap()
            .1;
        assert_relative_eq!(m_at_mid, 25000.0, epsilon = 50.0);
    }

    #[test]
    fn hermite_matches_nodal_displacement_at_endpoints() {
        let mut displacements = HashMap::new();
        displacements.insert(
            "N0".to_string(),
            NodeDisplacement {
                y: 0.001,
                rotation: 0.0002,
            },
        );
        displacements.insert(
            "N1".to_string(),
            NodeDisplacement {
                y: -0.0005,
                rotation: -0.0001,
            },
        );
        let nodes = vec![
            Node::new("N0", 0.0, Support::Pin),
            Node::new("N1", 5.0, Support::Roller),
        ];

        let w0 = hermite_deflection(0.0, &nodes, &displacements);
        let w1 = hermite_deflection(5.0, &nodes, &displacements);

        assert_relative_eq!(w0, 0.001, epsilon = 1e-12);
        assert_relative_eq!(w1, -0.0005, epsilon = 1e-12);
    }
}
