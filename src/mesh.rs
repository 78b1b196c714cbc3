//! Mesh builder (component C) - turns sparse feature points into a node/element mesh

use crate::entities::{Element, Node, Support};
use crate::error::{BeamError, BeamResult};
use crate::loads::Load;

/// Merge tolerance for feature coordinates (metres)
pub const EPS_MERGE: f64 = 1e-4;

/// An ordered node list and the elements connecting consecutive nodes
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Nodes in strictly increasing `x` order
    pub nodes: Vec<Node>,
    /// Elements connecting consecutive nodes, `nodes.len() - 1` of them
    pub elements: Vec<Element>,
}

impl Mesh {
    /// Index of the node within `EPS_MERGE` of `x`, if any
    pub fn node_index_at(&self, x: f64) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| (n.x - x).abs() < EPS_MERGE)
    }

    /// Index of the node with the given id, if any
    pub fn node_index_by_id(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

/// Build the mesh from beam length, material/section, supports and loads
///
/// Implements spec.md 4.C: collect feature coordinates, clip to `[0, length]`,
/// sort and deduplicate within `EPS_MERGE`, assign support types, then emit
/// nodes and the elements between consecutive nodes.
pub fn build(
    length: f64,
    e: f64,
    i: f64,
    supports: &[(f64, Support)],
    loads: &[Load],
) -> BeamResult<Mesh> {
    if length <= 0.0 {
        return Err(BeamError::InvalidGeometry(format!(
            "beam length {length} must be positive"
        )));
    }
    if e <= 0.0 {
        return Err(BeamError::InvalidMaterial(format!(
            "modulus of elasticity {e} must be positive"
        )));
    }
    if i <= 0.0 {
        return Err(BeamError::InvalidMaterial(format!(
            "second moment of area {i} must be positive"
        )));
    }

    for &(x, _) in supports {
        if x < 0.0 || x > length {
            return Err(BeamError::OutOfDomain(format!(
                "support at x={x} outside [0, {length}]"
            )));
        }
    }
    for load in loads {
        for x in load.feature_coordinates() {
            if x < 0.0 || x > length {
                return Err(BeamError::OutOfDomain(format!(
                    "load at x={x} outside [0, {length}]"
                )));
            }
        }
    }

    // Collect feature coordinates: {0, length} U supports U load points/endpoints
    let mut coords: Vec<f64> = vec![0.0, length];
    coords.extend(supports.iter().map(|&(x, _)| x));
    for load in loads {
        coords.extend(load.feature_coordinates());
    }
    coords.retain(|&x| x >= 0.0 && x <= length);
    coords.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let raw_count = coords.len();

    // Deduplicate, merging within EPS_MERGE to the earlier coordinate
    let mut merged: Vec<f64> = Vec::with_capacity(coords.len());
    for x in coords {
        match merged.last() {
            Some(&last) if (x - last).abs() < EPS_MERGE => {}
            _ => merged.push(x),
        }
    }
    log::debug!(
        "mesh: {raw_count} feature coordinates merged to {} nodes",
        merged.len()
    );

    // Assign support types; detect conflicting supports merged into one coordinate
    let mut nodes = Vec::with_capacity(merged.len());
    for (idx, &x) in merged.iter().enumerate() {
        let mut found: Option<Support> = None;
        for &(sx, support) in supports {
            if (sx - x).abs() < EPS_MERGE {
                match found {
                    None => found = Some(support),
                    Some(prev) if prev == support => {}
                    Some(_) => {
                        return Err(BeamError::ConflictingSupports(format!(
                            "distinct supports merge at x={x}"
                        )));
                    }
                }
            }
        }
        nodes.push(Node::new(format!("N{idx}"), x, found.unwrap_or(Support::Free)));
    }

    // Elements between consecutive nodes; omit any at or below EPS_GEOM
    // (unreachable given EPS_MERGE > EPS_GEOM, kept per spec.md 4.C step 4).
    let mut elements = Vec::with_capacity(nodes.len().saturating_sub(1));
    for pair in nodes.windows(2) {
        let (start, end) = (&pair[0], &pair[1]);
        match Element::new(
            format!("E{}", elements.len()),
            start.id.clone(),
            end.id.clone(),
            e,
            i,
            start.x,
            end.x,
        ) {
            Ok(el) => elements.push(el),
            Err(BeamError::InvalidGeometry(_)) => continue,
            Err(other) => return Err(other),
        }
    }

    Ok(Mesh { nodes, elements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Category;

    #[test]
    fn rejects_nonpositive_length() {
        let err = build(0.0, 200e9, 1e-4, &[], &[]).unwrap_err();
        assert!(matches!(err, BeamError::InvalidGeometry(_)));
    }

    #[test]
    fn rejects_nonpositive_material() {
        let err = build(10.0, 0.0, 1e-4, &[], &[]).unwrap_err();
        assert!(matches!(err, BeamError::InvalidMaterial(_)));
    }

    #[test]
    fn rejects_out_of_domain_support() {
        let err = build(10.0, 200e9, 1e-4, &[(15.0, Support::Pin)], &[]).unwrap_err();
        assert!(matches!(err, BeamError::OutOfDomain(_)));
    }

    #[test]
    fn simply_supported_mesh_has_two_end_nodes() {
        let mesh = build(
            10.0,
            200e9,
            1e-4,
            &[(0.0, Support::Pin), (10.0, Support::Roller)],
            &[],
        )
        .unwrap();
        assert_eq!(mesh.nodes.len(), 2);
        assert_eq!(mesh.elements.len(), 1);
        assert_eq!(mesh.nodes[0].support, Support::Pin);
        assert_eq!(mesh.nodes[1].support, Support::Roller);
    }

    #[test]
    fn point_load_inserts_a_feature_node() {
        let loads = vec![Load::point_force("L0", 5.0, -10000.0, Category::Live)];
        let mesh = build(
            10.0,
            200e9,
            1e-4,
            &[(0.0, Support::Pin), (10.0, Support::Roller)],
            &loads,
        )
        .unwrap();
        assert_eq!(mesh.nodes.len(), 3);
        assert!(mesh.node_index_at(5.0).is_some());
    }

    #[test]
    fn conflicting_supports_are_rejected() {
        let supports = vec![(5.0, Support::Pin), (5.0 + 1e-5, Support::Fixed)];
        let err = build(10.0, 200e9, 1e-4, &supports, &[]).unwrap_err();
        assert!(matches!(err, BeamError::ConflictingSupports(_)));
    }

    #[test]
    fn distributed_load_endpoints_tile_exactly() {
        let loads = vec![Load::distributed_force("L0", 2.0, 6.0, -500.0, Category::Dead).unwrap()];
        let mesh = build(
            10.0,
            200e9,
            1e-4,
            &[(0.0, Support::Pin), (10.0, Support::Roller)],
            &loads,
        )
        .unwrap();
        assert_eq!(mesh.nodes.len(), 4);
        assert_eq!(mesh.elements.len(), 3);
    }
}
