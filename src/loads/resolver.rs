//! Load resolver (component D) - Fixed-End-Action equivalencing

use nalgebra::DVector;

use super::load::Load;
use crate::error::{BeamError, BeamResult};
use crate::mesh::{Mesh, EPS_MERGE};

/// Resolve user-level loads into a consistent nodal force vector of length `2N`
///
/// DOF `2i` is the vertical force at node `i`, `2i+1` the moment at node `i`.
/// Implements spec.md 4.D exactly: point loads add directly to the matched
/// node's DOF, distributed loads are converted to Fixed-End Actions applied
/// to every element the load spans.
pub fn resolve(mesh: &Mesh, loads: &[Load]) -> BeamResult<DVector<f64>> {
    let n_dofs = mesh.nodes.len() * 2;
    let mut f = DVector::zeros(n_dofs);

    for load in loads {
        match load {
            Load::PointForce { x, magnitude, .. } => {
                let j = mesh.node_index_at(*x).ok_or_else(|| {
                    BeamError::LoadNotAligned(format!("point force at x={x} has no matching node"))
                })?;
                f[2 * j] += magnitude;
            }
            Load::PointMoment { x, magnitude, .. } => {
                let j = mesh.node_index_at(*x).ok_or_else(|| {
                    BeamError::LoadNotAligned(format!("point moment at x={x} has no matching node"))
                })?;
                f[2 * j + 1] += magnitude;
            }
            Load::DistributedForce {
                start_x,
                end_x,
                magnitude_per_length,
                ..
            } => {
                apply_distributed(&mut f, mesh, *start_x, *end_x, *magnitude_per_length)?;
            }
        }
    }

    log::debug!("load resolver: assembled force vector of {n_dofs} DOFs from {} loads", loads.len());
    Ok(f)
}

fn apply_distributed(
    f: &mut DVector<f64>,
    mesh: &Mesh,
    a: f64,
    b: f64,
    w: f64,
) -> BeamResult<()> {
    let mut covered = 0.0;

    for element in &mesh.elements {
        let i = mesh.node_index_by_id(&element.start_node).unwrap();
        let j = mesh.node_index_by_id(&element.end_node).unwrap();
        let start_x = mesh.nodes[i].x;
        let end_x = mesh.nodes[j].x;

        if start_x < a - EPS_MERGE || end_x > b + EPS_MERGE {
            continue;
        }

        let l = element.length;
        let v_end = w * l / 2.0;
        let m_end = w * l * l / 12.0;

        f[2 * i] += v_end;
        f[2 * j] += v_end;
        f[2 * i + 1] += m_end;
        f[2 * j + 1] -= m_end;

        covered += l;
    }

    if (covered - (b - a)).abs() > EPS_MERGE {
        return Err(BeamError::LoadNotAligned(format!(
            "distributed load [{a}, {b}] tiled only {covered} of its span"
        )));
    }

    Ok(())
}
