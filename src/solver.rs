//! FEM solver (component E) - assembly, constrained solve, and reaction recovery

use std::collections::HashMap;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::loads::{resolver, Load};
use crate::mesh::Mesh;
use crate::stiffness;

/// Nodal displacement result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Vertical displacement
    pub y: f64,
    /// Rotation
    pub rotation: f64,
}

/// Support reaction result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reactions {
    /// Vertical reaction force
    pub fy: f64,
    /// Reaction moment
    pub m: f64,
}

/// Full analysis result: displacements for every node, reactions for restrained nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Displacement at every node, keyed by node id
    pub displacements: HashMap<String, NodeDisplacement>,
    /// Reaction at every restrained node, keyed by node id
    pub reactions: HashMap<String, Reactions>,
}

/// Solve the beam for the given mesh and loads
///
/// Implements spec.md 4.E: assemble the global stiffness matrix, resolve
/// loads into a force vector, partition into free/fixed DOFs, solve the
/// free system (detecting singularity/mechanisms), and recover reactions
/// from the equilibrium residual `R = K*u - F`.
pub fn solve(mesh: &Mesh, loads: &[Load]) -> BeamResult<AnalysisResult> {
    let n = mesh.nodes.len();
    let n_dofs = n * 2;

    let k_global = assemble(mesh)?;
    let f_global = resolver::resolve(mesh, loads)?;

    let mut free: Vec<usize> = Vec::new();
    let mut fixed: Vec<usize> = Vec::new();
    for (idx, node) in mesh.nodes.iter().enumerate() {
        if node.restrained_y() {
            fixed.push(2 * idx);
        } else {
            free.push(2 * idx);
        }
        if node.restrained_rotation() {
            fixed.push(2 * idx + 1);
        } else {
            free.push(2 * idx + 1);
        }
    }

    let u = if free.is_empty() {
        DVector::zeros(n_dofs)
    } else {
        let n_free = free.len();
        let mut k_ff = DMatrix::zeros(n_free, n_free);
        let mut f_f = DVector::zeros(n_free);
        for (a, &da) in free.iter().enumerate() {
            f_f[a] = f_global[da];
            for (b, &db) in free.iter().enumerate() {
                k_ff[(a, b)] = k_global[(da, db)];
            }
        }

        let u_free = k_ff
            .clone()
            .lu()
            .solve(&f_f)
            .filter(|u| u.iter().all(|v| v.is_finite()))
            .ok_or_else(|| {
                log::warn!("solver: singular or non-finite solution on reduced system, structure is a mechanism");
                BeamError::UnstableStructure(
                    "reduced stiffness matrix is singular or produced a non-finite solution"
                        .to_string(),
                )
            })?;

        let mut u_full = DVector::zeros(n_dofs);
        for (a, &da) in free.iter().enumerate() {
            u_full[da] = u_free[a];
        }
        u_full
    };

    let residual = &k_global * &u - &f_global;

    let mut displacements = HashMap::with_capacity(n);
    let mut reactions = HashMap::new();
    for (idx, node) in mesh.nodes.iter().enumerate() {
        displacements.insert(
            node.id.clone(),
            NodeDisplacement {
                y: u[2 * idx],
                rotation: u[2 * idx + 1],
            },
        );

        if node.support != crate::entities::Support::Free {
            reactions.insert(
                node.id.clone(),
                Reactions {
                    fy: if node.restrained_y() {
                        residual[2 * idx]
                    } else {
                        0.0
                    },
                    m: if node.restrained_rotation() {
                        residual[2 * idx + 1]
                    } else {
                        0.0
                    },
                },
            );
        }
    }

    Ok(AnalysisResult {
        displacements,
        reactions,
    })
}

fn assemble(mesh: &Mesh) -> BeamResult<DMatrix<f64>> {
    let n_dofs = mesh.nodes.len() * 2;
    let mut k_global = DMatrix::zeros(n_dofs, n_dofs);

    for element in &mesh.elements {
        let k_local = stiffness::local_stiffness(element.e, element.i, element.length)?;

        let i = mesh.node_index_by_id(&element.start_node).unwrap();
        let j = mesh.node_index_by_id(&element.end_node).unwrap();
        let dof = [2 * i, 2 * i + 1, 2 * j, 2 * j + 1];

        for (a, &da) in dof.iter().enumerate() {
            for (b, &db) in dof.iter().enumerate() {
                k_global[(da, db)] += k_local[(a, b)];
            }
        }
    }

    log::debug!("solver: assembled {n_dofs}x{n_dofs} global stiffness matrix from {} elements", mesh.elements.len());
    Ok(k_global)
}
