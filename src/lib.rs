//! Beam Solver - a 2D Euler-Bernoulli beam analysis core
//!
//! This library provides the computational core of a structural beam
//! analyzer:
//! - Feature-point meshing from supports and loads
//! - Local Euler-Bernoulli element stiffness assembly
//! - Fixed-End-Action equivalencing for distributed loads
//! - A constrained linear solve with singularity detection
//! - Reaction recovery from the equilibrium residual
//! - Analytical shear/moment/deflection diagram reconstruction
//!
//! The core is a pure library: `analyze` and `diagrams` are referentially
//! transparent functions of their input, with no process-wide state.
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! let input = BeamInput {
//!     length: 10.0,
//!     e: 200e9,
//!     i: 1e-4,
//!     supports: vec![(0.0, Support::Pin), (10.0, Support::Roller)],
//!     loads: vec![Load::point_force("L0", 5.0, -10000.0, Category::Dead)],
//! };
//!
//! let output = analyze(&input).unwrap();
//! let diagram = diagrams(&input, &output, 100, Category::Dead).unwrap();
//! ```

pub mod diagram;
pub mod entities;
pub mod error;
pub mod loads;
pub mod mesh;
pub mod solver;
pub mod stiffness;

use entities::{Node, Support};
use error::BeamResult;
use loads::{Category, Load};
use solver::AnalysisResult;

/// The complete input to a beam analysis: geometry, material, supports and loads
#[derive(Debug, Clone)]
pub struct BeamInput {
    /// Beam length (metres), > 0
    pub length: f64,
    /// Modulus of elasticity, > 0
    pub e: f64,
    /// Second moment of area, > 0
    pub i: f64,
    /// Support coordinates and kinds
    pub supports: Vec<(f64, Support)>,
    /// Applied loads
    pub loads: Vec<Load>,
}

/// The complete output of a beam analysis: the resolved mesh and its results
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    /// Nodes generated by the mesh builder, in increasing `x` order
    pub nodes: Vec<Node>,
    /// Displacements and reactions from the solver
    pub result: AnalysisResult,
}

/// Run a complete beam analysis: mesh, assemble, solve, recover reactions
///
/// This is the single entry point for spec.md's A-E pipeline: it is a pure
/// function of `input`, computing the mesh, the equivalent nodal loads, and
/// the constrained linear solve in sequence with no retained state.
pub fn analyze(input: &BeamInput) -> BeamResult<AnalysisOutput> {
    let mesh = mesh::build(
        input.length,
        input.e,
        input.i,
        &input.supports,
        &input.loads,
    )?;
    let result = solver::solve(&mesh, &input.loads)?;

    Ok(AnalysisOutput {
        nodes: mesh.nodes,
        result,
    })
}

/// Compute shear, moment, and deflection diagrams from a prior analysis
///
/// `resolution` samples are taken over `[0, input.length]`; only loads
/// matching `category` contribute to the shear and moment diagrams.
pub fn diagrams(
    input: &BeamInput,
    output: &AnalysisOutput,
    resolution: usize,
    category: Category,
) -> BeamResult<diagram::Diagram> {
    diagram::diagrams(
        input.length,
        &output.nodes,
        &input.loads,
        &output.result.reactions,
        &output.result.displacements,
        resolution,
        category,
    )
}

/// Re-exports of the common public types
pub mod prelude {
    pub use crate::diagram::Diagram;
    pub use crate::entities::{Element, Node, Support};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::{Category, Load};
    pub use crate::solver::{AnalysisResult, NodeDisplacement, Reactions};
    pub use crate::{analyze, diagrams, AnalysisOutput, BeamInput};
}
