//! Error types for the beam analysis core

use thiserror::Error;

/// Main error type for beam analysis operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid material: {0}")]
    InvalidMaterial(String),

    #[error("coordinate out of domain: {0}")]
    OutOfDomain(String),

    #[error("conflicting supports: {0}")]
    ConflictingSupports(String),

    #[error("unstable structure: {0}")]
    UnstableStructure(String),

    #[error("load not aligned to mesh: {0}")]
    LoadNotAligned(String),
}

/// Result type for beam analysis operations
pub type BeamResult<T> = Result<T, BeamError>;
