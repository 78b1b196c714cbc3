//! Stiffness kernel (component B) - local Euler-Bernoulli beam element

use nalgebra::{Matrix4, SMatrix};

use crate::error::{BeamError, BeamResult};

/// 4x4 local stiffness matrix for DOF ordering `[v1, theta1, v2, theta2]`
pub type Mat4 = SMatrix<f64, 4, 4>;

/// Compute the local Euler-Bernoulli bending stiffness matrix
///
/// Contract: `l > 0`, `e > 0`, `i > 0`, else `InvalidGeometry`/`InvalidMaterial`.
/// The matrix is symmetric by construction.
pub fn local_stiffness(e: f64, i: f64, l: f64) -> BeamResult<Mat4> {
    if l <= 0.0 {
        return Err(BeamError::InvalidGeometry(format!(
            "element length {l} must be positive"
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

    let l2 = l * l;
    let l3 = l2 * l;

    let k_vv = 12.0 * e * i / l3;
    let k_vt = 6.0 * e * i / l2;
    let k_tt_near = 4.0 * e * i / l;
    let k_tt_far = 2.0 * e * i / l;

    #[rustfmt::skip]
    let k = Matrix4::new(
         k_vv,  k_vt, -k_vv,  k_vt,
         k_vt,  k_tt_near, -k_vt, k_tt_far,
        -k_vv, -k_vt,  k_vv, -k_vt,
         k_vt,  k_tt_far, -k_vt, k_tt_near,
    );

    Ok(k)
}
