//! Affine matrix primitives shared by the camera controller.
//!
//! Vector arithmetic comes straight from `glam`; this module only adds the
//! row-major 3×4 view-matrix representation the controller publishes.

mod affine;

pub use affine::ViewMatrix;

/// Lengths below this are treated as zero when normalizing.
pub const PRACTICALLY_ZERO: f32 = 1e-5;

/// Normalize `v`, or return `None` when it is too short to carry a
/// direction.
#[must_use]
pub fn try_normalize(v: glam::Vec3) -> Option<glam::Vec3> {
    let len = v.length();
    if len < PRACTICALLY_ZERO || !len.is_finite() {
        return None;
    }
    Some(v / len)
}
