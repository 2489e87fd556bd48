use glam::Vec3;

use crate::math::{try_normalize, ViewMatrix};

/// Orthonormal camera basis: `x` right, `y` up, `z` pointing from the
/// orbit pivot towards the camera.
///
/// These are the rotation rows of the view matrix, so the camera looks
/// down `-z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitFrame {
    /// Right axis.
    pub x: Vec3,
    /// Up axis.
    pub y: Vec3,
    /// Backward axis (pivot → camera).
    pub z: Vec3,
}

impl OrbitFrame {
    /// World-aligned basis.
    pub const IDENTITY: Self = Self {
        x: Vec3::X,
        y: Vec3::Y,
        z: Vec3::Z,
    };

    /// Read the rotation rows of a view matrix.
    #[must_use]
    pub fn from_view(view: &ViewMatrix) -> Self {
        Self {
            x: view.x_axis(),
            y: view.y_axis(),
            z: view.z_axis(),
        }
    }

    /// Rotate `x` and `y` within their own plane by `angle` radians.
    ///
    /// Both outputs are computed from the pre-rotation pair:
    /// `x' = x cos θ + y sin θ`, `y' = −x sin θ + y cos θ`.
    pub fn rotate_in_plane(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = x * cos + y * sin;
        self.y = x * -sin + y * cos;
    }

    /// Point `z` along `backward` and rebuild `x` and `y` around it with
    /// two cross products, yielding a right-handed orthonormal basis.
    ///
    /// Returns `None` when `backward` has no usable length or is parallel
    /// to `y`.
    #[must_use]
    pub fn reorthonormalized(&self, backward: Vec3) -> Option<Self> {
        let z = try_normalize(backward)?;
        let x = try_normalize(self.y.cross(z))?;
        let y = try_normalize(z.cross(x))?;
        Some(Self { x, y, z })
    }

    /// Rebuild the basis around its own `z`, normalizing and removing
    /// skew. `None` if the axes are degenerate.
    #[must_use]
    pub fn orthonormalized(&self) -> Option<Self> {
        self.reorthonormalized(self.z)
    }

    /// Unit-length and mutually perpendicular axes, within `eps`.
    #[must_use]
    pub fn is_orthonormal(&self, eps: f32) -> bool {
        let unit = [self.x, self.y, self.z]
            .iter()
            .all(|a| (a.length() - 1.0).abs() < eps);
        unit && self.x.dot(self.y).abs() < eps
            && self.y.dot(self.z).abs() < eps
            && self.z.dot(self.x).abs() < eps
    }

    /// World-to-camera matrix for a camera at `position` with this
    /// orientation: rotation rows plus `−R·position` as translation.
    #[must_use]
    pub fn view_matrix(&self, position: Vec3) -> ViewMatrix {
        ViewMatrix::from_axes(
            self.x,
            self.y,
            self.z,
            -Vec3::new(
                self.x.dot(position),
                self.y.dot(position),
                self.z.dot(position),
            ),
        )
    }
}

impl Default for OrbitFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}
