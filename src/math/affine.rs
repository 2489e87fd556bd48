use std::ops::Mul;

use glam::{Mat4, Vec3, Vec4};

use crate::error::OrbitCamError;

/// Determinants with a smaller magnitude are rejected by
/// [`ViewMatrix::try_inverse`].
const SINGULAR_DETERMINANT: f32 = 1e-6;

/// Row-major 3×4 affine matrix mapping world space into camera space.
///
/// Rows 0..3 hold the camera's x, y and z axes in their `xyz` lanes and
/// the translation in `w`. The implicit fourth row is `(0, 0, 0, 1)`, so
/// there is no projection part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMatrix {
    rows: [Vec4; 3],
}

impl ViewMatrix {
    /// Identity rotation, zero translation.
    pub const IDENTITY: Self = Self {
        rows: [Vec4::X, Vec4::Y, Vec4::Z],
    };

    /// Build from three row vectors.
    #[must_use]
    pub const fn from_rows(rows: [Vec4; 3]) -> Self {
        Self { rows }
    }

    /// Build from a plain row-major array.
    #[must_use]
    pub fn from_rows_array(rows: [[f32; 4]; 3]) -> Self {
        Self {
            rows: rows.map(Vec4::from_array),
        }
    }

    /// Pure translation by `t`.
    #[must_use]
    pub fn from_translation(t: Vec3) -> Self {
        Self::from_axes(Vec3::X, Vec3::Y, Vec3::Z, t)
    }

    /// Build from the three rotation rows and a translation column.
    #[must_use]
    pub fn from_axes(x: Vec3, y: Vec3, z: Vec3, translation: Vec3) -> Self {
        Self {
            rows: [
                x.extend(translation.x),
                y.extend(translation.y),
                z.extend(translation.z),
            ],
        }
    }

    /// Drop the last row of a homogeneous 4×4 matrix.
    #[must_use]
    pub fn from_mat4(m: &Mat4) -> Self {
        Self {
            rows: [m.row(0), m.row(1), m.row(2)],
        }
    }

    /// All three rows.
    #[must_use]
    pub const fn rows(&self) -> &[Vec4; 3] {
        &self.rows
    }

    /// Camera right axis (rotation row 0).
    #[must_use]
    pub fn x_axis(&self) -> Vec3 {
        self.rows[0].truncate()
    }

    /// Camera up axis (rotation row 1).
    #[must_use]
    pub fn y_axis(&self) -> Vec3 {
        self.rows[1].truncate()
    }

    /// Camera backward axis (rotation row 2).
    #[must_use]
    pub fn z_axis(&self) -> Vec3 {
        self.rows[2].truncate()
    }

    /// The translation column.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.rows[0].w, self.rows[1].w, self.rows[2].w)
    }

    /// Replace the translation column, keeping the rotation rows.
    pub fn set_translation(&mut self, t: Vec3) {
        self.rows[0].w = t.x;
        self.rows[1].w = t.y;
        self.rows[2].w = t.z;
    }

    /// Extend to a homogeneous 4×4 matrix (glam is column-major, so the
    /// rows go in as columns and get transposed).
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols(self.rows[0], self.rows[1], self.rows[2], Vec4::W)
            .transpose()
    }

    /// Invert the 4×4 extension of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitCamError::SingularMatrix`] when the determinant is too
    /// close to zero (or not finite) for the inverse to be meaningful.
    pub fn try_inverse(&self) -> Result<Mat4, OrbitCamError> {
        let m = self.to_mat4();
        let determinant = m.determinant();
        if !determinant.is_finite() || determinant.abs() < SINGULAR_DETERMINANT
        {
            return Err(OrbitCamError::SingularMatrix { determinant });
        }
        Ok(m.inverse())
    }

    /// Apply the matrix to a point (`w = 1`).
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let p = p.extend(1.0);
        Vec3::new(self.rows[0].dot(p), self.rows[1].dot(p), self.rows[2].dot(p))
    }

    /// Component-wise comparison within `max_abs_diff`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.abs_diff_eq(*b, max_abs_diff))
    }
}

impl Default for ViewMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for ViewMatrix {
    type Output = Self;

    /// Affine composition: `(a * b)` applies `b` first, then `a`.
    fn mul(self, rhs: Self) -> Self {
        Self::from_mat4(&(self.to_mat4() * rhs.to_mat4()))
    }
}

impl From<ViewMatrix> for Mat4 {
    fn from(m: ViewMatrix) -> Self {
        m.to_mat4()
    }
}
