/// Plane: the set of points `p` with `dot(normal, p) + offset == 0`.
///
/// The normal is unit length and points into the half-space considered
/// inside. A point's signed distance is positive inside, negative outside.

use glam::{Vec3, Vec4};
use crate::error::{Error, Result, log_and_return_error};

/// Oriented plane (unit normal + offset)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal, pointing inside
    pub normal: Vec3,
    /// Offset along the normal: `-dot(normal, point_on_plane)`
    pub offset: f32,
}

impl Plane {
    /// Create a plane from an already normalized normal and an offset.
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self { normal, offset }
    }

    /// Plane through `a`, `b`, `c`.
    ///
    /// The normal is `normalize(cross(b - a, c - a))`: by the right-hand
    /// rule it points toward the side from which `a -> b -> c` appears
    /// counter-clockwise. Pick the point order so that this side is inside.
    ///
    /// # Errors
    ///
    /// `Error::DegeneratePlane` if the points are coincident, collinear or
    /// not finite.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Result<Self> {
        let ab = b - a;
        let ac = c - a;
        let cross = ab.cross(ac);
        let len = cross.length();

        // |ab x ac| = |ab| |ac| sin(angle): compare against the edge lengths
        // so tiny (but valid) triangles near the camera are accepted.
        if !(len > f32::EPSILON * ab.length() * ac.length()) || !len.is_finite() {
            return Err(log_and_return_error(
                "galaxy3d::Plane",
                Error::DegeneratePlane(format!(
                    "points {:?}, {:?}, {:?} do not span a plane",
                    a, b, c
                )),
            ));
        }

        let normal = cross / len;
        Ok(Self { normal, offset: -normal.dot(a) })
    }

    /// Plane from packed (A, B, C, D) coefficients, normalized so that
    /// (A, B, C) is unit length. Zero normals are returned unchanged.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = coefficients.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self { normal: normal / len, offset: coefficients.w / len }
        } else {
            Self { normal, offset: coefficients.w }
        }
    }

    /// Packed (A, B, C, D) coefficients
    pub fn to_coefficients(&self) -> Vec4 {
        self.normal.extend(self.offset)
    }

    /// `dot(normal, point) + offset`
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.offset
    }

    /// `true` if `point` is inside or within `epsilon` of the plane.
    #[inline]
    pub fn is_inside(&self, point: Vec3, epsilon: f32) -> bool {
        self.signed_distance(point) >= -epsilon
    }

    /// Component-wise comparison of normal and offset.
    pub fn abs_diff_eq(&self, other: &Plane, max_abs_diff: f32) -> bool {
        self.normal.abs_diff_eq(other.normal, max_abs_diff)
            && (self.offset - other.offset).abs() <= max_abs_diff
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
