/// Frustum: six inward-facing planes bounding a perspective camera's view.
///
/// A point P is inside the frustum if `plane.signed_distance(P) >= 0` for
/// all six planes. Planes are stored in a fixed order (see `PLANE_*`).
///
/// Cameras own their frustum and rebuild it when their pose or intrinsics
/// change (see `Camera`). A `Frustum` is plain value data: it can also be
/// built directly from corners, from intrinsics + pose, or from a
/// view-projection matrix.

use glam::{Mat4, Vec3, Vec4};
use crate::error::{Error, Result, log_and_return_error};
use crate::scene::Transform;
use super::camera::camera_world_matrix;
use super::intrinsics::CameraIntrinsics;
use super::plane::Plane;

/// Tolerance for "inside": points up to this far outside a plane still
/// count as inside, which absorbs rounding noise on plane boundaries.
pub const EPSILON: f32 = 1e-6;

/// Result of a 3-way frustum classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Every point is outside one of the planes
    Outside,
    /// Every point is inside every plane
    Inside,
    /// Neither of the above (conservatively treated as visible)
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Plane names, indexed by `PLANE_*`
pub const PLANE_NAMES: [&str; 6] = ["left", "right", "bottom", "top", "near", "far"];

// ===== CORNERS =====

/// The 8 corners of a frustum, named (near|far)(bottom|top)(left|right).
///
/// ```text
///     ftl*--------------------------*ftr
///        | .                      . |
///        |    .                .    |
///        |      ntl*------*ntr      |
///        |         |      |         |
///        |      nbl*------*nbr      |
///        |    .                .    |
///        | .                      . |
///     fbl*--------------------------*fbr
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    pub nbl: Vec3,
    pub nbr: Vec3,
    pub ntl: Vec3,
    pub ntr: Vec3,
    pub fbl: Vec3,
    pub fbr: Vec3,
    pub ftl: Vec3,
    pub ftr: Vec3,
}

impl FrustumCorners {
    /// Corners in camera space (camera at the origin looking down -Z).
    pub fn camera_space(intrinsics: &CameraIntrinsics) -> Self {
        let near = intrinsics.near();
        let far = intrinsics.far();
        let (nw, nh) = intrinsics.half_extents_at(near);
        let (fw, fh) = intrinsics.half_extents_at(far);

        Self {
            nbl: Vec3::new(-nw, -nh, -near),
            nbr: Vec3::new(nw, -nh, -near),
            ntl: Vec3::new(-nw, nh, -near),
            ntr: Vec3::new(nw, nh, -near),
            fbl: Vec3::new(-fw, -fh, -far),
            fbr: Vec3::new(fw, -fh, -far),
            ftl: Vec3::new(-fw, fh, -far),
            ftr: Vec3::new(fw, fh, -far),
        }
    }

    /// Corners of the frustum seen by a camera at `pose`, in world space.
    pub fn world_space(intrinsics: &CameraIntrinsics, pose: &Transform) -> Self {
        Self::camera_space(intrinsics).transformed(&camera_world_matrix(pose))
    }

    /// Corners in nbl, nbr, ntl, ntr, fbl, fbr, ftl, ftr order
    /// (the same order as `AABB::corners`).
    pub fn to_array(&self) -> [Vec3; 8] {
        [self.nbl, self.nbr, self.ntl, self.ntr, self.fbl, self.fbr, self.ftl, self.ftr]
    }

    pub fn from_array(c: [Vec3; 8]) -> Self {
        Self {
            nbl: c[0],
            nbr: c[1],
            ntl: c[2],
            ntr: c[3],
            fbl: c[4],
            fbr: c[5],
            ftl: c[6],
            ftr: c[7],
        }
    }

    /// Every corner mapped through `matrix`.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self::from_array(self.to_array().map(|c| matrix.transform_point3(c)))
    }

    /// Every corner shifted by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self::from_array(self.to_array().map(|c| c + offset))
    }
}

// ===== FRUSTUM =====

/// Six frustum planes for culling.
///
/// Normals point inward (toward the visible volume) and are unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Build the six planes through the faces of a frustum's corners.
    ///
    /// Each face uses three of its corners, ordered so that the
    /// right-hand-rule normal points into the frustum.
    ///
    /// # Errors
    ///
    /// `Error::DegeneratePlane` if any face collapses (e.g. zero scale).
    pub fn from_corners(c: &FrustumCorners) -> Result<Self> {
        Ok(Self {
            planes: [
                Plane::from_points(c.nbl, c.fbl, c.ntl)?, // left
                Plane::from_points(c.nbr, c.ntr, c.ftr)?, // right
                Plane::from_points(c.nbl, c.nbr, c.fbr)?, // bottom
                Plane::from_points(c.ntl, c.ftl, c.ftr)?, // top
                Plane::from_points(c.ntl, c.ntr, c.nbr)?, // near
                Plane::from_points(c.ftr, c.ftl, c.fbl)?, // far
            ],
        })
    }

    /// Frustum of a perspective camera with the given intrinsics at `pose`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidPose` if the pose mirrors space (negative
    ///   determinant, e.g. one negative scale component): every face would
    ///   wind the other way and all normals would point outward.
    /// - `Error::DegeneratePlane` if the pose collapses the frustum.
    pub fn from_intrinsics_and_pose(intrinsics: &CameraIntrinsics, pose: &Transform) -> Result<Self> {
        let world = camera_world_matrix(pose);
        if world.determinant() < 0.0 {
            return Err(log_and_return_error(
                "galaxy3d::Frustum",
                Error::InvalidPose(format!(
                    "scale {:?} mirrors the frustum inside out",
                    pose.scale
                )),
            ));
        }
        Self::from_corners(&FrustumCorners::camera_space(intrinsics).transformed(&world))
    }

    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method with an OpenGL-style [-1, 1] clip
    /// depth range. Works for both perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let coefficients: [Vec4; 6] = [
            row3 + row0, // left
            row3 - row0, // right
            row3 + row1, // bottom
            row3 - row1, // top
            row3 + row2, // near
            row3 - row2, // far
        ];

        Self { planes: coefficients.map(Plane::from_coefficients) }
    }

    /// Plane `index` (see `PLANE_*`).
    ///
    /// # Panics
    ///
    /// If `index` is 6 or more.
    pub fn plane(&self, index: usize) -> &Plane {
        &self.planes[index]
    }

    /// `true` if `point` is inside every plane (within `EPSILON`).
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.is_inside(point, EPSILON))
    }

    /// Conservative visibility test of a point set (typically the 8 world
    /// corners of a bounding box).
    ///
    /// Returns `false` only if every point lies outside one and the same
    /// plane. May return false positives, never false negatives. An empty
    /// point set is outside every plane.
    pub fn intersects_points(&self, points: &[Vec3]) -> bool {
        self.intersects_points_with_epsilon(points, EPSILON)
    }

    /// `intersects_points` with an explicit inside tolerance.
    pub fn intersects_points_with_epsilon(&self, points: &[Vec3], epsilon: f32) -> bool {
        self.first_excluding_plane(points, epsilon).is_none()
    }

    /// Index of the first plane that has every point outside, if any.
    pub fn first_excluding_plane(&self, points: &[Vec3], epsilon: f32) -> Option<usize> {
        self.planes
            .iter()
            .position(|plane| !points.iter().any(|p| plane.is_inside(*p, epsilon)))
    }

    /// Classify a point set against the frustum (3-way test).
    ///
    /// - All points outside one plane → `Outside` (early out)
    /// - All points inside all planes → `Inside`
    /// - Otherwise → `Partial`
    pub fn classify_points(&self, points: &[Vec3]) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let inside = points.iter().filter(|p| plane.is_inside(**p, EPSILON)).count();
            if inside == 0 {
                return FrustumTest::Outside;
            }
            if inside < points.len() {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }

    /// Plane-by-plane comparison.
    pub fn abs_diff_eq(&self, other: &Frustum, max_abs_diff: f32) -> bool {
        self.planes
            .iter()
            .zip(other.planes.iter())
            .all(|(a, b)| a.abs_diff_eq(b, max_abs_diff))
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
