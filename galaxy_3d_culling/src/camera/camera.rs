/// Camera: perspective camera that owns its culling frustum.
///
/// The frustum is recomputed whenever the pose or the intrinsics change,
/// never on query.
///
/// Setters are transactional: if the new state would produce a degenerate
/// frustum, the error is returned and the camera is left unchanged.

use std::f32::consts::TAU;
use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::scene::Transform;
use super::frustum::{Frustum, FrustumCorners};
use super::frustum_mesh::{DebugMeshOptions, FrustumMesh};
use super::intrinsics::CameraIntrinsics;

/// Camera-to-world matrix for a camera at `pose`.
///
/// `T * Ry(-yaw - quarter_turn) * Rx(pitch) * Rz(roll) * S`, angles in turns.
///
/// The negated yaw and the extra quarter turn map the camera's -Z forward
/// axis onto the yaw convention used by the camera controllers: a yaw of
/// zero looks down +X, a yaw of -0.25 turn looks down -Z. Changing either
/// term moves every frustum plane.
pub fn camera_world_matrix(pose: &Transform) -> Mat4 {
    let r = pose.rotation_radians();
    let rotation = Mat4::from_rotation_y(-r.y - TAU / 4.0)
        * Mat4::from_rotation_x(r.x)
        * Mat4::from_rotation_z(r.z);

    Mat4::from_translation(pose.translation) * rotation * Mat4::from_scale(pose.scale)
}

/// Perspective camera with a cached world-space frustum.
#[derive(Debug, Clone)]
pub struct Camera {
    intrinsics: CameraIntrinsics,
    pose: Transform,
    frustum: Frustum,
}

impl Camera {
    /// Create a camera and build its frustum.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidPose` if the pose is mirrored (negative scale on one
    ///   or three axes).
    /// - `Error::DegeneratePlane` if the pose collapses the frustum
    ///   (zero or non-finite scale, non-finite translation).
    pub fn new(intrinsics: CameraIntrinsics, pose: Transform) -> Result<Self> {
        let frustum = Self::build_frustum(&intrinsics, &pose)?;
        Ok(Self { intrinsics, pose, frustum })
    }

    /// Create a camera whose aspect ratio comes from a viewport in pixels.
    pub fn from_viewport(
        fov_y_degrees: f32,
        near: f32,
        far: f32,
        width_px: u32,
        height_px: u32,
        pose: Transform,
    ) -> Result<Self> {
        let intrinsics = CameraIntrinsics::from_viewport(fov_y_degrees, near, far, width_px, height_px)?;
        Self::new(intrinsics, pose)
    }

    fn build_frustum(intrinsics: &CameraIntrinsics, pose: &Transform) -> Result<Frustum> {
        let frustum = Frustum::from_intrinsics_and_pose(intrinsics, pose)?;
        crate::engine_trace!(
            "galaxy3d::Camera",
            "Frustum rebuilt (fov {}°, near {}, far {}, aspect {:.3}, position {:?}, rotation {:?})",
            intrinsics.fov_y_degrees(),
            intrinsics.near(),
            intrinsics.far(),
            intrinsics.aspect(),
            pose.translation,
            pose.rotation
        );
        Ok(frustum)
    }

    // ===== GETTERS =====

    pub fn intrinsics(&self) -> &CameraIntrinsics {
        &self.intrinsics
    }

    pub fn pose(&self) -> &Transform {
        &self.pose
    }

    pub fn fov_y_degrees(&self) -> f32 {
        self.intrinsics.fov_y_degrees()
    }

    pub fn near(&self) -> f32 {
        self.intrinsics.near()
    }

    pub fn far(&self) -> f32 {
        self.intrinsics.far()
    }

    pub fn aspect(&self) -> f32 {
        self.intrinsics.aspect()
    }

    /// Camera-to-world matrix (see `camera_world_matrix`).
    pub fn world_matrix(&self) -> Mat4 {
        camera_world_matrix(&self.pose)
    }

    /// World-space frustum, up to date with the current pose and intrinsics.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// World-space frustum corners.
    pub fn frustum_corners(&self) -> FrustumCorners {
        FrustumCorners::world_space(&self.intrinsics, &self.pose)
    }

    /// Conservative visibility test of world-space points against this
    /// camera's frustum.
    pub fn intersects(&self, points: &[Vec3]) -> bool {
        self.frustum.intersects_points(points)
    }

    // ===== SETTERS: rebuild the frustum =====

    /// Replace pose and intrinsics at once (one frustum rebuild).
    pub fn set(&mut self, intrinsics: CameraIntrinsics, pose: Transform) -> Result<()> {
        let frustum = Self::build_frustum(&intrinsics, &pose)?;
        self.intrinsics = intrinsics;
        self.pose = pose;
        self.frustum = frustum;
        Ok(())
    }

    pub fn set_pose(&mut self, pose: Transform) -> Result<()> {
        self.set(self.intrinsics, pose)
    }

    pub fn set_translation(&mut self, translation: Vec3) -> Result<()> {
        self.set_pose(Transform { translation, ..self.pose })
    }

    /// Set rotation in turns (x = pitch, y = yaw, z = roll).
    pub fn set_rotation(&mut self, rotation: Vec3) -> Result<()> {
        self.set_pose(Transform { rotation, ..self.pose })
    }

    pub fn set_intrinsics(&mut self, intrinsics: CameraIntrinsics) -> Result<()> {
        self.set(intrinsics, self.pose)
    }

    pub fn set_fov_y_degrees(&mut self, fov_y_degrees: f32) -> Result<()> {
        self.set_intrinsics(self.intrinsics.with_fov_y_degrees(fov_y_degrees)?)
    }

    pub fn set_clip_distances(&mut self, near: f32, far: f32) -> Result<()> {
        self.set_intrinsics(self.intrinsics.with_clip_distances(near, far)?)
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_viewport(&mut self, width_px: u32, height_px: u32) -> Result<()> {
        let intrinsics = CameraIntrinsics::from_viewport(
            self.intrinsics.fov_y_degrees(),
            self.intrinsics.near(),
            self.intrinsics.far(),
            width_px,
            height_px,
        )?;
        self.set_intrinsics(intrinsics)
    }

    // ===== DEBUG =====

    /// Triangle mesh of this camera's frustum, for visualization.
    ///
    /// The mesh uses `options.far_distance` instead of the camera's far
    /// distance (see `DebugMeshOptions`).
    ///
    /// # Errors
    ///
    /// `Error::InvalidIntrinsics` if `options.far_distance` is not greater
    /// than the camera's near distance.
    pub fn debug_mesh(&self, options: &DebugMeshOptions) -> Result<FrustumMesh> {
        let intrinsics = self.intrinsics.with_far(options.far_distance)?;
        let mut corners = FrustumCorners::world_space(&intrinsics, &self.pose);
        if options.center_at_origin {
            corners = corners.translated(-self.pose.translation);
        }
        Ok(FrustumMesh::from_corners(&corners))
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
