/// Transform: translation, rotation and scale of an object or camera.
///
/// Rotations are expressed in **turns** (1.0 = one full revolution),
/// not radians. Components are (pitch = X, yaw = Y, roll = Z) and are
/// composed Y, then X, then Z.

use std::f32::consts::TAU;
use glam::{Mat4, Vec3};

/// Translation, rotation (turns) and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position
    pub translation: Vec3,
    /// Euler angles in turns: x = pitch, y = yaw, z = roll
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self { translation, rotation, scale }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation angles converted to radians.
    pub fn rotation_radians(&self) -> Vec3 {
        self.rotation * TAU
    }

    /// Rotation matrix `Ry * Rx * Rz`.
    pub fn rotation_matrix(&self) -> Mat4 {
        let r = self.rotation_radians();
        Mat4::from_rotation_y(r.y) * Mat4::from_rotation_x(r.x) * Mat4::from_rotation_z(r.z)
    }

    /// Model matrix `T * Ry * Rx * Rz * S`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * self.rotation_matrix()
            * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
