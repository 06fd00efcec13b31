/// Camera intrinsics: perspective projection parameters.
///
/// Validated on construction: a value of this type always describes a
/// non-degenerate perspective frustum.

use crate::error::{Error, Result, log_and_return_error};

/// Vertical field of view, clip distances and aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    fov_y_degrees: f32,
    near: f32,
    far: f32,
    aspect: f32,
}

impl CameraIntrinsics {
    /// Create validated intrinsics.
    ///
    /// # Errors
    ///
    /// `Error::InvalidIntrinsics` if:
    /// - `fov_y_degrees` is not in (0, 180)
    /// - `near` is not positive, or `far` is not greater than `near`
    /// - `aspect` is not positive
    /// - any value is NaN or infinite
    pub fn new(fov_y_degrees: f32, near: f32, far: f32, aspect: f32) -> Result<Self> {
        let intrinsics = Self { fov_y_degrees, near, far, aspect };
        intrinsics.validate()?;
        Ok(intrinsics)
    }

    /// Create intrinsics with the aspect ratio derived from a viewport in pixels.
    pub fn from_viewport(
        fov_y_degrees: f32,
        near: f32,
        far: f32,
        width_px: u32,
        height_px: u32,
    ) -> Result<Self> {
        if width_px == 0 || height_px == 0 {
            return Err(log_and_return_error(
                "galaxy3d::CameraIntrinsics",
                Error::InvalidIntrinsics(format!(
                    "viewport must not be empty (got {}x{} px)",
                    width_px, height_px
                )),
            ));
        }
        Self::new(fov_y_degrees, near, far, width_px as f32 / height_px as f32)
    }

    fn validate(&self) -> Result<()> {
        let problem = if !self.fov_y_degrees.is_finite()
            || self.fov_y_degrees <= 0.0
            || self.fov_y_degrees >= 180.0
        {
            Some(format!("vertical FOV must be in (0, 180) degrees (got {})", self.fov_y_degrees))
        } else if !self.near.is_finite() || self.near <= 0.0 {
            Some(format!("near distance must be positive (got {})", self.near))
        } else if !self.far.is_finite() || self.far <= self.near {
            Some(format!(
                "far distance ({}) must be greater than near distance ({})",
                self.far, self.near
            ))
        } else if !self.aspect.is_finite() || self.aspect <= 0.0 {
            Some(format!("aspect ratio must be positive (got {})", self.aspect))
        } else {
            None
        };

        match problem {
            Some(msg) => Err(log_and_return_error(
                "galaxy3d::CameraIntrinsics",
                Error::InvalidIntrinsics(msg),
            )),
            None => Ok(()),
        }
    }

    // ===== GETTERS =====

    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    pub fn fov_y_radians(&self) -> f32 {
        self.fov_y_degrees.to_radians()
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Width / height
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Half width and half height of the view rectangle at `distance`
    /// in front of the camera.
    pub fn half_extents_at(&self, distance: f32) -> (f32, f32) {
        let half_height = distance * (self.fov_y_radians() * 0.5).tan();
        (half_height * self.aspect, half_height)
    }

    // ===== MODIFIERS: return a new validated value =====

    pub fn with_fov_y_degrees(self, fov_y_degrees: f32) -> Result<Self> {
        Self::new(fov_y_degrees, self.near, self.far, self.aspect)
    }

    pub fn with_clip_distances(self, near: f32, far: f32) -> Result<Self> {
        Self::new(self.fov_y_degrees, near, far, self.aspect)
    }

    pub fn with_aspect(self, aspect: f32) -> Result<Self> {
        Self::new(self.fov_y_degrees, self.near, self.far, aspect)
    }

    pub fn with_far(self, far: f32) -> Result<Self> {
        Self::new(self.fov_y_degrees, self.near, far, self.aspect)
    }
}

#[cfg(test)]
#[path = "intrinsics_tests.rs"]
mod tests;
