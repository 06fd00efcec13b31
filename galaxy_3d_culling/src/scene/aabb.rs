/// Axis-Aligned Bounding Box in local space
///
/// Used for frustum culling. Stored in local space and mapped to world
/// space at culling time by transforming its 8 corners (the box is not
/// re-fitted, so under rotation the 8 world corners form an oriented box).

use glam::{Mat4, Vec3};
use crate::error::{Error, Result, log_and_return_error};

/// Corner index bit selecting `max.x` (right) instead of `min.x` (left)
pub const CORNER_RIGHT: usize = 1 << 0;
/// Corner index bit selecting `max.y` (top) instead of `min.y` (bottom)
pub const CORNER_TOP: usize = 1 << 1;
/// Corner index bit selecting `min.z` (far) instead of `max.z` (near).
///
/// Cameras look down their local -Z axis, so the larger z is the near side.
pub const CORNER_FAR: usize = 1 << 2;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given half extents centered on `center`.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Tightest box enclosing all `positions`, `None` if there are none.
    pub fn fit(positions: &[Vec3]) -> Option<Self> {
        let (first, rest) = positions.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));

        Some(Self { min, max })
    }

    /// Tightest box enclosing all `positions`.
    ///
    /// # Errors
    ///
    /// `Error::EmptyGeometry` if `positions` is empty.
    pub fn from_positions(positions: &[Vec3]) -> Result<Self> {
        Self::fit(positions)
            .ok_or_else(|| log_and_return_error("galaxy3d::AABB", Error::EmptyGeometry))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Corner `index` (0..8), see `CORNER_RIGHT`, `CORNER_TOP`, `CORNER_FAR`.
    #[inline]
    pub fn corner(&self, index: usize) -> Vec3 {
        Vec3::new(
            if index & CORNER_RIGHT != 0 { self.max.x } else { self.min.x },
            if index & CORNER_TOP != 0 { self.max.y } else { self.min.y },
            if index & CORNER_FAR != 0 { self.min.z } else { self.max.z },
        )
    }

    /// The 8 corners in (near, far) x (bottom, top) x (left, right) order:
    /// nbl, nbr, ntl, ntr, fbl, fbr, ftl, ftr.
    ///
    /// This is the same order as `FrustumCorners::to_array`.
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| self.corner(i))
    }

    /// The 8 corners mapped through `model` (same order as `corners`).
    pub fn world_corners(&self, model: &Mat4) -> [Vec3; 8] {
        self.corners().map(|c| model.transform_point3(c))
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
