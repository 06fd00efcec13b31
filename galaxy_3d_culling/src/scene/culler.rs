/// Culling strategies.
///
/// A Culler decides whether an object can possibly be visible, so the
/// renderer can skip submitting it. Implementations range from accept-all
/// (BruteForceCuller) to the camera frustum test (FrustumCuller).
/// New culling shapes are added as new implementations; callers only see
/// the `Culler` trait.

use std::sync::atomic::{AtomicU64, Ordering};
use glam::Vec3;
use crate::camera::{Camera, EPSILON, PLANE_NAMES};
use super::aabb::AABB;
use super::transform::Transform;

// ===== QUERY INPUT =====

/// Anything that can be submitted to a Culler: local-space positions
/// (only their bounding box is used) and a world transform.
pub trait Cullable {
    /// Local-space vertex positions
    fn positions(&self) -> &[Vec3];
    /// Object-to-world transform
    fn transform(&self) -> &Transform;
}

/// Owned positions + transform, for callers without their own mesh type.
#[derive(Debug, Clone, PartialEq)]
pub struct CullableObject {
    pub positions: Vec<Vec3>,
    pub transform: Transform,
}

impl CullableObject {
    pub fn new(positions: Vec<Vec3>, transform: Transform) -> Self {
        Self { positions, transform }
    }
}

impl Cullable for CullableObject {
    fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }
}

// ===== CULLER TRAIT =====

/// Strategy for deciding object visibility.
///
/// Queries take `&self`: a culler may be shared by several passes of the
/// same frame. Implementations needing counters use interior mutability.
pub trait Culler: Send + Sync {
    /// `true` if an object with these local positions, placed by
    /// `transform`, may be visible. Never returns `false` for a visible
    /// object.
    fn is_visible(&self, positions: &[Vec3], transform: &Transform) -> bool;

    /// `is_visible` for a Cullable.
    fn is_object_visible(&self, object: &dyn Cullable) -> bool {
        self.is_visible(object.positions(), object.transform())
    }
}

/// Indices of the potentially visible objects, in input order.
pub fn cull_objects<T: Cullable>(culler: &dyn Culler, objects: &[T]) -> Vec<usize> {
    let visible: Vec<usize> = objects
        .iter()
        .enumerate()
        .filter(|(_, object)| culler.is_object_visible(*object))
        .map(|(index, _)| index)
        .collect();

    crate::engine_debug!(
        "galaxy3d::Culler",
        "{} of {} objects potentially visible",
        visible.len(),
        objects.len()
    );

    visible
}

// ===== BRUTE FORCE =====

/// Brute-force culler: every object is visible (no actual culling).
///
/// Baseline for comparison, and a fallback for views without a frustum.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Culler for BruteForceCuller {
    fn is_visible(&self, _positions: &[Vec3], _transform: &Transform) -> bool {
        true
    }
}

// ===== CONFIG & STATS =====

/// Frustum culler configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullingConfig {
    /// Points up to this distance outside a plane count as inside
    pub epsilon: f32,
    /// Count tested / culled objects (see `FrustumCuller::stats`)
    pub enable_stats: bool,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            enable_stats: true,
        }
    }
}

/// Snapshot of culling counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullingStats {
    /// Objects submitted to `is_visible`
    pub tested: u64,
    /// Objects rejected
    pub culled: u64,
}

impl CullingStats {
    /// Tested minus culled, 0 if `culled` exceeds `tested` (a reset racing
    /// a query, or a hand-built snapshot).
    pub fn visible(&self) -> u64 {
        self.tested.saturating_sub(self.culled)
    }

    /// Fraction of tested objects that were culled, in [0, 1]
    /// (0 when nothing was tested)
    pub fn cull_ratio(&self) -> f32 {
        if self.tested == 0 {
            0.0
        } else {
            (self.culled as f64 / self.tested as f64).min(1.0) as f32
        }
    }
}

/// Thread-safe culling counters
#[derive(Debug, Default)]
struct CullingStatsTracker {
    tested: AtomicU64,
    culled: AtomicU64,
}

impl CullingStatsTracker {
    fn record(&self, visible: bool) {
        self.tested.fetch_add(1, Ordering::Relaxed);
        if !visible {
            self.culled.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn get_stats(&self) -> CullingStats {
        CullingStats {
            tested: self.tested.load(Ordering::Relaxed),
            culled: self.culled.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.tested.store(0, Ordering::Relaxed);
        self.culled.store(0, Ordering::Relaxed);
    }
}

// ===== FRUSTUM CULLER =====

/// Frustum culler: tests an object's bounding box against the camera
/// frustum.
///
/// The object's local AABB is computed from its positions, its 8 corners
/// are mapped to world space by the object's model matrix, and the corner
/// set is tested against the camera's cached frustum planes.
///
/// Borrows the camera: the camera cannot be moved while a culler exists,
/// so every query of a frame sees the same frustum.
pub struct FrustumCuller<'a> {
    camera: &'a Camera,
    config: CullingConfig,
    stats: CullingStatsTracker,
}

impl<'a> FrustumCuller<'a> {
    pub fn new(camera: &'a Camera) -> Self {
        Self::with_config(camera, CullingConfig::default())
    }

    pub fn with_config(camera: &'a Camera, config: CullingConfig) -> Self {
        Self {
            camera,
            config,
            stats: CullingStatsTracker::default(),
        }
    }

    pub fn camera(&self) -> &'a Camera {
        self.camera
    }

    pub fn config(&self) -> &CullingConfig {
        &self.config
    }

    /// Counters since creation or the last `reset_stats`
    pub fn stats(&self) -> CullingStats {
        self.stats.get_stats()
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Visibility of a local-space box placed by `transform`.
    pub fn is_aabb_visible(&self, aabb: &AABB, transform: &Transform) -> bool {
        let corners = aabb.world_corners(&transform.model_matrix());
        let excluded_by = self
            .camera
            .frustum()
            .first_excluding_plane(&corners, self.config.epsilon);

        if let Some(plane) = excluded_by {
            crate::engine_trace!(
                "galaxy3d::FrustumCuller",
                "Culled box {:?}..{:?} at {:?}: all corners outside the {} plane",
                aabb.min,
                aabb.max,
                transform.translation,
                PLANE_NAMES[plane]
            );
        }

        let visible = excluded_by.is_none();
        if self.config.enable_stats {
            self.stats.record(visible);
        }
        visible
    }
}

impl Culler for FrustumCuller<'_> {
    fn is_visible(&self, positions: &[Vec3], transform: &Transform) -> bool {
        match AABB::fit(positions) {
            Some(aabb) => self.is_aabb_visible(&aabb, transform),
            None => {
                crate::engine_warn!(
                    "galaxy3d::FrustumCuller",
                    "Object at {:?} has no positions, culled",
                    transform.translation
                );
                if self.config.enable_stats {
                    self.stats.record(false);
                }
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
