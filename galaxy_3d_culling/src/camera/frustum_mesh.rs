/// FrustumMesh: renderable hexahedron of a camera frustum (debug only).
///
/// 8 positions (same order as `FrustumCorners::to_array`) and 12 triangles.
/// Not used by the visibility test.

use glam::Vec3;
use super::frustum::FrustumCorners;

/// Far distance used by debug meshes unless overridden.
///
/// Does not follow the camera's far distance.
pub const DEFAULT_DEBUG_FAR_DISTANCE: f32 = 2.0;

/// Triangle indices, two per face, faces in order near, far, left, right,
/// top, bottom.
pub const FRUSTUM_MESH_INDICES: [u32; 36] = [
    0, 1, 2, 1, 3, 2, // near
    4, 6, 5, 5, 6, 7, // far
    0, 2, 4, 2, 6, 4, // left
    1, 5, 3, 3, 5, 7, // right
    2, 3, 6, 3, 7, 6, // top
    0, 4, 1, 1, 4, 5, // bottom
];

/// Debug mesh generation options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugMeshOptions {
    /// Shift positions so the camera position is the local origin
    pub center_at_origin: bool,
    /// Distance of the far face of the mesh
    pub far_distance: f32,
}

impl Default for DebugMeshOptions {
    fn default() -> Self {
        Self {
            center_at_origin: false,
            far_distance: DEFAULT_DEBUG_FAR_DISTANCE,
        }
    }
}

/// Indexed triangle mesh of a frustum
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumMesh {
    /// nbl, nbr, ntl, ntr, fbl, fbr, ftl, ftr
    pub positions: Vec<Vec3>,
    /// 36 indices into `positions`
    pub indices: Vec<u32>,
}

impl FrustumMesh {
    pub fn from_corners(corners: &FrustumCorners) -> Self {
        Self {
            positions: corners.to_array().to_vec(),
            indices: FRUSTUM_MESH_INDICES.to_vec(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Resolved triangle positions
    ///
    /// # Panics
    ///
    /// If an entry of `indices` is out of range for `positions`.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.positions[tri[0] as usize],
                self.positions[tri[1] as usize],
                self.positions[tri[2] as usize],
            ]
        })
    }

    /// Positions as raw bytes (tightly packed f32 x3) for vertex buffer upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Indices as raw bytes (u32) for index buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
#[path = "frustum_mesh_tests.rs"]
mod tests;
