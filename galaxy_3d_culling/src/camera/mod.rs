//! Camera module: intrinsics, pose-driven frustum, planes, debug mesh.
//!
//! Cameras are owned and driven by the caller (game engine). The culling
//! code only borrows them.

mod camera;
mod frustum;
mod frustum_mesh;
mod intrinsics;
mod plane;

pub use camera::{Camera, camera_world_matrix};
pub use frustum::{
    Frustum, FrustumCorners, FrustumTest, EPSILON, PLANE_NAMES,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use frustum_mesh::{
    FrustumMesh, DebugMeshOptions, DEFAULT_DEBUG_FAR_DISTANCE, FRUSTUM_MESH_INDICES,
};
pub use intrinsics::CameraIntrinsics;
pub use plane::Plane;
