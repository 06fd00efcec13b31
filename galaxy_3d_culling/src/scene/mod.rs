//! Scene module
//!
//! Object-side culling types: transforms, local bounding boxes, and the
//! culling strategies that test them against a camera.

mod aabb;
mod culler;
mod transform;

pub use aabb::{AABB, CORNER_RIGHT, CORNER_TOP, CORNER_FAR};
pub use culler::{
    Culler, Cullable, CullableObject, cull_objects,
    BruteForceCuller, FrustumCuller, CullingConfig, CullingStats,
};
pub use transform::Transform;
