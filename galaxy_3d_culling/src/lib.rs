/*!
# Galaxy 3D Culling

View-frustum culling for the Galaxy 3D engine.

A perspective camera (field of view, clip distances, aspect ratio and a
translation / rotation / scale pose) owns six inward-facing planes that are
rebuilt whenever the camera changes. Objects are culled by mapping the 8
corners of their local bounding box to world space and rejecting them when
all corners lie outside a single plane. The test is conservative: a visible
object is never culled.

## Architecture

- **Camera**: intrinsics + pose, owns the cached `Frustum`
- **Frustum**: six `Plane`s, point-set intersection and classification
- **FrustumMesh**: 8-vertex / 12-triangle debug geometry of a frustum
- **Culler**: strategy trait (`FrustumCuller`, `BruteForceCuller`)
- **AABB** / **Transform**: object-side inputs

Rotations are expressed in turns (1.0 = 360°).
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module: intrinsics, frustum, planes, debug mesh
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module: transforms, bounding boxes, cullers
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
