//! Integration tests for frustum culling through the public galaxy3d API
//!
//! Run with: cargo test --test culling_integration_tests

use galaxy_3d_culling::galaxy3d::camera::{
    Camera, CameraIntrinsics, DebugMeshOptions, Frustum, FrustumTest, FRUSTUM_MESH_INDICES,
};
use galaxy_3d_culling::galaxy3d::scene::{
    cull_objects, BruteForceCuller, Culler, CullableObject, CullingStats, FrustumCuller,
    Transform, AABB,
};
use galaxy_3d_culling::galaxy3d::Error;
use galaxy_3d_culling::glam::{Mat4, Vec3};

// ============================================================================
// HELPERS
// ============================================================================

fn looking_down_negative_z() -> Transform {
    Transform::IDENTITY.with_rotation(Vec3::new(0.0, -0.25, 0.0))
}

fn create_test_camera() -> Camera {
    let intrinsics = CameraIntrinsics::new(90.0, 0.1, 100.0, 1.0).unwrap();
    Camera::new(intrinsics, looking_down_negative_z()).unwrap()
}

fn cube_at(translation: Vec3) -> CullableObject {
    let positions = AABB::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5))
        .corners()
        .to_vec();
    CullableObject::new(positions, Transform::from_translation(translation))
}

/// A row of cubes along X at z = -10, from x = -40 to x = 40
fn cube_row() -> Vec<CullableObject> {
    (-4..=4)
        .map(|i| cube_at(Vec3::new(i as f32 * 10.0, 0.0, -10.0)))
        .collect()
}

// ============================================================================
// CULLING SCENARIOS
// ============================================================================

#[test]
fn test_integration_cull_scene() {
    let camera = create_test_camera();
    let culler = FrustumCuller::new(&camera);

    let objects = vec![
        cube_at(Vec3::new(0.0, 0.0, -10.0)),
        cube_at(Vec3::new(0.0, 0.0, 10.0)),
        cube_at(Vec3::new(1000.0, 0.0, -10.0)),
        cube_at(Vec3::new(0.0, 0.0, -99.0)),
        cube_at(Vec3::new(0.0, 0.0, -500.0)),
    ];

    assert_eq!(cull_objects(&culler, &objects), vec![0, 3]);
    assert_eq!(culler.stats(), CullingStats { tested: 5, culled: 3 });
}

#[test]
fn test_integration_visible_set_follows_camera() {
    let mut camera = create_test_camera();
    let row = cube_row();

    // 90° fov at distance 10: x in [-10, 10] plus the half cube
    let centered = cull_objects(&FrustumCuller::new(&camera), &row);
    assert_eq!(centered, vec![3, 4, 5]);

    camera.set_translation(Vec3::new(30.0, 0.0, 0.0)).unwrap();
    let shifted = cull_objects(&FrustumCuller::new(&camera), &row);
    assert_eq!(shifted, vec![6, 7, 8]);

    // Yaw 0 looks down +X: only cubes at least 10 units ahead remain
    camera.set_translation(Vec3::ZERO).unwrap();
    camera.set_rotation(Vec3::ZERO).unwrap();
    let turned = cull_objects(&FrustumCuller::new(&camera), &row);
    assert_eq!(turned, vec![5, 6, 7, 8]);
}

#[test]
fn test_integration_narrower_fov_culls_more() {
    let mut camera = create_test_camera();
    let row = cube_row();
    let wide = cull_objects(&FrustumCuller::new(&camera), &row).len();

    camera.set_fov_y_degrees(170.0).unwrap();
    let wider = cull_objects(&FrustumCuller::new(&camera), &row).len();

    camera.set_fov_y_degrees(20.0).unwrap();
    let narrow = cull_objects(&FrustumCuller::new(&camera), &row).len();

    assert!(wider > wide);
    assert!(narrow < wide);
    assert_eq!(narrow, 1);
}

#[test]
fn test_integration_cullers_as_trait_objects() {
    let camera = create_test_camera();
    let frustum_culler = FrustumCuller::new(&camera);
    let cullers: [&dyn Culler; 2] = [&frustum_culler, &BruteForceCuller];

    let object = cube_at(Vec3::new(3.0, -2.0, -20.0));
    for culler in cullers {
        assert!(culler.is_object_visible(&object));
    }
}

// ============================================================================
// FRUSTUM CONSISTENCY
// ============================================================================

#[test]
fn test_integration_frustum_matches_projection_matrix() {
    let camera = create_test_camera();
    let projection = Mat4::perspective_rh_gl(90.0_f32.to_radians(), 1.0, 0.1, 100.0);
    let view = camera.world_matrix().inverse();
    let from_matrix = Frustum::from_view_projection(&(projection * view));

    for z in [-0.05, -1.0, -50.0, -150.0] {
        for x in [-60.0, 0.0, 20.0] {
            let point = [Vec3::new(x, 0.0, z)];
            assert_eq!(
                camera.frustum().intersects_points(&point),
                from_matrix.intersects_points(&point),
                "disagreement at ({}, 0, {})",
                x,
                z
            );
        }
    }
}

#[test]
fn test_integration_classify_camera_corners() {
    let camera = create_test_camera();
    let corners = camera.frustum_corners().to_array();

    // Points pulled slightly toward the frustum center are fully inside
    let center = corners.iter().copied().sum::<Vec3>() / 8.0;
    let shrunk: Vec<Vec3> = corners.iter().map(|c| c.lerp(center, 0.01)).collect();

    assert_eq!(camera.frustum().classify_points(&shrunk), FrustumTest::Inside);
}

// ============================================================================
// DEBUG MESH
// ============================================================================

#[test]
fn test_integration_debug_mesh() {
    let mut camera = create_test_camera();
    camera.set_translation(Vec3::new(5.0, 1.0, 2.0)).unwrap();

    let mesh = camera.debug_mesh(&DebugMeshOptions::default()).unwrap();
    assert_eq!(mesh.positions.len(), 8);
    assert_eq!(mesh.indices, FRUSTUM_MESH_INDICES.to_vec());
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.position_bytes().len(), 8 * 12);

    let centered = camera
        .debug_mesh(&DebugMeshOptions { center_at_origin: true, ..Default::default() })
        .unwrap();
    for (world, local) in mesh.positions.iter().zip(centered.positions.iter()) {
        assert!((*world - Vec3::new(5.0, 1.0, 2.0) - *local).length() < 1e-4);
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_integration_invalid_setters_leave_camera_unchanged() {
    let mut camera = create_test_camera();
    let before = *camera.frustum();

    assert!(matches!(camera.set_clip_distances(10.0, 1.0), Err(Error::InvalidIntrinsics(_))));
    assert!(matches!(camera.set_fov_y_degrees(0.0), Err(Error::InvalidIntrinsics(_))));
    assert!(matches!(camera.set_viewport(0, 1080), Err(Error::InvalidIntrinsics(_))));

    assert_eq!(*camera.frustum(), before);
    assert_eq!(camera.near(), 0.1);
    assert_eq!(camera.far(), 100.0);
}

#[test]
fn test_integration_empty_geometry() {
    assert_eq!(AABB::from_positions(&[]), Err(Error::EmptyGeometry));

    let camera = create_test_camera();
    let culler = FrustumCuller::new(&camera);
    let empty = CullableObject::new(Vec::new(), Transform::IDENTITY);
    assert!(!culler.is_object_visible(&empty));
}
