use crate::error::Error;
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_intrinsics_new() {
    let intrinsics = CameraIntrinsics::new(90.0, 0.1, 100.0, 16.0 / 9.0).unwrap();

    assert_eq!(intrinsics.fov_y_degrees(), 90.0);
    assert_eq!(intrinsics.near(), 0.1);
    assert_eq!(intrinsics.far(), 100.0);
    assert_eq!(intrinsics.aspect(), 16.0 / 9.0);
    assert!((intrinsics.fov_y_radians() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_intrinsics_from_viewport() {
    let intrinsics = CameraIntrinsics::from_viewport(60.0, 0.1, 100.0, 1920, 1080).unwrap();

    assert!((intrinsics.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn test_intrinsics_from_empty_viewport_fails() {
    let result = CameraIntrinsics::from_viewport(60.0, 0.1, 100.0, 1920, 0);

    assert!(matches!(result, Err(Error::InvalidIntrinsics(_))));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_intrinsics_rejects_degenerate_values() {
    let cases = [
        (0.0, 0.1, 100.0, 1.0),              // zero FOV
        (180.0, 0.1, 100.0, 1.0),            // flat FOV
        (-45.0, 0.1, 100.0, 1.0),            // negative FOV
        (f32::NAN, 0.1, 100.0, 1.0),         // NaN FOV
        (90.0, 0.0, 100.0, 1.0),             // zero near
        (90.0, -1.0, 100.0, 1.0),            // negative near
        (90.0, 10.0, 10.0, 1.0),             // near == far
        (90.0, 10.0, 1.0, 1.0),              // near > far
        (90.0, 0.1, f32::INFINITY, 1.0),     // infinite far
        (90.0, 0.1, 100.0, 0.0),             // zero aspect
    ];

    for (fov, near, far, aspect) in cases {
        let result = CameraIntrinsics::new(fov, near, far, aspect);
        assert!(
            matches!(result, Err(Error::InvalidIntrinsics(_))),
            "({}, {}, {}, {}) should be rejected",
            fov, near, far, aspect
        );
    }
}

#[test]
fn test_intrinsics_error_message_names_the_problem() {
    let err = CameraIntrinsics::new(90.0, 5.0, 1.0, 1.0).unwrap_err();

    assert!(format!("{}", err).contains("far distance (1) must be greater than near distance (5)"));
}

// ============================================================================
// half_extents_at
// ============================================================================

#[test]
fn test_half_extents_at_90_degrees() {
    let intrinsics = CameraIntrinsics::new(90.0, 0.1, 100.0, 2.0).unwrap();
    let (half_width, half_height) = intrinsics.half_extents_at(10.0);

    // tan(45°) = 1
    assert!((half_height - 10.0).abs() < 1e-4);
    assert!((half_width - 20.0).abs() < 1e-4);
}

// ============================================================================
// Modifiers
// ============================================================================

#[test]
fn test_modifiers_revalidate() {
    let intrinsics = CameraIntrinsics::new(60.0, 0.1, 100.0, 1.0).unwrap();

    assert_eq!(intrinsics.with_fov_y_degrees(75.0).unwrap().fov_y_degrees(), 75.0);
    assert_eq!(intrinsics.with_aspect(2.0).unwrap().aspect(), 2.0);
    assert_eq!(intrinsics.with_far(2.0).unwrap().far(), 2.0);
    assert!(intrinsics.with_far(0.05).is_err());
    assert!(intrinsics.with_clip_distances(1.0, 0.5).is_err());
}
