//! Unit tests for error.rs
//!
//! Tests the CameraError variants and their implementations
//! (Display, Debug, Clone, std::error::Error).

use crate::error::CameraError;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_degenerate_look_at_display() {
    let err = CameraError::DegenerateLookAt("center coincides with position".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Degenerate look-at"));
    assert!(display.contains("center coincides with position"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = CameraError::DegenerateLookAt("test".to_string());
    // Verify CameraError implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = CameraError::DegenerateLookAt("test".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("DegenerateLookAt"));
}

#[test]
fn test_error_clone_and_eq() {
    let err = CameraError::DegenerateLookAt("up parallel to view direction".to_string());
    let cloned = err.clone();
    assert_eq!(err, cloned);
}
