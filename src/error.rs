//! Error types for the freefly camera
//!
//! The unchecked camera API performs no validation and returns no
//! errors; only the checked entry points (`Camera::try_set`) produce
//! these.

use std::fmt;

/// Result type for checked camera operations
pub type Result<T> = std::result::Result<T, CameraError>;

/// Camera errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// Look-at input cannot produce a valid basis (center coincides
    /// with position, or up is parallel to the view direction)
    DegenerateLookAt(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::DegenerateLookAt(msg) => write!(f, "Degenerate look-at: {}", msg),
        }
    }
}

impl std::error::Error for CameraError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
