//! Error types for Galaxy3D culling
//!
//! Culling itself never fails: a visibility query always answers.
//! Errors are raised only when building the inputs of a query (camera
//! intrinsics, frustum planes, bounding boxes) from data that would
//! otherwise produce NaN planes or empty volumes.

use std::fmt;
use std::panic::Location;
use crate::engine::Engine;
use crate::log::LogSeverity;

/// Result type for Galaxy3D culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Camera intrinsics cannot describe a perspective frustum
    /// (zero FOV, zero aspect, near >= far, zero-sized viewport, ...)
    InvalidIntrinsics(String),

    /// Camera pose cannot orient a frustum (mirrored by a negative scale)
    InvalidPose(String),

    /// Three points do not span a plane (coincident, collinear or non-finite)
    DegeneratePlane(String),

    /// A bounding volume was requested from an empty set of positions
    EmptyGeometry,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIntrinsics(msg) => write!(f, "Invalid camera intrinsics: {}", msg),
            Error::InvalidPose(msg) => write!(f, "Invalid camera pose: {}", msg),
            Error::DegeneratePlane(msg) => write!(f, "Degenerate plane: {}", msg),
            Error::EmptyGeometry => write!(f, "Empty geometry: no positions to bound"),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error with the caller's file:line, then hand it back.
#[track_caller]
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    let location = Location::caller();
    if Engine::is_enabled(LogSeverity::Error) {
        Engine::log_detailed(
            LogSeverity::Error,
            source,
            error.to_string(),
            location.file(),
            location.line(),
        );
    }
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
