//! Configuration error types
//!
//! The curving path itself never fails; these errors are only produced when
//! canvas settings are created or edited through [`CurvedCanvas`](crate::CurvedCanvas).

use thiserror::Error;

/// Curve configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: f32, height: f32 },
    #[error("Invalid quality factor: {0}")]
    InvalidQuality(f32),
    #[error("Invalid base circle segment count: {0} (must be at least 1)")]
    InvalidBaseSegments(i32),
}

pub type CurveResult<T> = Result<T, CurveError>;
