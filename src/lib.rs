//! Curved UI - bends flat UI geometry onto a cylinder segment
//!
//! Panels of a canvas are mapped onto a cylinder around the viewer, the way
//! VR/AR heads-up interfaces are usually presented.
//!
//! # Features
//! - Per-vertex cylindrical mapping in canvas-local space
//! - Two-level dirty tracking (refetch the flat stream vs. re-curve it)
//! - Shared, revisioned canvas settings for all elements of one canvas
//! - Quad or triangle-stream output assembly for the host renderer
//!
//! # Usage
//!
//! ```ignore
//! let canvas = CurvedCanvas::new(
//!     CurveSettings::default().with_canvas_size(Vec2::new(1000.0, 600.0)),
//!     Mat4::IDENTITY,
//! )?;
//!
//! let mut effect = CurvedUiEffect::new().with_canvas(canvas.clone());
//!
//! // Whenever the host rebuilds the element's geometry:
//! let mut buffer = VertexBuffer::rect(Vec2::new(-100.0, -50.0), Vec2::new(100.0, 50.0), [1.0; 4]);
//! effect.modify_mesh(&element, &mut buffer);
//! ```

pub mod curve;
pub mod effect;
pub mod error;
pub mod logging;
pub mod mesh;
pub mod scene;
pub mod settings;
pub mod vertex;

pub use curve::{
    curve_position, submit_curved, CanvasSpace, CurveCacheState, OutputTopology, VertexCurver,
    VertexSink, VertexStream,
};
pub use effect::{CurvedUiEffect, MeshOwner, ModifyOutcome};
pub use error::{CurveError, CurveResult};
pub use mesh::VertexBuffer;
pub use scene::{Transform, UiElement};
pub use settings::{CanvasSnapshot, CurveSettings, CurvedCanvas};
pub use vertex::UiVertex;

// Re-export glam so hosts build matrices with the same types
pub use glam;

/// Degrees to radians, single precision.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
