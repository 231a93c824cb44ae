//! Cylindrical curving of UI vertex streams
//!
//! - [`CanvasSpace`] / [`curve_position`] - the per-vertex mapping
//! - [`CurveCacheState`] - dirty flags of one mesh owner
//! - [`VertexCurver`] - refetch, curve and cache a flat vertex stream
//! - [`submit_curved`] - hand curved vertices to a [`VertexSink`] as quads or triangles

mod assembly;
mod cache;
mod curver;
mod space;

pub use assembly::{submit_curved, OutputTopology, VertexSink};
pub use cache::CurveCacheState;
pub use curver::{VertexCurver, VertexStream};
pub use space::{curve_position, CanvasSpace};
