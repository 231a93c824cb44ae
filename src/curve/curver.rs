//! Flat-to-curved vertex stream conversion with caching

use glam::{Mat4, Vec2};

use super::cache::CurveCacheState;
use super::space::{curve_position, CanvasSpace};
use crate::settings::CurveSettings;
use crate::vertex::UiVertex;

/// Source of flat UI geometry.
pub trait VertexStream {
    /// Append the flat vertex stream to `out` as a triangle list.
    ///
    /// Shared vertices are not deduplicated: every triangle contributes its
    /// own three vertices.
    fn fill_vertex_stream(&self, out: &mut Vec<UiVertex>);
}

/// The values a curved stream depends on, compared bitwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CurveParams {
    angle: i32,
    radius: u32,
    canvas_width: u32,
    canvas_height: u32,
}

impl CurveParams {
    fn new(angle: i32, radius: f32, canvas_size: Vec2) -> Self {
        Self {
            angle,
            radius: radius.to_bits(),
            canvas_width: canvas_size.x.to_bits(),
            canvas_height: canvas_size.y.to_bits(),
        }
    }
}

/// Curves the flat vertex stream of one mesh owner.
///
/// Keeps the fetched flat stream and the curved result between calls so
/// that an unchanged owner costs nothing per rebuild.
#[derive(Debug, Default)]
pub struct VertexCurver {
    state: CurveCacheState,
    flat: Vec<UiVertex>,
    curved: Vec<UiVertex>,
    last_params: Option<CurveParams>,
    last_owner_to_world: Option<Mat4>,
    last_canvas_to_world: Option<Mat4>,
    warned_non_finite: bool,
}

impl VertexCurver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CurveCacheState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CurveCacheState {
        &mut self.state
    }

    pub fn is_stream_dirty(&self) -> bool {
        self.state.is_stream_dirty()
    }

    pub fn is_curve_dirty(&self) -> bool {
        self.state.is_curve_dirty()
    }

    pub fn set_stream_dirty(&mut self, dirty: bool) {
        self.state.set_stream_dirty(dirty);
    }

    pub fn set_curve_dirty(&mut self, dirty: bool) {
        self.state.set_curve_dirty(dirty);
    }

    /// The owner's geometry changed; refetch on the next pass.
    pub fn notify_geometry_changed(&mut self) {
        self.state.set_stream_dirty(true);
    }

    /// The canvas configuration changed; re-curve on the next pass.
    pub fn notify_configuration_changed(&mut self) {
        self.state.set_curve_dirty(true);
    }

    /// Last fetched flat stream.
    pub fn flat(&self) -> &[UiVertex] {
        &self.flat
    }

    /// Last curved stream.
    pub fn curved(&self) -> &[UiVertex] {
        &self.curved
    }

    /// Bring the curved stream up to date and return it.
    ///
    /// Refetches from `source` only when the stream is dirty and re-curves
    /// only when the curve is dirty. A change of angle, radius, canvas size,
    /// owner transform or canvas transform since the last pass marks the
    /// curve dirty by itself.
    /// When nothing changed the cached stream is returned untouched.
    pub fn curve<S: VertexStream + ?Sized>(
        &mut self,
        source: &S,
        settings: &CurveSettings,
        owner_to_world: Mat4,
        canvas_to_world: Mat4,
    ) -> &[UiVertex] {
        // Snapshot everything once for the whole pass
        let angle = settings.angle;
        let radius = settings.cylinder_radius();
        let canvas_size = settings.canvas_size;

        let params = CurveParams::new(angle, radius, canvas_size);
        if self.last_params != Some(params) {
            self.state.set_curve_dirty(true);
        }
        if self.last_owner_to_world != Some(owner_to_world)
            || self.last_canvas_to_world != Some(canvas_to_world)
        {
            self.state.set_curve_dirty(true);
        }

        if self.state.is_clean() {
            log::trace!("Curve cache hit ({} vertices)", self.curved.len());
            return &self.curved;
        }

        if self.state.is_stream_dirty() {
            self.refetch(source);
        }

        self.warn_on_degenerate_curve(angle, radius, canvas_size);

        let space = CanvasSpace::new(owner_to_world, canvas_to_world);
        let curve_vertex = |vertex: &UiVertex| {
            let position = space.owner_to_canvas(vertex.position);
            let position = curve_position(position, angle, radius, canvas_size);
            vertex.with_position(space.canvas_to_owner(position))
        };

        if self.curved.len() == self.flat.len() {
            for (curved, flat) in self.curved.iter_mut().zip(&self.flat) {
                *curved = curve_vertex(flat);
            }
        } else {
            log::debug!(
                "Rebuilding curved cache: {} -> {} vertices",
                self.curved.len(),
                self.flat.len()
            );
            self.curved.clear();
            self.curved.extend(self.flat.iter().map(curve_vertex));
        }

        self.last_params = Some(params);
        self.last_owner_to_world = Some(owner_to_world);
        self.last_canvas_to_world = Some(canvas_to_world);
        self.state.mark_curved();
        &self.curved
    }

    fn refetch<S: VertexStream + ?Sized>(&mut self, source: &S) {
        self.flat.clear();
        source.fill_vertex_stream(&mut self.flat);
        self.state.mark_fetched(self.flat.len());
        log::debug!("Fetched flat vertex stream ({} vertices)", self.flat.len());
    }

    fn warn_on_degenerate_curve(&mut self, angle: i32, radius: f32, canvas_size: Vec2) {
        if angle != 0 && (!radius.is_finite() || canvas_size.x == 0.0) {
            if !self.warned_non_finite {
                log::warn!(
                    "Degenerate curve (angle {}, radius {}, canvas width {}); \
                     curved positions will not be finite",
                    angle,
                    radius,
                    canvas_size.x
                );
                self.warned_non_finite = true;
            }
        } else {
            self.warned_non_finite = false;
        }
    }
}
