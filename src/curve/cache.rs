//! Per-owner dirty tracking

use glam::Vec2;

/// Cache invalidation state of one mesh owner.
///
/// `stream_dirty` means the flat vertex stream must be fetched again;
/// `curve_dirty` means the already fetched stream must be curved again.
/// A dirty stream always implies a dirty curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveCacheState {
    stream_dirty: bool,
    curve_dirty: bool,
    /// Flat vertex count seen on the last refetch
    pub flat_vertex_count: usize,
    /// Owner rectangle size seen on the last refetch
    pub rect_size: Vec2,
}

impl Default for CurveCacheState {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveCacheState {
    /// Fresh state: everything must be fetched on first use.
    pub fn new() -> Self {
        Self {
            stream_dirty: true,
            curve_dirty: true,
            flat_vertex_count: 0,
            rect_size: Vec2::ZERO,
        }
    }

    pub fn is_stream_dirty(&self) -> bool {
        self.stream_dirty
    }

    pub fn is_curve_dirty(&self) -> bool {
        self.curve_dirty || self.stream_dirty
    }

    /// Nothing to do: the cached curved stream is current.
    pub fn is_clean(&self) -> bool {
        !self.is_curve_dirty()
    }

    pub fn set_stream_dirty(&mut self, dirty: bool) {
        self.stream_dirty = dirty;
        if dirty {
            self.curve_dirty = true;
        }
    }

    pub fn set_curve_dirty(&mut self, dirty: bool) {
        self.curve_dirty = dirty;
    }

    /// Record a completed refetch.
    pub(crate) fn mark_fetched(&mut self, flat_vertex_count: usize) {
        self.flat_vertex_count = flat_vertex_count;
        self.stream_dirty = false;
        self.curve_dirty = true;
    }

    /// Record a completed curve pass.
    pub(crate) fn mark_curved(&mut self) {
        self.curve_dirty = false;
    }
}
