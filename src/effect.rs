//! Per-element curving effect
//!
//! [`CurvedUiEffect`] sits between a host UI element and the [`VertexCurver`]:
//! it decides whether the element is curved at all, turns host events into
//! dirty flags, and writes the curved result back into the element's buffer.

use glam::{Mat4, Vec2};

use crate::curve::{submit_curved, OutputTopology, VertexCurver, VertexSink, VertexStream};
use crate::settings::CurvedCanvas;

/// Host-side view of the element that owns a mesh.
pub trait MeshOwner {
    /// Owner-local to world transform.
    fn local_to_world(&self) -> Mat4;

    /// Size of the owner's layout rectangle.
    fn rect_size(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// UV of the first generated glyph vertex, for text elements.
    ///
    /// A change of this value means the font atlas was repacked and the
    /// flat stream carries stale UVs.
    fn glyph_uv_signature(&self) -> Option<Vec2> {
        None
    }
}

/// Result of [`CurvedUiEffect::modify_mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyOutcome {
    /// Curving is off for this element; the buffer was not touched.
    PassThrough,
    /// The buffer now holds curved geometry.
    Curved(OutputTopology),
}

/// Curving state of one UI element.
#[derive(Debug)]
pub struct CurvedUiEffect {
    canvas: Option<CurvedCanvas>,
    curver: VertexCurver,
    active: bool,
    editor_mode: bool,
    seen_revision: Option<u64>,
    seen_enable_toggles: Option<u64>,
    saved_glyph_uv: Option<Vec2>,
}

impl Default for CurvedUiEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl CurvedUiEffect {
    pub fn new() -> Self {
        Self {
            canvas: None,
            curver: VertexCurver::new(),
            active: true,
            editor_mode: false,
            seen_revision: None,
            seen_enable_toggles: None,
            saved_glyph_uv: None,
        }
    }

    pub fn with_canvas(mut self, canvas: CurvedCanvas) -> Self {
        self.set_canvas(Some(canvas));
        self
    }

    /// Attach to a canvas, or detach with `None`.
    pub fn set_canvas(&mut self, canvas: Option<CurvedCanvas>) {
        self.canvas = canvas;
        self.seen_revision = None;
        self.seen_enable_toggles = None;
        self.curver.set_stream_dirty(true);
    }

    pub fn canvas(&self) -> Option<&CurvedCanvas> {
        self.canvas.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activating an element forces a fresh fetch of its geometry.
    pub fn set_active(&mut self, active: bool) {
        if active && !self.active {
            self.curver.set_stream_dirty(true);
        }
        self.active = active;
    }

    /// In editor mode the flat stream is refetched on every pass.
    pub fn set_editor_mode(&mut self, editor_mode: bool) {
        self.editor_mode = editor_mode;
    }

    pub fn curver(&self) -> &VertexCurver {
        &self.curver
    }

    pub fn notify_geometry_changed(&mut self) {
        self.curver.notify_geometry_changed();
    }

    pub fn notify_configuration_changed(&mut self) {
        self.curver.notify_configuration_changed();
    }

    /// The font atlas used by this element was rebuilt.
    pub fn notify_font_texture_rebuilt(&mut self) {
        self.curver.notify_geometry_changed();
    }

    /// Whether this element is curved right now.
    pub fn should_modify(&self) -> bool {
        if !self.active {
            return false;
        }
        match &self.canvas {
            Some(canvas) => !canvas.settings().is_curving_disabled(),
            None => false,
        }
    }

    /// Curve the geometry held in `buffer` in place.
    ///
    /// `buffer` holds the element's freshly built flat geometry. Unless the
    /// effect passes through, it is cleared and refilled with the curved
    /// stream, as quads when the vertex count allows it.
    pub fn modify_mesh<O, B>(&mut self, owner: &O, buffer: &mut B) -> ModifyOutcome
    where
        O: MeshOwner + ?Sized,
        B: VertexStream + VertexSink + ?Sized,
    {
        if !self.active {
            return ModifyOutcome::PassThrough;
        }
        let Some(canvas) = &self.canvas else {
            return ModifyOutcome::PassThrough;
        };
        // Gate and curve from the same snapshot
        let snapshot = canvas.snapshot();
        if snapshot.settings.is_curving_disabled() {
            return ModifyOutcome::PassThrough;
        }

        if self.seen_enable_toggles != Some(snapshot.enable_toggles) {
            self.seen_enable_toggles = Some(snapshot.enable_toggles);
            self.curver.set_stream_dirty(true);
        }

        if let Some(uv) = owner.glyph_uv_signature() {
            if self.saved_glyph_uv != Some(uv) {
                log::debug!("Glyph UVs changed, refetching text geometry");
                self.saved_glyph_uv = Some(uv);
                self.curver.set_stream_dirty(true);
            }
        }

        let rect_size = owner.rect_size();
        if self.curver.state().rect_size != rect_size {
            self.curver.state_mut().rect_size = rect_size;
            self.curver.set_stream_dirty(true);
        }

        if self.seen_revision != Some(snapshot.revision) {
            self.seen_revision = Some(snapshot.revision);
            self.curver.notify_configuration_changed();
        }

        if self.editor_mode {
            self.curver.set_stream_dirty(true);
        }

        let curved = self.curver.curve(
            &*buffer,
            &snapshot.settings,
            owner.local_to_world(),
            snapshot.canvas_to_world,
        );
        ModifyOutcome::Curved(submit_curved(curved, buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::VertexBuffer;
    use crate::settings::CurveSettings;
    use glam::Vec3;

    struct Owner {
        transform: Mat4,
        rect: Vec2,
        glyph_uv: Option<Vec2>,
    }

    impl Owner {
        fn new() -> Self {
            Self {
                transform: Mat4::IDENTITY,
                rect: Vec2::new(200.0, 100.0),
                glyph_uv: None,
            }
        }
    }

    impl MeshOwner for Owner {
        fn local_to_world(&self) -> Mat4 {
            self.transform
        }

        fn rect_size(&self) -> Vec2 {
            self.rect
        }

        fn glyph_uv_signature(&self) -> Option<Vec2> {
            self.glyph_uv
        }
    }

    fn canvas() -> CurvedCanvas {
        CurvedCanvas::new(
            CurveSettings::new(90, Vec2::new(1000.0, 500.0)),
            Mat4::IDENTITY,
        )
        .unwrap()
    }

    fn rect() -> VertexBuffer {
        VertexBuffer::rect(Vec2::new(-100.0, -50.0), Vec2::new(100.0, 50.0), [1.0; 4])
    }

    #[test]
    fn test_no_canvas_passes_through() {
        let mut effect = CurvedUiEffect::new();
        let mut buffer = rect();
        let before = buffer.vertices.clone();
        assert_eq!(
            effect.modify_mesh(&Owner::new(), &mut buffer),
            ModifyOutcome::PassThrough
        );
        assert_eq!(buffer.vertices, before);
    }

    #[test]
    fn test_gating() {
        let canvas = canvas();
        let mut effect = CurvedUiEffect::new().with_canvas(canvas.clone());
        assert!(effect.should_modify());

        effect.set_active(false);
        assert!(!effect.should_modify());
        effect.set_active(true);

        canvas.set_angle(1);
        assert!(!effect.should_modify());

        canvas.set_angle(0);
        assert!(effect.should_modify());

        canvas.set_enabled(false);
        assert!(!effect.should_modify());
    }

    #[test]
    fn test_disabled_snapshot_passes_through() {
        let canvas = canvas();
        let mut effect = CurvedUiEffect::new().with_canvas(canvas.clone());
        let owner = Owner::new();
        effect.modify_mesh(&owner, &mut rect());

        canvas.set_angle(1);
        let mut buffer = rect();
        let before = buffer.vertices.clone();
        assert_eq!(
            effect.modify_mesh(&owner, &mut buffer),
            ModifyOutcome::PassThrough
        );
        assert_eq!(buffer.vertices, before);
        assert_eq!(buffer.index_count(), 6);
    }

    #[test]
    fn test_enable_toggle_refetches() {
        let canvas = canvas();
        let mut effect = CurvedUiEffect::new().with_canvas(canvas.clone());
        let owner = Owner::new();
        effect.modify_mesh(&owner, &mut rect());

        // Same vertex count, new content; an angle edit alone only re-curves
        canvas.set_angle(60);
        let shifted = || VertexBuffer::rect(Vec2::ZERO, Vec2::new(200.0, 100.0), [1.0; 4]);
        effect.modify_mesh(&owner, &mut shifted());
        assert_eq!(effect.curver().flat()[0].position, Vec3::new(-100.0, -50.0, 0.0));

        canvas.set_enabled(false);
        canvas.set_enabled(true);
        effect.modify_mesh(&owner, &mut shifted());
        assert_eq!(effect.curver().flat()[0].position, Vec3::ZERO);
    }

    #[test]
    fn test_rect_is_curved_into_triangles() {
        let mut effect = CurvedUiEffect::new().with_canvas(canvas());
        let mut buffer = rect();
        let outcome = effect.modify_mesh(&Owner::new(), &mut buffer);
        // 2 triangles expand to 6 vertices, not a multiple of 4
        assert_eq!(outcome, ModifyOutcome::Curved(OutputTopology::Triangles(6)));
        assert_eq!(buffer.vertex_count(), 6);
        assert!(buffer.vertices.iter().all(|v| v.position.z < 0.0));
    }

    #[test]
    fn test_canvas_edit_recurves() {
        let canvas = canvas();
        let mut effect = CurvedUiEffect::new().with_canvas(canvas.clone());
        let owner = Owner::new();

        let mut buffer = rect();
        effect.modify_mesh(&owner, &mut buffer);
        let first = buffer.vertices.clone();

        canvas.set_angle(45);
        let mut buffer = rect();
        effect.modify_mesh(&owner, &mut buffer);
        assert_ne!(buffer.vertices[0].position, first[0].position);
    }

    #[test]
    fn test_glyph_uv_change_refetches() {
        let mut effect = CurvedUiEffect::new().with_canvas(canvas());
        let mut owner = Owner::new();
        owner.glyph_uv = Some(Vec2::new(0.1, 0.1));

        let mut buffer = rect();
        effect.modify_mesh(&owner, &mut buffer);
        assert!(!effect.curver().is_stream_dirty());

        // The host rebuilt the element with new glyph UVs
        owner.glyph_uv = Some(Vec2::new(0.5, 0.5));
        let mut buffer = VertexBuffer::rect(Vec2::ZERO, Vec2::new(100.0, 50.0), [1.0; 4]);
        effect.modify_mesh(&owner, &mut buffer);
        let flat = effect.curver().flat();
        assert_eq!(flat[0].position, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rect_size_change_refetches() {
        let mut effect = CurvedUiEffect::new().with_canvas(canvas());
        let mut owner = Owner::new();
        effect.modify_mesh(&owner, &mut rect());
        assert_eq!(effect.curver().state().rect_size, owner.rect);

        owner.rect = Vec2::new(50.0, 50.0);
        let mut smaller = VertexBuffer::rect(Vec2::splat(-25.0), Vec2::splat(25.0), [1.0; 4]);
        effect.modify_mesh(&owner, &mut smaller);
        assert_eq!(effect.curver().flat()[0].position, Vec3::new(-25.0, -25.0, 0.0));
    }

    #[test]
    fn test_editor_mode_always_refetches() {
        let mut effect = CurvedUiEffect::new().with_canvas(canvas());
        effect.set_editor_mode(true);
        let owner = Owner::new();

        effect.modify_mesh(&owner, &mut rect());
        let mut moved = VertexBuffer::rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        effect.modify_mesh(&owner, &mut moved);
        assert_eq!(effect.curver().flat()[0].position, Vec3::ZERO);
    }

    #[test]
    fn test_font_rebuild_marks_stream_dirty() {
        let mut effect = CurvedUiEffect::new().with_canvas(canvas());
        effect.modify_mesh(&Owner::new(), &mut rect());
        assert!(!effect.curver().is_stream_dirty());
        effect.notify_font_texture_rebuilt();
        assert!(effect.curver().is_stream_dirty());
    }
}
