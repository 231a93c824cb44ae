//! Minimal scene types for hosting curved elements

mod transform;

pub use transform::*;

use glam::{Mat4, Vec2};

use crate::effect::MeshOwner;

/// A UI element placed in world space
#[derive(Debug, Clone)]
pub struct UiElement {
    pub name: String,
    pub transform: Transform,
    pub rect_size: Vec2,
    pub glyph_uv: Option<Vec2>,
}

impl UiElement {
    pub fn new(name: &str, rect_size: Vec2) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::default(),
            rect_size,
            glyph_uv: None,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_glyph_uv(mut self, uv: Vec2) -> Self {
        self.glyph_uv = Some(uv);
        self
    }
}

impl MeshOwner for UiElement {
    fn local_to_world(&self) -> Mat4 {
        self.transform.matrix()
    }

    fn rect_size(&self) -> Vec2 {
        self.rect_size
    }

    fn glyph_uv_signature(&self) -> Option<Vec2> {
        self.glyph_uv
    }
}
