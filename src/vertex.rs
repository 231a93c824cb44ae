//! UI vertex layout

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// A UI vertex, used both for the flat stream and the curved output.
///
/// Only `position` is rewritten by curving; every other attribute is carried
/// through unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    pub position: Vec3,
    pub normal: Vec3,
    /// Tangent with handedness in `w`.
    pub tangent: [f32; 4],
    /// Linear RGBA.
    pub color: [f32; 4],
    pub uv0: Vec2,
    pub uv1: Vec2,
}

impl Default for UiVertex {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            normal: Vec3::NEG_Z,
            tangent: [1.0, 0.0, 0.0, -1.0],
            color: [1.0; 4],
            uv0: Vec2::ZERO,
            uv1: Vec2::ZERO,
        }
    }
}

impl UiVertex {
    pub fn new(position: Vec3, color: [f32; 4], uv0: Vec2) -> Self {
        Self {
            position,
            color,
            uv0,
            ..Default::default()
        }
    }

    /// Copy of this vertex with a different position.
    #[inline]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}
