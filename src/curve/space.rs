//! Coordinate spaces and the cylinder mapping

use glam::{Mat4, Vec2, Vec3};

use crate::DEG_TO_RAD;

/// Matrices needed to move a vertex from its owner into canvas space and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpace {
    pub canvas_to_world: Mat4,
    pub world_to_canvas: Mat4,
    pub owner_to_world: Mat4,
    pub world_to_owner: Mat4,
}

impl CanvasSpace {
    pub fn new(owner_to_world: Mat4, canvas_to_world: Mat4) -> Self {
        Self {
            canvas_to_world,
            world_to_canvas: canvas_to_world.inverse(),
            owner_to_world,
            world_to_owner: owner_to_world.inverse(),
        }
    }

    /// Owner-local point to canvas-local point.
    #[inline]
    pub fn owner_to_canvas(&self, position: Vec3) -> Vec3 {
        self.world_to_canvas
            .transform_point3(self.owner_to_world.transform_point3(position))
    }

    /// Canvas-local point back to owner-local point.
    #[inline]
    pub fn canvas_to_owner(&self, position: Vec3) -> Vec3 {
        self.world_to_owner
            .transform_point3(self.canvas_to_world.transform_point3(position))
    }
}

/// Map a canvas-local position onto the canvas cylinder.
///
/// `angle` is the arc of the full canvas width in degrees and `radius` the
/// cylinder radius for that arc. Points on the canvas plane (`z == 0`) land
/// on the nominal cylinder; points in front of or behind it are pushed out
/// radially. The operation order is kept as is so results stay bit-stable.
#[inline]
pub fn curve_position(mut position: Vec3, angle: i32, radius: f32, canvas_size: Vec2) -> Vec3 {
    if angle != 0 {
        let theta = (position.x / canvas_size.x) * angle as f32 * DEG_TO_RAD;
        let radius = radius + position.z;
        position.x = theta.sin() * radius;
        position.z += theta.cos() * radius - radius;
    }
    position
}
