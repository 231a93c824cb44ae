//! Indexed vertex buffer used as both flat source and curved sink

use glam::{Vec2, Vec3};

use crate::curve::{VertexSink, VertexStream};
use crate::vertex::UiVertex;

/// An indexed UI mesh.
///
/// Holds the flat geometry of an element until it is curved, then receives
/// the curved geometry in its place.
#[derive(Debug, Clone, Default)]
pub struct VertexBuffer {
    pub vertices: Vec<UiVertex>,
    pub indices: Vec<u32>,
}

impl VertexBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Calculate index count
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Calculate triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get vertex data as bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get index data as bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Create a single quad spanning `min`..`max` on the z = 0 plane
    pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Self {
        let mut mesh = VertexBuffer::new();
        let quad = [
            UiVertex::new(Vec3::new(min.x, min.y, 0.0), color, Vec2::new(0.0, 0.0)),
            UiVertex::new(Vec3::new(min.x, max.y, 0.0), color, Vec2::new(0.0, 1.0)),
            UiVertex::new(Vec3::new(max.x, max.y, 0.0), color, Vec2::new(1.0, 1.0)),
            UiVertex::new(Vec3::new(max.x, min.y, 0.0), color, Vec2::new(1.0, 0.0)),
        ];
        mesh.add_quad(&quad);
        mesh
    }

    /// Create a panel spanning `min`..`max`, split into a grid of cells
    pub fn panel(min: Vec2, max: Vec2, columns: u32, rows: u32, color: [f32; 4]) -> Self {
        let mut mesh = VertexBuffer::new();

        let columns = columns.max(1);
        let rows = rows.max(1);
        let step = (max - min) / Vec2::new(columns as f32, rows as f32);

        // Generate vertices
        for row in 0..=rows {
            for column in 0..=columns {
                let uv = Vec2::new(column as f32 / columns as f32, row as f32 / rows as f32);
                let position = min + step * Vec2::new(column as f32, row as f32);
                mesh.vertices.push(UiVertex::new(position.extend(0.0), color, uv));
            }
        }

        // Generate indices
        for row in 0..rows {
            for column in 0..columns {
                let current = row * (columns + 1) + column;
                let next = current + columns + 1;

                mesh.indices.extend_from_slice(&[
                    current,
                    next,
                    next + 1,
                    next + 1,
                    current + 1,
                    current,
                ]);
            }
        }

        mesh
    }
}

impl VertexStream for VertexBuffer {
    /// Expand the indexed triangles into a flat stream.
    ///
    /// A triangle with an out-of-range index is dropped as a whole so the
    /// triangles after it stay aligned.
    fn fill_vertex_stream(&self, out: &mut Vec<UiVertex>) {
        out.reserve(self.indices.len());
        for triangle in self.indices.chunks_exact(3) {
            let corners = [
                self.vertices.get(triangle[0] as usize),
                self.vertices.get(triangle[1] as usize),
                self.vertices.get(triangle[2] as usize),
            ];
            match corners {
                [Some(a), Some(b), Some(c)] => out.extend_from_slice(&[*a, *b, *c]),
                _ => log::warn!(
                    "Skipping triangle {:?}: index out of range for {} vertices",
                    triangle,
                    self.vertices.len()
                ),
            }
        }
    }
}

impl VertexSink for VertexBuffer {
    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    fn add_quad(&mut self, quad: &[UiVertex; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(quad);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    fn add_triangle_stream(&mut self, vertices: &[UiVertex]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(vertices);
        self.indices
            .extend((0..vertices.len() as u32).map(|i| base + i));
    }
}
