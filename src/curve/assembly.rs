//! Handing curved vertices to the renderer

use crate::vertex::UiVertex;

/// Receiver of curved geometry.
pub trait VertexSink {
    /// Drop all geometry currently held.
    fn clear(&mut self);

    /// Add one quad; vertices are in winding order.
    fn add_quad(&mut self, quad: &[UiVertex; 4]);

    /// Add a triangle list (three vertices per triangle).
    fn add_triangle_stream(&mut self, vertices: &[UiVertex]);
}

/// How a curved stream was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTopology {
    /// Number of quads submitted
    Quads(usize),
    /// Number of vertices submitted as a triangle stream
    Triangles(usize),
}

/// Clear `sink` and submit `vertices` to it.
///
/// A vertex count divisible by 4 is submitted as consecutive quads, anything
/// else as a raw triangle stream. The rule is purely count based; a triangle
/// list of 12 vertices is submitted as 3 quads.
pub fn submit_curved<S: VertexSink + ?Sized>(
    vertices: &[UiVertex],
    sink: &mut S,
) -> OutputTopology {
    sink.clear();

    if vertices.len() % 4 == 0 {
        let mut quads = 0;
        for chunk in vertices.chunks_exact(4) {
            let quad = [chunk[0], chunk[1], chunk[2], chunk[3]];
            sink.add_quad(&quad);
            quads += 1;
        }
        OutputTopology::Quads(quads)
    } else {
        sink.add_triangle_stream(vertices);
        OutputTopology::Triangles(vertices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[derive(Default)]
    struct RecordingSink {
        clears: usize,
        quads: Vec<[UiVertex; 4]>,
        triangles: Vec<UiVertex>,
    }

    impl VertexSink for RecordingSink {
        fn clear(&mut self) {
            self.clears += 1;
            self.quads.clear();
            self.triangles.clear();
        }

        fn add_quad(&mut self, quad: &[UiVertex; 4]) {
            self.quads.push(*quad);
        }

        fn add_triangle_stream(&mut self, vertices: &[UiVertex]) {
            self.triangles.extend_from_slice(vertices);
        }
    }

    fn vertices(count: usize) -> Vec<UiVertex> {
        (0..count)
            .map(|i| UiVertex::new(Vec3::new(i as f32, 0.0, 0.0), [1.0; 4], Vec2::ZERO))
            .collect()
    }

    #[test]
    fn test_multiple_of_four_submits_quads() {
        let verts = vertices(12);
        let mut sink = RecordingSink::default();
        let topology = submit_curved(&verts, &mut sink);

        assert_eq!(topology, OutputTopology::Quads(3));
        assert_eq!(sink.quads.len(), 3);
        assert!(sink.triangles.is_empty());
        for (i, quad) in sink.quads.iter().enumerate() {
            for (j, v) in quad.iter().enumerate() {
                assert_eq!(v.position.x, (i * 4 + j) as f32);
            }
        }
    }

    #[test]
    fn test_other_counts_submit_triangles() {
        let verts = vertices(9);
        let mut sink = RecordingSink::default();
        let topology = submit_curved(&verts, &mut sink);

        assert_eq!(topology, OutputTopology::Triangles(9));
        assert!(sink.quads.is_empty());
        assert_eq!(sink.triangles, verts);
    }

    #[test]
    fn test_sink_is_cleared_first() {
        let mut sink = RecordingSink::default();
        sink.add_triangle_stream(&vertices(3));
        submit_curved(&vertices(4), &mut sink);
        assert_eq!(sink.clears, 1);
        assert!(sink.triangles.is_empty());
        assert_eq!(sink.quads.len(), 1);
    }

    #[test]
    fn test_empty_stream_is_zero_quads() {
        let mut sink = RecordingSink::default();
        assert_eq!(submit_curved(&[], &mut sink), OutputTopology::Quads(0));
    }
}
