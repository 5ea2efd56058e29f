//! Vertex accumulation with automatic deduplication.

use std::collections::HashMap;

use crate::math::{Vec2, Vec3};

/// A mesh input vertex: position plus texture coordinate.
///
/// Equality is structural and exact: two vertices merge during accumulation
/// iff every float component compares equal. Near-duplicate floats are kept
/// as distinct vertices on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Object-space position.
    pub position: Vec3,
    /// Texture coordinate.
    pub uv: Vec2,
}

impl Vertex {
    /// Create a vertex from position and texture coordinate.
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }
}

/// Hash key over the exact bit patterns of a vertex's components.
///
/// -0.0 is folded into +0.0 so signed zeros merge exactly like `==` merges
/// them. NaN components never compare equal under `==`, so a vertex
/// containing NaN is outside the dedup contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([u32; 5]);

impl VertexKey {
    fn of(v: &Vertex) -> Self {
        fn bits(x: f32) -> u32 {
            if x == 0.0 { 0 } else { x.to_bits() }
        }
        Self([
            bits(v.position.x),
            bits(v.position.y),
            bits(v.position.z),
            bits(v.uv.x),
            bits(v.uv.y),
        ])
    }
}

/// Accumulates triangles and quads into a deduplicated indexed vertex list.
///
/// Vertices are stored in first-seen order; resubmitting a structurally
/// equal vertex appends the existing index (first match wins). After all
/// geometry is submitted, [`MeshBuilder::bake`] consumes the builder and
/// derives per-vertex normals and tangents.
///
/// # Example
///
/// ```
/// use meshbake::{MeshBuilder, Vertex};
/// use meshbake::math::{Vec2, Vec3};
///
/// let mut builder = MeshBuilder::new();
/// builder.add_triangle(
///     Vertex::new(Vec3::zeros(), Vec2::zeros()),
///     Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec2::new(1.0, 0.0)),
///     Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec2::new(0.0, 1.0)),
/// );
/// let baked = builder.bake();
/// assert_eq!(baked.indices(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    lookup: HashMap<VertexKey, u32>,
}

impl MeshBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one triangle corner, deduplicating against prior vertices.
    ///
    /// Returns the index the vertex was resolved to. The index is also
    /// appended to the index buffer, so three calls form one triangle;
    /// prefer [`MeshBuilder::add_triangle`] for whole faces.
    pub fn add_vertex(&mut self, v: Vertex) -> u32 {
        let next = self.vertices.len() as u32;
        let index = *self.lookup.entry(VertexKey::of(&v)).or_insert(next);
        if index == next {
            self.vertices.push(v);
        }
        self.indices.push(index);
        index
    }

    /// Append a triangle. Corner order fixes the winding: counter-clockwise
    /// viewed from the front face.
    pub fn add_triangle(&mut self, v0: Vertex, v1: Vertex, v2: Vertex) {
        self.add_vertex(v0);
        self.add_vertex(v1);
        self.add_vertex(v2);
    }

    /// Append a quad as two triangles: `(v0, v1, v2)` then `(v3, v2, v1)`.
    ///
    /// Both halves wind the same way, so a quad submitted counter-clockwise
    /// produces two front faces pointing in the same direction.
    pub fn add_quad(&mut self, v0: Vertex, v1: Vertex, v2: Vertex, v3: Vertex) {
        self.add_triangle(v0, v1, v2);
        self.add_triangle(v3, v2, v1);
    }

    /// Deduplicated vertices in first-seen order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangle index buffer; length is always a multiple of 3.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of unique vertices accumulated so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices accumulated so far.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of whole triangles accumulated so far.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if no geometry has been submitted.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub(super) fn into_parts(self) -> (Vec<Vertex>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> Vertex {
        Vertex::new(Vec3::new(x, y, z), Vec2::new(u, w))
    }

    #[test]
    fn test_dedup_idempotence() {
        let mut builder = MeshBuilder::new();
        let a = v(1.0, 2.0, 3.0, 0.5, 0.5);
        assert_eq!(builder.add_vertex(a), 0);
        assert_eq!(builder.add_vertex(a), 0);
        assert_eq!(builder.vertex_count(), 1);
        assert_eq!(builder.indices(), &[0, 0]);
    }

    #[test]
    fn test_same_position_different_uv_is_distinct() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(v(1.0, 2.0, 3.0, 0.0, 0.0));
        builder.add_vertex(v(1.0, 2.0, 3.0, 1.0, 0.0));
        assert_eq!(builder.vertex_count(), 2);
        assert_eq!(builder.indices(), &[0, 1]);
    }

    #[test]
    fn test_near_duplicate_floats_do_not_merge() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(v(1.0, 0.0, 0.0, 0.0, 0.0));
        builder.add_vertex(v(1.0 + f32::EPSILON, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(builder.vertex_count(), 2);
    }

    #[test]
    fn test_signed_zero_merges() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(v(0.0, 1.0, 2.0, 0.0, 0.0));
        builder.add_vertex(v(-0.0, 1.0, 2.0, -0.0, 0.0));
        assert_eq!(builder.vertex_count(), 1);
        assert_eq!(builder.indices(), &[0, 0]);
    }

    #[test]
    fn test_first_match_wins_order() {
        let mut builder = MeshBuilder::new();
        let a = v(0.0, 0.0, 0.0, 0.0, 0.0);
        let b = v(1.0, 0.0, 0.0, 1.0, 0.0);
        let c = v(0.0, 1.0, 0.0, 0.0, 1.0);
        builder.add_triangle(a, b, c);
        builder.add_triangle(b, c, a);
        assert_eq!(builder.vertices(), &[a, b, c]);
        assert_eq!(builder.indices(), &[0, 1, 2, 1, 2, 0]);
    }

    #[test]
    fn test_index_buffer_validity() {
        let mut builder = MeshBuilder::new();
        builder.add_triangle(
            v(0.0, 0.0, 0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0, 1.0, 0.0),
            v(0.0, 1.0, 0.0, 0.0, 1.0),
        );
        builder.add_quad(
            v(0.0, 0.0, 1.0, 0.0, 1.0),
            v(1.0, 0.0, 1.0, 1.0, 1.0),
            v(0.0, 1.0, 1.0, 0.0, 0.0),
            v(1.0, 1.0, 1.0, 1.0, 0.0),
        );
        assert_eq!(builder.index_count() % 3, 0);
        assert_eq!(builder.triangle_count(), 3);
        let count = builder.vertex_count() as u32;
        assert!(builder.indices().iter().all(|&i| i < count));
    }

    #[test]
    fn test_quad_split_and_winding() {
        let mut builder = MeshBuilder::new();
        builder.add_quad(
            v(0.0, 0.0, 0.0, 0.0, 1.0),
            v(1.0, 0.0, 0.0, 1.0, 1.0),
            v(0.0, 1.0, 0.0, 0.0, 0.0),
            v(1.0, 1.0, 0.0, 1.0, 0.0),
        );
        // (v0,v1,v2) then (v3,v2,v1), with v1/v2 deduplicated
        assert_eq!(builder.indices(), &[0, 1, 2, 3, 2, 1]);
        assert_eq!(builder.vertex_count(), 4);
    }
}
