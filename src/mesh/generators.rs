//! Mesh generators for simple shapes.
//!
//! Unlike hand-rolled vertex arrays, these run through [`MeshBuilder`], so
//! shared vertices are deduplicated and normals/tangents come out baked.

use crate::math::{Vec2, Vec3};

use super::bake::BakedMesh;
use super::builder::{MeshBuilder, Vertex};

/// Generate a single quad on the XY plane, facing +Z.
///
/// The quad is centered at the origin with the given half-width and
/// half-height. UV coordinates go from (0,0) at top-left to (1,1) at
/// bottom-right.
pub fn generate_quad(half_width: f32, half_height: f32) -> BakedMesh {
    let mut builder = MeshBuilder::new();
    builder.add_quad(
        Vertex::new(Vec3::new(-half_width, -half_height, 0.0), Vec2::new(0.0, 1.0)),
        Vertex::new(Vec3::new(half_width, -half_height, 0.0), Vec2::new(1.0, 1.0)),
        Vertex::new(Vec3::new(-half_width, half_height, 0.0), Vec2::new(0.0, 0.0)),
        Vertex::new(Vec3::new(half_width, half_height, 0.0), Vec2::new(1.0, 0.0)),
    );
    builder.bake()
}

/// Generate a subdivided plane on the XY plane, facing +Z.
///
/// The plane is centered at the origin and split into
/// `segments_x * segments_y` quad cells. UVs are continuous over the whole
/// plane, so vertices on shared cell edges deduplicate and the result has
/// exactly `(segments_x + 1) * (segments_y + 1)` vertices.
///
/// # Arguments
///
/// * `half_width` - Half the plane extent along X
/// * `half_height` - Half the plane extent along Y
/// * `segments_x` - Number of cells along X (at least 1)
/// * `segments_y` - Number of cells along Y (at least 1)
pub fn generate_plane(
    half_width: f32,
    half_height: f32,
    segments_x: u32,
    segments_y: u32,
) -> BakedMesh {
    let corner = |i: u32, j: u32| {
        let fx = i as f32 / segments_x as f32;
        let fy = j as f32 / segments_y as f32;
        Vertex::new(
            Vec3::new(
                -half_width + 2.0 * half_width * fx,
                -half_height + 2.0 * half_height * fy,
                0.0,
            ),
            Vec2::new(fx, 1.0 - fy),
        )
    };

    let mut builder = MeshBuilder::new();
    for j in 0..segments_y {
        for i in 0..segments_x {
            builder.add_quad(
                corner(i, j),
                corner(i + 1, j),
                corner(i, j + 1),
                corner(i + 1, j + 1),
            );
        }
    }
    builder.bake()
}
