//! Per-face tangent frame computation for normal mapping.

use crate::math::{Vec3, Vec4};

use super::builder::Vertex;

/// Solve the per-face tangent and bitangent from positions and uvs.
///
/// Relates the triangle's object-space edge vectors to its texture-space
/// edge vectors through the standard UV-derivative 2x2 system and returns
/// both solutions normalized to unit length.
///
/// A degenerate texture-space triangle (zero UV area, e.g. duplicate uvs)
/// makes the system singular; the division produces non-finite values that
/// propagate into the result.
pub fn tangent_bitangent(v0: &Vertex, v1: &Vertex, v2: &Vertex) -> (Vec3, Vec3) {
    let s1 = v1.uv.x - v0.uv.x;
    let t1 = v1.uv.y - v0.uv.y;
    let s2 = v2.uv.x - v0.uv.x;
    let t2 = v2.uv.y - v0.uv.y;
    let q1 = v1.position - v0.position;
    let q2 = v2.position - v0.position;

    let det = 1.0 / (s1 * t2 - s2 * t1);

    let tangent = (q1 * t2 - q2 * t1) * det;
    let bitangent = (q2 * s1 - q1 * s2) * det;
    (tangent.normalize(), bitangent.normalize())
}

/// Extend a tangent with its handedness sign.
///
/// The w component is +1.0 when `dot(cross(normal, tangent), bitangent)` is
/// strictly positive and -1.0 otherwise; a sign of exactly 0.0 maps to -1.0.
/// Shaders reconstruct the bitangent as `cross(normal, tangent.xyz) * w`.
pub fn pad_tangent(normal: Vec3, tangent: Vec3, bitangent: Vec3) -> Vec4 {
    let sign = normal.cross(&tangent).dot(&bitangent);
    let w = if sign > 0.0 { 1.0 } else { -1.0 };
    Vec4::new(tangent.x, tangent.y, tangent.z, w)
}
