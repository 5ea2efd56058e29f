//! Math type aliases and geometry helpers.
//!
//! All baking math is f32. Vector arithmetic, dot/cross products, and
//! normalization come from nalgebra; `cross` is the canonical right-handed
//! formula and `normalize` has no zero guard (the zero vector yields NaN,
//! which callers of the baking API must avoid by not submitting zero-area
//! triangles).

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// Unit face normal of the triangle `(p0, p1, p2)`.
///
/// Computed as `normalize(cross(p1 - p0, p2 - p0))`: counter-clockwise
/// winding viewed from the front face yields the outward normal. A zero-area
/// triangle produces a NaN vector.
pub fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(&(p2 - p0)).normalize()
}
