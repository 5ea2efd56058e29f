//! Error types for strict baking.

/// Geometry defects detected while baking normals and tangents.
///
/// Returned by [`MeshBuilder::try_bake`](super::MeshBuilder::try_bake); the
/// non-strict [`MeshBuilder::bake`](super::MeshBuilder::bake) only logs these
/// and lets the NaN arithmetic run its course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BakeError {
    /// A triangle has zero area, so its face normal is undefined.
    DegenerateTriangle {
        /// Zero-based triangle index in submission order.
        face: usize,
    },
    /// A triangle covers zero texture-space area, so the tangent system is
    /// singular.
    DegenerateUv {
        /// Zero-based triangle index in submission order.
        face: usize,
    },
    /// A vertex's accumulated face contributions cancel to the zero vector.
    ZeroAccumulation {
        /// Vertex index in the deduplicated vertex list.
        vertex: usize,
    },
}

impl std::fmt::Display for BakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateTriangle { face } => {
                write!(f, "triangle {face} has zero area")
            }
            Self::DegenerateUv { face } => {
                write!(f, "triangle {face} has zero texture-space area")
            }
            Self::ZeroAccumulation { vertex } => {
                write!(f, "vertex {vertex}: accumulated face vectors cancel to zero")
            }
        }
    }
}

impl std::error::Error for BakeError {}
