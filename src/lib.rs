//! # Meshbake
//!
//! Mesh-geometry baking for offline asset pipelines.
//!
//! A caller feeds position + texture-coordinate vertices into a
//! [`MeshBuilder`] one triangle or quad at a time. The builder deduplicates
//! exact-match vertices into an indexed buffer; a final bake step derives
//! per-vertex smoothed normals and 4-component tangents (direction plus
//! handedness sign) by averaging per-face contributions:
//!
//! - [`MeshBuilder`] - vertex accumulation with automatic deduplication
//! - [`BakedMesh`] / [`BakedVertex`] - indexed output with normals and tangents
//! - [`mesh::generators`] - simple shapes built through the builder
//!
//! No file format, CLI, or GPU surface lives here; exporters and renderer
//! upload paths consume the baked parallel arrays directly.

pub mod math;
pub mod mesh;

pub use mesh::{BakeError, BakedMesh, BakedVertex, MeshBuilder, Vertex};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
