//! Mesh building and normal/tangent baking.
//!
//! This module provides:
//! - [`Vertex`] - position + texture coordinate input record
//! - [`MeshBuilder`] - accumulates triangles/quads with exact-match dedup
//! - [`BakedMesh`] / [`BakedVertex`] - finalized indexed output
//! - [`tangent`] - per-face tangent frame helpers
//! - [`generators`] - simple shapes built through the builder

mod bake;
mod builder;
mod error;
pub mod generators;
pub mod tangent;

pub use bake::{BakedMesh, BakedVertex};
pub use builder::{MeshBuilder, Vertex};
pub use error::BakeError;
