//! The finalize step: baking per-vertex normals and tangents.
//!
//! Baking walks the accumulated index buffer one triangle at a time,
//! computes each face's normal and tangent frame, sums the face vectors
//! into per-vertex accumulators (unweighted; a vertex shared by k faces
//! receives the plain sum of k contributions), then normalizes every
//! accumulator so the result is an average direction rather than a
//! magnitude-weighted one.

use crate::math::{face_normal, Vec3, Vec4};

use super::builder::{MeshBuilder, Vertex};
use super::error::BakeError;
use super::tangent::{pad_tangent, tangent_bitangent};

/// One fully baked vertex, laid out for direct GPU upload (48 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BakedVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
    /// Unit smoothed normal.
    pub normal: [f32; 3],
    /// Unit tangent direction plus handedness sign in w.
    pub tangent: [f32; 4],
}

/// A finalized mesh: deduplicated vertices, triangle indices, and baked
/// per-vertex normals and tangents in parallel arrays.
///
/// Produced by [`MeshBuilder::bake`] or [`MeshBuilder::try_bake`] and
/// read-only thereafter. All per-vertex arrays share the same indexing as
/// [`BakedMesh::vertices`].
pub struct BakedMesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    normals: Vec<Vec3>,
    tangents: Vec<Vec4>,
}

impl MeshBuilder {
    /// Consume the builder and bake per-vertex normals and tangents.
    ///
    /// Degenerate geometry (zero-area triangles, zero-UV-area triangles,
    /// accumulators that cancel to zero) is reported through `log::warn!`
    /// but the arithmetic is left untouched, so such inputs produce NaN
    /// components in the output. Use [`MeshBuilder::try_bake`] to reject
    /// defective geometry instead.
    pub fn bake(self) -> BakedMesh {
        let (mesh, _defect) = bake_with_report(self);
        mesh
    }

    /// Consume the builder and bake, failing on the first geometry defect.
    pub fn try_bake(self) -> Result<BakedMesh, BakeError> {
        let (mesh, defect) = bake_with_report(self);
        match defect {
            Some(error) => Err(error),
            None => Ok(mesh),
        }
    }
}

fn bake_with_report(builder: MeshBuilder) -> (BakedMesh, Option<BakeError>) {
    let (vertices, indices) = builder.into_parts();
    let count = vertices.len();

    let mut normals = vec![Vec3::zeros(); count];
    let mut tangents = vec![Vec3::zeros(); count];
    let mut bitangents = vec![Vec3::zeros(); count];
    let mut defect: Option<BakeError> = None;

    for (face, tri) in indices.chunks_exact(3).enumerate() {
        let v0 = &vertices[tri[0] as usize];
        let v1 = &vertices[tri[1] as usize];
        let v2 = &vertices[tri[2] as usize];

        let normal = face_normal(v0.position, v1.position, v2.position);
        if !normal.iter().all(|c| c.is_finite()) {
            log::warn!("triangle {face} has zero area; its normal is not finite");
            defect.get_or_insert(BakeError::DegenerateTriangle { face });
        }

        let (tangent, bitangent) = tangent_bitangent(v0, v1, v2);
        if !tangent.iter().all(|c| c.is_finite()) {
            log::warn!("triangle {face} has zero texture-space area; its tangent is not finite");
            defect.get_or_insert(BakeError::DegenerateUv { face });
        }

        for &index in tri {
            let i = index as usize;
            normals[i] += normal;
            tangents[i] += tangent;
            bitangents[i] += bitangent;
        }
    }

    for i in 0..count {
        if normals[i] == Vec3::zeros() || tangents[i] == Vec3::zeros() {
            log::warn!("vertex {i}: accumulated face vectors cancel to zero");
            defect.get_or_insert(BakeError::ZeroAccumulation { vertex: i });
        }
        normals[i] = normals[i].normalize();
        tangents[i] = tangents[i].normalize();
        bitangents[i] = bitangents[i].normalize();
    }

    let tangents = (0..count)
        .map(|i| pad_tangent(normals[i], tangents[i], bitangents[i]))
        .collect();

    let mesh = BakedMesh {
        vertices,
        indices,
        normals,
        tangents,
    };
    (mesh, defect)
}

impl BakedMesh {
    /// Deduplicated vertices in first-seen order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangle index buffer; length is a multiple of 3.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Unit smoothed normals, parallel to [`BakedMesh::vertices`].
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Unit tangents with handedness sign in w, parallel to
    /// [`BakedMesh::vertices`].
    pub fn tangents(&self) -> &[Vec4] {
        &self.tangents
    }

    /// Number of unique vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Assemble the parallel arrays into one interleaved record.
    pub fn vertex(&self, index: usize) -> Option<BakedVertex> {
        let v = self.vertices.get(index)?;
        Some(BakedVertex {
            position: v.position.into(),
            uv: v.uv.into(),
            normal: self.normals[index].into(),
            tangent: self.tangents[index].into(),
        })
    }

    /// Iterate over interleaved baked vertices.
    pub fn baked_vertices(&self) -> impl Iterator<Item = BakedVertex> + '_ {
        (0..self.vertices.len()).filter_map(|i| self.vertex(i))
    }

    /// Interleaved vertex buffer bytes (48-byte stride), ready for upload.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        let packed: Vec<BakedVertex> = self.baked_vertices().collect();
        bytemuck::cast_slice(&packed).to_vec()
    }

    /// Index buffer bytes as little-endian u32.
    pub fn index_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.indices).to_vec()
    }
}

impl std::fmt::Debug for BakedMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BakedMesh")
            .field("vertex_count", &self.vertex_count())
            .field("index_count", &self.index_count())
            .field("triangle_count", &self.triangle_count())
            .finish()
    }
}
