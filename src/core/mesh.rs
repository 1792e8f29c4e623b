use serde::{Deserialize, Serialize};

use crate::core::material::Material;

/// A single vertex of a trim data block, as produced by the chunk parser.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, normal, uv }
    }
}

/// One triangulated vertex/index block sharing a single material.
///
/// `indices` are local to `vertices` and are read three at a time; a
/// well-formed block has `indices.len() % 3 == 0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubMesh {
    pub material_name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SubMesh {
    pub fn new(material_name: impl Into<String>, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            material_name: material_name.into(),
            vertices,
            indices,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_faces(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the complete triangles of the block in order.
    /// Trailing indices that do not form a triangle are skipped.
    pub fn faces(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}

/// A parsed model: its sub-meshes in draw order and its materials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub sub_meshes: Vec<SubMesh>,
    #[serde(default)]
    pub materials: Vec<Material>,
}

impl Model {
    pub fn new(sub_meshes: Vec<SubMesh>, materials: Vec<Material>) -> Self {
        Self { sub_meshes, materials }
    }

    pub fn num_vertices(&self) -> usize {
        self.sub_meshes.iter()
            .map(SubMesh::num_vertices)
            .sum()
    }
}
