//! Mesh data structures produced by the tessellation stages.

use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Vec2};

/// An indexed triangle mesh with per-vertex positions and, once the texture
/// stage has run, texture coordinates.
///
/// All attribute vectors share one index space: `texture_coordinates` is
/// either empty or the same length as `positions`, and every index is less
/// than the vertex count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, in the ellipsoid's cartesian frame.
    pub positions: Vec<DVec3>,
    /// Normalized tangent-plane texture coordinates, index-aligned with
    /// `positions`. Empty until the texture stage runs.
    pub texture_coordinates: Vec<Vec2>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flatten the mesh into an interleaved vertex buffer for GPU upload.
    ///
    /// Vertices without texture coordinates get `(0, 0)`.
    pub fn vertex_buffer(&self) -> Vec<PolygonVertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| PolygonVertex {
                position: p.as_vec3().to_array(),
                uv: self
                    .texture_coordinates
                    .get(i)
                    .copied()
                    .unwrap_or(Vec2::ZERO)
                    .to_array(),
            })
            .collect()
    }

    /// Narrow the index list to 16 bits for GPU upload.
    ///
    /// # Panics
    ///
    /// Panics if any index exceeds `u16::MAX`; partition the mesh first.
    pub fn index_buffer_u16(&self) -> Vec<u16> {
        self.indices
            .iter()
            .map(|&i| u16::try_from(i).expect("index exceeds u16 range; partition the mesh first"))
            .collect()
    }
}

/// Interleaved vertex format handed off to the renderer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PolygonVertex {
    /// Position, truncated to f32 for upload.
    pub position: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

/// An ordered set of meshes, each independently indexable with 16-bit
/// indices.
///
/// Produced once per tessellation pass; ownership transfers to the caller,
/// which replaces any prior set atomically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartitionedMeshSet {
    meshes: Vec<Mesh>,
}

impl PartitionedMeshSet {
    /// Wrap an ordered list of meshes.
    pub fn from_meshes(meshes: Vec<Mesh>) -> Self {
        Self { meshes }
    }

    /// Number of sub-meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns true if the set holds no meshes.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// The sub-mesh at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Mesh> {
        self.meshes.get(index)
    }

    /// Iterate over the sub-meshes in order.
    pub fn iter(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes.iter()
    }

    /// Total triangle count across all sub-meshes.
    pub fn total_triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }

    /// Total vertex count across all sub-meshes, counting duplicated
    /// boundary vertices once per sub-mesh.
    pub fn total_vertex_count(&self) -> usize {
        self.meshes.iter().map(Mesh::vertex_count).sum()
    }
}

impl IntoIterator for PartitionedMeshSet {
    type Item = Mesh;
    type IntoIter = std::vec::IntoIter<Mesh>;

    fn into_iter(self) -> Self::IntoIter {
        self.meshes.into_iter()
    }
}
