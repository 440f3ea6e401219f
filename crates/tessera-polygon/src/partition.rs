//! Partitioning meshes to fit 16-bit index buffers.

use hashbrown::HashMap;

use crate::mesh::{Mesh, PartitionedMeshSet};

/// Maximum number of distinct vertices one sub-mesh may reference: the full
/// range of a 16-bit index (0 through 65535).
pub const MAX_VERTICES_PER_PARTITION: usize = 1 << 16;

/// Split a mesh into sub-meshes whose indices fit an unsigned 16-bit type.
///
/// A mesh already within the limit passes through as a single-element set.
/// Otherwise triangles are processed in original order, greedily filling the
/// current group until the next triangle would push its distinct vertex count
/// past the limit, then starting a new group. Indices are remapped locally
/// per group; a vertex referenced from triangles in different groups is
/// duplicated into each. Triangles are never split across groups.
pub fn fit_to_u16_indices(mesh: Mesh) -> PartitionedMeshSet {
    if mesh.vertex_count() <= MAX_VERTICES_PER_PARTITION {
        return PartitionedMeshSet::from_meshes(vec![mesh]);
    }

    let has_texture = !mesh.texture_coordinates.is_empty();
    let mut meshes: Vec<Mesh> = Vec::new();
    let mut current = Mesh::new();
    let mut remap: HashMap<u32, u32> = HashMap::new();

    for triangle in mesh.indices.chunks_exact(3) {
        let new_vertices = triangle
            .iter()
            .filter(|&&index| !remap.contains_key(&index))
            .count();
        if current.vertex_count() + new_vertices > MAX_VERTICES_PER_PARTITION {
            meshes.push(std::mem::take(&mut current));
            remap.clear();
        }

        for &index in triangle {
            let local = *remap.entry(index).or_insert_with(|| {
                current.positions.push(mesh.positions[index as usize]);
                if has_texture {
                    current
                        .texture_coordinates
                        .push(mesh.texture_coordinates[index as usize]);
                }
                (current.positions.len() - 1) as u32
            });
            current.indices.push(local);
        }
    }

    if !current.indices.is_empty() {
        meshes.push(current);
    }

    PartitionedMeshSet::from_meshes(meshes)
}
