//! Topology extraction from Bevy meshes.

use bevy::mesh::{Indices, Mesh, PrimitiveTopology};

use super::types::TopologyError;
use super::{MeshTopology, SurfaceEdges};

/// A Bevy mesh is a single surface (index 0)
impl MeshTopology for Mesh {
    fn surface_count(&self) -> usize {
        1
    }

    fn surface_topology(&self, surface_index: usize) -> Result<SurfaceEdges, TopologyError> {
        if surface_index != 0 {
            return Err(TopologyError::SurfaceOutOfRange {
                index: surface_index,
                count: 1,
            });
        }
        if self.primitive_topology() != PrimitiveTopology::TriangleList {
            return Err(TopologyError::UnsupportedPrimitive);
        }

        let vertex_count = self
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .ok_or(TopologyError::NoPositions)?
            .len();

        let indices: Vec<u32> = match self.indices() {
            Some(Indices::U16(idx)) => idx.iter().map(|&i| i as u32).collect(),
            Some(Indices::U32(idx)) => idx.to_vec(),
            None => return Err(TopologyError::NoIndices),
        };

        SurfaceEdges::from_triangles(vertex_count, &indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;

    fn create_test_triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]],
        );
        mesh.insert_indices(Indices::U32(vec![0, 1, 2]));
        mesh
    }

    #[test]
    fn test_bevy_mesh_topology() {
        let mesh = create_test_triangle_mesh();
        let topo = mesh.surface_topology(0).unwrap();
        assert_eq!(topo.vertex_count(), 3);
        assert_eq!(topo.edge_count(), 3);
        assert!(mesh.surface_topology(1).is_err());
    }

    #[test]
    fn test_bevy_mesh_without_indices() {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0f32, 0.0, 0.0]; 3]);
        assert_eq!(
            mesh.surface_topology(0).unwrap_err(),
            TopologyError::NoIndices
        );
    }
}
