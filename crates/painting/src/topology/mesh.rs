//! In-memory multi-surface triangle mesh.

use glam::Vec3;

use super::types::TopologyError;
use super::{MeshTopology, SurfaceEdges};
use crate::paint::VertexBuffer;

/// Default vertex color for new surfaces (opaque white)
pub const DEFAULT_VERTEX_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One surface of a triangle mesh with its paintable vertex colors
#[derive(Debug, Clone, Default)]
pub struct MeshSurface {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub colors: Vec<[f32; 4]>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

impl MeshSurface {
    /// Create a surface with white vertex colors and no normals
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let colors = vec![DEFAULT_VERTEX_COLOR; positions.len()];
        Self {
            positions,
            normals: Vec::new(),
            colors,
            indices,
        }
    }

    pub fn with_normals(mut self, normals: Vec<Vec3>) -> Self {
        self.normals = normals;
        self
    }

    pub fn with_colors(mut self, colors: Vec<[f32; 4]>) -> Self {
        self.colors = colors;
        self
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Borrow the surface as a vertex buffer for the paint pass
    pub fn vertex_buffer(&self) -> VertexBuffer<'_> {
        VertexBuffer::new(&self.positions, &self.normals, &self.colors)
    }

    /// Recompute smooth vertex normals from area-weighted face normals
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let (Some(&p0), Some(&p1), Some(&p2)) = (
                self.positions.get(i0),
                self.positions.get(i1),
                self.positions.get(i2),
            ) else {
                continue;
            };
            // Unnormalized cross product weights by triangle area
            let face_normal = (p1 - p0).cross(p2 - p0);
            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }
        self.normals = normals.into_iter().map(Vec3::normalize_or_zero).collect();
    }
}

/// A mesh resource made of independent triangle-list surfaces
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    surfaces: Vec<MeshSurface>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface, returning its index
    pub fn add_surface(&mut self, surface: MeshSurface) -> usize {
        self.surfaces.push(surface);
        self.surfaces.len() - 1
    }

    pub fn surface(&self, index: usize) -> Option<&MeshSurface> {
        self.surfaces.get(index)
    }

    pub fn surface_mut(&mut self, index: usize) -> Option<&mut MeshSurface> {
        self.surfaces.get_mut(index)
    }

    pub fn surfaces(&self) -> &[MeshSurface] {
        &self.surfaces
    }
}

impl MeshTopology for TriangleMesh {
    fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    fn surface_topology(&self, surface_index: usize) -> Result<SurfaceEdges, TopologyError> {
        let surface = self
            .surfaces
            .get(surface_index)
            .ok_or(TopologyError::SurfaceOutOfRange {
                index: surface_index,
                count: self.surfaces.len(),
            })?;
        SurfaceEdges::from_triangles(surface.vertex_count(), &surface.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_quad() -> MeshSurface {
        MeshSurface::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, -1.0),
            ],
            vec![0, 1, 2, 1, 3, 2],
        )
    }

    #[test]
    fn test_new_surface_defaults() {
        let surface = flat_quad();
        assert_eq!(surface.vertex_count(), 4);
        assert_eq!(surface.colors, vec![DEFAULT_VERTEX_COLOR; 4]);
        assert!(surface.normals.is_empty());
    }

    #[test]
    fn test_compute_normals_flat() {
        let mut surface = flat_quad();
        surface.compute_normals();
        assert_eq!(surface.normals.len(), 4);
        for n in &surface.normals {
            assert!((*n - Vec3::Y).length() < 1e-5, "normal {n:?}");
        }
    }

    #[test]
    fn test_mesh_topology_by_surface() {
        let mut mesh = TriangleMesh::new();
        let idx = mesh.add_surface(flat_quad());
        assert_eq!(idx, 0);
        assert_eq!(mesh.surface_count(), 1);

        let topo = mesh.surface_topology(0).unwrap();
        assert_eq!(topo.edge_count(), 5);

        assert_eq!(
            mesh.surface_topology(1).unwrap_err(),
            TopologyError::SurfaceOutOfRange { index: 1, count: 1 }
        );
    }

    #[test]
    fn test_broken_surface_reports_error() {
        let mut mesh = TriangleMesh::new();
        mesh.add_surface(MeshSurface::new(vec![Vec3::ZERO; 2], vec![0, 1, 2]));
        assert!(matches!(
            mesh.surface_topology(0),
            Err(TopologyError::IndexOutOfRange { index: 2, .. })
        ));
    }
}
