//! Surface edge topology
//!
//! Provides per-vertex incident edges and edge endpoints for one mesh
//! surface. This is the adjacency a triangle soup does not carry on its own,
//! and the input the neighbor cache is built from.

mod construction;
mod mesh;
mod types;

#[cfg(feature = "bevy")]
mod bevy_mesh;

use std::collections::HashMap;

pub use mesh::{MeshSurface, TriangleMesh};
pub use types::{Edge, EdgeId, TopologyError, VertexId};

/// Source of per-surface edge topology
///
/// Implemented by mesh resources that can enumerate the edges of one of
/// their surfaces.
pub trait MeshTopology {
    /// Number of surfaces in the mesh resource
    fn surface_count(&self) -> usize;

    /// Extract edge topology for one surface
    fn surface_topology(&self, surface_index: usize) -> Result<SurfaceEdges, TopologyError>;
}

/// Edge topology of a single surface
#[derive(Debug, Clone)]
pub struct SurfaceEdges {
    pub(crate) vertex_count: usize,
    pub(crate) face_count: usize,
    pub(crate) edges: Vec<Edge>,
    /// Incident edges per vertex, in discovery order
    pub(crate) vertex_edges: Vec<Vec<EdgeId>>,
    /// Map from sorted vertex pair to edge
    pub(crate) edge_map: HashMap<(VertexId, VertexId), EdgeId>,
}

impl SurfaceEdges {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of triangles the topology was built from
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Number of unique edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get all edges
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get edge by ID
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0 as usize)
    }

    /// Edges incident to a vertex (empty for unknown vertices)
    pub fn vertex_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.vertex_edges
            .get(vertex.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Both endpoints of an edge
    pub fn edge_vertices(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edge(id).map(|e| (e.vertices[0], e.vertices[1]))
    }

    /// Find the edge connecting two vertices, in either direction
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let key = if a < b { (a, b) } else { (b, a) };
        self.edge_map.get(&key).copied()
    }
}
