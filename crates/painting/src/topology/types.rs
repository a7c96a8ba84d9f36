//! Type definitions for surface edge topology.

/// Type-safe vertex identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

/// Type-safe edge identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub u32);

/// An undirected edge between two distinct vertices
///
/// Endpoints are stored in the order they were first encountered while
/// walking the triangle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub vertices: [VertexId; 2],
}

impl Edge {
    /// The endpoint that is not `vertex`
    pub fn other(&self, vertex: VertexId) -> VertexId {
        if self.vertices[0] == vertex {
            self.vertices[1]
        } else {
            self.vertices[0]
        }
    }
}

/// Errors that can occur while extracting surface topology
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Surface index {index} out of range ({count} surfaces)")]
    SurfaceOutOfRange { index: usize, count: usize },
    #[error("Mesh has no position attribute")]
    NoPositions,
    #[error("Mesh has no indices")]
    NoIndices,
    #[error("Mesh primitive is not a triangle list")]
    UnsupportedPrimitive,
    #[error("Index count {0} not divisible by 3")]
    IndexCount(usize),
    #[error("Index {index} out of range (vertex count {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
