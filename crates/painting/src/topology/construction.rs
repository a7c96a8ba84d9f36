//! Construction of SurfaceEdges from triangle lists.

use std::collections::HashMap;

use super::types::{Edge, EdgeId, TopologyError, VertexId};
use super::SurfaceEdges;

impl SurfaceEdges {
    /// Build edge topology from a triangle index list
    ///
    /// Every distinct undirected vertex pair becomes one edge. Edges are
    /// registered on both endpoints in the order triangles are walked.
    /// Degenerate edges (both endpoints equal) are skipped so no vertex
    /// ever lists itself as a neighbor.
    pub fn from_triangles(vertex_count: usize, indices: &[u32]) -> Result<Self, TopologyError> {
        if indices.len() % 3 != 0 {
            return Err(TopologyError::IndexCount(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(TopologyError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        let mut edges: Vec<Edge> = Vec::new();
        let mut vertex_edges: Vec<Vec<EdgeId>> = vec![Vec::new(); vertex_count];
        let mut edge_map: HashMap<(VertexId, VertexId), EdgeId> = HashMap::new();

        for tri in indices.chunks_exact(3) {
            let v0 = VertexId(tri[0]);
            let v1 = VertexId(tri[1]);
            let v2 = VertexId(tri[2]);

            for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
                if a == b {
                    continue;
                }
                let key = if a < b { (a, b) } else { (b, a) };
                if edge_map.contains_key(&key) {
                    continue;
                }

                let id = EdgeId(edges.len() as u32);
                edges.push(Edge {
                    id,
                    vertices: [a, b],
                });
                edge_map.insert(key, id);
                vertex_edges[a.0 as usize].push(id);
                vertex_edges[b.0 as usize].push(id);
            }
        }

        Ok(Self {
            vertex_count,
            face_count: indices.len() / 3,
            edges,
            vertex_edges,
            edge_map,
        })
    }
}
