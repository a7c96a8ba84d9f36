//! Per-vertex adjacency built from surface edge topology
//!
//! The neighbor map drives blur/sharpen blending and curvature masking.
//! It is built once per surface topology and read-only while painting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::topology::{MeshTopology, SurfaceEdges, VertexId};

static EMPTY_NEIGHBORS: NeighborMap = NeighborMap { lists: Vec::new() };

/// Dense vertex → adjacent vertices mapping, indexed by vertex id
///
/// A vertex connected to the same neighbor through several edges lists it
/// once per edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborMap {
    lists: Vec<Vec<u32>>,
}

impl NeighborMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with one empty neighbor list per vertex
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); vertex_count],
        }
    }

    /// Wrap precomputed neighbor lists
    pub fn from_lists(lists: Vec<Vec<u32>>) -> Self {
        Self { lists }
    }

    /// Append a neighbor to a vertex's list, growing the map if needed
    pub fn push_neighbor(&mut self, vertex: usize, neighbor: u32) {
        if vertex >= self.lists.len() {
            self.lists.resize_with(vertex + 1, Vec::new);
        }
        self.lists[vertex].push(neighbor);
    }

    /// Neighbors of a vertex; empty when the vertex has no entry
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> &[u32] {
        self.lists.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of vertex entries
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Iterate `(vertex, neighbors)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[u32])> {
        self.lists.iter().map(Vec::as_slice).enumerate()
    }
}

/// Build the neighbor map for one surface of a mesh
///
/// Returns an empty map when the mesh is missing or its topology cannot be
/// extracted; callers then treat every vertex as having no neighbors.
pub fn build_neighbor_cache<M>(mesh: Option<&M>, surface_index: usize) -> NeighborMap
where
    M: MeshTopology + ?Sized,
{
    let Some(mesh) = mesh else {
        warn!("build_neighbor_cache: no mesh for surface {}", surface_index);
        return NeighborMap::new();
    };

    match mesh.surface_topology(surface_index) {
        Ok(topology) => {
            let map = neighbors_from_topology(&topology);
            debug!(
                "build_neighbor_cache: surface {} -> {} vertices, {} edges",
                surface_index,
                map.vertex_count(),
                topology.edge_count()
            );
            map
        }
        Err(err) => {
            warn!(
                "build_neighbor_cache: topology extraction failed for surface {}: {}",
                surface_index, err
            );
            NeighborMap::new()
        }
    }
}

/// For every vertex, list the far endpoint of each incident edge
pub fn neighbors_from_topology(topology: &SurfaceEdges) -> NeighborMap {
    let mut map = NeighborMap::with_vertex_count(topology.vertex_count());
    for v in 0..topology.vertex_count() {
        let vertex = VertexId(v as u32);
        for &edge_id in topology.vertex_edges(vertex) {
            if let Some(edge) = topology.edge(edge_id) {
                map.push_neighbor(v, edge.other(vertex).0);
            }
        }
    }
    map
}

/// Neighbor maps cached per surface of one mesh
///
/// Maps are built on first use and kept until invalidated. Failed builds
/// are not cached so a later call can retry.
#[derive(Debug, Default)]
pub struct NeighborCache {
    maps: HashMap<usize, NeighborMap>,
}

impl NeighborCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached map for a surface, building it if absent
    pub fn get_or_build<M>(&mut self, mesh: &M, surface_index: usize) -> &NeighborMap
    where
        M: MeshTopology + ?Sized,
    {
        if !self.maps.contains_key(&surface_index) {
            let map = build_neighbor_cache(Some(mesh), surface_index);
            if map.is_empty() {
                return &EMPTY_NEIGHBORS;
            }
            self.maps.insert(surface_index, map);
        }
        &self.maps[&surface_index]
    }

    /// Get the cached map for a surface without building
    pub fn get(&self, surface_index: usize) -> Option<&NeighborMap> {
        self.maps.get(&surface_index)
    }

    /// Drop the cached map after the surface topology changed
    pub fn invalidate(&mut self, surface_index: usize) {
        self.maps.remove(&surface_index);
    }

    /// Drop all cached maps
    pub fn clear(&mut self) {
        self.maps.clear();
    }

    /// Number of cached surfaces
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
