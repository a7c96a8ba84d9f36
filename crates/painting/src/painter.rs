//! Stateful vertex painter
//!
//! Wraps the stateless paint, fill and neighbor operations and keeps one
//! neighbor map per surface so repeated strokes on the same mesh do not
//! rebuild adjacency.

use tracing::debug;

use crate::fill;
use crate::neighbor::{NeighborCache, NeighborMap};
use crate::paint::{self, BrushStroke, VertexBuffer};
use crate::topology::{MeshTopology, TriangleMesh};
use crate::types::ChannelMask;
use crate::validation::PaintError;

/// Vertex painter for one mesh editing session
#[derive(Debug, Default)]
pub struct VertexPainter {
    neighbor_cache: NeighborCache,
}

impl VertexPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one brush sample onto raw vertex arrays
    pub fn paint_surface(
        &self,
        buffer: &VertexBuffer<'_>,
        stroke: &BrushStroke<'_>,
        neighbors: &NeighborMap,
    ) -> Result<Vec<[f32; 4]>, PaintError> {
        paint::paint_surface(buffer, stroke, neighbors)
    }

    /// Neighbor map for a surface, built on first request
    pub fn build_neighbor_cache<M>(&mut self, mesh: &M, surface_index: usize) -> &NeighborMap
    where
        M: MeshTopology + ?Sized,
    {
        self.neighbor_cache.get_or_build(mesh, surface_index)
    }

    /// Fill (`is_fill`) or clear the enabled channels of a color array
    pub fn fill_surface(
        &self,
        colors: &[[f32; 4]],
        channels: ChannelMask,
        is_fill: bool,
    ) -> Vec<[f32; 4]> {
        fill::fill_surface(colors, channels, is_fill)
    }

    /// Paint one brush sample onto a mesh surface in place
    ///
    /// The neighbor map is only built when the stroke reads neighbors
    /// (blur, sharpen or a curvature mask). Returns how many vertex colors
    /// changed.
    pub fn paint_mesh_surface(
        &mut self,
        mesh: &mut TriangleMesh,
        surface_index: usize,
        stroke: &BrushStroke<'_>,
    ) -> Result<usize, PaintError> {
        let count = mesh.surfaces().len();
        let Some(surface) = mesh.surface(surface_index) else {
            return Err(PaintError::SurfaceOutOfRange {
                index: surface_index,
                count,
            });
        };

        let empty = NeighborMap::new();
        let needs_neighbors = stroke.mode.uses_neighbors() || stroke.curvature_mask.is_some();
        let neighbors = if needs_neighbors {
            self.neighbor_cache.get_or_build(&*mesh, surface_index)
        } else {
            &empty
        };

        let colors = paint::paint_surface(&surface.vertex_buffer(), stroke, neighbors)?;
        let changed = colors
            .iter()
            .zip(surface.colors.iter())
            .filter(|(new, old)| new != old)
            .count();

        if let Some(surface) = mesh.surface_mut(surface_index) {
            surface.colors = colors;
        }
        debug!(
            "paint_mesh_surface: surface {} changed {} vertices",
            surface_index, changed
        );
        Ok(changed)
    }

    /// Fill (`is_fill`) or clear the enabled channels of a mesh surface in place
    pub fn fill_mesh_surface(
        &mut self,
        mesh: &mut TriangleMesh,
        surface_index: usize,
        channels: ChannelMask,
        is_fill: bool,
    ) -> Result<(), PaintError> {
        let count = mesh.surfaces().len();
        let surface = mesh
            .surface_mut(surface_index)
            .ok_or(PaintError::SurfaceOutOfRange {
                index: surface_index,
                count,
            })?;
        fill::fill_in_place(&mut surface.colors, channels, is_fill);
        Ok(())
    }

    /// Forget the neighbor map of a surface whose topology changed
    pub fn invalidate_surface(&mut self, surface_index: usize) {
        self.neighbor_cache.invalidate(surface_index);
    }

    /// Forget all neighbor maps, e.g. when switching meshes
    pub fn clear_cache(&mut self) {
        self.neighbor_cache.clear();
    }

    pub fn neighbor_cache(&self) -> &NeighborCache {
        &self.neighbor_cache
    }
}
