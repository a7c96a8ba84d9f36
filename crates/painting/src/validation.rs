use thiserror::Error;

use crate::neighbor::NeighborMap;
use crate::paint::VertexBuffer;

#[derive(Debug, Error, PartialEq)]
pub enum PaintError {
    #[error("Vertex buffer length mismatch: {positions} positions, {colors} colors")]
    LengthMismatch { positions: usize, colors: usize },
    #[error("Invalid brush size: {0}")]
    InvalidBrushSize(f32),
    #[error("Neighbor {neighbor} of vertex {vertex} is out of range (vertex count {vertex_count})")]
    NeighborOutOfRange {
        vertex: usize,
        neighbor: u32,
        vertex_count: usize,
    },
    #[error("Surface index {index} out of range ({count} surfaces)")]
    SurfaceOutOfRange { index: usize, count: usize },
}

/// Check that positions and colors share one index space
pub fn validate_vertex_buffer(buffer: &VertexBuffer<'_>) -> Result<(), PaintError> {
    if buffer.positions.len() != buffer.colors.len() {
        return Err(PaintError::LengthMismatch {
            positions: buffer.positions.len(),
            colors: buffer.colors.len(),
        });
    }
    Ok(())
}

/// Brush size must be finite and positive (it divides the falloff ratio)
pub fn validate_brush_size(brush_size: f32) -> Result<(), PaintError> {
    if !brush_size.is_finite() || brush_size <= 0.0 {
        return Err(PaintError::InvalidBrushSize(brush_size));
    }
    Ok(())
}

/// Check that every neighbor index refers to an existing vertex
pub fn validate_neighbor_map(map: &NeighborMap, vertex_count: usize) -> Result<(), PaintError> {
    for (vertex, neighbors) in map.iter() {
        if let Some(&neighbor) = neighbors.iter().find(|&&n| n as usize >= vertex_count) {
            return Err(PaintError::NeighborOutOfRange {
                vertex,
                neighbor,
                vertex_count,
            });
        }
    }
    Ok(())
}
