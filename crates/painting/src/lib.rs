//! Vertex color painting for triangle meshes
//!
//! This crate provides a CPU paint core that modifies per-vertex RGBA colors
//! under a spherical brush:
//! - [`paint`] - The per-stroke paint pass ([`paint_surface`], [`BrushStroke`])
//! - [`blend`] - Per-channel add/sub/set/blur/sharpen operations
//! - [`triplanar`] - Triplanar brush texture sampling
//! - [`brush_image`] - Read-only brush images ([`BrushImage`], [`BrushMask`])
//! - [`neighbor`] - Vertex adjacency from edge topology ([`NeighborMap`])
//! - [`topology`] - Surface edge extraction and a simple triangle mesh
//! - [`fill`] - Whole-surface channel fill
//! - [`painter`] - Stateful facade caching neighbor maps per surface
//!
//! Brush settings live in the `vertex-paint-config` crate, re-exported as
//! [`config`].

pub mod blend;
pub mod brush_image;
pub mod constants;
pub mod fill;
pub mod neighbor;
pub mod paint;
pub mod painter;
pub mod topology;
pub mod triplanar;
pub mod types;
pub mod validation;

pub use brush_image::*;
pub use constants::*;
pub use fill::*;
pub use neighbor::*;
pub use paint::*;
pub use painter::*;
pub use topology::*;
pub use triplanar::*;
pub use types::*;
pub use validation::*;

pub use glam;
pub use vertex_paint_config as config;
