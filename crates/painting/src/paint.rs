//! Per-stroke vertex paint pass
//!
//! One call paints one brush sample onto one surface. Each vertex runs
//! through the same pipeline and is left unchanged as soon as any stage
//! rejects it:
//!
//! 1. Axis-aligned box reject against the brush size
//! 2. Sphere test against the squared radius
//! 3. Slope mask (world-space normal against world up)
//! 4. Curvature mask (own normal against the averaged neighbor normal)
//! 5. Weight: triplanar brush texture with a soft edge, or linear falloff
//! 6. Blend of the enabled channels
//!
//! Blur and sharpen read neighbor colors from the input colors, never from
//! values updated earlier in the same pass.

use std::fmt;

use glam::{Affine3A, Vec3};
use tracing::{debug, trace, warn};
use vertex_paint_config::BrushSettings;

use crate::blend;
use crate::brush_image::BrushImage;
use crate::constants::{
    CURVATURE_SENSITIVITY_SCALE, EDGE_SOFTNESS, NEIGHBOR_BLEND_SCALE, WORLD_UP,
};
use crate::neighbor::NeighborMap;
use crate::triplanar::sample_triplanar;
use crate::types::{BlendMode, ChannelMask};
use crate::validation::{PaintError, validate_brush_size, validate_vertex_buffer};

/// Parallel vertex arrays of one surface, in mesh-local space
#[derive(Debug, Clone, Copy)]
pub struct VertexBuffer<'a> {
    pub positions: &'a [Vec3],
    /// May be shorter than `positions`; missing entries mean "no normal"
    pub normals: &'a [Vec3],
    pub colors: &'a [[f32; 4]],
}

impl<'a> VertexBuffer<'a> {
    pub fn new(positions: &'a [Vec3], normals: &'a [Vec3], colors: &'a [[f32; 4]]) -> Self {
        Self {
            positions,
            normals,
            colors,
        }
    }

    /// Normal of a vertex, if one is available
    #[inline]
    pub fn normal(&self, index: usize) -> Option<Vec3> {
        self.normals.get(index).copied()
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Brush image projected triplanarly around the brush center
#[derive(Clone, Copy)]
pub struct BrushTexture<'a> {
    pub image: &'a dyn BrushImage,
    /// Rotation of the image in radians
    pub angle: f32,
    /// Brush center in world space
    pub world_position: Vec3,
}

impl<'a> BrushTexture<'a> {
    /// Texture placement using the brush rotation from user settings
    pub fn from_settings(
        settings: &BrushSettings,
        image: &'a dyn BrushImage,
        world_position: Vec3,
    ) -> Self {
        Self {
            image,
            angle: settings.angle_radians(),
            world_position,
        }
    }
}

impl fmt::Debug for BrushTexture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrushTexture")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("angle", &self.angle)
            .field("world_position", &self.world_position)
            .finish()
    }
}

/// Only paint surfaces facing up (or, inverted, facing away from up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeMask {
    /// Cosine of the limit angle between world normal and world up
    pub angle_cos: f32,
    pub invert: bool,
}

impl SlopeMask {
    /// Whether a world-space normal passes the mask
    pub fn passes(&self, world_normal: Vec3) -> bool {
        let dot = world_normal.dot(WORLD_UP);
        if self.invert {
            dot <= self.angle_cos
        } else {
            dot >= self.angle_cos
        }
    }
}

/// Only paint curved areas (or, inverted, flat areas)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureMask {
    pub sensitivity: f32,
    pub invert: bool,
}

impl CurvatureMask {
    /// Flatness threshold: `1 - sensitivity * 0.2`
    pub fn threshold(&self) -> f32 {
        1.0 - self.sensitivity * CURVATURE_SENSITIVITY_SCALE
    }

    /// Whether a vertex passes the mask
    ///
    /// Flatness is the dot product of the vertex normal with the normalized
    /// average of its neighbors' normals. Neighbor indices without a normal
    /// contribute nothing but still count toward the average. A vertex
    /// without neighbors always passes.
    pub fn passes(&self, normal: Vec3, neighbors: &[u32], normals: &[Vec3]) -> bool {
        if neighbors.is_empty() {
            return true;
        }
        let sum: Vec3 = neighbors
            .iter()
            .filter_map(|&n| normals.get(n as usize))
            .sum();
        let avg_normal = (sum / neighbors.len() as f32).normalize_or_zero();
        let flatness = normal.dot(avg_normal);
        let threshold = self.threshold();
        if self.invert {
            flatness >= threshold
        } else {
            flatness <= threshold
        }
    }
}

/// Immutable brush parameters for one paint call
#[derive(Debug, Clone, Copy)]
pub struct BrushStroke<'a> {
    /// Hit point in mesh-local space
    pub local_hit: Vec3,
    /// Squared brush radius for the sphere test
    pub radius_sq: f32,
    /// Brush radius
    pub brush_size: f32,
    /// Fraction of the radius over which the procedural weight fades out
    pub falloff: f32,
    /// Amount for add/sub/blur/sharpen, target value for set
    pub strength: f32,
    pub mode: BlendMode,
    pub channels: ChannelMask,
    pub texture: Option<BrushTexture<'a>>,
    pub mesh_to_world: Affine3A,
    pub slope_mask: Option<SlopeMask>,
    pub curvature_mask: Option<CurvatureMask>,
}

impl<'a> BrushStroke<'a> {
    /// A procedural add stroke with `radius_sq = brush_size²`, no masks,
    /// and an identity mesh transform
    pub fn new(local_hit: Vec3, brush_size: f32) -> Self {
        Self {
            local_hit,
            radius_sq: brush_size * brush_size,
            brush_size,
            falloff: vertex_paint_config::DEFAULT_FALLOFF,
            strength: vertex_paint_config::DEFAULT_STRENGTH,
            mode: BlendMode::default(),
            channels: ChannelMask::ALL,
            texture: None,
            mesh_to_world: Affine3A::IDENTITY,
            slope_mask: None,
            curvature_mask: None,
        }
    }

    /// Build a stroke from user brush settings
    pub fn from_settings(settings: &BrushSettings, local_hit: Vec3, mesh_to_world: Affine3A) -> Self {
        let slope_mask = settings.slope.enabled.then(|| SlopeMask {
            angle_cos: settings.slope.angle_cos(),
            invert: settings.slope.invert,
        });
        let curvature_mask = settings.curvature.enabled.then(|| CurvatureMask {
            sensitivity: settings.curvature.sensitivity,
            invert: settings.curvature.invert,
        });

        Self {
            local_hit,
            radius_sq: settings.radius_sq(),
            brush_size: settings.size,
            falloff: settings.falloff,
            strength: settings.strength,
            mode: settings.mode.into(),
            channels: settings.channels.into(),
            texture: None,
            mesh_to_world,
            slope_mask,
            curvature_mask,
        }
    }

    pub fn with_mode(mut self, mode: BlendMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_falloff(mut self, falloff: f32) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_channels(mut self, channels: ChannelMask) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_transform(mut self, mesh_to_world: Affine3A) -> Self {
        self.mesh_to_world = mesh_to_world;
        self
    }

    pub fn with_texture(mut self, texture: BrushTexture<'a>) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_slope_mask(mut self, mask: SlopeMask) -> Self {
        self.slope_mask = Some(mask);
        self
    }

    pub fn with_curvature_mask(mut self, mask: CurvatureMask) -> Self {
        self.curvature_mask = Some(mask);
        self
    }

    /// Axis-aligned pre-check: false if any axis offset exceeds the brush size
    #[inline]
    pub fn in_box(&self, position: Vec3) -> bool {
        !(position - self.local_hit)
            .abs()
            .cmpgt(Vec3::splat(self.brush_size))
            .any()
    }

    /// World-space normal for a mesh-local normal
    #[inline]
    fn world_normal(&self, normal: Vec3) -> Vec3 {
        self.mesh_to_world.transform_vector3(normal).normalize_or_zero()
    }
}

/// Linear falloff weight
///
/// 1 inside `1 - falloff` of the radius, then a linear ramp to 0 at the
/// brush edge.
pub fn procedural_weight(dist: f32, brush_size: f32, falloff: f32) -> f32 {
    let ratio = dist / brush_size;
    let hard_limit = 1.0 - falloff;
    if ratio > hard_limit {
        let t = (ratio - hard_limit) / (1.0 - hard_limit);
        (1.0 - t).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Fade a texture sample to 0 over the last `EDGE_SOFTNESS` of the radius
pub fn edge_softened(tex_val: f32, dist: f32, brush_size: f32) -> f32 {
    let t = ((dist - (brush_size - EDGE_SOFTNESS)) / EDGE_SOFTNESS).clamp(0.0, 1.0);
    tex_val * (1.0 - t)
}

/// Paint one brush sample onto a surface
///
/// Returns the full updated color array; vertices outside the brush or
/// rejected by a mask keep their input color.
///
/// # Errors
/// * [`PaintError::LengthMismatch`] if positions and colors differ in length
/// * [`PaintError::InvalidBrushSize`] if the brush size is not a positive number
pub fn paint_surface(
    buffer: &VertexBuffer<'_>,
    stroke: &BrushStroke<'_>,
    neighbors: &NeighborMap,
) -> Result<Vec<[f32; 4]>, PaintError> {
    validate_vertex_buffer(buffer)?;
    validate_brush_size(stroke.brush_size)?;

    // Input colors double as the pre-pass snapshot for blur/sharpen
    let snapshot = buffer.colors;
    let mut colors = snapshot.to_vec();

    let texture = stroke.texture.filter(|t| !t.image.is_degenerate());
    let mut painted = 0usize;
    let mut out_of_range = 0usize;

    for (i, &position) in buffer.positions.iter().enumerate() {
        if !stroke.in_box(position) {
            continue;
        }

        let dist_sq = position.distance_squared(stroke.local_hit);
        if dist_sq >= stroke.radius_sq {
            continue;
        }

        let normal = buffer.normal(i);
        let vertex_neighbors = neighbors.neighbors(i);

        if let (Some(mask), Some(n)) = (stroke.slope_mask, normal) {
            if !mask.passes(stroke.world_normal(n)) {
                continue;
            }
        }

        if let (Some(mask), Some(n)) = (stroke.curvature_mask, normal) {
            if !mask.passes(n, vertex_neighbors, buffer.normals) {
                continue;
            }
        }

        let dist = dist_sq.sqrt();
        let weight = match &texture {
            Some(tex) => {
                let world_pos = stroke.mesh_to_world.transform_point3(position);
                let world_normal = normal.map_or(WORLD_UP, |n| stroke.world_normal(n));
                let tex_val = sample_triplanar(
                    tex.world_position,
                    world_pos,
                    world_normal,
                    stroke.brush_size,
                    tex.angle,
                    tex.image,
                );
                edge_softened(tex_val, dist, stroke.brush_size)
            }
            None => procedural_weight(dist, stroke.brush_size, stroke.falloff),
        };

        let color = colors[i];
        let updated = match stroke.mode {
            BlendMode::Add => blend::add(color, stroke.strength * weight, stroke.channels),
            BlendMode::Sub => blend::add(color, -(stroke.strength * weight), stroke.channels),
            BlendMode::Set => blend::set(color, stroke.strength, weight, stroke.channels),
            BlendMode::Blur | BlendMode::Sharpen => {
                let sample =
                    blend::neighbor_average(color, vertex_neighbors, snapshot, stroke.channels);
                out_of_range += sample.out_of_range;
                let Some(average) = sample.average else {
                    continue;
                };
                let amount = stroke.strength * weight * NEIGHBOR_BLEND_SCALE;
                if stroke.mode == BlendMode::Blur {
                    blend::blur(color, average, amount, stroke.channels)
                } else {
                    blend::sharpen(color, average, amount, stroke.channels)
                }
            }
        };

        trace!("paint_surface: vertex {} {:?} -> {:?}", i, color, updated);
        colors[i] = updated;
        painted += 1;
    }

    if out_of_range > 0 {
        warn!(
            "paint_surface: skipped {} neighbor indices outside {} vertices; neighbor map is stale",
            out_of_range,
            snapshot.len()
        );
    }
    debug!(
        "paint_surface: mode={:?}, painted {} of {} vertices, textured={}",
        stroke.mode,
        painted,
        buffer.len(),
        texture.is_some()
    );

    Ok(colors)
}
