//! Triplanar brush texture sampling.
//!
//! A vertex is projected onto the three axis-aligned planes around the brush
//! center, the brush image is sampled once per plane, and the samples are
//! blended by how strongly the surface normal faces each axis. This avoids
//! any dependency on mesh UVs.
//!
//! The per-axis sign flips below follow a Y-up world and decide which way
//! the brush image faces on each plane. Changing them mirrors the stamp.

use glam::{Vec2, Vec3};

use crate::brush_image::BrushImage;
use crate::constants::TRIPLANAR_WEIGHT_EPSILON;

const UV_CENTER: Vec2 = Vec2::splat(0.5);

/// UV coordinates of one vertex on each projection plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriplanarUvs {
    /// ZY plane, used for X-facing surfaces
    pub x: Vec2,
    /// XZ plane, used for Y-facing surfaces
    pub y: Vec2,
    /// XY plane, used for Z-facing surfaces
    pub z: Vec2,
}

/// Per-axis blend weights from a normal
///
/// Weights are `abs(normal)^4` normalized to sum 1. A near-zero normal
/// falls back to a pure top-down projection.
pub fn triplanar_weights(normal: Vec3) -> Vec3 {
    let a = normal.abs();
    let blending = a * a * a * a;
    let sum = blending.x + blending.y + blending.z;
    if sum > TRIPLANAR_WEIGHT_EPSILON {
        blending / sum
    } else {
        Vec3::Y
    }
}

/// Rotate a UV pair about the image center
#[inline]
pub fn rotate_uv(uv: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(uv - UV_CENTER) + UV_CENTER
}

/// Map a projected offset into brush UV space: center, flip V, rotate
#[inline]
fn to_brush_uv(raw: Vec2, uv_scale: f32, angle: f32) -> Vec2 {
    let mut uv = raw * uv_scale + UV_CENTER;
    uv.y = 1.0 - uv.y;
    rotate_uv(uv, angle)
}

/// Project a brush-relative position onto the three planes
///
/// # Arguments
/// * `rel_pos` - Vertex position minus brush center (world space)
/// * `normal` - Vertex world normal, used for back-face flips
/// * `radius` - Brush radius; the footprint maps to the unit UV square
/// * `angle` - Brush rotation in radians
pub fn project_uvs(rel_pos: Vec3, normal: Vec3, radius: f32, angle: f32) -> TriplanarUvs {
    let uv_scale = 1.0 / (radius * 2.0);

    // Top/bottom (XZ plane)
    let mut raw_y = Vec2::new(rel_pos.x, rel_pos.z);
    if normal.y < 0.0 {
        raw_y.x = -raw_y.x;
    }
    raw_y.x = -raw_y.x;

    // Front/back (XY plane)
    let mut raw_z = Vec2::new(rel_pos.x, rel_pos.y);
    if normal.z < 0.0 {
        raw_z.x = -raw_z.x;
    }

    // Left/right (ZY plane)
    let mut raw_x = Vec2::new(rel_pos.z, rel_pos.y);
    if normal.x < 0.0 {
        raw_x.x = -raw_x.x;
    }
    raw_x.x = -raw_x.x;

    TriplanarUvs {
        x: to_brush_uv(raw_x, uv_scale, angle),
        y: to_brush_uv(raw_y, uv_scale, angle),
        z: to_brush_uv(raw_z, uv_scale, angle),
    }
}

/// Nearest-pixel sample returning `red * alpha`
///
/// UVs outside [0, 1] and degenerate images sample as 0.
pub fn sample_image_at_uv<I>(image: &I, uv: Vec2) -> f32
where
    I: BrushImage + ?Sized,
{
    if uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0 || uv.y > 1.0 {
        return 0.0;
    }
    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 {
        return 0.0;
    }
    let x = (uv.x * (w - 1) as f32) as u32;
    let y = (uv.y * (h - 1) as f32) as u32;
    let [r, _, _, a] = image.pixel(x, y);
    r * a
}

/// Triplanar brush intensity at a vertex, in [0, 1] for images in [0, 1]
///
/// # Arguments
/// * `brush_pos` - Brush center in world space
/// * `vert_pos` - Vertex position in world space
/// * `vert_normal` - Vertex normal in world space
/// * `radius` - Brush radius
/// * `angle` - Brush rotation in radians
/// * `image` - Brush image
pub fn sample_triplanar<I>(
    brush_pos: Vec3,
    vert_pos: Vec3,
    vert_normal: Vec3,
    radius: f32,
    angle: f32,
    image: &I,
) -> f32
where
    I: BrushImage + ?Sized,
{
    let weights = triplanar_weights(vert_normal);
    let uvs = project_uvs(vert_pos - brush_pos, vert_normal, radius, angle);

    let val_x = sample_image_at_uv(image, uvs.x);
    let val_y = sample_image_at_uv(image, uvs.y);
    let val_z = sample_image_at_uv(image, uvs.z);

    val_x * weights.x + val_y * weights.y + val_z * weights.z
}
