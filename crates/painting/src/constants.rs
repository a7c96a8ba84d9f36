use glam::Vec3;

/// Width of the soft edge applied to textured brushes (mesh-local units).
pub const EDGE_SOFTNESS: f32 = 0.05;

/// Scale applied to strength * weight in blur and sharpen modes.
pub const NEIGHBOR_BLEND_SCALE: f32 = 0.5;

/// Flatness threshold step per unit of curvature sensitivity.
pub const CURVATURE_SENSITIVITY_SCALE: f32 = 0.2;

/// Below this sum the triplanar weights fall back to a top-down projection.
pub const TRIPLANAR_WEIGHT_EPSILON: f32 = 1e-5;

/// World up axis (Y-up convention). Slope masking and the normal fallback use it.
pub const WORLD_UP: Vec3 = Vec3::Y;
