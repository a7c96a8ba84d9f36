use serde::{Deserialize, Serialize};
use thiserror::Error;
use vertex_paint_config::BrushMode;

/// Blend modes for vertex painting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum BlendMode {
    /// Add strength * weight to each channel
    #[default]
    Add = 0,
    /// Subtract strength * weight from each channel
    Sub = 1,
    /// Interpolate each channel toward strength (an absolute target)
    Set = 2,
    /// Interpolate toward the neighbor average
    Blur = 3,
    /// Push away from the neighbor average
    Sharpen = 4,
}

impl BlendMode {
    /// Whether the mode reads neighbor colors
    pub fn uses_neighbors(self) -> bool {
        matches!(self, BlendMode::Blur | BlendMode::Sharpen)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlendModeError {
    #[error("Unknown blend mode code: {0}")]
    UnknownCode(i32),
}

/// Integer mode codes used by host bindings (0=ADD, 1=SUB, 2=SET, 3=BLUR, 4=SHARPEN)
impl TryFrom<i32> for BlendMode {
    type Error = BlendModeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BlendMode::Add),
            1 => Ok(BlendMode::Sub),
            2 => Ok(BlendMode::Set),
            3 => Ok(BlendMode::Blur),
            4 => Ok(BlendMode::Sharpen),
            other => Err(BlendModeError::UnknownCode(other)),
        }
    }
}

impl From<BrushMode> for BlendMode {
    fn from(mode: BrushMode) -> Self {
        match mode {
            BrushMode::Add => BlendMode::Add,
            BrushMode::Sub => BlendMode::Sub,
            BrushMode::Set => BlendMode::Set,
            BrushMode::Blur => BlendMode::Blur,
            BrushMode::Sharpen => BlendMode::Sharpen,
        }
    }
}

/// Per-channel enable flags in RGBA order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelMask(pub [bool; 4]);

impl Default for ChannelMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl ChannelMask {
    pub const ALL: Self = Self([true; 4]);
    pub const NONE: Self = Self([false; 4]);

    pub fn new(r: bool, g: bool, b: bool, a: bool) -> Self {
        Self([r, g, b, a])
    }

    /// Build from a host-side weight vector where a component > 0 enables the channel
    pub fn from_weights(weights: [f32; 4]) -> Self {
        Self(weights.map(|w| w > 0.0))
    }

    #[inline]
    pub fn is_enabled(&self, channel: usize) -> bool {
        self.0.get(channel).copied().unwrap_or(false)
    }

    /// Whether no channel is enabled
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&c| c)
    }
}

impl From<[bool; 4]> for ChannelMask {
    fn from(channels: [bool; 4]) -> Self {
        Self(channels)
    }
}

/// View a color array as raw bytes for vertex buffer upload
pub fn colors_as_bytes(colors: &[[f32; 4]]) -> &[u8] {
    bytemuck::cast_slice(colors)
}
