//! Read-only brush images for textured painting
//!
//! The paint core never decodes images; it samples already-decoded pixels
//! through [`BrushImage`]. Implementations are provided for the crate's own
//! [`BrushMask`] and for `image` crate buffers.

use image::{Rgba32FImage, RgbaImage};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrushImageError {
    #[error("Pixel count {actual} does not match {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// A 2D grid of RGBA pixels with channels in [0, 1]
pub trait BrushImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Pixel at the given coordinates; callers stay within bounds
    fn pixel(&self, x: u32, y: u32) -> [f32; 4];

    /// Zero-sized images sample as 0 everywhere
    fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// CPU RGBA brush image, stored row-major as [f32; 4]
#[derive(Debug, Clone, PartialEq)]
pub struct BrushMask {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl BrushMask {
    /// Create a mask with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 0.0]; pixel_count],
        }
    }

    /// Wrap existing row-major pixel data
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: Vec<[f32; 4]>,
    ) -> Result<Self, BrushImageError> {
        if pixels.len() != (width as usize) * (height as usize) {
            return Err(BrushImageError::SizeMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an opaque grayscale mask from intensity values
    pub fn from_intensity(
        width: u32,
        height: u32,
        values: &[f32],
    ) -> Result<Self, BrushImageError> {
        let pixels = values.iter().map(|&v| [v, v, v, 1.0]).collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Fill the whole mask with one color
    pub fn fill(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }
}

impl BrushImage for BrushMask {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.get_pixel(x, y).unwrap_or([0.0; 4])
    }
}

impl BrushImage for RgbaImage {
    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.get_pixel_checked(x, y)
            .map(|p| p.0.map(|c| c as f32 / 255.0))
            .unwrap_or([0.0; 4])
    }
}

impl BrushImage for Rgba32FImage {
    fn width(&self) -> u32 {
        Rgba32FImage::width(self)
    }

    fn height(&self) -> u32 {
        Rgba32FImage::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.get_pixel_checked(x, y).map(|p| p.0).unwrap_or([0.0; 4])
    }
}
