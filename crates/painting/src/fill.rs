//! Whole-surface channel fill

use tracing::debug;

use crate::types::ChannelMask;

/// Set every enabled channel of every color to 1.0, or to 0.0 when
/// `is_fill` is false
pub fn fill_in_place(colors: &mut [[f32; 4]], channels: ChannelMask, is_fill: bool) {
    let value = if is_fill { 1.0 } else { 0.0 };
    for color in colors.iter_mut() {
        for (i, c) in color.iter_mut().enumerate() {
            if channels.is_enabled(i) {
                *c = value;
            }
        }
    }
    debug!(
        "fill: {} colors, channels {:?}, is_fill={}",
        colors.len(),
        channels.0,
        is_fill
    );
}

/// Copying variant of [`fill_in_place`]
pub fn fill_surface(colors: &[[f32; 4]], channels: ChannelMask, is_fill: bool) -> Vec<[f32; 4]> {
    let mut out = colors.to_vec();
    fill_in_place(&mut out, channels, is_fill);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_red_channel() {
        let colors = [[0.2, 0.3, 0.4, 1.0]];
        let out = fill_surface(&colors, ChannelMask::new(true, false, false, false), true);
        assert_eq!(out, vec![[1.0, 0.3, 0.4, 1.0]]);
    }

    #[test]
    fn test_fill_red_and_alpha() {
        let colors = [[0.2, 0.3, 0.4, 0.5]];
        let out = fill_surface(&colors, ChannelMask::new(true, false, false, true), true);
        assert_eq!(out, vec![[1.0, 0.3, 0.4, 1.0]]);
    }

    #[test]
    fn test_clear_red_and_alpha() {
        let colors = [[1.0, 0.0, 0.0, 1.0], [0.5, 0.5, 0.5, 0.5]];
        let out = fill_surface(&colors, ChannelMask::new(true, false, false, true), false);
        assert_eq!(out, vec![[0.0, 0.0, 0.0, 0.0], [0.0, 0.5, 0.5, 0.0]]);
    }

    #[test]
    fn test_fill_is_idempotent() {
        let colors = vec![[0.1, 0.9, 0.4, 0.3]; 5];
        let channels = ChannelMask::new(false, true, true, false);
        for is_fill in [true, false] {
            let once = fill_surface(&colors, channels, is_fill);
            let twice = fill_surface(&once, channels, is_fill);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_mask_and_empty_input() {
        let colors = [[0.1, 0.2, 0.3, 0.4]];
        assert_eq!(fill_surface(&colors, ChannelMask::NONE, true), colors.to_vec());
        assert!(fill_surface(&[], ChannelMask::ALL, false).is_empty());
    }

    #[test]
    fn test_fill_in_place() {
        let mut colors = [[0.0; 4]; 2];
        fill_in_place(&mut colors, ChannelMask::ALL, true);
        assert_eq!(colors, [[1.0; 4]; 2]);
        fill_in_place(&mut colors, ChannelMask::new(false, false, true, false), false);
        assert_eq!(colors, [[1.0, 1.0, 0.0, 1.0]; 2]);
    }
}
