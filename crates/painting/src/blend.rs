//! Per-channel blend operations for the paint pass.
//!
//! Every function leaves channels disabled in the mask untouched.

use crate::types::ChannelMask;

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    // Exact at both ends, so SET at full weight lands on the target
    from * (1.0 - t) + to * t
}

#[inline]
fn map_enabled(color: [f32; 4], channels: ChannelMask, f: impl Fn(usize, f32) -> f32) -> [f32; 4] {
    let mut out = color;
    for (i, c) in out.iter_mut().enumerate() {
        if channels.is_enabled(i) {
            *c = f(i, *c);
        }
    }
    out
}

/// Add a signed amount to each enabled channel, clamped to [0, 1]
///
/// Subtraction is an add with a negative amount.
pub fn add(color: [f32; 4], amount: f32, channels: ChannelMask) -> [f32; 4] {
    map_enabled(color, channels, |_, c| (c + amount).clamp(0.0, 1.0))
}

/// Interpolate each enabled channel toward an absolute target
pub fn set(color: [f32; 4], target: f32, weight: f32, channels: ChannelMask) -> [f32; 4] {
    map_enabled(color, channels, |_, c| lerp(c, target, weight))
}

/// Interpolate each enabled channel toward the neighbor average
pub fn blur(color: [f32; 4], average: [f32; 4], amount: f32, channels: ChannelMask) -> [f32; 4] {
    map_enabled(color, channels, |i, c| lerp(c, average[i], amount))
}

/// Push each enabled channel away from the neighbor average, clamped to [0, 1]
pub fn sharpen(
    color: [f32; 4],
    average: [f32; 4],
    amount: f32,
    channels: ChannelMask,
) -> [f32; 4] {
    map_enabled(color, channels, |i, c| {
        (c + (c - average[i]) * amount).clamp(0.0, 1.0)
    })
}

/// Result of averaging neighbor colors for one vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborAverage {
    /// Per-channel average, or None when no neighbor could be read
    pub average: Option<[f32; 4]>,
    /// Neighbor indices that fell outside the color snapshot
    pub out_of_range: usize,
}

/// Average the snapshot colors of a vertex's neighbors
///
/// Disabled channels average the vertex's own value so they stay neutral.
/// Indices outside the snapshot are skipped and excluded from the divisor.
pub fn neighbor_average(
    color: [f32; 4],
    neighbors: &[u32],
    snapshot: &[[f32; 4]],
    channels: ChannelMask,
) -> NeighborAverage {
    let mut sum = [0.0f32; 4];
    let mut count = 0usize;
    let mut out_of_range = 0usize;

    for &n in neighbors {
        let Some(nc) = snapshot.get(n as usize) else {
            out_of_range += 1;
            continue;
        };
        for (i, s) in sum.iter_mut().enumerate() {
            *s += if channels.is_enabled(i) { nc[i] } else { color[i] };
        }
        count += 1;
    }

    let average = (count > 0).then(|| sum.map(|s| s / count as f32));
    NeighborAverage {
        average,
        out_of_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RG: ChannelMask = ChannelMask([true, true, false, false]);

    #[test]
    fn test_add_clamps() {
        let out = add([0.9, 0.2, 0.5, 0.5], 0.3, ChannelMask::ALL);
        assert_eq!(out[0], 1.0);
        assert!((out[1] - 0.5).abs() < 1e-6);

        let out = add([0.1, 0.5, 0.5, 0.5], -0.3, ChannelMask::ALL);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_set_hits_target_exactly() {
        let out = set([0.7, 0.123, 0.9, 0.0], 0.3, 1.0, ChannelMask::ALL);
        assert_eq!(out, [0.3; 4]);

        let out = set([0.7, 0.1, 0.9, 0.0], 0.3, 0.0, ChannelMask::ALL);
        assert_eq!(out, [0.7, 0.1, 0.9, 0.0]);

        let out = set([1.0, 0.0, 0.0, 0.0], 0.0, 0.25, ChannelMask::ALL);
        assert!((out[0] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_disabled_channels_untouched() {
        let color = [0.1, 0.2, 0.3, 0.4];
        let average = [0.9; 4];
        for out in [
            add(color, 0.5, RG),
            set(color, 1.0, 1.0, RG),
            blur(color, average, 1.0, RG),
            sharpen(color, average, 1.0, RG),
        ] {
            assert_eq!(out[2], 0.3);
            assert_eq!(out[3], 0.4);
        }
    }

    #[test]
    fn test_blur_and_sharpen() {
        let out = blur([0.0; 4], [1.0; 4], 0.25, ChannelMask::ALL);
        assert!((out[0] - 0.25).abs() < 1e-6);

        // 0.5 + (0.5 - 0.3) * 0.5 = 0.6
        let out = sharpen([0.5; 4], [0.3; 4], 0.5, ChannelMask::ALL);
        assert!((out[0] - 0.6).abs() < 1e-6);

        let out = sharpen([0.9; 4], [0.0; 4], 1.0, ChannelMask::ALL);
        assert_eq!(out[0], 1.0);
    }

    #[test]
    fn test_neighbor_average_masks_channels() {
        let snapshot = [[1.0, 1.0, 1.0, 1.0], [0.0, 0.5, 0.0, 0.0]];
        let own = [0.2, 0.2, 0.2, 0.2];
        let avg = neighbor_average(own, &[0, 1], &snapshot, RG);
        assert_eq!(avg.out_of_range, 0);
        let a = avg.average.unwrap();
        assert!((a[0] - 0.5).abs() < 1e-6);
        assert!((a[1] - 0.75).abs() < 1e-6);
        // Disabled channels average to the vertex's own value
        assert!((a[2] - 0.2).abs() < 1e-6);
        assert!((a[3] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_neighbor_average_skips_out_of_range() {
        let snapshot = [[1.0; 4]];
        let avg = neighbor_average([0.0; 4], &[0, 5, 9], &snapshot, ChannelMask::ALL);
        assert_eq!(avg.out_of_range, 2);
        assert_eq!(avg.average, Some([1.0; 4]));

        let avg = neighbor_average([0.0; 4], &[5], &snapshot, ChannelMask::ALL);
        assert_eq!(avg.average, None);
        assert_eq!(avg.out_of_range, 1);

        let avg = neighbor_average([0.0; 4], &[], &snapshot, ChannelMask::ALL);
        assert_eq!(avg.average, None);
        assert_eq!(avg.out_of_range, 0);
    }
}
