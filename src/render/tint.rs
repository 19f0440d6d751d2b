//! Water tint for the window background

/// Murky water at clarity 0
pub const DIRTY_WATER: [u8; 3] = [92, 64, 38];
/// Clear water at clarity 1
pub const CLEAR_WATER: [u8; 3] = [64, 164, 223];

/// Interpolate the water colour for a clarity in `[0, 1]`
pub fn water_color(clarity: f64) -> [u8; 3] {
    let t = clarity.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let from = DIRTY_WATER[i] as f64;
        let to = CLEAR_WATER[i] as f64;
        *channel = (from + (to - from) * t).round() as u8;
    }
    out
}

/// Water colour as a linear-space wgpu clear colour
pub fn water_clear_color(clarity: f64) -> wgpu::Color {
    let [r, g, b] = water_color(clarity);
    wgpu::Color {
        r: srgb_to_linear(r),
        g: srgb_to_linear(g),
        b: srgb_to_linear(b),
        a: 1.0,
    }
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(water_color(0.0), DIRTY_WATER);
        assert_eq!(water_color(1.0), CLEAR_WATER);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(water_color(-1.0), DIRTY_WATER);
        assert_eq!(water_color(3.0), CLEAR_WATER);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(water_color(0.5), [78, 114, 131]);
    }

    #[test]
    fn test_clear_color_is_linear() {
        let color = water_clear_color(1.0);
        assert!(color.b > color.g && color.g > color.r);
        assert!(color.b < 223.0 / 255.0);
        assert_eq!(color.a, 1.0);
    }
}
