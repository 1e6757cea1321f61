//! Hue ramp used to color escaped points.

pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];

/// HSL to RGB via chroma and hue sextant.
///
/// `hue` is in degrees. Hues outside `[0, 360)` (including exactly 360) match
/// no sextant and contribute zero chroma, leaving the gray level `m`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&hue) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&hue) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&hue) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&hue) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&hue) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&hue) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    [to_channel(r + m), to_channel(g + m), to_channel(b + m)]
}

/// Clamped 8-bit store: round to nearest, ties to even.
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Color for a pixel that stopped with `remaining` iterations left.
pub fn escape_color(remaining: u32, max_iterations: u32) -> Rgba {
    if remaining == 0 || max_iterations == 0 {
        return BLACK;
    }
    let hue = (remaining as f64 / max_iterations as f64) * 360.0;
    let [r, g, b] = hsl_to_rgb(hue, 1.0, 0.5);
    [r, g, b, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(60.0, 1.0, 0.5), [255, 255, 0]);
        assert_eq!(hsl_to_rgb(180.0, 1.0, 0.5), [0, 255, 255]);
        assert_eq!(hsl_to_rgb(300.0, 1.0, 0.5), [255, 0, 255]);
    }

    #[test]
    fn half_channel_rounds_to_even() {
        // x = 0.5 -> 127.5 -> 128
        assert_eq!(hsl_to_rgb(30.0, 1.0, 0.5), [255, 128, 0]);
    }

    #[test]
    fn full_turn_is_outside_every_sextant() {
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), [0, 0, 0]);
    }

    #[test]
    fn interior_is_black() {
        assert_eq!(escape_color(0, 150), BLACK);
    }

    #[test]
    fn escaped_points_are_opaque() {
        for i in 1..=150 {
            assert_eq!(escape_color(i, 150)[3], 255);
        }
        assert_eq!(escape_color(75, 150), [0, 255, 255, 255]);
    }
}
