//! Pure color transforms
//!
//! Every function here is total over 8-bit channels and returns an opaque
//! color. Factors and ratios outside `[0, 1]` are clamped.
//!
//! Two brightness shifts exist and are deliberately named apart:
//!
//! - [`shift_additive`] moves each channel toward white or black by a fixed
//!   delta of `round(255 * factor)`. Every derived accent uses this one.
//! - [`shift_multiplicative`] scales each channel by `factor`.

use crate::color::Color;

/// Perceptual luma weights (BT.601) in permille, not CIE luminance
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// Half of the maximum weighted luma, `255 * 1000 / 2`
const LIGHT_THRESHOLD: u32 = 127_500;

/// Move every channel toward 255 (`lighter`) or toward 0 by `round(255 * factor)`.
pub fn shift_additive(color: Color, factor: f32, lighter: bool) -> Color {
    let delta = (255.0 * factor.clamp(0.0, 1.0)).round() as i16;
    let delta = if lighter { delta } else { -delta };
    map_channels(color, |c| (i16::from(c) + delta).clamp(0, 255) as u8)
}

/// Scale every channel by `factor`, clamped to `[0, 255]`.
///
/// Unlike [`shift_additive`] the factor is not limited to `[0, 1]`; values
/// above one brighten.
pub fn shift_multiplicative(color: Color, factor: f32) -> Color {
    let factor = factor.max(0.0);
    map_channels(color, |c| (f32::from(c) * factor).round().clamp(0.0, 255.0) as u8)
}

/// Rotate the hue by `degrees` in HSV space. Saturation and value are kept.
pub fn rotate_hue(color: Color, degrees: f32) -> Color {
    let (h, s, v) = to_hsv(color);
    from_hsv((h + degrees).rem_euclid(360.0), s, v)
}

/// Multiply the HSV saturation by `factor`.
pub fn desaturate(color: Color, factor: f32) -> Color {
    let (h, s, v) = to_hsv(color);
    from_hsv(h, s * factor.clamp(0.0, 1.0), v)
}

/// Per-channel linear interpolation: `round(a * ratio + b * (1 - ratio))`.
pub fn blend(a: Color, b: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| {
        (f32::from(x) * ratio + f32::from(y) * (1.0 - ratio))
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Color::rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Weighted luma in `[0, 255_000]`
pub fn luma_permille(color: Color) -> u32 {
    LUMA_R * u32::from(color.r) + LUMA_G * u32::from(color.g) + LUMA_B * u32::from(color.b)
}

/// Darkness in `[0, 1]` from perceptual luma weights
pub fn darkness(color: Color) -> f32 {
    1.0 - luma_permille(color) as f32 / 255_000.0
}

/// A color is light when its darkness is strictly below one half.
///
/// Compared in integer permille so a darkness of exactly 0.5 is never
/// rounded onto the light side.
pub fn is_light(color: Color) -> bool {
    luma_permille(color) > LIGHT_THRESHOLD
}

/// Text color to draw on top of `background`: black on light, white on dark.
pub fn on_color(background: Color) -> Color {
    if is_light(background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

fn map_channels(color: Color, f: impl Fn(u8) -> u8) -> Color {
    Color::from_channels(color.channels().map(f))
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`
fn to_hsv(color: Color) -> (f32, f32, f32) {
    let r = f32::from(color.r) / 255.0;
    let g = f32::from(color.g) / 255.0;
    let b = f32::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

fn from_hsv(h: f32, s: f32, v: f32) -> Color {
    let c = v * s;
    let h_prime = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |channel: f32| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::rgb(to_u8(r), to_u8(g), to_u8(b))
}
