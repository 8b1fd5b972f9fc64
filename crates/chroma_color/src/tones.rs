//! Tone ramp generation
//!
//! A ramp holds 11 variants of one base color, keyed by the stops
//! `50, 100, 200, ..., 900, 950`. Stop 50 is the lightest, stop 950 the
//! darkest and stop 500 is the base color itself.
//!
//! The ramp is a linear approximation built on [`shift_additive`], not a
//! perceptually uniform tone model:
//!
//! | stop          | tone                                             |
//! |---------------|--------------------------------------------------|
//! | `t <= 100`    | lighten by `(1 - t / 100) * 0.8`                 |
//! | `100 < t < 500` | base color (the lightening factor is zero)     |
//! | `t >= 500`    | darken by `(t - 500) / 1000`                     |

use crate::color::Color;
use crate::seed::SeedColor;
use crate::transform::shift_additive;

/// Tone stops in ascending order
pub const TONE_STOPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Upper bound of the lightening factor at stop 0
const MAX_LIGHTEN: f32 = 0.8;

/// 11 tonal variants of one base color, in [`TONE_STOPS`] order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneRamp {
    tones: [Color; TONE_STOPS.len()],
}

impl ToneRamp {
    /// Tone for `stop`, or `None` if `stop` is not one of [`TONE_STOPS`]
    pub fn get(&self, stop: u16) -> Option<Color> {
        TONE_STOPS
            .iter()
            .position(|&s| s == stop)
            .map(|index| self.tones[index])
    }

    /// `(stop, tone)` pairs from lightest to darkest
    pub fn iter(&self) -> impl Iterator<Item = (u16, Color)> + '_ {
        TONE_STOPS.iter().copied().zip(self.tones.iter().copied())
    }

    pub fn tones(&self) -> &[Color] {
        &self.tones
    }
}

/// Derive the full ramp for `base`.
pub fn generate_tones(base: SeedColor) -> ToneRamp {
    let base = base.color();
    let ramp = ToneRamp {
        tones: TONE_STOPS.map(|stop| tone_for_stop(base, stop)),
    };
    tracing::trace!(?ramp, "tone ramp generated");
    ramp
}

/// Single tone for an arbitrary stop value
pub fn tone_for_stop(base: Color, stop: u16) -> Color {
    let t = f32::from(stop);
    if stop <= 100 {
        let f = t / 100.0;
        shift_additive(base, (1.0 - f) * MAX_LIGHTEN, true)
    } else if stop < 500 {
        // Mid band: the interpolation factor saturates at 1.0, so the
        // lightening contribution is zero and the base passes through.
        shift_additive(base, (1.0 - 1.0) * MAX_LIGHTEN, true)
    } else {
        shift_additive(base, (t - 500.0) / 1000.0, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::validate_and_normalize;
    use crate::transform::darkness;
    use pretty_assertions::assert_eq;

    fn ramp(hex: &str) -> ToneRamp {
        generate_tones(validate_and_normalize(hex).unwrap())
    }

    #[test]
    fn stop_500_is_the_base() {
        for hex in ["#6200EE", "#000000", "#FFFFFF", "#80FF8800", "123456"] {
            let seed = validate_and_normalize(hex).unwrap();
            assert_eq!(generate_tones(seed).get(500), Some(seed.color()));
        }
    }

    #[test]
    fn known_values_for_purple() {
        let ramp = ramp("#6200EE");
        // 50: lighten by 0.4 -> delta 102
        assert_eq!(ramp.get(50), Some(Color::rgb(0xC8, 0x66, 0xFF)));
        assert_eq!(ramp.get(100), Some(Color::rgb(0x62, 0x00, 0xEE)));
        assert_eq!(ramp.get(300), Some(Color::rgb(0x62, 0x00, 0xEE)));
        // 700: darken by 0.2 -> delta 51
        assert_eq!(ramp.get(700), Some(Color::rgb(0x2F, 0x00, 0xBB)));
        // 950: darken by 0.45 -> delta 115
        assert_eq!(ramp.get(950), Some(Color::rgb(0x00, 0x00, 0x7B)));
    }

    #[test]
    fn mid_band_passes_base_through() {
        let seed = validate_and_normalize("#336699").unwrap();
        let ramp = generate_tones(seed);
        for stop in [100, 200, 300, 400] {
            assert_eq!(ramp.get(stop), Some(seed.color()), "stop {stop}");
        }
    }

    #[test]
    fn tones_never_get_lighter_with_higher_stops() {
        for hex in ["#6200EE", "#FF0000", "#7F7F7F", "#FFFFFF", "#010203", "#00FF88"] {
            let ramp = ramp(hex);
            for pair in ramp.tones().windows(2) {
                assert!(
                    darkness(pair[0]) <= darkness(pair[1]),
                    "{hex}: {} is darker than {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn unknown_stop_is_none() {
        assert_eq!(ramp("#6200EE").get(550), None);
    }

    #[test]
    fn iter_is_in_stop_order() {
        let stops: Vec<u16> = ramp("#6200EE").iter().map(|(stop, _)| stop).collect();
        assert_eq!(stops, TONE_STOPS.to_vec());
    }
}
