//! Seed color parsing and normalization

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ColorError, Result};

/// The user-chosen accent color every palette entry is derived from.
///
/// Always opaque. A translucent input such as `#80112233` is accepted and its
/// alpha byte replaced with `0xFF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeedColor(Color);

impl SeedColor {
    pub const fn new(color: Color) -> Self {
        Self(color)
    }

    pub const fn color(self) -> Color {
        self.0
    }

    /// Packed ARGB, alpha always `0xFF`
    pub const fn argb(self) -> u32 {
        self.0.to_argb()
    }
}

/// Parse a user supplied hex string into a [`SeedColor`].
///
/// Surrounding whitespace and one leading `#` are ignored. The remainder must
/// be exactly 6 (`RRGGBB`) or 8 (`AARRGGBB`) hex digits, in either case.
pub fn validate_and_normalize(raw_hex: &str) -> Result<SeedColor> {
    let trimmed = raw_hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let invalid = || ColorError::InvalidColorFormat {
        input: digits.to_string(),
    };

    if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    let seed = SeedColor(Color::from_argb(value));
    tracing::debug!(input = raw_hex, seed = %seed, "seed color normalized");
    Ok(seed)
}

impl FromStr for SeedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        validate_and_normalize(s)
    }
}

impl TryFrom<String> for SeedColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        validate_and_normalize(&value)
    }
}

impl From<SeedColor> for String {
    fn from(seed: SeedColor) -> Self {
        seed.0.to_hex_argb()
    }
}

impl From<SeedColor> for Color {
    fn from(seed: SeedColor) -> Self {
        seed.0
    }
}

impl fmt::Display for SeedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex_argb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_six_and_eight_digit_forms() {
        for input in ["#FF0000", "00FF00", "#80112233", "  #6200ee  ", "ff6200EE"] {
            assert!(
                validate_and_normalize(input).is_ok(),
                "expected `{input}` to parse"
            );
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["12345", "GGHHII", "#1234567", "", "#", "##FF0000", "+12345"] {
            assert!(
                matches!(
                    validate_and_normalize(input),
                    Err(ColorError::InvalidColorFormat { .. })
                ),
                "expected `{input}` to be rejected"
            );
        }
    }

    #[test]
    fn error_carries_normalized_input() {
        let err = validate_and_normalize("  #GGHHII ").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorFormat {
                input: "GGHHII".to_string()
            }
        );
    }

    #[test]
    fn six_digits_are_implicitly_opaque() {
        let seed = validate_and_normalize("#6200EE").unwrap();
        assert_eq!(seed.argb(), 0xFF62_00EE);
        assert_eq!(seed.to_string(), "#FF6200EE");
    }

    #[test]
    fn alpha_is_normalized_to_opaque() {
        let seed = validate_and_normalize("#80112233").unwrap();
        assert_eq!(seed.argb(), 0xFF11_2233);
        assert_eq!(seed.color().to_hex_rgb(), "#112233");
    }

    #[test]
    fn rgb_digits_survive_rendering() {
        for input in ["a1b2c3", "#00FF7f", "#FE010203", "ffffff"] {
            let seed = validate_and_normalize(input).unwrap();
            let digits = input.trim_start_matches('#');
            let rgb = &digits[digits.len() - 6..];
            let rendered = seed.color().to_hex_rgb();
            assert_eq!(&rendered[1..], rgb.to_ascii_uppercase().as_str());
        }
    }

    #[test]
    fn serde_uses_hex_strings() {
        let seed: SeedColor = serde_json::from_str("\"#6200EE\"").unwrap();
        assert_eq!(serde_json::to_string(&seed).unwrap(), "\"#FF6200EE\"");
        assert!(serde_json::from_str::<SeedColor>("\"nope\"").is_err());
    }
}
