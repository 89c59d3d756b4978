//! Colors.

use crate::error::ConfigError;

/// An RGBA color with components between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgba(1., 1., 1., 1.);

    /// Opaque black.
    pub const BLACK: Color = Color::rgba(0., 0., 0., 1.);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Returns the same color with a different alpha value.
    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Color, ConfigError> {
        let digits = hex.trim().trim_start_matches('#');
        if (digits.len() != 6 && digits.len() != 8) || !digits.is_ascii() {
            return Err(ConfigError::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| f64::from(v) / 255.)
                .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
        };

        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 1. },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Color::from_hex("#ffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("000000").unwrap(), Color::BLACK);
        let c = Color::from_hex("#00000080").unwrap();
        assert!((c.a - 128. / 255.).abs() < 1e-9);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#ffffé").is_err());
    }
}
