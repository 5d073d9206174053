//! Ship color chosen on the start screen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SHIP_COLOR;

/// 24-bit RGB color, stored as 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShipColor(u32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color must look like #rrggbb, got {0:?}")]
    BadFormat(String),
    #[error("invalid hex digits in color {0:?}")]
    BadHex(String),
}

impl ShipColor {
    pub fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub fn rgb(self) -> u32 {
        self.0
    }

    /// Split into (r, g, b) channels.
    pub fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl Default for ShipColor {
    fn default() -> Self {
        Self(DEFAULT_SHIP_COLOR)
    }
}

impl fmt::Display for ShipColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for ShipColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::BadFormat(s.to_string()))?;
        if hex.len() != 6 {
            return Err(ColorParseError::BadFormat(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadHex(s.to_string()));
        }
        let rgb = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::BadHex(s.to_string()))?;
        Ok(Self(rgb))
    }
}

impl TryFrom<String> for ShipColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShipColor> for String {
    fn from(color: ShipColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_html_color() {
        let color: ShipColor = "#ff8800".parse().unwrap();
        assert_eq!(color.rgb(), 0xff8800);
        assert_eq!(color.channels(), (0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let color: ShipColor = "#00FFff".parse().unwrap();
        assert_eq!(color, ShipColor::default());
    }

    #[test]
    fn test_rejects_missing_hash_and_bad_length() {
        assert!(matches!(
            "00ffff".parse::<ShipColor>(),
            Err(ColorParseError::BadFormat(_))
        ));
        assert!(matches!(
            "#0ff".parse::<ShipColor>(),
            Err(ColorParseError::BadFormat(_))
        ));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(matches!(
            "#zzzzzz".parse::<ShipColor>(),
            Err(ColorParseError::BadHex(_))
        ));
    }

    #[test]
    fn test_display_and_serde_use_html_form() {
        let color = ShipColor::from_rgb(0x12ab34);
        assert_eq!(color.to_string(), "#12ab34");
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#12ab34\"");
        let back: ShipColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
