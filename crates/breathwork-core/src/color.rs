//! RGB colors parsed from `#RRGGBB` hex strings.
//!
//! The state data file carries colors as hex strings; the bookend states
//! use the built-in [`Rgb::RED`] and [`Rgb::YELLOW`] constants.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when parsing a hex color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not of the form `#RRGGBB`
    #[error("color must be a #RRGGBB string, got {0:?}")]
    BadFormat(String),

    /// Input has the right shape but a non-hex digit
    #[error("color {0:?} contains a non-hex digit")]
    BadDigit(String),
}

/// A concrete RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    pub const YELLOW: Rgb = Rgb { r: 255, g: 255, b: 0 };

    /// Parse a `#RRGGBB` string. Case-insensitive.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorError::BadFormat(value.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::BadFormat(value.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::BadDigit(value.to_string()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Rgb::from_hex(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uppercase_and_lowercase() {
        assert_eq!(Rgb::from_hex("#FF0000").unwrap(), Rgb::RED);
        assert_eq!(Rgb::from_hex("#ffff00").unwrap(), Rgb::YELLOW);
        assert_eq!(
            Rgb::from_hex("#2E8B57").unwrap(),
            Rgb { r: 0x2E, g: 0x8B, b: 0x57 }
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(Rgb::from_hex("FF0000"), Err(ColorError::BadFormat(_))));
        assert!(matches!(Rgb::from_hex("#FF00"), Err(ColorError::BadFormat(_))));
        assert!(matches!(Rgb::from_hex("#FF0000AA"), Err(ColorError::BadFormat(_))));
        assert!(matches!(Rgb::from_hex("#GG0000"), Err(ColorError::BadDigit(_))));
        assert!(matches!(Rgb::from_hex(""), Err(ColorError::BadFormat(_))));
    }

    #[test]
    fn hex_roundtrip() {
        let color = Rgb { r: 1, g: 2, b: 254 };
        assert_eq!(Rgb::from_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::RED).unwrap();
        assert_eq!(json, "\"#FF0000\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::RED);
        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }
}
