//! RGB color type, hex conversion, and channel transforms.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A color string that is not a well-formed 6-digit hex value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed color value: {value:?} (expected 6 hex digits with an optional leading '#')")]
pub struct MalformedColor {
    /// The rejected input, verbatim.
    pub value: String,
}

impl MalformedColor {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, case-insensitive, with an optional leading
    /// `#`.
    pub fn parse_hex(input: &str) -> Result<Self, MalformedColor> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(MalformedColor::new(input));
        }
        let channel = |group: &str| {
            u8::from_str_radix(group, 16).map_err(|_| MalformedColor::new(input))
        };
        Ok(Self::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ))
    }

    /// Format as a lowercase, zero-padded, `#`-prefixed hex string.
    ///
    /// Parsing the result back yields the same color.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Move each channel toward white by `fraction` of its remaining range.
    ///
    /// Fractions outside (0, 1] are accepted; the result saturates at the
    /// channel bounds.
    #[must_use]
    pub fn lighten(self, fraction: f64) -> Self {
        self.map_channels(|channel| channel + (255.0 - channel) * fraction)
    }

    /// Move each channel toward black by `fraction` of its current value.
    #[must_use]
    pub fn darken(self, fraction: f64) -> Self {
        self.map_channels(|channel| channel * (1.0 - fraction))
    }

    // Integer channel convention: clamp to the byte range, then truncate
    // toward zero.
    fn map_channels(self, transform: impl Fn(f64) -> f64) -> Self {
        let apply = |channel: u8| transform(f64::from(channel)).clamp(0.0, 255.0) as u8;
        Self::new(apply(self.r), apply(self.g), apply(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = MalformedColor;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(input)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse_hex(&value).map_err(serde::de::Error::custom)
    }
}
