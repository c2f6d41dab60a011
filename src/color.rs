//! Color value types: `Hex`, `Rgb`, `Hsb`, and the `ColorValue` union that
//! crosses the widget boundary.
//!
//! `Hsb` is the working representation. `Hex` and `Rgb` are interchange
//! formats selected by [`OutputFormat`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::math;

/// A 6-digit lowercase hex color without a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex(String);

impl Hex {
    /// Parse and normalize a hex string. Accepts an optional `#` and fewer
    /// than 6 digits (left-padded with `0`).
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        math::pad_hex(input)
    }

    /// Wraps digits that have already been validated and padded.
    pub(crate) fn from_normalized(digits: String) -> Self {
        Hex(digits)
    }

    /// The 6 hex digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits prefixed with `#`.
    pub fn to_css(&self) -> String {
        format!("#{}", self.0)
    }

    pub fn to_rgb(&self) -> Rgb {
        // Digits are validated on construction.
        Rgb::from_packed(u32::from_str_radix(&self.0, 16).unwrap_or(0))
    }

    pub fn to_hsb(&self) -> Hsb {
        math::rgb_to_hsb(self.to_rgb())
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::parse(s)
    }
}

impl TryFrom<String> for Hex {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hex::parse(&value)
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.0
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0xRRGGBB`. Bits above 23 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Channels as 0.0–1.0 floats, the form Floem colors take.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

/// Hue in degrees (0–360), saturation and brightness in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Hsb {
    /// Build a clamped HSB value.
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        math::clamp_hsb(h, s, b)
    }
}

/// Which shape the picker emits to its host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Hex,
    Rgb,
    Hsb,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Hex => "hex",
            OutputFormat::Rgb => "rgb",
            OutputFormat::Hsb => "hsb",
        })
    }
}

/// A color in any of the three supported shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorValue {
    Hex(Hex),
    Rgb(Rgb),
    Hsb(Hsb),
}

impl ColorValue {
    /// Express `hsb` in the requested format.
    pub fn from_hsb(hsb: Hsb, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Hex => ColorValue::Hex(math::hsb_to_hex(hsb)),
            OutputFormat::Rgb => ColorValue::Rgb(math::hsb_to_rgb(hsb)),
            OutputFormat::Hsb => ColorValue::Hsb(math::clamp_hsb(hsb.h, hsb.s, hsb.b)),
        }
    }

    /// Convert to the canonical, clamped HSB form.
    pub fn to_hsb(&self) -> Hsb {
        match self {
            ColorValue::Hex(hex) => hex.to_hsb(),
            ColorValue::Rgb(rgb) => math::rgb_to_hsb(*rgb),
            ColorValue::Hsb(hsb) => math::clamp_hsb(hsb.h, hsb.s, hsb.b),
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            ColorValue::Hex(_) => OutputFormat::Hex,
            ColorValue::Rgb(_) => OutputFormat::Rgb,
            ColorValue::Hsb(_) => OutputFormat::Hsb,
        }
    }

    /// Re-express this value in another format.
    pub fn convert(&self, format: OutputFormat) -> Self {
        if self.format() == format {
            return self.clone();
        }
        ColorValue::from_hsb(self.to_hsb(), format)
    }
}

impl From<Hex> for ColorValue {
    fn from(hex: Hex) -> Self {
        ColorValue::Hex(hex)
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        ColorValue::Rgb(rgb)
    }
}

impl From<Hsb> for ColorValue {
    fn from(hsb: Hsb) -> Self {
        ColorValue::Hsb(hsb)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex(hex) => write!(f, "#{hex}"),
            ColorValue::Rgb(rgb) => write!(f, "rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
            ColorValue::Hsb(hsb) => write!(
                f,
                "hsb({}, {}%, {}%)",
                hsb.h.round() as i64,
                hsb.s.round() as i64,
                hsb.b.round() as i64
            ),
        }
    }
}
