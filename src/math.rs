//! Color math: hex/RGB/HSB conversions, range clamping, and the mapping
//! between pointer offsets on the picker and HSB values.
//!
//! Every function here is pure. HSB uses degrees for hue and percent for
//! saturation and brightness.

use crate::color::{Hex, Hsb, Rgb};
use crate::constants::SELECTOR_SIZE;
use crate::error::ColorError;

const HUE_MAX: f64 = 360.0;
const PERCENT_MAX: f64 = 100.0;
const CHANNEL_MAX: f64 = 255.0;
const HEX_DIGITS: usize = 6;

/// Clamp `value` into `[0, max]`; NaN collapses to 0.
fn clamp_to(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Clamp hue to 0–360 and saturation/brightness to 0–100.
///
/// The hue bound is inclusive: 360 survives clamping and is only folded
/// back to 0 by [`hsb_to_rgb`].
pub fn clamp_hsb(h: f64, s: f64, b: f64) -> Hsb {
    Hsb {
        h: clamp_to(h, HUE_MAX),
        s: clamp_to(s, PERCENT_MAX),
        b: clamp_to(b, PERCENT_MAX),
    }
}

/// Clamp each channel to 0–255.
pub fn clamp_rgb(r: i32, g: i32, b: i32) -> Rgb {
    Rgb {
        r: r.clamp(0, 255) as u8,
        g: g.clamp(0, 255) as u8,
        b: b.clamp(0, 255) as u8,
    }
}

/// Left-pad a hex string with `0` up to 6 digits and lowercase it.
///
/// A leading `#` is stripped. Non-hex characters and inputs longer than 6
/// digits are rejected.
pub fn pad_hex(input: &str) -> Result<Hex, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_format(
            input,
            format!("non-hex character '{bad}'"),
        ));
    }
    if digits.len() > HEX_DIGITS {
        return Err(ColorError::invalid_format(
            input,
            format!("expected at most {HEX_DIGITS} digits, got {}", digits.len()),
        ));
    }
    Ok(Hex::from_normalized(format!(
        "{:0>width$}",
        digits.to_ascii_lowercase(),
        width = HEX_DIGITS
    )))
}

/// Read `RRGGBB` (optionally `#`-prefixed, short input left-padded).
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    Ok(pad_hex(hex)?.to_rgb())
}

/// RGB → HSB.
///
/// Achromatic colors (zero saturation) carry a hue of -1 through the
/// sector scaling, which lands them on 300°.
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let r = rgb.r as f64;
    let g = rgb.g as f64;
    let b = rgb.b as f64;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max != 0.0 { PERCENT_MAX * delta / max } else { 0.0 };

    let mut h = if s == 0.0 {
        -1.0
    } else if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h *= 60.0;
    if h < 0.0 {
        h += HUE_MAX;
    }

    Hsb {
        h,
        s,
        b: max * PERCENT_MAX / CHANNEL_MAX,
    }
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, CHANNEL_MAX) as u8
}

/// HSB → RGB. The input is clamped first and a hue of 360 wraps to 0.
///
/// Saturation and brightness are quantized to the 0–255 scale before the
/// sector interpolation. Hue keeps its fractional part.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let Hsb { h, s, b } = clamp_hsb(hsb.h, hsb.s, hsb.b);
    let h = if h >= HUE_MAX { 0.0 } else { h };
    let s = (s * CHANNEL_MAX / PERCENT_MAX).round();
    let v = (b * CHANNEL_MAX / PERCENT_MAX).round();

    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let t1 = v;
        let t2 = (CHANNEL_MAX - s) * v / CHANNEL_MAX;
        let t3 = (t1 - t2) * (h % 60.0) / 60.0;
        if h < 60.0 {
            (t1, t2 + t3, t2)
        } else if h < 120.0 {
            (t1 - t3, t1, t2)
        } else if h < 180.0 {
            (t2, t1, t2 + t3)
        } else if h < 240.0 {
            (t2, t1 - t3, t1)
        } else if h < 300.0 {
            (t2 + t3, t2, t1)
        } else {
            (t1, t2, t1 - t3)
        }
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// RGB → lowercase `rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> Hex {
    Hex::from_normalized(format!("{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
}

pub fn hex_to_hsb(hex: &str) -> Result<Hsb, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsb)
}

pub fn hsb_to_hex(hsb: Hsb) -> Hex {
    rgb_to_hex(hsb_to_rgb(hsb))
}

fn clamp_offset(offset: f64) -> f64 {
    clamp_to(offset, SELECTOR_SIZE)
}

/// Map a vertical offset on the hue track to a fully saturated, fully
/// bright color. The top of the track is 360°, the bottom 0°.
pub fn pointer_to_hue(offset_y: f64) -> Hsb {
    let y = clamp_offset(offset_y);
    let h = (HUE_MAX * (SELECTOR_SIZE - y) / SELECTOR_SIZE).floor();
    clamp_hsb(h, PERCENT_MAX, PERCENT_MAX)
}

/// Map an offset inside the selector square to saturation (x) and
/// brightness (y, top is brightest), keeping `hue`.
pub fn pointer_to_hsb(hue: f64, offset_x: f64, offset_y: f64) -> Hsb {
    let x = clamp_offset(offset_x);
    let y = clamp_offset(offset_y);
    let s = (PERCENT_MAX * x / SELECTOR_SIZE).floor();
    let b = (PERCENT_MAX * (SELECTOR_SIZE - y) / SELECTOR_SIZE).floor();
    clamp_hsb(hue, s, b)
}

/// Handle position `(left, top)` inside the selector square.
pub fn selector_handle(hsb: Hsb) -> (f64, f64) {
    (
        (SELECTOR_SIZE * hsb.s / PERCENT_MAX).floor(),
        (SELECTOR_SIZE * (PERCENT_MAX - hsb.b) / PERCENT_MAX).floor(),
    )
}

/// Handle offset from the top of the hue track.
pub fn hue_handle(hsb: Hsb) -> f64 {
    (SELECTOR_SIZE - SELECTOR_SIZE * hsb.h / HUE_MAX).floor()
}
