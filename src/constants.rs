//! Sizing, color, and styling constants for the picker.

/// Side of the saturation/brightness square and height of the hue track.
/// Pointer offsets are expressed in this range.
pub const SELECTOR_SIZE: f64 = 150.0;

/// Hue track width
pub const HUE_TRACK_WIDTH: f64 = 17.0;

/// Handle circle radius on the selector square
pub const HANDLE_RADIUS: f64 = 5.0;

/// Height of the hue track marker
pub const HUE_MARKER_HEIGHT: f64 = 4.0;

/// First z-index handed out is one above this
pub const BASE_Z_INDEX: u32 = 1111;

/// Color loaded when the host writes an empty value
pub const DEFAULT_COLOR: &str = "ffffff";

/// Border radius for swatches and panel
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the panel
pub const PADDING: f32 = 8.0;

/// Swatch size for the toggle button
pub const SWATCH_SIZE: f32 = 24.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;
