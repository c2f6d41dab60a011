//! # floem-hsb-picker
//!
//! An HSB color picker widget for [Floem](https://github.com/lapce/floem),
//! plus the conversion core it is built on.
//!
//! The picker has a 150×150 saturation/brightness square, a vertical hue
//! track, and a hex entry. Its value is a [`ColorValue`] in the configured
//! [`OutputFormat`] (hex, RGB, or HSB).
//!
//! The conversion functions in [`math`] and the headless [`ColorModel`] do
//! not depend on a running UI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsb_picker::{color_picker, ColorValue, Hex, PickerConfig};
//!
//! let value = RwSignal::new(ColorValue::Hex(Hex::parse("3b82f6").unwrap()));
//! // Use `color_picker(value, PickerConfig::default())` in your Floem view tree.
//! ```

mod accessor;
mod color;
mod config;
mod constants;
mod error;
mod hue_track;
mod inputs;
pub mod math;
mod panel;
mod picker;
mod selector;
mod state;

pub use accessor::{ColorModel, DragTarget, ValueAccessor};
pub use color::{ColorValue, Hex, Hsb, OutputFormat, Rgb};
pub use config::PickerConfig;
pub use error::ColorError;
pub use math::{
    clamp_hsb, clamp_rgb, hex_to_hsb, hex_to_rgb, hsb_to_hex, hsb_to_rgb, pad_hex, rgb_to_hex,
    rgb_to_hsb,
};
pub use panel::{next_z_index, Panel, PanelKey};

#[cfg(feature = "clipboard")]
use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
#[cfg(feature = "clipboard")]
use floem::text::FONT_SYSTEM;

#[cfg(feature = "clipboard")]
static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the color picker view.
///
/// The picker reads from and writes to `value`. External changes to the
/// signal are reflected in the UI, and user edits write a value in
/// `config.format`. `config.disabled` fixes the disabled state for the
/// picker's lifetime; use [`color_picker_with`] to toggle it at runtime.
pub fn color_picker(value: RwSignal<ColorValue>, config: PickerConfig) -> impl IntoView {
    let disabled = RwSignal::new(config.disabled);
    color_picker_with(value, disabled, config, || {})
}

/// Creates the color picker view with a runtime `disabled` signal and a
/// callback fired whenever the swatch or the hex entry gains focus.
///
/// `disabled` takes precedence over `config.disabled`.
pub fn color_picker_with(
    value: RwSignal<ColorValue>,
    disabled: RwSignal<bool>,
    config: PickerConfig,
    on_touched: impl FnMut() + 'static,
) -> impl IntoView {
    #[cfg(feature = "clipboard")]
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::color_picker(value, disabled, config, on_touched)
}
