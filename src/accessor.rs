//! Headless picker state and the value-accessor protocol the host form uses
//! to read, write, and observe it.
//!
//! [`ColorModel`] owns the working HSB value and the active drag gesture.
//! The Floem views in this crate drive one shared `ColorModel`. Hosts that
//! draw their own UI can drive a `ColorModel` directly.

use std::fmt;

use crate::color::{ColorValue, Hex, Hsb, OutputFormat};
use crate::config::PickerConfig;
use crate::math;

/// Two-way binding between a control and the form value it edits.
pub trait ValueAccessor {
    type Value;

    /// Write a value from the host. `None` resets to the control's default.
    /// Does not notify the change callback.
    fn set_value(&mut self, value: Option<Self::Value>);

    /// The current value in the host's format.
    fn get_value(&self) -> Self::Value;

    /// Register the callback fired whenever the user changes the value.
    fn on_change(&mut self, callback: Box<dyn FnMut(&Self::Value)>);

    /// Register the callback fired when the control is touched (focused).
    fn on_touched(&mut self, callback: Box<dyn FnMut()>);

    fn set_disabled(&mut self, disabled: bool);
}

/// Which part of the picker a drag gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Hue,
    Selector,
}

pub struct ColorModel {
    hsb: Hsb,
    format: OutputFormat,
    default_color: Hex,
    disabled: bool,
    drag: Option<DragTarget>,
    on_change: Option<Box<dyn FnMut(&ColorValue)>>,
    on_touched: Option<Box<dyn FnMut()>>,
}

impl ColorModel {
    /// Create a model holding the configured default color.
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            hsb: config.default_color.to_hsb(),
            format: config.format,
            default_color: config.default_color.clone(),
            disabled: config.disabled,
            drag: None,
            on_change: None,
            on_touched: None,
        }
    }

    /// The working HSB value.
    pub fn hsb(&self) -> Hsb {
        self.hsb
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn dragging(&self) -> Option<DragTarget> {
        self.drag
    }

    /// Start a hue drag at `offset_y` from the top of the hue track.
    ///
    /// Returns `false` (and changes nothing) while disabled.
    pub fn hue_pressed(&mut self, offset_y: f64) -> bool {
        if self.disabled {
            return false;
        }
        self.drag = Some(DragTarget::Hue);
        self.pick_hue(offset_y);
        true
    }

    /// Start a saturation/brightness drag at `(offset_x, offset_y)` inside
    /// the selector square.
    pub fn selector_pressed(&mut self, offset_x: f64, offset_y: f64) -> bool {
        if self.disabled {
            return false;
        }
        self.drag = Some(DragTarget::Selector);
        self.pick_selector(offset_x, offset_y);
        true
    }

    /// Continue the active drag. Offsets are relative to the element the
    /// drag started on; the x offset is ignored for hue drags.
    pub fn pointer_moved(&mut self, offset_x: f64, offset_y: f64) {
        match self.drag {
            Some(DragTarget::Hue) => self.pick_hue(offset_y),
            Some(DragTarget::Selector) => self.pick_selector(offset_x, offset_y),
            None => {}
        }
    }

    pub fn pointer_released(&mut self) {
        self.drag = None;
    }

    /// Mark the control as touched.
    pub fn touch(&mut self) {
        if let Some(cb) = self.on_touched.as_mut() {
            cb();
        }
    }

    /// Handle position `(left, top)` in the selector square.
    pub fn selector_handle(&self) -> (f64, f64) {
        math::selector_handle(self.hsb)
    }

    /// Handle offset from the top of the hue track.
    pub fn hue_handle(&self) -> f64 {
        math::hue_handle(self.hsb)
    }

    /// The current color as hex, for swatches.
    pub fn swatch(&self) -> Hex {
        math::hsb_to_hex(self.hsb)
    }

    /// Fully saturated, fully bright color at the current hue, used behind
    /// the selector square.
    pub fn selector_background(&self) -> Hex {
        math::hsb_to_hex(Hsb::new(self.hsb.h, 100.0, 100.0))
    }

    fn pick_hue(&mut self, offset_y: f64) {
        self.hsb = math::pointer_to_hue(offset_y);
        tracing::trace!(h = self.hsb.h, "hue picked");
        self.emit_change();
    }

    fn pick_selector(&mut self, offset_x: f64, offset_y: f64) {
        self.hsb = math::pointer_to_hsb(self.hsb.h, offset_x, offset_y);
        tracing::trace!(s = self.hsb.s, b = self.hsb.b, "saturation/brightness picked");
        self.emit_change();
    }

    fn emit_change(&mut self) {
        let value = self.get_value();
        if let Some(cb) = self.on_change.as_mut() {
            cb(&value);
        }
    }
}

impl ValueAccessor for ColorModel {
    type Value = ColorValue;

    fn set_value(&mut self, value: Option<ColorValue>) {
        self.hsb = match value {
            Some(value) => value.to_hsb(),
            None => self.default_color.to_hsb(),
        };
        tracing::debug!(h = self.hsb.h, s = self.hsb.s, b = self.hsb.b, "value written");
    }

    fn get_value(&self) -> ColorValue {
        ColorValue::from_hsb(self.hsb, self.format)
    }

    fn on_change(&mut self, callback: Box<dyn FnMut(&ColorValue)>) {
        self.on_change = Some(callback);
    }

    fn on_touched(&mut self, callback: Box<dyn FnMut()>) {
        self.on_touched = Some(callback);
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.drag = None;
        }
    }
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}

impl fmt::Debug for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorModel")
            .field("hsb", &self.hsb)
            .field("format", &self.format)
            .field("disabled", &self.disabled)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::color::Rgb;

    fn recording_model(format: OutputFormat) -> (ColorModel, Rc<RefCell<Vec<ColorValue>>>) {
        let mut model = ColorModel::new(&PickerConfig::default().with_format(format));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        model.on_change(Box::new(move |v: &ColorValue| sink.borrow_mut().push(v.clone())));
        (model, seen)
    }

    #[test]
    fn starts_at_default_color() {
        let model = ColorModel::default();
        assert_eq!(model.get_value(), ColorValue::Hex(Hex::parse("ffffff").unwrap()));
    }

    #[test]
    fn set_none_loads_default() {
        let mut model = ColorModel::default();
        model.set_value(Some(ColorValue::Rgb(Rgb::new(10, 20, 30))));
        model.set_value(None);
        assert_eq!(model.swatch().as_str(), "ffffff");
    }

    #[test]
    fn set_value_converts_any_variant_to_output_format() {
        let mut model = ColorModel::new(&PickerConfig::default().with_format(OutputFormat::Rgb));
        model.set_value(Some(ColorValue::Hex(Hex::parse("#00ff00").unwrap())));
        assert_eq!(model.get_value(), ColorValue::Rgb(Rgb::new(0, 255, 0)));
        assert_eq!(model.hsb(), Hsb::new(120.0, 100.0, 100.0));
    }

    #[test]
    fn set_value_does_not_notify() {
        let (mut model, seen) = recording_model(OutputFormat::Hex);
        model.set_value(Some(ColorValue::Rgb(Rgb::new(1, 2, 3))));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn hue_press_resets_saturation_and_brightness() {
        let (mut model, seen) = recording_model(OutputFormat::Hsb);
        model.set_value(Some(ColorValue::Hsb(Hsb::new(0.0, 10.0, 10.0))));
        assert!(model.hue_pressed(75.0));
        assert_eq!(model.hsb(), Hsb::new(180.0, 100.0, 100.0));
        assert_eq!(model.dragging(), Some(DragTarget::Hue));
        assert_eq!(
            seen.borrow().as_slice(),
            &[ColorValue::Hsb(Hsb::new(180.0, 100.0, 100.0))]
        );
    }

    #[test]
    fn selector_drag_keeps_hue_and_emits_each_move() {
        let (mut model, seen) = recording_model(OutputFormat::Hex);
        model.hue_pressed(150.0);
        model.pointer_released();
        assert!(model.selector_pressed(150.0, 0.0));
        model.pointer_moved(0.0, 0.0);
        model.pointer_moved(150.0, 150.0);
        model.pointer_released();
        model.pointer_moved(75.0, 75.0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[1].to_string(), "#ff0000");
        assert_eq!(seen[2].to_string(), "#ffffff");
        assert_eq!(seen[3].to_string(), "#000000");
        assert_eq!(model.dragging(), None);
    }

    #[test]
    fn disabled_model_ignores_presses() {
        let (mut model, seen) = recording_model(OutputFormat::Hex);
        model.set_disabled(true);
        assert!(!model.hue_pressed(10.0));
        assert!(!model.selector_pressed(10.0, 10.0));
        model.pointer_moved(10.0, 10.0);
        assert!(seen.borrow().is_empty());
        assert_eq!(model.swatch().as_str(), "ffffff");
    }

    #[test]
    fn disabling_ends_active_drag() {
        let mut model = ColorModel::default();
        model.selector_pressed(10.0, 10.0);
        model.set_disabled(true);
        assert_eq!(model.dragging(), None);
        assert!(model.is_disabled());
    }

    #[test]
    fn touch_fires_touched_callback() {
        let mut model = ColorModel::default();
        let touched = Rc::new(Cell::new(0));
        let counter = touched.clone();
        model.on_touched(Box::new(move || counter.set(counter.get() + 1)));
        model.touch();
        model.touch();
        assert_eq!(touched.get(), 2);
    }

    #[test]
    fn handles_follow_value() {
        let mut model = ColorModel::default();
        model.set_value(Some(ColorValue::Hsb(Hsb::new(180.0, 50.0, 50.0))));
        assert_eq!(model.selector_handle(), (75.0, 75.0));
        assert_eq!(model.hue_handle(), 75.0);
        assert_eq!(model.selector_background().as_str(), "00ffff");
    }

    #[test]
    fn format_can_change_after_construction() {
        let mut model = ColorModel::default();
        model.set_format(OutputFormat::Rgb);
        assert_eq!(model.get_value(), ColorValue::Rgb(Rgb::new(255, 255, 255)));
    }
}
