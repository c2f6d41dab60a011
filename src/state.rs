//! Reactive wrapper around [`ColorModel`] shared by the picker's views.
//!
//! The square, the hue track, and the hex entry all go through one model,
//! so the drag gesture, the disabled flag, and the touched callback behave
//! the same whichever part the user interacts with. The working color is
//! mirrored into an `RwSignal<Hsb>` that views and host sync effects read.

use std::cell::RefCell;
use std::rc::Rc;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::accessor::{ColorModel, ValueAccessor};
use crate::color::{ColorValue, Hsb};
use crate::config::PickerConfig;

type TouchedCallback = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

#[derive(Clone)]
pub(crate) struct PickerState {
    pub(crate) hsb: RwSignal<Hsb>,
    pub(crate) disabled: RwSignal<bool>,
    model: Rc<RefCell<ColorModel>>,
    on_touched: TouchedCallback,
}

impl PickerState {
    pub(crate) fn new(hsb: RwSignal<Hsb>, disabled: RwSignal<bool>, config: &PickerConfig) -> Self {
        let mut model = ColorModel::new(config);
        model.set_value(Some(ColorValue::Hsb(hsb.get_untracked())));
        model.set_disabled(disabled.get_untracked());
        let model = Rc::new(RefCell::new(model));

        // hsb → model, for writes that did not come from a drag
        let synced = model.clone();
        create_effect(move |_| {
            let value = hsb.get();
            let mut model = synced.borrow_mut();
            if model.hsb() != value {
                model.set_value(Some(ColorValue::Hsb(value)));
            }
        });

        let synced = model.clone();
        create_effect(move |_| {
            let disabled = disabled.get();
            synced.borrow_mut().set_disabled(disabled);
        });

        Self {
            hsb,
            disabled,
            model,
            on_touched: Rc::new(RefCell::new(None)),
        }
    }

    /// Register the callback fired when any part of the picker gains focus.
    pub(crate) fn on_touched(&self, callback: impl FnMut() + 'static) {
        *self.on_touched.borrow_mut() = Some(Box::new(callback));
    }

    /// Start a saturation/brightness drag. Returns `false` while disabled.
    pub(crate) fn press_selector(&self, offset_x: f64, offset_y: f64) -> bool {
        let picked = {
            let mut model = self.model.borrow_mut();
            model
                .selector_pressed(offset_x, offset_y)
                .then(|| model.hsb())
        };
        self.publish(picked)
    }

    /// Start a hue drag. Returns `false` while disabled.
    pub(crate) fn press_hue(&self, offset_y: f64) -> bool {
        let picked = {
            let mut model = self.model.borrow_mut();
            model.hue_pressed(offset_y).then(|| model.hsb())
        };
        self.publish(picked)
    }

    /// Continue the active drag, if any.
    pub(crate) fn drag(&self, offset_x: f64, offset_y: f64) {
        let picked = {
            let mut model = self.model.borrow_mut();
            model.dragging().map(|_| {
                model.pointer_moved(offset_x, offset_y);
                model.hsb()
            })
        };
        self.publish(picked);
    }

    pub(crate) fn release(&self) {
        self.model.borrow_mut().pointer_released();
    }

    pub(crate) fn touch(&self) {
        tracing::trace!("picker touched");
        if let Some(cb) = self.on_touched.borrow_mut().as_mut() {
            cb();
        }
    }

    // The model borrow must be released before the signal write: the
    // hsb → model effect runs synchronously.
    fn publish(&self, picked: Option<Hsb>) -> bool {
        match picked {
            Some(value) => {
                if self.hsb.get_untracked() != value {
                    self.hsb.set(value);
                }
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::math;

    fn state(disabled: bool) -> PickerState {
        let config = PickerConfig::default();
        PickerState::new(
            RwSignal::new(config.default_color.to_hsb()),
            RwSignal::new(disabled),
            &config,
        )
    }

    #[test]
    fn presses_follow_disabled_signal_at_runtime() {
        let state = state(false);
        assert!(state.press_selector(0.0, 150.0));
        state.release();
        assert_eq!(state.hsb.get_untracked().b, 0.0);

        state.disabled.set(true);
        assert!(!state.press_selector(150.0, 0.0));
        assert!(!state.press_hue(75.0));
        assert_eq!(state.hsb.get_untracked().b, 0.0);

        state.disabled.set(false);
        assert!(state.press_hue(75.0));
        assert_eq!(state.hsb.get_untracked(), Hsb::new(180.0, 100.0, 100.0));
    }

    #[test]
    fn disabling_mid_drag_drops_the_gesture() {
        let state = state(false);
        assert!(state.press_selector(75.0, 75.0));
        state.disabled.set(true);
        state.disabled.set(false);
        let before = state.hsb.get_untracked();
        state.drag(0.0, 0.0);
        assert_eq!(state.hsb.get_untracked(), before);
    }

    #[test]
    fn selector_drag_uses_hue_written_through_signal() {
        let state = state(false);
        state.hsb.set(Hsb::new(200.0, 50.0, 50.0));
        assert!(state.press_selector(0.0, 0.0));
        state.drag(150.0, 75.0);
        state.release();
        assert_eq!(state.hsb.get_untracked(), math::pointer_to_hsb(200.0, 150.0, 75.0));

        state.drag(0.0, 150.0);
        assert_eq!(state.hsb.get_untracked().s, 100.0);
    }

    #[test]
    fn hue_press_at_top_keeps_360() {
        let state = state(false);
        assert!(state.press_hue(0.0));
        assert_eq!(state.hsb.get_untracked().h, 360.0);
    }

    #[test]
    fn touch_runs_registered_callback() {
        let state = state(true);
        let touched = Rc::new(Cell::new(0));
        let counter = touched.clone();
        state.touch();
        state.on_touched(move || counter.set(counter.get() + 1));
        state.touch();
        state.clone().touch();
        assert_eq!(touched.get(), 2);
    }
}
