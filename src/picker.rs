//! Picker assembly: a swatch that toggles a panel holding the
//! saturation/brightness square, the hue track, and the hex row.
//!
//! The working value is an `RwSignal<Hsb>` owned by [`PickerState`]. Two
//! effects keep it in sync with the host's `RwSignal<ColorValue>`,
//! converting through the configured output format.

use floem::event::EventPropagation;
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::{ColorValue, Hsb};
use crate::config::PickerConfig;
use crate::constants;
#[cfg(feature = "clipboard")]
use crate::inputs::copy_button;
use crate::inputs::hex_input;
use crate::hue_track::hue_track;
use crate::math;
use crate::panel::{Panel, PanelKey};
use crate::selector::selector_square;
use crate::state::PickerState;

fn panel_key(key: &Key) -> Option<PanelKey> {
    match key {
        Key::Named(NamedKey::Space) => Some(PanelKey::Space),
        Key::Named(NamedKey::Escape) => Some(PanelKey::Escape),
        Key::Named(NamedKey::Tab) => Some(PanelKey::Tab),
        _ => None,
    }
}

fn hsb_color(hsb: Hsb) -> Color {
    let rgb = math::hsb_to_rgb(hsb);
    Color::rgb8(rgb.r, rgb.g, rgb.b)
}

pub(crate) fn color_picker(
    value: RwSignal<ColorValue>,
    disabled: RwSignal<bool>,
    config: PickerConfig,
    on_touched: impl FnMut() + 'static,
) -> impl IntoView {
    let format = config.format;
    let inline = config.inline;

    let hsb = RwSignal::new(value.get_untracked().to_hsb());
    let state = PickerState::new(hsb, disabled, &config);
    state.on_touched(on_touched);
    let panel = RwSignal::new(if inline {
        Panel::inline()
    } else {
        Panel::popup()
    });

    // hsb → host value
    create_effect(move |_| {
        let current = hsb.get();
        let host = value.get_untracked();
        if host.to_hsb() == current {
            return;
        }
        let emitted = ColorValue::from_hsb(current, format);
        if host != emitted {
            tracing::debug!(value = %emitted, "color changed");
            value.set(emitted);
        }
    });

    // host value → hsb, unless it is what we just emitted
    create_effect(move |_| {
        let external = value.get();
        let current = hsb.get_untracked();
        if ColorValue::from_hsb(current, format) == external {
            return;
        }
        let next = external.to_hsb();
        if next != current {
            tracing::debug!(value = %external, "value written by host");
            hsb.set(next);
        }
    });

    let swatch = empty()
        .keyboard_navigable()
        .style(move |s| {
            s.width(constants::SWATCH_SIZE)
                .height(constants::SWATCH_SIZE)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(hsb_color(hsb.get()))
                .apply_if(inline, |s| s.display(floem::taffy::Display::None))
                .apply_if(!disabled.get(), |s| s.cursor(floem::style::CursorStyle::Pointer))
        })
        .on_click_stop(move |_| {
            if disabled.get_untracked() {
                return;
            }
            panel.update(|p| p.toggle());
        })
        .on_event_cont(floem::event::EventListener::FocusGained, {
            let state = state.clone();
            move |_| state.touch()
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if disabled.get_untracked() {
                return EventPropagation::Continue;
            }
            if let floem::event::Event::KeyDown(ke) = e {
                if let Some(key) = panel_key(&ke.key.logical_key) {
                    let mut suppress = false;
                    panel.update(|p| suppress = p.handle_key(key));
                    if suppress {
                        return EventPropagation::Stop;
                    }
                }
            }
            EventPropagation::Continue
        });

    let panel_view = v_stack((
        h_stack((selector_square(state.clone()), hue_track(state.clone())))
            .style(|s| s.gap(constants::GAP)),
        h_stack((
            hex_input(state),
            #[cfg(feature = "clipboard")]
            copy_button(move || ColorValue::from_hsb(hsb.get_untracked(), format).to_string()),
        ))
        .style(|s| s.gap(constants::GAP).items_center()),
    ))
    .style(move |s| {
        let p = panel.get();
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200))
            .background(Color::rgb8(242, 242, 242))
            .z_index(p.z_index() as i32)
            .apply_if(!p.is_inline(), |s| {
                s.absolute()
                    .inset_top(constants::SWATCH_SIZE + 4.0)
                    .inset_left(0.0)
            })
            .apply_if(!p.is_visible(), |s| s.display(floem::taffy::Display::None))
    });

    v_stack((swatch, panel_view)).style(|s| s.gap(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_panel_keys() {
        assert_eq!(panel_key(&Key::Named(NamedKey::Space)), Some(PanelKey::Space));
        assert_eq!(panel_key(&Key::Named(NamedKey::Escape)), Some(PanelKey::Escape));
        assert_eq!(panel_key(&Key::Named(NamedKey::Tab)), Some(PanelKey::Tab));
        assert_eq!(panel_key(&Key::Named(NamedKey::Enter)), None);
    }
}
