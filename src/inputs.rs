//! Hex entry and copy-to-clipboard components.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate, SignalWith};

use crate::color::{Hex, Hsb};
use crate::constants;
use crate::math;
use crate::state::PickerState;

/// The color a typed hex value selects, or `None` when it already names
/// `current`. Grays and black keep the current hue.
fn typed_color(current: Hsb, hex: &Hex) -> Option<Hsb> {
    if *hex == math::hsb_to_hex(current) {
        return None;
    }
    let mut next = hex.to_hsb();
    if next.s <= 0.0 || next.b <= 0.0 {
        next.h = current.h;
    }
    Some(next)
}

/// Keep `text` and `hsb` in step.
///
/// A color moves into the text whenever the text names a different color.
/// A complete 6-digit entry moves back into `hsb` only when it names a color
/// other than the one `hsb` renders to, so drag values are never replaced by
/// their hex quantization.
fn bind_hex_text(hsb: RwSignal<Hsb>, text: RwSignal<String>, disabled: RwSignal<bool>) {
    create_effect(move |_| {
        let value = math::hsb_to_hex(hsb.get());
        if text.with_untracked(|t| *t == value.as_str()) {
            return;
        }
        text.set(value.to_string());
    });

    create_effect(move |_| {
        let raw = text.get();
        if disabled.get_untracked() {
            return;
        }
        let digits = raw.trim_start_matches('#');
        if digits.len() != 6 {
            return;
        }
        if let Ok(hex) = Hex::parse(digits) {
            if let Some(next) = typed_color(hsb.get_untracked(), &hex) {
                hsb.set(next);
            }
        }
    });
}

/// Apply the entry on Enter or focus loss: short input is zero-padded and
/// invalid input is logged and replaced by the current color.
fn commit_hex(hsb: RwSignal<Hsb>, text: RwSignal<String>, disabled: RwSignal<bool>) {
    let raw = text.get_untracked();
    let current = math::hsb_to_hex(hsb.get_untracked());
    if disabled.get_untracked() {
        text.set(current.to_string());
        return;
    }
    match math::pad_hex(raw.trim()) {
        Ok(hex) => {
            if let Some(next) = typed_color(hsb.get_untracked(), &hex) {
                hsb.set(next);
            }
            if raw != hex.as_str() {
                text.set(hex.to_string());
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected hex input");
            text.set(current.to_string());
        }
    }
}

/// A hex input field bound to the picker's working color.
///
/// Valid 6-digit input updates the color on every keystroke. Focusing the
/// field marks the picker as touched.
pub(crate) fn hex_input(state: PickerState) -> impl IntoView {
    let hsb = state.hsb;
    let disabled = state.disabled;
    let text = RwSignal::new(math::hsb_to_hex(hsb.get_untracked()).to_string());
    bind_hex_text(hsb, text, disabled);

    let on_commit = move || commit_hex(hsb, text, disabled);

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(move |s| {
                s.width(constants::HEX_INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
                    .apply_if(disabled.get(), |s| s.color(Color::rgb8(150, 150, 150)))
            })
            .on_event_cont(floem::event::EventListener::FocusGained, move |_| {
                state.touch();
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event_stop(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit();
                    }
                }
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
#[cfg(feature = "clipboard")]
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::warn!(error = %err, "clipboard write failed");
            }
        }
        Err(err) => tracing::warn!(error = %err, "clipboard unavailable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(start: Hsb) -> (RwSignal<Hsb>, RwSignal<String>, RwSignal<bool>) {
        let hsb = RwSignal::new(start);
        let text = RwSignal::new(String::new());
        let disabled = RwSignal::new(false);
        bind_hex_text(hsb, text, disabled);
        (hsb, text, disabled)
    }

    #[test]
    fn drag_values_survive_the_text_round_trip() {
        let (hsb, text, _) = bound(Hsb::new(0.0, 100.0, 100.0));
        assert_eq!(text.get_untracked(), "ff0000");

        let dragged = [
            math::pointer_to_hsb(200.0, 0.0, 75.0),
            math::pointer_to_hue(0.0),
            math::pointer_to_hsb(200.0, 75.0, 75.0),
        ];
        for value in dragged {
            hsb.set(value);
            assert_eq!(hsb.get_untracked(), value);
            assert_eq!(text.get_untracked(), math::hsb_to_hex(value).as_str());
        }
        assert_eq!(hsb.get_untracked().h, 200.0);
    }

    #[test]
    fn hue_at_top_of_track_is_not_folded_to_zero() {
        let (hsb, _, _) = bound(Hsb::new(90.0, 100.0, 100.0));
        hsb.set(math::pointer_to_hue(0.0));
        assert_eq!(hsb.get_untracked().h, 360.0);
    }

    #[test]
    fn typing_a_new_color_updates_hsb() {
        let (hsb, text, _) = bound(Hsb::new(0.0, 100.0, 100.0));
        text.set("#00ff00".to_string());
        assert_eq!(hsb.get_untracked(), Hsb::new(120.0, 100.0, 100.0));

        text.set("00f".to_string());
        assert_eq!(hsb.get_untracked(), Hsb::new(120.0, 100.0, 100.0));
    }

    #[test]
    fn typing_gray_keeps_current_hue() {
        let (hsb, text, _) = bound(Hsb::new(200.0, 80.0, 80.0));
        text.set("808080".to_string());
        assert_eq!(hsb.get_untracked().h, 200.0);
        assert_eq!(hsb.get_untracked().s, 0.0);

        text.set("000000".to_string());
        assert_eq!(hsb.get_untracked(), Hsb::new(200.0, 0.0, 0.0));
    }

    #[test]
    fn disabled_entry_does_not_write() {
        let (hsb, text, disabled) = bound(Hsb::new(0.0, 100.0, 100.0));
        disabled.set(true);
        text.set("0000ff".to_string());
        assert_eq!(hsb.get_untracked(), Hsb::new(0.0, 100.0, 100.0));

        commit_hex(hsb, text, disabled);
        assert_eq!(text.get_untracked(), "ff0000");
    }

    #[test]
    fn commit_pads_short_input_and_reverts_invalid() {
        let (hsb, text, disabled) = bound(Hsb::new(0.0, 100.0, 100.0));
        text.set("fff".to_string());
        commit_hex(hsb, text, disabled);
        assert_eq!(text.get_untracked(), "000fff");
        assert_eq!(hsb.get_untracked(), math::hex_to_hsb("000fff").unwrap());

        text.set("xyz".to_string());
        commit_hex(hsb, text, disabled);
        assert_eq!(text.get_untracked(), "000fff");
    }
}
