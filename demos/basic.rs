//! Standalone demo: opens a window with the color picker.
//!
//! Pass a JSON config as the first argument, e.g. `'{"format":"rgb"}'`.
//! Set `RUST_LOG=floem_hsb_picker=debug` to see value changes.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsb_picker::{color_picker_with, ColorValue, PickerConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(json) => match PickerConfig::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(error = %err, "invalid config, using defaults");
                PickerConfig::default()
            }
        },
        None => PickerConfig::default().inline(true),
    };

    let value = RwSignal::new(ColorValue::Hex(config.default_color.clone()));
    let disabled = RwSignal::new(config.disabled);
    floem::reactive::create_effect(move |_| {
        tracing::info!(value = %value.get(), "picker value");
    });

    floem::Application::new()
        .window(
            move |_| {
                color_picker_with(value, disabled, config.clone(), || {
                    tracing::info!("picker touched");
                })
                .on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((240.0, 260.0))
                    .title("floem-hsb-picker"),
            ),
        )
        .run();
}
