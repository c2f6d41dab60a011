//! Vertical hue track (360° at the top, 0° at the bottom).
//!
//! Picking a hue resets saturation and brightness to full, so the selector
//! square restarts from the pure hue.

use std::sync::Arc;

use floem::kurbo::{Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Hsb;
use crate::constants::{self, SELECTOR_SIZE};
use crate::math;
use crate::state::PickerState;

/// Raster height of the gradient; scaled to the widget by the renderer.
const RASTER_HEIGHT: u32 = 360;

/// Rasterize a one-pixel-wide hue gradient, top row 360°, bottom row 0°.
fn rasterize_hue_gradient(height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (height * 4) as usize];
    let max_y = (height - 1).max(1) as f64;
    for py in 0..height {
        let hue = 360.0 * (1.0 - py as f64 / max_y);
        let rgb = math::hsb_to_rgb(Hsb::new(hue, 100.0, 100.0));
        let offset = (py * 4) as usize;
        buf[offset] = rgb.r;
        buf[offset + 1] = rgb.g;
        buf[offset + 2] = rgb.b;
        buf[offset + 3] = 255;
    }
    buf
}

/// The gradient image and its renderer cache key, taken from the blob id so
/// each track's image is keyed by its own pixels.
fn gradient_image() -> (peniko::Image, Vec<u8>) {
    let pixels = rasterize_hue_gradient(RASTER_HEIGHT);
    let blob = Blob::new(Arc::new(pixels));
    let hash = blob.id().to_le_bytes().to_vec();
    (
        peniko::Image::new(blob, peniko::Format::Rgba8, 1, RASTER_HEIGHT),
        hash,
    )
}

pub(crate) struct HueTrack {
    id: ViewId,
    held: bool,
    state: PickerState,
    hsb: Hsb,
    size: floem::taffy::prelude::Size<f32>,
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
}

/// Creates the hue track bound to the picker state.
pub(crate) fn hue_track(state: PickerState) -> HueTrack {
    let id = ViewId::new();
    let hsb = state.hsb;
    let disabled = state.disabled;

    create_effect(move |_| {
        let value = hsb.get();
        id.update_state(value);
    });

    HueTrack {
        id,
        held: false,
        state,
        hsb: hsb.get_untracked(),
        size: Default::default(),
        grad_img: None,
        grad_hash: Vec::new(),
    }
    .style(move |s| {
        let cursor = if disabled.get() {
            floem::style::CursorStyle::Default
        } else {
            floem::style::CursorStyle::Pointer
        };
        s.width(constants::HUE_TRACK_WIDTH)
            .height(SELECTOR_SIZE)
            .cursor(cursor)
    })
}

impl HueTrack {
    /// Convert a widget-space y position to a hue track offset.
    fn to_offset(&self, y: f64) -> f64 {
        let h = (self.size.height as f64).max(1.0);
        y * SELECTOR_SIZE / h
    }

    fn ensure_gradient_image(&mut self) {
        if self.grad_img.is_some() {
            return;
        }
        let (img, hash) = gradient_image();
        self.grad_hash = hash;
        self.grad_img = Some(img);
    }
}

impl View for HueTrack {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(value) = state.downcast::<Hsb>() {
            self.hsb = *value;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                if !self.state.press_hue(self.to_offset(e.pos.y)) {
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                self.held = true;
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.state.drag(0.0, self.to_offset(e.pos.y));
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                if self.held {
                    self.held = false;
                    self.state.release();
                }
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);

        self.ensure_gradient_image();
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }

        cx.stroke(
            &rect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Marker bar centered on the current hue
        let top = math::hue_handle(self.hsb) * h / SELECTOR_SIZE;
        let half = constants::HUE_MARKER_HEIGHT / 2.0;
        let marker = Rect::from_points(Point::new(-1.0, top - half), Point::new(w + 1.0, top + half));
        cx.stroke(
            &marker,
            Color::rgba8(0, 0, 0, 120),
            &floem::kurbo::Stroke::new(1.0),
        );
        cx.stroke(
            &marker.inset(-1.0),
            Color::WHITE,
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_runs_from_red_through_hues_back_to_red() {
        let buf = rasterize_hue_gradient(7);
        let px = |y: usize| (buf[y * 4], buf[y * 4 + 1], buf[y * 4 + 2]);
        // rows are 360, 300, 240, 180, 120, 60, 0 degrees
        assert_eq!(px(0), (255, 0, 0));
        assert_eq!(px(1), (255, 0, 255));
        assert_eq!(px(2), (0, 0, 255));
        assert_eq!(px(3), (0, 255, 255));
        assert_eq!(px(4), (0, 255, 0));
        assert_eq!(px(5), (255, 255, 0));
        assert_eq!(px(6), (255, 0, 0));
    }

    #[test]
    fn gradient_hash_comes_from_blob_id() {
        let (img, hash) = gradient_image();
        assert_eq!(hash, img.data.id().to_le_bytes().to_vec());
        assert_eq!((img.width, img.height), (1, RASTER_HEIGHT));
        let (_, other) = gradient_image();
        assert_ne!(hash, other);
    }
}
