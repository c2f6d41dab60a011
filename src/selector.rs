//! Saturation/brightness square.
//!
//! Saturation grows left to right and brightness top to bottom (top is
//! brightest) at the current hue. The square is rasterized to an RGBA8
//! buffer that is rebuilt only when the hue or the pixel size changes.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
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

/// Rasterize the square for `hue`: `(px, py)` maps to saturation
/// `px / width` and brightness `1 - py / height`.
fn rasterize_square(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let max_x = (width - 1).max(1) as f64;
    let max_y = (height - 1).max(1) as f64;
    for py in 0..height {
        let brightness = 100.0 * (1.0 - py as f64 / max_y);
        let row_offset = (py * width * 4) as usize;
        for px in 0..width {
            let saturation = 100.0 * px as f64 / max_x;
            let rgb = math::hsb_to_rgb(Hsb::new(hue, saturation, brightness));
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = rgb.r;
            buf[offset + 1] = rgb.g;
            buf[offset + 2] = rgb.b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub(crate) struct SelectorSquare {
    id: ViewId,
    held: bool,
    state: PickerState,
    hsb: Hsb,
    size: floem::taffy::prelude::Size<f32>,
    /// Cached square for `cached_hue` at `cached_dims`.
    square_img: Option<peniko::Image>,
    square_hash: Vec<u8>,
    cached_hue: i64,
    cached_dims: (u32, u32),
}

/// Creates the saturation/brightness square bound to the picker state.
///
/// Dragging rewrites saturation and brightness and keeps the hue.
pub(crate) fn selector_square(state: PickerState) -> SelectorSquare {
    let id = ViewId::new();
    let hsb = state.hsb;
    let disabled = state.disabled;

    create_effect(move |_| {
        let value = hsb.get();
        id.update_state(value);
    });

    SelectorSquare {
        id,
        held: false,
        state,
        hsb: hsb.get_untracked(),
        size: Default::default(),
        square_img: None,
        square_hash: Vec::new(),
        cached_hue: -1,
        cached_dims: (0, 0),
    }
    .style(move |s| {
        let cursor = if disabled.get() {
            floem::style::CursorStyle::Default
        } else {
            floem::style::CursorStyle::Pointer
        };
        s.width(SELECTOR_SIZE).height(SELECTOR_SIZE).cursor(cursor)
    })
}

impl SelectorSquare {
    /// Convert a widget-space position to selector offsets.
    fn to_offsets(&self, pos: Point) -> (f64, f64) {
        let w = (self.size.width as f64).max(1.0);
        let h = (self.size.height as f64).max(1.0);
        (pos.x * SELECTOR_SIZE / w, pos.y * SELECTOR_SIZE / h)
    }


    fn ensure_square_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let hue_key = self.hsb.h.round() as i64;
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_hue == hue_key {
            return;
        }

        let pixels = rasterize_square(pw, ph, hue_key as f64);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.square_hash = blob.id().to_le_bytes().to_vec();
        self.square_img = Some(img);
        self.cached_hue = hue_key;
        self.cached_dims = dims;
    }
}

impl View for SelectorSquare {
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
                let (x, y) = self.to_offsets(e.pos);
                if !self.state.press_selector(x, y) {
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                self.held = true;
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    let (x, y) = self.to_offsets(e.pos);
                    self.state.drag(x, y);
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

        let scale = cx.scale();
        self.ensure_square_image(scale);
        if let Some(ref img) = self.square_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.square_hash,
                },
                rect,
            );
        }

        cx.stroke(
            &rect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Handle ring
        let (left, top) = math::selector_handle(self.hsb);
        let center = Point::new(left * w / SELECTOR_SIZE, top * h / SELECTOR_SIZE);
        let outer = Circle::new(center, constants::HANDLE_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let ring = Circle::new(center, constants::HANDLE_RADIUS);
        cx.stroke(&ring, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}
