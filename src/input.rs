use glam::Vec2;
use web_sys as web;

/// Latest pointer sample written by the pointer listeners and read once per
/// frame.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    /// Client position in CSS pixels.
    pub x: f32,
    pub y: f32,
    pub seen: bool,
    /// Pointer is over `a`, `button` or `[data-cursor-hover]`.
    pub hovering: bool,
}

impl MouseState {
    pub fn client(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Normalized device coordinates in a `width` x `height` viewport,
    /// y up. Centered until the first pointer event arrives.
    pub fn ndc(&self, width: f64, height: f64) -> Vec2 {
        if !self.seen || width <= 0.0 || height <= 0.0 {
            return Vec2::ZERO;
        }
        let nx = (self.x as f64 / width) * 2.0 - 1.0;
        let ny = -((self.y as f64 / height) * 2.0 - 1.0);
        Vec2::new(nx as f32, ny as f32).clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
    }
}

pub const HOVER_SELECTOR: &str = "a, button, [data-cursor-hover]";

/// Whether the event target sits inside an interactive element.
pub fn hovers_interactive(ev: &web::MouseEvent) -> bool {
    use wasm_bindgen::JsCast;
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(HOVER_SELECTOR).ok().flatten())
        .is_some()
}
