use crate::core::constants::CURSOR_TRAIL_OPACITY;
use crate::core::cursor::{CursorFollower, TRAIL_COUNT};
use crate::dom::{self, set_style};
use crate::input::MouseState;
use web_sys as web;

/// DOM side of the custom cursor. Elements are appended to `<body>` on
/// creation and removed on drop.
pub struct CursorView {
    follower: CursorFollower,
    dot: web::HtmlElement,
    ring: web::HtmlElement,
    trails: Vec<web::HtmlElement>,
    last_hovering: Option<bool>,
}

fn place(el: &web::HtmlElement, x: f32, y: f32) {
    set_style(
        el,
        "transform",
        &format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", x, y),
    );
}

impl CursorView {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        let mut trails = Vec::with_capacity(TRAIL_COUNT);
        for (i, opacity) in CURSOR_TRAIL_OPACITY.iter().enumerate() {
            let el = dom::create_element(document, "div", "cursor-trail")?;
            let size = CursorFollower::trail_size_px(i);
            set_style(&el, "width", &format!("{}px", size));
            set_style(&el, "height", &format!("{}px", size));
            set_style(&el, "opacity", &opacity.to_string());
            trails.push(el);
        }
        let dot = dom::create_element(document, "div", "cursor-dot")?;
        let ring = dom::create_element(document, "div", "cursor-ring")?;
        for el in trails.iter().chain([&ring, &dot]) {
            set_style(el, "position", "fixed");
            set_style(el, "left", "0");
            set_style(el, "top", "0");
            set_style(el, "pointer-events", "none");
            _ = body.append_child(el);
        }
        Ok(Self {
            follower: CursorFollower::new(),
            dot,
            ring,
            trails,
            last_hovering: None,
        })
    }

    pub fn apply(&mut self, mouse: MouseState, dt_sec: f32) {
        if !mouse.seen {
            return;
        }
        self.follower.set_hovering(mouse.hovering);
        self.follower.update(mouse.client(), dt_sec);
        let f = &self.follower;
        place(&self.dot, f.dot.x, f.dot.y);
        place(&self.ring, f.ring.x, f.ring.y);
        for (el, p) in self.trails.iter().zip(f.trails.iter()) {
            place(el, p.x, p.y);
        }
        if self.last_hovering != Some(f.hovering) {
            self.last_hovering = Some(f.hovering);
            let cl = self.ring.class_list();
            _ = if f.hovering {
                cl.add_1("hovering")
            } else {
                cl.remove_1("hovering")
            };
        }
    }
}

impl Drop for CursorView {
    fn drop(&mut self) {
        for el in self.trails.iter().chain([&self.ring, &self.dot]) {
            el.remove();
        }
    }
}
