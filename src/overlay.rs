use crate::core::content::PROJECTS;
use crate::core::overlay::{card_pointer_offset, CardTilt, Carousel, OverlayFrame, OverlayStyle};
use crate::core::stage::{StageKind, TIMELINE};
use crate::dom::{self, set_style};
use crate::input::MouseState;
use web_sys as web;

struct StageTarget {
    el: Option<web::HtmlElement>,
    last: Option<OverlayStyle>,
}

struct CardTarget {
    el: web::HtmlElement,
    tilt: CardTilt,
    last: Option<(f32, f32)>,
}

/// Writes overlay styles to cached elements, touching the DOM only when a
/// value changed since the previous frame.
///
/// Markup: `[data-stage="projects|skills|contact"]` panels, plus on the
/// projects panel a `[data-project-track]` and `[data-project-dot]` row.
/// `[data-project-card]` elements tilt under the pointer on the desktop layout.
pub struct OverlayWriter {
    stages: Vec<StageTarget>,
    track: Option<web::HtmlElement>,
    dots: Vec<web::HtmlElement>,
    cards: Vec<CardTarget>,
    card_count: usize,
    last_carousel: Option<(usize, i32)>,
}

impl OverlayWriter {
    pub fn new(root: &web::Element) -> Self {
        let stages = TIMELINE
            .iter()
            .map(|stage| {
                let selector = format!("[data-stage=\"{}\"]", stage.kind.as_str());
                let el = dom::query_html(root, &selector);
                if el.is_none() {
                    log::warn!("[mount] no overlay element for {}", selector);
                }
                StageTarget { el, last: None }
            })
            .collect();
        let cards: Vec<CardTarget> = dom::query_all_html(root, "[data-project-card]")
            .into_iter()
            .map(|el| CardTarget {
                el,
                tilt: CardTilt::new(),
                last: None,
            })
            .collect();
        let card_count = if cards.is_empty() { PROJECTS.len() } else { cards.len() };
        Self {
            stages,
            track: dom::query_html(root, "[data-project-track]"),
            dots: dom::query_all_html(root, "[data-project-dot]"),
            cards,
            card_count,
            last_carousel: None,
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn apply(&mut self, frame: &OverlayFrame) {
        for (target, overlay) in self.stages.iter_mut().zip(frame.stages.iter()) {
            let Some(el) = &target.el else {
                continue;
            };
            let q = overlay.style.quantized();
            if target.last == Some(q) {
                continue;
            }
            let prev = target.last.replace(q);
            if prev.map(|p| p.opacity) != Some(q.opacity) {
                set_style(el, "opacity", &q.opacity_css());
            }
            if prev.map(|p| (p.scale, p.translate_y)) != Some((q.scale, q.translate_y)) {
                set_style(el, "transform", &q.transform_css());
            }
            if prev.map(|p| p.interactive) != Some(q.interactive) {
                set_style(el, "pointer-events", q.pointer_events_css());
            }
        }
        match &frame.carousel {
            Some(c) => self.apply_carousel(c),
            None => self.reset_carousel(),
        }
    }

    /// Advance the card tilts. Cards track the pointer only while the desktop
    /// Projects panel takes pointer events; otherwise they spring back flat.
    pub fn apply_tilt(&mut self, frame: &OverlayFrame, mouse: MouseState, dt_sec: f32) {
        let tracking = frame.carousel.is_none()
            && frame.stage(StageKind::Projects).style.interactive
            && mouse.seen;
        for card in &mut self.cards {
            if tracking {
                let rect = card.el.get_bounding_client_rect();
                let offset = card_pointer_offset(
                    mouse.client(),
                    rect.left() as f32,
                    rect.top() as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                );
                match offset {
                    Some(o) => card.tilt.hover(o),
                    None => card.tilt.leave(),
                }
            } else {
                card.tilt.leave();
            }
            if card.last.is_none() && card.tilt.is_at_rest() {
                continue;
            }
            card.tilt.update(dt_sec);
            if card.tilt.is_at_rest() {
                if card.last.take().is_some() {
                    _ = card.el.style().remove_property("transform");
                }
                continue;
            }
            let q = card.tilt.quantized_deg();
            if card.last != Some(q) {
                card.last = Some(q);
                set_style(&card.el, "transform", &card.tilt.transform_css());
            }
        }
    }

    fn apply_carousel(&mut self, c: &Carousel) {
        let key = (c.active, c.track_offset_px.round() as i32);
        if self.last_carousel == Some(key) {
            return;
        }
        let active_changed = self.last_carousel.map(|(a, _)| a) != Some(c.active);
        self.last_carousel = Some(key);
        if let Some(track) = &self.track {
            set_style(track, "transform", &format!("translateX({}px)", key.1));
        }
        if active_changed {
            for (el, dot) in self.dots.iter().zip(c.dots.iter()) {
                set_style(el, "opacity", &format!("{:.2}", dot.opacity));
                set_style(el, "transform", &format!("scale({:.2})", dot.scale));
            }
        }
    }

    fn reset_carousel(&mut self) {
        if self.last_carousel.take().is_none() {
            return;
        }
        if let Some(track) = &self.track {
            _ = track.style().remove_property("transform");
        }
        for el in &self.dots {
            _ = el.style().remove_property("opacity");
            _ = el.style().remove_property("transform");
        }
    }
}
