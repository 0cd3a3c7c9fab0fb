use crate::core::{scroll_progress, DeviceProfile, ProgressWriter};
use crate::core::constants::MOBILE_BREAKPOINT_PX;
use crate::dom;
use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Viewport facts sampled by the listeners and read once per frame.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub profile: DeviceProfile,
}

impl Layout {
    pub fn measure(window: &web::Window) -> Self {
        let (w, h) = dom::viewport_size(window);
        Self {
            viewport_width: w,
            viewport_height: h,
            profile: DeviceProfile::classify(w, dom::is_touch_only(window)),
        }
    }
}

/// Owner of the progress writer. Every listener shares this one value, so
/// there is a single writer however many events feed it.
struct ScrollSource {
    window: web::Window,
    region: web::Element,
    writer: ProgressWriter,
    layout: Rc<Cell<Layout>>,
}

impl ScrollSource {
    fn update_progress(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let rect = self.region.get_bounding_client_rect();
        let top = rect.top() + scroll_y;
        let viewport_h = self.layout.get().viewport_height;
        self.writer
            .set(scroll_progress(scroll_y, top, rect.height(), viewport_h));
    }

    fn update_layout(&self) {
        let next = Layout::measure(&self.window);
        let prev = self.layout.replace(next);
        if prev.profile != next.profile {
            log::info!(
                "[layout] profile {:?} -> {:?} ({:.0}px)",
                prev.profile,
                next.profile,
                next.viewport_width
            );
        }
    }
}

/// Install the scroll, resize and breakpoint listeners. The returned
/// listeners detach when dropped.
pub fn wire_scroll(
    window: &web::Window,
    region: &web::Element,
    writer: ProgressWriter,
    layout: Rc<Cell<Layout>>,
) -> Vec<EventListener> {
    let source = Rc::new(ScrollSource {
        window: window.clone(),
        region: region.clone(),
        writer,
        layout,
    });
    source.update_layout();
    source.update_progress();

    let mut listeners = Vec::new();
    {
        let source = source.clone();
        listeners.push(EventListener::new(window, "scroll", move |_| {
            source.update_progress();
        }));
    }
    {
        let source = source.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            source.update_layout();
            source.update_progress();
        }));
    }
    let breakpoint = format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX - 1.0);
    for query in [breakpoint.as_str(), "(hover: none) and (pointer: coarse)"] {
        if let Ok(Some(mql)) = window.match_media(query) {
            let source = source.clone();
            listeners.push(EventListener::new(&mql, "change", move |_| {
                source.update_layout();
            }));
        }
    }
    listeners
}
