use crate::input::{self, MouseState};
use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer position and whether it hovers something clickable.
/// Listeners only store the latest sample; the frame pass consumes it.
pub fn wire_pointer(window: &web::Window, mouse: Rc<Cell<MouseState>>) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    {
        let mouse = mouse.clone();
        listeners.push(EventListener::new(window, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let mut ms = mouse.get();
            ms.x = ev.client_x() as f32;
            ms.y = ev.client_y() as f32;
            ms.seen = true;
            ms.hovering = input::hovers_interactive(ev);
            mouse.set(ms);
        }));
    }
    {
        let mouse = mouse.clone();
        listeners.push(EventListener::new(window, "pointerover", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let mut ms = mouse.get();
                ms.hovering = input::hovers_interactive(ev);
                mouse.set(ms);
            }
        }));
    }
    if let Some(document) = window.document() {
        listeners.push(EventListener::new(&document, "mouseleave", move |_| {
            let mut ms = mouse.get();
            ms.hovering = false;
            mouse.set(ms);
        }));
    }
    listeners
}
