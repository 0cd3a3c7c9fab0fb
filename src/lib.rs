#![cfg(target_arch = "wasm32")]
use crate::core::content::SKILLS;
use crate::core::contact::ContactForm;
use crate::core::{log_level, progress_channel, EmailConfig, SceneAnimator};
use anyhow::anyhow;
use gloo::events::EventListener;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod contact;
pub mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod tags;

use frame::{FrameContext, FrameLoop};

const DEFAULT_ROOT_ID: &str = "tunnel";

/// A live tunnel: the frame loop and every listener feeding it. Dropping the
/// mount cancels the pending frame and detaches the listeners.
struct TunnelMount {
    frame: Rc<FrameLoop>,
    _listeners: Vec<EventListener>,
}

impl Drop for TunnelMount {
    fn drop(&mut self) {
        self.frame.stop();
        log::info!("[mount] unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<TunnelMount>> = const { RefCell::new(None) };
}

fn init(root_id: &str) -> anyhow::Result<TunnelMount> {
    let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window/document"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| anyhow!("missing #{}", root_id))?;

    let canvas = match root.query_selector("canvas").ok().flatten() {
        Some(el) => el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow!("#{} canvas is not a canvas", root_id))?,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlCanvasElement>()
                .map_err(|_| anyhow!("created element is not a canvas"))?;
            el.set_class_name("tunnel-canvas");
            root.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
            el
        }
    };

    let (writer, reader) = progress_channel();
    let layout = Rc::new(Cell::new(events::Layout::measure(&window)));
    let mouse = Rc::new(Cell::new(input::MouseState::default()));
    let mut listeners = events::wire_scroll(&window, &root, writer, layout.clone());
    listeners.extend(events::wire_pointer(&window, mouse.clone()));

    let profile = layout.get().profile;
    log::info!(
        "[mount] #{} profile={:?} viewport={:.0}x{:.0}",
        root_id,
        profile,
        layout.get().viewport_width,
        layout.get().viewport_height
    );
    dom::sync_canvas_backing_size(&canvas, profile.max_device_pixel_ratio());

    // WebGPU comes up asynchronously; frames render once the slot is filled.
    let gpu = Rc::new(RefCell::new(None));
    {
        let gpu = gpu.clone();
        let canvas = canvas.clone();
        spawn_local(async move {
            match render::GpuState::new(&canvas, profile).await {
                Ok(state) => {
                    *gpu.borrow_mut() = Some(state);
                    log::info!("[gpu] ready");
                }
                Err(e) => log::error!("[gpu] WebGPU init error: {:?}", e),
            }
        });
    }

    let tags = match dom::query_html(&root, "[data-tag-layer]") {
        Some(layer) => Some(tags::TagLabels::new(&document, &layer, SKILLS)?),
        None => {
            log::debug!("[mount] no tag layer; skill labels disabled");
            None
        }
    };
    let fine_pointer = dom::media_matches(&window, "(hover: hover) and (pointer: fine)");

    let started = Instant::now();
    let form = Rc::new(RefCell::new(ContactForm::new()));
    let transport = Rc::new(contact::EmailJsTransport::new(EmailConfig::from_env()));
    let contact_view = match contact::wire_contact_form(&root, form.clone(), transport, started) {
        Some((view, form_listeners)) => {
            listeners.extend(form_listeners);
            Some(view)
        }
        None => None,
    };

    let tag_count = tags.as_ref().map_or(SKILLS.len(), |t| t.len());
    let mut ctx = FrameContext {
        progress: reader,
        layout,
        mouse,
        canvas,
        gpu,
        scene: SceneAnimator::new(profile, tag_count, &mut rand::thread_rng()),
        document,
        fine_pointer,
        overlay: overlay::OverlayWriter::new(&root),
        tags,
        cursor: None,
        form,
        contact: contact_view,
        started,
        last_instant: started,
        frame_index: 0,
    };

    ctx.sync_cursor(profile);

    Ok(TunnelMount {
        frame: FrameLoop::start(ctx),
        _listeners: listeners,
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log_level());
    let has_root = dom::window_document()
        .map(|(_, doc)| doc.get_element_by_id(DEFAULT_ROOT_ID).is_some())
        .unwrap_or(false);
    if has_root {
        if let Err(e) = mount_tunnel(DEFAULT_ROOT_ID) {
            log::error!("[mount] auto-mount failed: {:?}", e);
        }
    } else {
        log::debug!("[mount] no #{}; waiting for mount_tunnel", DEFAULT_ROOT_ID);
    }
}

/// Mount the tunnel on the element with `id`, replacing any previous mount.
#[wasm_bindgen]
pub fn mount_tunnel(id: &str) -> Result<(), JsValue> {
    unmount_tunnel();
    match init(id) {
        Ok(mount) => {
            MOUNTED.with(|m| *m.borrow_mut() = Some(mount));
            Ok(())
        }
        Err(e) => {
            log::error!("[mount] init error: {:?}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

#[wasm_bindgen]
pub fn unmount_tunnel() {
    let previous = MOUNTED.with(|m| m.borrow_mut().take());
    drop(previous);
}
