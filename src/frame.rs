use crate::contact::ContactView;
use crate::core::contact::ContactForm;
use crate::core::cursor::cursor_enabled;
use crate::core::DeviceProfile;
use crate::core::overlay::OverlayFrame;
use crate::core::{FrameInput, ProgressReader, SceneAnimator};
use crate::cursor::CursorView;
use crate::dom;
use crate::events::Layout;
use crate::input::MouseState;
use crate::overlay::OverlayWriter;
use crate::render::GpuState;
use crate::tags::TagLabels;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Everything one frame pass reads from and writes to. Owned exclusively by
/// the frame loop.
pub struct FrameContext {
    pub progress: ProgressReader,
    pub layout: Rc<Cell<Layout>>,
    pub mouse: Rc<Cell<MouseState>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Rc<RefCell<Option<GpuState>>>,
    pub scene: SceneAnimator,

    pub document: web::Document,
    pub fine_pointer: bool,

    pub overlay: OverlayWriter,
    pub tags: Option<TagLabels>,
    pub cursor: Option<CursorView>,
    pub form: Rc<RefCell<ContactForm>>,
    pub contact: Option<ContactView>,

    pub started: Instant,
    pub last_instant: Instant,
    pub frame_index: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.frame_index += 1;

        // 1. Sample inputs once.
        let layout = self.layout.get();
        let mouse = self.mouse.get();
        let progress = self.progress.get();
        if layout.profile != self.scene.profile() {
            self.scene.set_profile(layout.profile, &mut rand::thread_rng());
            if let Some(gpu) = self.gpu.borrow_mut().as_mut() {
                gpu.set_bloom_strength(layout.profile.bloom_strength());
            }
            self.sync_cursor(layout.profile);
        }
        let input = FrameInput {
            frame: self.frame_index,
            progress,
            elapsed_sec: (now - self.started).as_secs_f32(),
            mouse: mouse.ndc(layout.viewport_width, layout.viewport_height),
        };

        // 2. Scene.
        if !self.scene.update(&input) {
            return;
        }

        // 3. Render; skipped until the GPU is ready.
        let (w, h) =
            dom::sync_canvas_backing_size(&self.canvas, layout.profile.max_device_pixel_ratio());
        let camera = self.scene.rig.camera(w as f32 / h.max(1) as f32);
        if let Some(gpu) = self.gpu.borrow_mut().as_mut() {
            gpu.resize_if_needed(w, h);
            match gpu.render(&self.scene, &camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory; frame skipped");
                }
                Err(e) => {
                    log::warn!("[gpu] frame skipped: {:?}", e);
                    gpu.reconfigure();
                }
            }
        }

        // 4. Overlays and tag labels, in CSS pixels.
        let overlay_frame = OverlayFrame::compute(
            progress,
            layout.profile,
            self.overlay.card_count(),
            layout.viewport_width as f32,
        );
        self.overlay.apply(&overlay_frame);
        self.overlay.apply_tilt(&overlay_frame, mouse, dt_sec);
        if let Some(tags) = &mut self.tags {
            // Backing store and CSS box share an aspect ratio, so the render
            // camera projects labels too.
            let rect = self.canvas.get_bounding_client_rect();
            tags.apply(self.scene.tags.project(
                &camera,
                rect.width() as f32,
                rect.height() as f32,
            ));
        }
        if let Some(cursor) = &mut self.cursor {
            cursor.apply(mouse, dt_sec);
        }

        // 5. Contact form auto-reset.
        if let Some(contact) = &mut self.contact {
            contact.sync(&self.form, self.started.elapsed().as_secs_f64());
        }
    }

    /// Attach or detach the custom cursor for `profile`.
    pub fn sync_cursor(&mut self, profile: DeviceProfile) {
        let wanted = cursor_enabled(profile, self.fine_pointer);
        if wanted == self.cursor.is_some() {
            return;
        }
        if wanted {
            match CursorView::new(&self.document) {
                Ok(view) => self.cursor = Some(view),
                Err(e) => log::warn!("[cursor] attach failed: {:?}", e),
            }
        } else {
            self.cursor = None;
        }
        log::debug!("[cursor] attached={}", self.cursor.is_some());
    }
}

/// requestAnimationFrame driver. Each callback runs one pass and schedules
/// the next; `stop` drops the pending frame, which cancels it.
pub struct FrameLoop {
    ctx: RefCell<FrameContext>,
    handle: RefCell<Option<AnimationFrame>>,
    running: Cell<bool>,
}

impl FrameLoop {
    pub fn start(ctx: FrameContext) -> Rc<Self> {
        let this = Rc::new(Self {
            ctx: RefCell::new(ctx),
            handle: RefCell::new(None),
            running: Cell::new(true),
        });
        this.schedule();
        this
    }

    fn schedule(self: &Rc<Self>) {
        if !self.running.get() {
            return;
        }
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |_ts| {
            this.handle.borrow_mut().take();
            this.ctx.borrow_mut().frame();
            this.schedule();
        });
        *self.handle.borrow_mut() = Some(handle);
    }

    pub fn stop(&self) {
        self.running.set(false);
        self.handle.borrow_mut().take();
    }
}
