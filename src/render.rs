use crate::core::camera::Camera;
use crate::core::config::DeviceProfile;
use crate::core::constants::*;
use crate::core::scene::SceneAnimator;
use web_sys as web;

mod post;
mod sprites;
mod targets;

use post::{PostResources, PostUniforms};
use sprites::SpritePass;
use targets::RenderTargets;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,
    targets: RenderTargets,
    sprites: SpritePass,
    post: PostResources,
    bloom_strength: f32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, profile: DeviceProfile) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height);
        let sprites = SpritePass::new(
            &device,
            profile.particle_count() + profile.ring_count(),
        );
        let mut post = PostResources::new(&device, format);
        post.bind_targets(&device, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            width,
            height,
            targets,
            sprites,
            post,
            bloom_strength: profile.bloom_strength(),
        })
    }

    pub fn set_bloom_strength(&mut self, strength: f32) {
        self.bloom_strength = strength.max(0.0);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
            self.targets = RenderTargets::new(&self.device, width, height);
            self.post.bind_targets(&self.device, &self.targets);
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    /// Reapply the surface configuration after it was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw the scene and run bloom and vignette into the canvas.
    pub fn render(&mut self, scene: &SceneAnimator, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.sprites.prepare(&self.device, &self.queue, scene, camera);
        self.sprites.draw(&mut encoder, &self.targets.hdr_view);

        let bg = BACKGROUND_RGB;
        let base = PostUniforms {
            resolution: [self.width as f32, self.height as f32],
            blur_dir: [0.0, 0.0],
            bloom_strength: self.bloom_strength,
            threshold: BLOOM_THRESHOLD,
            vignette_darkness: VIGNETTE_DARKNESS,
            vignette_offset: VIGNETTE_OFFSET,
            background: [bg[0], bg[1], bg[2], 1.0],
        };
        self.post
            .run(&self.queue, &mut encoder, &self.targets, &view, base);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
