use super::targets::HDR_FORMAT;
use crate::core::camera::Camera;
use crate::core::constants::*;
use crate::core::scene::{ParticleField, SceneAnimator};

const KIND_PARTICLE: f32 = 0.0;
const KIND_RING: f32 = 1.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteInstance {
    center_size: [f32; 4],
    color: [f32; 4],
    params: [f32; 4], // kind, spin, thickness, unused
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    cam_pos: [f32; 4],
    fog: [f32; 4],
    fog_color: [f32; 4],
}

impl SceneUniforms {
    pub(crate) fn new(camera: &Camera) -> Self {
        let view = camera.view_matrix();
        // Rows of the view rotation are the camera basis in world space.
        let right = view.row(0).truncate();
        let up = view.row(1).truncate();
        let bg = BACKGROUND_RGB;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            cam_pos: camera.eye.extend(1.0).to_array(),
            fog: [FOG_NEAR, FOG_FAR, 0.0, 0.0],
            fog_color: [bg[0], bg[1], bg[2], 1.0],
        }
    }
}

/// Rebuild `out` with one instance per particle and per visible ring.
pub(crate) fn collect_instances(scene: &SceneAnimator, out: &mut Vec<SpriteInstance>) {
    out.clear();
    let particles = &scene.particles;
    for (world, p) in particles.world_positions().iter().zip(particles.particles()) {
        let c = ParticleField::color(p.band);
        out.push(SpriteInstance {
            center_size: [world.x, world.y, world.z, PARTICLE_SIZE],
            color: [c[0], c[1], c[2], PARTICLE_OPACITY],
            params: [KIND_PARTICLE, 0.0, 0.0, 0.0],
        });
    }
    // Ring quads span [-r, r]; thickness is relative to that unit radius.
    let thickness = RING_THICKNESS / RING_RADIUS;
    for ring in scene.rings.rings().iter().filter(|r| r.opacity > 0.0) {
        out.push(SpriteInstance {
            center_size: [0.0, 0.0, ring.z, RING_RADIUS],
            color: [RING_COLOR[0], RING_COLOR[1], RING_COLOR[2], ring.opacity],
            params: [KIND_RING, ring.spin, thickness, 0.0],
        });
    }
}

pub(crate) struct SpritePass {
    pipeline: wgpu::RenderPipeline,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: wgpu::Buffer,
    capacity: usize,
    staging: Vec<SpriteInstance>,
    count: u32,
}

fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sprite_instances"),
        size: (capacity.max(1) * std::mem::size_of::<SpriteInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl SpritePass {
    pub(crate) fn new(device: &wgpu::Device, initial_capacity: usize) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tunnel_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::TUNNEL_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprite_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_sprites"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprites"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sprite"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x4,
                        1 => Float32x4,
                        2 => Float32x4
                    ],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sprite"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        Self {
            pipeline,
            uniforms,
            bind_group,
            instances: instance_buffer(device, initial_capacity),
            capacity: initial_capacity.max(1),
            staging: Vec::with_capacity(initial_capacity),
            count: 0,
        }
    }

    /// Upload camera uniforms and this frame's instances.
    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &SceneAnimator,
        camera: &Camera,
    ) {
        collect_instances(scene, &mut self.staging);
        if self.staging.len() > self.capacity {
            self.capacity = self.staging.len().next_power_of_two();
            self.instances = instance_buffer(device, self.capacity);
            log::debug!("[gpu] instance buffer grown to {}", self.capacity);
        }
        queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(&SceneUniforms::new(camera)));
        if !self.staging.is_empty() {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&self.staging));
        }
        self.count = self.staging.len() as u32;
    }

    pub(crate) fn draw(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instances.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
