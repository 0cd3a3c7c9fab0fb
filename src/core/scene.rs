// Per-frame state of the tunnel scene.
//
// Everything here is platform-free: the renderer reads the results and the
// DOM label writer reads the projected tag positions. The only history kept
// between frames is the smoothed camera position.

use super::camera::Camera;
use super::config::DeviceProfile;
use super::constants::*;
use super::progress::clamp_progress;
use super::smoothing::smooth_step_vec3;
use glam::{Vec2, Vec3};
use rand::Rng;

/// Inputs sampled once at the start of a frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Monotonic frame counter; one scene pass per distinct value.
    pub frame: u64,
    pub progress: f32,
    pub elapsed_sec: f32,
    /// Pointer in normalized device coordinates, y up, each axis in [-1, 1].
    pub mouse: Vec2,
}

// ---------------- Camera rig ----------------

#[derive(Clone, Debug)]
pub struct CameraRig {
    position: Vec3,
    parallax: bool,
    last_frame: Option<u64>,
}

impl CameraRig {
    pub fn new(parallax: bool) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_BASE_Z),
            parallax,
            last_frame: None,
        }
    }

    /// Position the rig is easing toward for this progress and pointer.
    pub fn target(progress: f32, mouse: Vec2, parallax: bool) -> Vec3 {
        let z = CAMERA_BASE_Z + clamp_progress(progress) * CAMERA_TRAVEL;
        if !parallax {
            return Vec3::new(0.0, 0.0, z);
        }
        let m = mouse.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        Vec3::new(m.x * PARALLAX_X, m.y * PARALLAX_Y, z)
    }

    /// Smooth one step toward the target. Returns `false` without moving when
    /// this frame was already applied.
    pub fn update(&mut self, frame: u64, progress: f32, mouse: Vec2) -> bool {
        if self.last_frame == Some(frame) {
            return false;
        }
        self.last_frame = Some(frame);
        let target = Self::target(progress, mouse, self.parallax);
        self.position = smooth_step_vec3(self.position, target, CAMERA_SMOOTHING);
        true
    }

    pub fn set_parallax(&mut self, parallax: bool) {
        self.parallax = parallax;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        Vec3::new(
            self.position.x * LOOK_AT_PARALLAX,
            self.position.y * LOOK_AT_PARALLAX,
            self.position.z - LOOK_AHEAD,
        )
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.position,
            target: self.look_at(),
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

// ---------------- Particle field ----------------

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub base: Vec3,
    pub band: usize,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    world: Vec<Vec3>,
    rotation: f32,
}

/// Color band for a static depth. Edges are exclusive: a particle exactly on
/// an edge belongs to the farther band.
pub fn band_for_depth(z: f32) -> usize {
    BAND_EDGES
        .iter()
        .position(|&edge| z > edge)
        .unwrap_or(BAND_COUNT - 1)
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles: Vec<Particle> = (0..count)
            .map(|_| {
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                let radius = PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN;
                let z = -(rng.gen::<f32>() * TUNNEL_LENGTH);
                Particle {
                    base: Vec3::new(angle.cos() * radius, angle.sin() * radius, z),
                    band: band_for_depth(z),
                }
            })
            .collect();
        let world = particles.iter().map(|p| p.base).collect();
        Self {
            particles,
            world,
            rotation: 0.0,
        }
    }

    /// Apply the global spin for `elapsed_sec`; bands never change.
    pub fn update(&mut self, elapsed_sec: f32) {
        self.rotation = elapsed_sec * PARTICLE_SPIN_PER_SEC;
        let (s, c) = self.rotation.sin_cos();
        for (w, p) in self.world.iter_mut().zip(&self.particles) {
            *w = Vec3::new(
                p.base.x * c - p.base.y * s,
                p.base.x * s + p.base.y * c,
                p.base.z,
            );
        }
    }

    pub fn color(band: usize) -> [f32; 3] {
        BAND_COLORS[band.min(BAND_COUNT - 1)]
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn world_positions(&self) -> &[Vec3] {
        &self.world
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

// ---------------- Ring array ----------------

#[derive(Clone, Copy, Debug)]
pub struct Ring {
    pub z: f32,
    pub spin: f32,
    pub opacity: f32,
}

pub struct RingArray {
    rings: Vec<Ring>,
}

/// Depth-fog opacity of a ring at `ring_z` seen from `camera_z`.
#[inline]
pub fn ring_opacity(ring_z: f32, camera_z: f32) -> f32 {
    let dist = (ring_z - camera_z).abs();
    (1.0 - dist / RING_FADE_DISTANCE).max(0.0) * RING_MAX_OPACITY
}

impl RingArray {
    pub fn new(count: usize) -> Self {
        let spacing = if count > 0 {
            TUNNEL_LENGTH / count as f32
        } else {
            0.0
        };
        let rings = (0..count)
            .map(|i| Ring {
                z: -(i as f32) * spacing,
                spin: 0.0,
                opacity: 0.0,
            })
            .collect();
        Self { rings }
    }

    pub fn update(&mut self, elapsed_sec: f32, camera_z: f32) {
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.spin = elapsed_sec * RING_SPIN_PER_SEC + i as f32 * RING_SPIN_PHASE;
            ring.opacity = ring_opacity(ring.z, camera_z);
        }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

// ---------------- Skill tag cloud ----------------

#[derive(Clone, Copy, Debug)]
pub struct Tag {
    /// Cloud-space home position, fixed at creation.
    pub base: Vec3,
    pub position: Vec3,
    pub visibility: f32,
}

impl Tag {
    pub fn is_visible(&self) -> bool {
        self.visibility > TAG_VISIBLE_MIN
    }
}

/// Screen placement of one tag label, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagScreen {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub visible: bool,
}

impl TagScreen {
    pub const HIDDEN: TagScreen = TagScreen {
        x: 0.0,
        y: 0.0,
        scale: 0.0,
        opacity: 0.0,
        visible: false,
    };
}

/// Home position of tag `index` of `total`: a Fibonacci sphere whose radius
/// grows with the cube root of the index, so the cloud fills its volume.
pub fn cloud_position(index: usize, total: usize) -> Vec3 {
    let n = total.max(1) as f32;
    let i = index as f32;
    let phi = (-1.0 + (2.0 * i + 1.0) / n).clamp(-1.0, 1.0).acos();
    let theta = (n * std::f32::consts::PI).sqrt() * phi;
    let r = CLOUD_RADIUS * ((i + 1.0) / n).cbrt() * CLOUD_RADIUS_FILL;
    Vec3::new(
        r * theta.cos() * phi.sin(),
        r * theta.sin() * phi.sin(),
        r * phi.cos(),
    ) * CLOUD_FLATTEN
}

/// Staggered visibility of tag `index`: tags appear one after another, then
/// all fade together as the cloud passes the viewer.
pub fn tag_visibility(progress: f32, index: usize, total: usize) -> f32 {
    let p = clamp_progress(progress);
    let stagger = index as f32 / total.max(1) as f32;
    let start = TAG_STAGGER_START + stagger * TAG_STAGGER_SPAN;
    let fade_in = ((p - start) / TAG_FADE_IN).clamp(0.0, 1.0);
    let fade_out = if p > TAG_FADE_OUT_START {
        (1.0 - (p - TAG_FADE_OUT_START) / TAG_FADE_OUT).max(0.0)
    } else {
        1.0
    };
    fade_in * fade_out
}

/// Distance of the cloud centre in front of the camera; negative is behind.
pub fn zoom_distance(progress: f32) -> f32 {
    let t = ((clamp_progress(progress) - CLOUD_ZOOM_START) / CLOUD_ZOOM_SPAN).clamp(0.0, 1.0);
    CLOUD_DIST_FAR + (CLOUD_DIST_BEHIND - CLOUD_DIST_FAR) * t
}

pub struct TagCloud {
    tags: Vec<Tag>,
}

impl TagCloud {
    pub fn new(count: usize) -> Self {
        let tags = (0..count)
            .map(|i| {
                let base = cloud_position(i, count);
                Tag {
                    base,
                    position: base,
                    visibility: 0.0,
                }
            })
            .collect();
        Self { tags }
    }

    pub fn update(&mut self, progress: f32, elapsed_sec: f32, camera: Vec3) {
        let total = self.tags.len();
        let dist = zoom_distance(progress);
        for (i, tag) in self.tags.iter_mut().enumerate() {
            tag.visibility = tag_visibility(progress, i, total);
            if !tag.is_visible() {
                continue;
            }
            let angle =
                elapsed_sec * TAG_ORBIT_PER_SEC + i as f32 * (std::f32::consts::TAU / total as f32);
            let (s, c) = angle.sin_cos();
            let rx = tag.base.x * c - tag.base.z * s;
            let rz = tag.base.x * s + tag.base.z * c;
            let bob = (elapsed_sec * TAG_BOB_FREQ + i as f32 * TAG_BOB_PHASE).sin() * TAG_BOB_AMP;
            tag.position = Vec3::new(
                camera.x + rx,
                camera.y + tag.base.y + bob,
                camera.z - dist + rz,
            );
        }
    }

    /// Project every tag into a `width` x `height` viewport.
    pub fn project<'a>(
        &'a self,
        camera: &'a Camera,
        width: f32,
        height: f32,
    ) -> impl Iterator<Item = TagScreen> + 'a {
        self.tags.iter().map(move |tag| {
            if !tag.is_visible() {
                return TagScreen::HIDDEN;
            }
            match camera.project(tag.position, width, height) {
                Some((px, _)) => TagScreen {
                    x: px.x,
                    y: px.y,
                    scale: label_scale(camera, tag.position),
                    opacity: tag.visibility,
                    visible: true,
                },
                None => TagScreen::HIDDEN,
            }
        })
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// CSS scale for a label at `world`. The label is sized as if it were
/// `TAG_DISTANCE_FACTOR` world units tall over the visible frustum height at
/// its distance from the eye.
pub fn label_scale(camera: &Camera, world: Vec3) -> f32 {
    let distance = camera.eye.distance(world);
    let frustum_height = 2.0 * (camera.fovy_radians * 0.5).tan() * distance;
    if frustum_height <= f32::EPSILON {
        return 0.0;
    }
    TAG_DISTANCE_FACTOR / frustum_height
}

// ---------------- Animator ----------------

pub struct SceneAnimator {
    profile: DeviceProfile,
    pub rig: CameraRig,
    pub particles: ParticleField,
    pub rings: RingArray,
    pub tags: TagCloud,
}

impl SceneAnimator {
    pub fn new<R: Rng + ?Sized>(profile: DeviceProfile, tag_count: usize, rng: &mut R) -> Self {
        Self {
            profile,
            rig: CameraRig::new(profile.parallax()),
            particles: ParticleField::generate(profile.particle_count(), rng),
            rings: RingArray::new(profile.ring_count()),
            tags: TagCloud::new(tag_count),
        }
    }

    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    /// Regenerate geometry budgets after a breakpoint change. The camera keeps
    /// its smoothed position so the switch does not jump.
    pub fn set_profile<R: Rng + ?Sized>(&mut self, profile: DeviceProfile, rng: &mut R) {
        if profile == self.profile {
            return;
        }
        self.profile = profile;
        self.rig.set_parallax(profile.parallax());
        self.particles = ParticleField::generate(profile.particle_count(), rng);
        self.rings = RingArray::new(profile.ring_count());
    }

    /// One scene pass. Returns `false` when `input.frame` was already applied.
    pub fn update(&mut self, input: &FrameInput) -> bool {
        let progress = clamp_progress(input.progress);
        if !self.rig.update(input.frame, progress, input.mouse) {
            return false;
        }
        let cam = self.rig.position();
        self.particles.update(input.elapsed_sec);
        self.rings.update(input.elapsed_sec, cam.z);
        self.tags.update(progress, input.elapsed_sec, cam);
        true
    }
}
