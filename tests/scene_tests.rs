// Host-side tests for the scene state: camera rig, particles, rings and tags.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod progress {
    include!("../src/core/progress.rs");
}
mod smoothing {
    include!("../src/core/smoothing.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use config::DeviceProfile;
use constants::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn rig_target_follows_progress_and_parallax() {
    let start = CameraRig::target(0.0, Vec2::ZERO, true);
    assert_eq!(start, Vec3::new(0.0, 0.0, 5.0));
    let end = CameraRig::target(1.0, Vec2::ZERO, true);
    assert!((end.z - (-75.0)).abs() < 1e-4);

    let mouse = Vec2::new(1.0, -1.0);
    let t = CameraRig::target(0.5, mouse, true);
    assert!((t.x - PARALLAX_X).abs() < 1e-6);
    assert!((t.y + PARALLAX_Y).abs() < 1e-6);

    let clamped = CameraRig::target(0.5, Vec2::new(9.0, 9.0), true);
    assert!((clamped.x - PARALLAX_X).abs() < 1e-6);

    let flat = CameraRig::target(0.5, mouse, false);
    assert_eq!((flat.x, flat.y), (0.0, 0.0));
}

#[test]
fn rig_applies_each_frame_once() {
    let mut rig = CameraRig::new(false);
    assert!(rig.update(1, 1.0, Vec2::ZERO));
    let after_first = rig.position();
    assert!(!rig.update(1, 1.0, Vec2::ZERO));
    assert_eq!(rig.position(), after_first);
    assert!(rig.update(2, 1.0, Vec2::ZERO));
    assert!(rig.position().z < after_first.z);
}

#[test]
fn rig_closes_most_of_the_gap_in_thirty_frames() {
    let mut rig = CameraRig::new(false);
    let target_z = CameraRig::target(0.5, Vec2::ZERO, false).z;
    let gap = (CAMERA_BASE_Z - target_z).abs();
    let mut prev = rig.position().z;
    for frame in 0..30 {
        rig.update(frame, 0.5, Vec2::ZERO);
        assert!(rig.position().z <= prev);
        prev = rig.position().z;
    }
    assert!((rig.position().z - target_z).abs() < 0.1 * gap);
}

#[test]
fn rig_looks_ahead_down_the_tunnel() {
    let rig = CameraRig::new(true);
    let look = rig.look_at();
    assert!((look.z - (CAMERA_BASE_Z - LOOK_AHEAD)).abs() < 1e-6);
    let cam = rig.camera(16.0 / 9.0);
    assert_eq!(cam.eye, rig.position());
    assert_eq!(cam.target, look);
}

#[test]
fn bands_switch_at_fixed_depths() {
    assert_eq!(band_for_depth(5.0), 0);
    assert_eq!(band_for_depth(0.0), 0);
    assert_eq!(band_for_depth(-20.0), 0);
    assert_eq!(band_for_depth(-26.9), 0);
    assert_eq!(band_for_depth(-27.0), 1);
    assert_eq!(band_for_depth(-30.0), 1);
    assert_eq!(band_for_depth(-53.9), 1);
    assert_eq!(band_for_depth(-54.0), 2);
    assert_eq!(band_for_depth(-79.9), 2);
    assert_eq!(band_for_depth(-200.0), 2);
}

#[test]
fn particle_field_shape_is_stable_under_rotation() {
    let mut field = ParticleField::generate(500, &mut rng());
    assert_eq!(field.len(), 500);
    let bands: Vec<usize> = field.particles().iter().map(|p| p.band).collect();
    for p in field.particles() {
        let r = Vec2::new(p.base.x, p.base.y).length();
        assert!(r >= PARTICLE_RADIUS_MIN - 1e-4 && r <= PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN + 1e-4);
        assert!(p.base.z <= 0.0 && p.base.z >= -TUNNEL_LENGTH);
        assert_eq!(p.band, band_for_depth(p.base.z));
    }
    field.update(12.5);
    assert!((field.rotation() - 12.5 * PARTICLE_SPIN_PER_SEC).abs() < 1e-6);
    for (w, p) in field.world_positions().iter().zip(field.particles()) {
        let rw = Vec2::new(w.x, w.y).length();
        let rb = Vec2::new(p.base.x, p.base.y).length();
        assert!((rw - rb).abs() < 1e-3);
        assert_eq!(w.z, p.base.z);
    }
    let after: Vec<usize> = field.particles().iter().map(|p| p.band).collect();
    assert_eq!(bands, after);
}

#[test]
fn seeded_generation_is_deterministic() {
    let a = ParticleField::generate(64, &mut rng());
    let b = ParticleField::generate(64, &mut rng());
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.base, pb.base);
    }
}

#[test]
fn ring_opacity_fades_with_distance() {
    assert!((ring_opacity(-10.0, -10.0) - RING_MAX_OPACITY).abs() < 1e-6);
    assert!((ring_opacity(-10.0, -17.5) - RING_MAX_OPACITY * 0.5).abs() < 1e-6);
    assert_eq!(ring_opacity(-10.0, 5.0), 0.0);
    assert_eq!(ring_opacity(-10.0, -40.0), 0.0);
}

#[test]
fn rings_are_evenly_spaced_and_spin() {
    let mut rings = RingArray::new(50);
    assert_eq!(rings.rings().len(), 50);
    assert_eq!(rings.rings()[0].z, 0.0);
    assert!((rings.rings()[1].z - (-1.6)).abs() < 1e-5);
    rings.update(2.0, 0.0);
    assert!((rings.rings()[0].spin - 2.0 * RING_SPIN_PER_SEC).abs() < 1e-6);
    assert!((rings.rings()[3].spin - (2.0 * RING_SPIN_PER_SEC + 3.0 * RING_SPIN_PHASE)).abs() < 1e-5);
    assert!(rings.rings()[0].opacity > rings.rings()[5].opacity);
    assert!(RingArray::new(0).rings().is_empty());
}

#[test]
fn tags_appear_in_sequence_then_fade_together() {
    let n = 12;
    assert_eq!(tag_visibility(0.5, 0, n), 0.0);
    assert_eq!(tag_visibility(0.65, 0, n), 1.0);
    assert_eq!(tag_visibility(0.65, n - 1, n), 0.0);
    let last = tag_visibility(0.73, n - 1, n);
    assert!(last > 0.3 && last < 0.4, "last={last}");
    let fading = tag_visibility(0.765, 0, n);
    assert!((fading - 0.5).abs() < 1e-3);
    assert_eq!(tag_visibility(0.81, 0, n), 0.0);
    assert_eq!(tag_visibility(1.0, 5, n), 0.0);
}

#[test]
fn cloud_zooms_from_ahead_to_behind() {
    assert_eq!(zoom_distance(0.0), CLOUD_DIST_FAR);
    assert_eq!(zoom_distance(0.58), CLOUD_DIST_FAR);
    assert!((zoom_distance(0.69) - 4.0).abs() < 1e-4);
    assert!((zoom_distance(0.80) - CLOUD_DIST_BEHIND).abs() < 1e-4);
    assert_eq!(zoom_distance(1.0), CLOUD_DIST_BEHIND);
}

#[test]
fn cloud_positions_fit_the_flattened_sphere() {
    let n = 12;
    let r = CLOUD_RADIUS * CLOUD_RADIUS_FILL + 1e-4;
    for i in 0..n {
        let p = cloud_position(i, n);
        assert!(p.x.abs() <= r * CLOUD_FLATTEN.x);
        assert!(p.y.abs() <= r * CLOUD_FLATTEN.y);
        assert!(p.z.abs() <= r * CLOUD_FLATTEN.z);
    }
    assert_ne!(cloud_position(0, n), cloud_position(1, n));
}

#[test]
fn visible_tags_in_front_project_onto_the_viewport() {
    let rig = CameraRig::new(false);
    let mut cloud = TagCloud::new(12);
    cloud.update(0.66, 3.0, rig.position());
    let camera = rig.camera(1600.0 / 900.0);
    let screens: Vec<TagScreen> = cloud.project(&camera, 1600.0, 900.0).collect();
    assert_eq!(screens.len(), 12);
    let first = screens[0];
    assert!(first.visible);
    assert!(first.x >= 0.0 && first.x <= 1600.0);
    assert!(first.y >= 0.0 && first.y <= 900.0);
    assert!(first.scale > 0.0);
    assert_eq!(first.opacity, 1.0);
    // The last tag has not started fading in yet.
    assert_eq!(screens[11], TagScreen::HIDDEN);
}

#[test]
fn tags_behind_the_camera_are_hidden() {
    let rig = CameraRig::new(false);
    let mut cloud = TagCloud::new(12);
    cloud.update(0.79, 0.0, rig.position());
    assert!(cloud.tags()[0].is_visible());
    let camera = rig.camera(1.0);
    assert!(cloud
        .project(&camera, 800.0, 800.0)
        .all(|s| s == TagScreen::HIDDEN));
}

#[test]
fn camera_projects_straight_ahead_to_the_centre() {
    let cam = CameraRig::new(false).camera(2.0);
    let ahead = Vec3::new(0.0, 0.0, CAMERA_BASE_Z - 5.0);
    let (px, depth) = cam.project(ahead, 1000.0, 500.0).expect("in front");
    assert!((px.x - 500.0).abs() < 1e-2);
    assert!((px.y - 250.0).abs() < 1e-2);
    assert!((depth - 5.0).abs() < 1e-4);
    assert!(cam.project(Vec3::new(0.0, 0.0, CAMERA_BASE_Z + 1.0), 1000.0, 500.0).is_none());
}

#[test]
fn animator_runs_one_pass_per_frame() {
    let mut scene = SceneAnimator::new(DeviceProfile::Desktop, 12, &mut rng());
    assert_eq!(scene.particles.len(), PARTICLE_COUNT_DESKTOP);
    assert_eq!(scene.rings.rings().len(), RING_COUNT_DESKTOP);
    let input = FrameInput {
        frame: 1,
        progress: 0.3,
        elapsed_sec: 1.0,
        mouse: Vec2::ZERO,
    };
    assert!(scene.update(&input));
    let z = scene.rig.position().z;
    assert!(!scene.update(&input));
    assert_eq!(scene.rig.position().z, z);
}

#[test]
fn animator_switches_budgets_with_the_profile() {
    let mut scene = SceneAnimator::new(DeviceProfile::Desktop, 12, &mut rng());
    let input = FrameInput {
        frame: 1,
        progress: 0.5,
        elapsed_sec: 0.0,
        mouse: Vec2::new(1.0, 1.0),
    };
    scene.update(&input);
    let z = scene.rig.position().z;
    scene.set_profile(DeviceProfile::Mobile, &mut rng());
    assert_eq!(scene.profile(), DeviceProfile::Mobile);
    assert_eq!(scene.particles.len(), PARTICLE_COUNT_MOBILE);
    assert_eq!(scene.rings.rings().len(), RING_COUNT_MOBILE);
    assert_eq!(scene.tags.tags().len(), 12);
    assert_eq!(scene.rig.position().z, z);
    assert_eq!(
        CameraRig::target(0.5, Vec2::ONE, scene.profile().parallax()).x,
        0.0
    );
}

#[test]
fn label_scale_matches_the_visible_frustum_height() {
    let camera = camera::Camera {
        eye: Vec3::ZERO,
        target: Vec3::new(0.0, 0.0, -1.0),
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: CAMERA_FOVY_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    };
    let near = label_scale(&camera, Vec3::new(0.0, 0.0, -10.0));
    let expected = TAG_DISTANCE_FACTOR / (2.0 * (35.0_f32).to_radians().tan() * 10.0);
    assert!((near - expected).abs() < 1e-5);
    assert!((near - 0.4284).abs() < 1e-3);

    let far = label_scale(&camera, Vec3::new(0.0, 0.0, -20.0));
    assert!((far * 2.0 - near).abs() < 1e-5);

    // Off-axis labels use the straight-line distance, not the view depth.
    let off_axis = label_scale(&camera, Vec3::new(10.0, 0.0, -10.0));
    assert!(off_axis < near);
}
