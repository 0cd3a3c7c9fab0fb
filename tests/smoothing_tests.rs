// Host-side tests for exponential smoothing helpers.

#![allow(dead_code)]
mod smoothing {
    include!("../src/core/smoothing.rs");
}

use glam::{Vec2, Vec3};
use smoothing::*;

#[test]
fn camera_smoothing_converges_within_thirty_frames() {
    let mut z = 0.0_f32;
    for _ in 0..30 {
        z = smooth_step(z, 10.0, 0.08);
    }
    assert!(z > 9.0, "z={z}");
    assert!(z < 10.0);
}

#[test]
fn frames_to_converge_matches_simulation() {
    for &(eps, s) in &[(0.1_f32, 0.08_f32), (0.01, 0.08), (0.05, 0.2), (0.001, 0.5)] {
        let n = frames_to_converge(eps, s);
        let closed = (eps.ln() / (1.0 - s).ln()).ceil() as u32;
        assert_eq!(n, closed);

        let mut gap = 1.0_f32;
        for _ in 0..n {
            gap = smooth_step(gap, 0.0, s);
        }
        assert!(gap <= eps * 1.0001, "eps={eps} s={s} gap={gap} after {n}");
        let mut gap_before = 1.0_f32;
        for _ in 0..n.saturating_sub(1) {
            gap_before = smooth_step(gap_before, 0.0, s);
        }
        assert!(gap_before > eps * 0.9999, "converged early for eps={eps} s={s}");
    }
    assert_eq!(frames_to_converge(0.1, 0.08), 28);
}

#[test]
fn frames_to_converge_edge_cases() {
    assert_eq!(frames_to_converge(0.1, 1.0), 1);
    assert_eq!(frames_to_converge(0.1, 0.0), u32::MAX);
    assert_eq!(frames_to_converge(0.0, 0.5), u32::MAX);
    assert_eq!(frames_to_converge(1.0, 0.5), 0);
}

#[test]
fn vector_steps_match_scalar_steps() {
    let v3 = smooth_step_vec3(Vec3::ZERO, Vec3::new(10.0, -4.0, 2.0), 0.25);
    assert!((v3 - Vec3::new(2.5, -1.0, 0.5)).length() < 1e-6);
    let v2 = smooth_step_vec2(Vec2::new(1.0, 1.0), Vec2::new(3.0, -1.0), 0.5);
    assert!((v2 - Vec2::new(2.0, 0.0)).length() < 1e-6);
}

#[test]
fn tween_factor_covers_95_percent_over_its_duration() {
    let duration = 0.5;
    let dt = 0.05;
    let mut x = 0.0_f32;
    for _ in 0..10 {
        x = smooth_step(x, 1.0, tween_factor(duration, dt));
    }
    assert!((x - 0.95).abs() < 1e-3, "x={x}");
}

#[test]
fn tween_factor_edges() {
    assert_eq!(tween_factor(0.0, 0.016), 1.0);
    assert_eq!(tween_factor(0.3, 0.0), 0.0);
    assert_eq!(tween_factor(0.3, -1.0), 0.0);
    assert!(tween_factor(0.1, 0.016) > tween_factor(0.4, 0.016));
}
