use glam::{Vec2, Vec3};

/// One exponential smoothing step: move `factor` of the remaining distance.
#[inline]
pub fn smooth_step(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn smooth_step_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

#[inline]
pub fn smooth_step_vec2(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// Frames needed before a constant target is reached within `epsilon`
/// (relative to the initial gap) with per-frame `factor`.
pub fn frames_to_converge(epsilon: f32, factor: f32) -> u32 {
    if factor >= 1.0 {
        return 1;
    }
    if factor <= 0.0 || epsilon <= 0.0 {
        return u32::MAX;
    }
    if epsilon >= 1.0 {
        return 0;
    }
    (epsilon.ln() / (1.0 - factor).ln()).ceil() as u32
}

/// Factor for a frame of `dt_sec` that matches an easing tween lasting
/// `duration_sec`, taking "done" as 95% of the distance covered.
pub fn tween_factor(duration_sec: f32, dt_sec: f32) -> f32 {
    if duration_sec <= 0.0 {
        return 1.0;
    }
    let dt = dt_sec.max(0.0);
    1.0 - 0.05_f32.powf(dt / duration_sec)
}
