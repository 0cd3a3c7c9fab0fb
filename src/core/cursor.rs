use super::config::DeviceProfile;
use super::constants::*;
use super::smoothing::{smooth_step_vec2, tween_factor};
use glam::Vec2;

pub const TRAIL_COUNT: usize = CURSOR_TRAIL_OPACITY.len();

/// Whether the custom cursor should be mounted. Narrow or touch layouts keep
/// the system cursor, as do devices without a fine hovering pointer.
pub fn cursor_enabled(profile: DeviceProfile, fine_pointer: bool) -> bool {
    fine_pointer && !profile.is_mobile()
}

/// Custom cursor: a dot, a ring and fading trail circles easing after the
/// pointer at decreasing speeds. Positions are CSS pixels.
#[derive(Clone, Debug, Default)]
pub struct CursorFollower {
    pub dot: Vec2,
    pub ring: Vec2,
    pub trails: [Vec2; TRAIL_COUNT],
    pub hovering: bool,
    initialized: bool,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every element toward `pointer`. The first call snaps instead
    /// of sweeping in from the corner.
    pub fn update(&mut self, pointer: Vec2, dt_sec: f32) {
        if !self.initialized {
            self.dot = pointer;
            self.ring = pointer;
            self.trails = [pointer; TRAIL_COUNT];
            self.initialized = true;
            return;
        }
        let dt = dt_sec.clamp(0.0, CURSOR_MAX_DT_SEC);
        self.dot = smooth_step_vec2(self.dot, pointer, tween_factor(CURSOR_DOT_SEC, dt));
        self.ring = smooth_step_vec2(self.ring, pointer, tween_factor(CURSOR_RING_SEC, dt));
        for (i, trail) in self.trails.iter_mut().enumerate() {
            let duration = CURSOR_TRAIL_BASE_SEC + i as f32 * CURSOR_TRAIL_STEP_SEC;
            *trail = smooth_step_vec2(*trail, pointer, tween_factor(duration, dt));
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn trail_size_px(index: usize) -> f32 {
        CURSOR_TRAIL_SIZE_PX + index as f32 * CURSOR_TRAIL_SIZE_STEP_PX
    }
}
