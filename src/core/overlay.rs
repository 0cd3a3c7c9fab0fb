// Overlay styling derived from progress.
//
// Produces plain values; the DOM writer turns them into style properties
// and skips any write whose value did not change since the previous frame.

use super::config::DeviceProfile;
use super::constants::*;
use super::stage::{Stage, StageKind, PROJECTS, TIMELINE};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub opacity: f32,
    pub scale: f32,
    pub translate_y: f32,
    pub interactive: bool,
}

impl OverlayStyle {
    pub fn for_stage(stage: &Stage, progress: f32) -> Self {
        let v = stage.visual(progress);
        Self {
            opacity: v.opacity,
            scale: v.scale,
            translate_y: v.translate_y,
            interactive: Stage::is_interactive(&v),
        }
    }

    /// Rounded copy used for change detection, so sub-pixel jitter does not
    /// trigger style writes.
    pub fn quantized(&self) -> Self {
        Self {
            opacity: quantize(self.opacity, 1000.0),
            scale: quantize(self.scale, 10_000.0),
            translate_y: quantize(self.translate_y, 100.0),
            interactive: self.interactive,
        }
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }

    pub fn transform_css(&self) -> String {
        if self.translate_y != 0.0 {
            format!(
                "translateY({:.2}px) scale({:.4})",
                self.translate_y, self.scale
            )
        } else {
            format!("scale({:.4})", self.scale)
        }
    }

    pub fn pointer_events_css(&self) -> &'static str {
        if self.interactive {
            "auto"
        } else {
            "none"
        }
    }
}

#[inline]
fn quantize(v: f32, steps: f32) -> f32 {
    (v * steps).round() / steps
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub opacity: f32,
    pub scale: f32,
}

pub type DotRow = SmallVec<[DotStyle; 8]>;

/// Card shown on narrow layouts: `floor(local_t * count)`, clamped so
/// `local_t == 1` stays on the last card.
pub fn active_index(local_t: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let t = if local_t.is_nan() { 0.0 } else { local_t.clamp(0.0, 1.0) };
    ((t * count as f32).floor() as usize).min(count - 1)
}

pub fn dot_styles(active: usize, count: usize) -> DotRow {
    (0..count)
        .map(|i| {
            if i == active {
                DotStyle {
                    opacity: DOT_ACTIVE_OPACITY,
                    scale: DOT_ACTIVE_SCALE,
                }
            } else {
                DotStyle {
                    opacity: DOT_IDLE_OPACITY,
                    scale: 1.0,
                }
            }
        })
        .collect()
}

/// Horizontal track shift that brings card `active` into view.
pub fn track_offset_px(active: usize, viewport_width: f32) -> f32 {
    let card_width = viewport_width * CARD_WIDTH_FRACTION + CARD_GAP_PX;
    -(active as f32) * card_width
}

/// One-card-at-a-time state for the narrow Projects layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    pub active: usize,
    pub dots: DotRow,
    pub track_offset_px: f32,
}

impl Carousel {
    pub fn compute(stage: &Stage, progress: f32, count: usize, viewport_width: f32) -> Self {
        let active = active_index(stage.local_hold_t(progress), count);
        Self {
            active,
            dots: dot_styles(active, count),
            track_offset_px: track_offset_px(active, viewport_width),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageOverlay {
    pub kind: StageKind,
    pub style: OverlayStyle,
}

/// Everything the overlay writer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    pub stages: [StageOverlay; 3],
    /// Present only on the mobile layout.
    pub carousel: Option<Carousel>,
}

impl OverlayFrame {
    pub fn compute(
        progress: f32,
        profile: DeviceProfile,
        card_count: usize,
        viewport_width: f32,
    ) -> Self {
        let stages = TIMELINE.map(|stage| StageOverlay {
            kind: stage.kind,
            style: OverlayStyle::for_stage(&stage, progress),
        });
        let carousel = profile.is_mobile().then(|| {
            Carousel::compute(&PROJECTS, progress, card_count, viewport_width)
        });
        Self { stages, carousel }
    }

    pub fn stage(&self, kind: StageKind) -> &StageOverlay {
        match kind {
            StageKind::Projects => &self.stages[0],
            StageKind::Skills => &self.stages[1],
            StageKind::Contact => &self.stages[2],
        }
    }
}

// ---------------- Card tilt ----------------

/// Damped spring with unit mass, integrated in fixed substeps so the motion
/// does not depend on the frame rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
}

impl Spring {
    pub fn step(&mut self, target: f32, dt_sec: f32) {
        let mut remaining = dt_sec.clamp(0.0, TILT_MAX_DT_SEC);
        while remaining > 0.0 {
            let h = remaining.min(TILT_SUBSTEP_SEC);
            let accel =
                -TILT_STIFFNESS * (self.value - target) - TILT_DAMPING * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_resting_at(&self, target: f32) -> bool {
        (self.value - target).abs() < TILT_REST_EPSILON && self.velocity.abs() < TILT_REST_EPSILON
    }
}

/// Pointer position inside a card rect as an offset from its center, each
/// axis in [-0.5, 0.5]. `None` when the pointer is outside or the card has
/// no area.
pub fn card_pointer_offset(pointer: Vec2, left: f32, top: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let offset = Vec2::new((pointer.x - left) / width - 0.5, (pointer.y - top) / height - 0.5);
    (offset.x.abs() <= 0.5 && offset.y.abs() <= 0.5).then_some(offset)
}

/// Per-card 3D tilt. The pointer offset drives two springs; leaving the card
/// springs back to flat.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTilt {
    x: Spring,
    y: Spring,
    target: Vec2,
}

impl CardTilt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&mut self, offset: Vec2) {
        self.target = offset.clamp(Vec2::splat(-0.5), Vec2::splat(0.5));
    }

    pub fn leave(&mut self) {
        self.target = Vec2::ZERO;
    }

    pub fn update(&mut self, dt_sec: f32) {
        self.x.step(self.target.x, dt_sec);
        self.y.step(self.target.y, dt_sec);
    }

    pub fn is_at_rest(&self) -> bool {
        self.target == Vec2::ZERO && self.x.is_resting_at(0.0) && self.y.is_resting_at(0.0)
    }

    /// `(rotate_x, rotate_y)` in degrees. Pointer below center tips the top
    /// edge toward the viewer; pointer right of center turns the card right.
    pub fn rotation_deg(&self) -> (f32, f32) {
        let span = 2.0 * TILT_MAX_DEG;
        (
            (-self.y.value * span).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
            (self.x.value * span).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
        )
    }

    /// Rotation rounded to hundredths of a degree, for change detection.
    pub fn quantized_deg(&self) -> (f32, f32) {
        let (rx, ry) = self.rotation_deg();
        (quantize(rx, 100.0), quantize(ry, 100.0))
    }

    pub fn transform_css(&self) -> String {
        let (rx, ry) = self.quantized_deg();
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            TILT_PERSPECTIVE_PX, rx, ry
        )
    }
}
