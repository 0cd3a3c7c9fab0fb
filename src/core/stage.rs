// Progress-to-visibility mapping for the three content stages.
//
// Each stage is a plain data record. The same window shape drives every
// stage; only the boundaries, the entry motion and the exit behavior differ.

use super::progress::clamp_progress;
use thiserror::Error;

const REST_SCALE: f32 = 0.9;
const DISMISSED_SCALE: f32 = 1.3;

#[derive(Debug, Error, PartialEq)]
pub enum StageError {
    #[error("stage boundary {0} is outside [0, 1]")]
    OutOfRange(f32),
    #[error("stage boundaries must be non-decreasing: {0:?}")]
    Unordered([f32; 4]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageWindow {
    fade_in_start: f32,
    fade_in_end: f32,
    hold_end: f32,
    fade_out_end: f32,
}

impl StageWindow {
    pub fn new(
        fade_in_start: f32,
        fade_in_end: f32,
        hold_end: f32,
        fade_out_end: f32,
    ) -> Result<Self, StageError> {
        let bounds = [fade_in_start, fade_in_end, hold_end, fade_out_end];
        if let Some(&b) = bounds.iter().find(|b| !(0.0..=1.0).contains(*b)) {
            return Err(StageError::OutOfRange(b));
        }
        if bounds.windows(2).any(|w| w[0] > w[1]) {
            return Err(StageError::Unordered(bounds));
        }
        Ok(Self::new_unchecked(
            fade_in_start,
            fade_in_end,
            hold_end,
            fade_out_end,
        ))
    }

    // Only for the literal timeline below, whose ordering is covered by tests.
    const fn new_unchecked(
        fade_in_start: f32,
        fade_in_end: f32,
        hold_end: f32,
        fade_out_end: f32,
    ) -> Self {
        Self {
            fade_in_start,
            fade_in_end,
            hold_end,
            fade_out_end,
        }
    }

    pub fn fade_in_start(&self) -> f32 {
        self.fade_in_start
    }
    pub fn fade_in_end(&self) -> f32 {
        self.fade_in_end
    }
    pub fn hold_end(&self) -> f32 {
        self.hold_end
    }
    pub fn fade_out_end(&self) -> f32 {
        self.fade_out_end
    }

    /// Fade-in fraction in `[0, 1]`; a zero-length fade counts as complete.
    #[inline]
    pub fn entry_t(&self, p: f32) -> f32 {
        ramp(p, self.fade_in_start, self.fade_in_end)
    }

    /// Fade-out fraction in `[0, 1]`; a zero-length fade counts as complete.
    #[inline]
    pub fn exit_t(&self, p: f32) -> f32 {
        ramp(p, self.hold_end, self.fade_out_end)
    }

    /// Opacity and scale for progress `p`.
    pub fn visual(&self, p: f32, exit: Exit) -> StageVisual {
        let p = clamp_progress(p);
        if p < self.fade_in_start {
            return StageVisual::new(0.0, REST_SCALE);
        }
        if p <= self.fade_in_end {
            let t = self.entry_t(p);
            return StageVisual::new(t, REST_SCALE + (1.0 - REST_SCALE) * t);
        }
        if p <= self.hold_end {
            return StageVisual::new(1.0, 1.0);
        }
        match exit {
            Exit::Hold => StageVisual::new(1.0, 1.0),
            Exit::Dismiss if p <= self.fade_out_end => {
                let t = self.exit_t(p);
                StageVisual::new(1.0 - t, 1.0 + (DISMISSED_SCALE - 1.0) * t)
            }
            Exit::Dismiss => StageVisual::new(0.0, DISMISSED_SCALE),
        }
    }

    /// `p` remapped into the hold range, clamped to `[0, 1]`.
    pub fn local_hold_t(&self, p: f32) -> f32 {
        ramp(clamp_progress(p), self.fade_in_end, self.hold_end)
    }
}

#[inline]
fn ramp(p: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span <= f32::EPSILON {
        return if p >= start { 1.0 } else { 0.0 };
    }
    ((p - start) / span).clamp(0.0, 1.0)
}

/// What a stage does once its hold range is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// Fade out while growing past the viewer.
    Dismiss,
    /// Terminal stage: stay fully visible through the end.
    Hold,
}

/// Extra motion layered on top of the shared opacity/scale shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entry {
    Zoom,
    /// Slide up by `distance` CSS pixels while fading in.
    Rise { distance: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageVisual {
    pub opacity: f32,
    pub scale: f32,
    pub translate_y: f32,
}

impl StageVisual {
    const fn new(opacity: f32, scale: f32) -> Self {
        Self {
            opacity,
            scale,
            translate_y: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
    Projects,
    Skills,
    Contact,
}

impl StageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StageKind::Projects => "projects",
            StageKind::Skills => "skills",
            StageKind::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    pub kind: StageKind,
    pub window: StageWindow,
    pub entry: Entry,
    pub exit: Exit,
}

impl Stage {
    pub fn visual(&self, p: f32) -> StageVisual {
        let mut v = self.window.visual(p, self.exit);
        if let Entry::Rise { distance } = self.entry {
            v.translate_y = distance * (1.0 - self.window.entry_t(clamp_progress(p)));
        }
        v
    }

    #[inline]
    pub fn local_hold_t(&self, p: f32) -> f32 {
        self.window.local_hold_t(p)
    }

    /// Whether the overlay should accept pointer input at this visual state.
    #[inline]
    pub fn is_interactive(visual: &StageVisual) -> bool {
        visual.opacity > super::constants::POINTER_EVENTS_MIN_OPACITY
    }
}

pub const PROJECTS: Stage = Stage {
    kind: StageKind::Projects,
    window: StageWindow::new_unchecked(0.00, 0.05, 0.27, 0.33),
    entry: Entry::Zoom,
    exit: Exit::Dismiss,
};

pub const SKILLS: Stage = Stage {
    kind: StageKind::Skills,
    window: StageWindow::new_unchecked(0.33, 0.38, 0.58, 0.64),
    entry: Entry::Rise { distance: 30.0 },
    exit: Exit::Dismiss,
};

pub const CONTACT: Stage = Stage {
    kind: StageKind::Contact,
    window: StageWindow::new_unchecked(0.66, 0.73, 1.00, 1.00),
    entry: Entry::Zoom,
    exit: Exit::Hold,
};

/// Canonical timeline, in scroll order.
pub const TIMELINE: [Stage; 3] = [PROJECTS, SKILLS, CONTACT];
