// Scroll progress through the pinned tunnel region.
//
// A single writer (the scroll listener) publishes into a shared cell; any
// number of readers sample it once per frame. Every value leaving the cell
// is already clamped to `[0, 1]`.

use std::cell::Cell;
use std::rc::Rc;

/// Clamp a raw progress value to `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp_progress(p: f32) -> f32 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Progress of a region pinned from "top hits top" to "bottom hits bottom".
///
/// - `scroll_y`: current vertical scroll offset of the page
/// - `region_top`: document offset of the region's top edge
/// - `region_height`: full height of the region
/// - `viewport_height`: height of the visible viewport
///
/// A region no taller than the viewport has nothing to scroll through and
/// reports 0.
pub fn scroll_progress(scroll_y: f64, region_top: f64, region_height: f64, viewport_height: f64) -> f32 {
    let scrollable = region_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    clamp_progress(((scroll_y - region_top) / scrollable) as f32)
}

/// Create the shared progress cell and split it into its writer and a reader.
pub fn progress_channel() -> (ProgressWriter, ProgressReader) {
    let cell = Rc::new(Cell::new(0.0_f32));
    (
        ProgressWriter { cell: cell.clone() },
        ProgressReader { cell },
    )
}

/// Exclusive write handle. Not `Clone`: there is exactly one writer.
pub struct ProgressWriter {
    cell: Rc<Cell<f32>>,
}

impl ProgressWriter {
    pub fn set(&self, p: f32) {
        self.cell.set(clamp_progress(p));
    }

    pub fn reader(&self) -> ProgressReader {
        ProgressReader {
            cell: self.cell.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ProgressReader {
    cell: Rc<Cell<f32>>,
}

impl ProgressReader {
    #[inline]
    pub fn get(&self) -> f32 {
        clamp_progress(self.cell.get())
    }
}
