// Host-side tests for the progress cell and scroll math.

#![allow(dead_code)]
mod progress {
    include!("../src/core/progress.rs");
}

use progress::*;

#[test]
fn clamp_handles_non_finite_and_out_of_range() {
    assert_eq!(clamp_progress(f32::NAN), 0.0);
    assert_eq!(clamp_progress(f32::INFINITY), 1.0);
    assert_eq!(clamp_progress(f32::NEG_INFINITY), 0.0);
    assert_eq!(clamp_progress(-0.5), 0.0);
    assert_eq!(clamp_progress(1.5), 1.0);
    assert_eq!(clamp_progress(0.42), 0.42);
}

#[test]
fn scroll_progress_spans_the_pinned_region() {
    // Region of 3000px starting 100px down, viewed through 1000px.
    assert_eq!(scroll_progress(0.0, 100.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, 100.0, 3000.0, 1000.0), 0.0);
    assert!((scroll_progress(1100.0, 100.0, 3000.0, 1000.0) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_progress(2100.0, 100.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(9000.0, 100.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn region_without_scroll_room_reports_zero() {
    assert_eq!(scroll_progress(500.0, 0.0, 1000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(500.0, 0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(500.0, 0.0, f64::NAN, 1000.0), 0.0);
}

#[test]
fn channel_readers_see_clamped_writes() {
    let (writer, reader) = progress_channel();
    assert_eq!(reader.get(), 0.0);
    writer.set(0.25);
    let other = reader.clone();
    assert_eq!(reader.get(), 0.25);
    assert_eq!(other.get(), 0.25);
    writer.set(3.0);
    assert_eq!(writer.reader().get(), 1.0);
    writer.set(f32::NAN);
    assert_eq!(other.get(), 0.0);
}
