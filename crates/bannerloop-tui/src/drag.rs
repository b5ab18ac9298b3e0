//! Mouse drag tracking for the banner viewport.
//!
//! Converts pointer motion into offset deltas while a drag is held and
//! derives a release velocity from the recent samples, so the drag-end
//! snap decision can tell a horizontal fling from a near-vertical one.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Samples older than this do not contribute to the release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);
/// Below this span between samples the measurement is noise, not a fling.
const MIN_VELOCITY_SPAN: f64 = 0.01;
/// Upper bound on retained samples.
const MAX_SAMPLES: usize = 16;

#[derive(Debug, Clone, Copy)]
struct Sample {
    at: Instant,
    col: i32,
    row: i32,
}

/// Tracks one press-drag-release gesture.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: bool,
    anchor_col: i32,
    anchor_offset: f64,
    samples: VecDeque<Sample>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a gesture at the given pointer position and viewport offset.
    pub fn begin(&mut self, col: u16, row: u16, current_offset: f64) {
        self.active = true;
        self.anchor_col = col as i32;
        self.anchor_offset = current_offset;
        self.samples.clear();
        self.push(col, row);
    }

    /// Pointer moved while held; returns the new viewport offset.
    ///
    /// The content follows the pointer: moving left increases the offset.
    pub fn drag(&mut self, col: u16, row: u16) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.push(col, row);
        Some(self.anchor_offset + (self.anchor_col - col as i32) as f64)
    }

    /// Shift the drag anchor after a silent mid-drag reposition, so the
    /// gesture continues seamlessly from the corrected offset.
    pub fn rebase(&mut self, delta: f64) {
        if self.active {
            self.anchor_offset += delta;
        }
    }

    /// End the gesture; returns the pointer release velocity in
    /// (columns/sec, rows/sec).
    pub fn release(&mut self, col: u16, row: u16) -> Option<(f64, f64)> {
        if !self.active {
            return None;
        }
        self.push(col, row);
        self.active = false;
        let samples: Vec<Sample> = self.samples.iter().copied().collect();
        self.samples.clear();
        Some(velocity_from(&samples, Instant::now()))
    }

    /// Abort without a velocity (teardown, focus loss).
    pub fn cancel(&mut self) {
        self.active = false;
        self.samples.clear();
    }

    fn push(&mut self, col: u16, row: u16) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample {
            at: Instant::now(),
            col: col as i32,
            row: row as i32,
        });
    }
}

/// Velocity between the oldest in-window sample and the newest.
fn velocity_from(samples: &[Sample], now: Instant) -> (f64, f64) {
    let recent: Vec<&Sample> = samples
        .iter()
        .filter(|s| now.duration_since(s.at) <= VELOCITY_WINDOW)
        .collect();
    let (first, last) = match (recent.first(), recent.last()) {
        (Some(f), Some(l)) => (**f, **l),
        _ => return (0.0, 0.0),
    };
    let dt = last.at.duration_since(first.at).as_secs_f64();
    if dt < MIN_VELOCITY_SPAN {
        return (0.0, 0.0);
    }
    (
        (last.col - first.col) as f64 / dt,
        (last.row - first.row) as f64 / dt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(now: Instant, ms_ago: u64, col: i32, row: i32) -> Sample {
        Sample {
            at: now - Duration::from_millis(ms_ago),
            col,
            row,
        }
    }

    #[test]
    fn test_drag_moves_offset_against_pointer() {
        let mut tracker = DragTracker::new();
        tracker.begin(50, 10, 200.0);
        assert_eq!(tracker.drag(45, 10), Some(205.0));
        assert_eq!(tracker.drag(60, 10), Some(190.0));
    }

    #[test]
    fn test_rebase_keeps_gesture_continuous() {
        let mut tracker = DragTracker::new();
        tracker.begin(50, 10, 390.0);
        // Offset silently corrected from 395 back to 95 mid-drag.
        assert_eq!(tracker.drag(45, 10), Some(395.0));
        tracker.rebase(-300.0);
        assert_eq!(tracker.drag(44, 10), Some(96.0));
    }

    #[test]
    fn test_velocity_from_recent_samples() {
        let now = Instant::now();
        // 20 columns rightward over 50ms => 400 cols/sec.
        let samples = vec![sample(now, 50, 10, 5), sample(now, 0, 30, 5)];
        let (vx, vy) = velocity_from(&samples, now);
        assert!((vx - 400.0).abs() < 1.0, "vx = {vx}");
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn test_velocity_ignores_stale_samples() {
        let now = Instant::now();
        let samples = vec![
            sample(now, 500, 0, 0),
            sample(now, 40, 20, 5),
            sample(now, 0, 24, 5),
        ];
        let (vx, _) = velocity_from(&samples, now);
        // Only the 40ms window counts: 4 cols / 0.04s.
        assert!((vx - 100.0).abs() < 1.0, "vx = {vx}");
    }

    #[test]
    fn test_release_requires_active_gesture() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.release(0, 0), None);
        tracker.begin(10, 0, 0.0);
        assert!(tracker.release(10, 0).is_some());
        assert!(!tracker.is_active());
    }
}
