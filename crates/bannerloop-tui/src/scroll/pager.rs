//! Page animation controller.
//!
//! Owns the continuous column offset of the banner viewport and animates
//! it toward page-aligned targets. Silent repositions (`set_offset`) drop
//! any running animation; that is what makes the carousel seam invisible.

use std::time::{Duration, Instant};

use bannerloop_core::{EasingType, ScrollConfig};

use super::config::ScrollConfigExt;
use super::easing::EasingTypeExt;
use super::timing::{is_complete, lerp, progress};

/// Active page transition state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Animates the banner offset between page boundaries.
///
/// Call `animate_to()` to start a transition, then `update()` each frame
/// to advance the interpolated offset.
#[derive(Debug, Clone)]
pub struct PagerAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current offset in columns (always up-to-date)
    current_offset: f64,
}

impl Default for PagerAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl PagerAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_offset: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current interpolated offset in columns.
    #[inline]
    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Offset the animator is heading to (current offset when idle).
    pub fn target_offset(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_offset)
    }

    /// Silent reposition: jump immediately, cancelling any animation.
    pub fn set_offset(&mut self, offset: f64) {
        self.animation = None;
        self.current_offset = offset;
    }

    /// Start an animated transition to a target offset.
    ///
    /// Jumps immediately when smooth paging is disabled or the target is
    /// already reached.
    pub fn animate_to(&mut self, target: f64) {
        if !self.config.is_smooth() {
            self.set_offset(target);
            return;
        }
        let from = self.current_offset;
        if (from - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }
        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current offset.
    pub fn update(&mut self) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current_offset = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                let eased = anim.easing.apply(t);
                self.current_offset = lerp(anim.from, anim.to, eased);
            }
        }
        self.current_offset
    }

    /// Cancel any active animation and stop at the current offset.
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}
