//! Looping carousel state machine.
//!
//! A finite item list is made to look endless by padding it with one clone
//! on each side: the last item is prepended, the first appended. The
//! viewport scrolls normally through the padded range; whenever it comes to
//! rest on a sentinel clone, the offset is silently reset to the identical
//! real item on the opposite side. Because clone and original render the
//! same, the seam is invisible.
//!
//! This module is plain index/offset arithmetic with no terminal
//! dependencies. Offsets are continuous (f64) horizontal positions in the
//! same unit as `page_width`; at rest an offset is always an exact multiple
//! of the page width.

use tracing::debug;

use crate::config::BannerConfig;

/// Offsets closer than this are considered the same resting position.
const OFFSET_EPSILON: f64 = 1e-6;

/// Fraction of a page width below which a drag target counts as "at the
/// leading edge" and snaps to the real last item.
const LEADING_EDGE_BAND: f64 = 0.05;

/// Move produced by an auto-scroll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMove {
    /// Animate to this padded index.
    Advance { target: usize },
    /// Roll past the end: animate one page into the trailing sentinel,
    /// then settle silently on the first real item. The two steps keep the
    /// motion forward; the user never sees a backward jump.
    WrapAround { through: usize, settle: usize },
}

/// Offset override decided when a drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// No override; let normal paging settle.
    None,
    /// Silently snap to this padded index.
    Snap { target: usize },
    /// No override; the page indicator was nudged by this delta.
    Nudge { delta: i32 },
}

/// Controller for the infinite-banner illusion.
///
/// Owns the padded item list, the auto-scroll cursor and the logical page
/// shown by the page indicator. The rendering layer feeds it scroll
/// offsets and drag events and applies the moves it hands back.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<String>,
    padded: Vec<String>,
    /// Padded index auto-scroll will move to next; stays in
    /// `[1, end_real]` once a transition completes.
    cursor: usize,
    /// Logical 0-based page shown by the indicator.
    page: usize,
    /// Configured starting cursor, re-clamped on every rebuild.
    start_index: usize,
    /// Silent jump to apply after the next render pass.
    pending_jump: Option<usize>,
}

impl Carousel {
    pub fn new(items: Vec<String>, config: &BannerConfig) -> Self {
        let mut carousel = Self {
            items: Vec::new(),
            padded: Vec::new(),
            cursor: 0,
            page: 0,
            start_index: config.auto_scroll_index,
            pending_jump: None,
        };
        carousel.set_items(items);
        carousel
    }

    /// Replace the item list and rebuild the padded sequence.
    ///
    /// Resets the cursor to the configured start index (clamped into the
    /// real range) and queues a silent jump there, so the first visible
    /// frame is a real item rather than a sentinel.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.padded = Self::pad(&self.items);
        if self.is_looping() {
            self.cursor = self.start_index.clamp(1, self.end_real());
            self.page = self.cursor - 1;
            self.pending_jump = Some(self.cursor);
        } else {
            self.cursor = 0;
            self.page = 0;
            self.pending_jump = None;
        }
    }

    fn pad(items: &[String]) -> Vec<String> {
        if items.len() < 2 {
            return items.to_vec();
        }
        let mut padded = Vec::with_capacity(items.len() + 2);
        padded.push(items[items.len() - 1].clone());
        padded.extend(items.iter().cloned());
        padded.push(items[0].clone());
        padded
    }

    /// Number of caller-supplied items.
    #[inline]
    pub fn banner_count(&self) -> usize {
        self.items.len()
    }

    /// Number of cells the render surface should show (padded length).
    #[inline]
    pub fn render_count(&self) -> usize {
        self.padded.len()
    }

    /// Whether the looping illusion is active (needs at least two items).
    #[inline]
    pub fn is_looping(&self) -> bool {
        self.items.len() > 1
    }

    /// Widget is hidden entirely when there is nothing to show.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.items.is_empty()
    }

    /// Item content for a padded index; `None` out of range, which the
    /// cell renderer degrades to an empty cell.
    pub fn item_at(&self, padded_index: usize) -> Option<&str> {
        self.padded.get(padded_index).map(String::as_str)
    }

    /// Logical 0-based page for the page indicator.
    #[inline]
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Map a padded index to the original item index it displays.
    ///
    /// Sentinels map to the real item they clone, so renderers keyed by
    /// this index draw clone and twin identically.
    pub fn logical_index(&self, padded_index: usize) -> Option<usize> {
        if padded_index >= self.padded.len() {
            return None;
        }
        if !self.is_looping() {
            return Some(padded_index);
        }
        let n = self.items.len();
        Some((padded_index + n - 1) % n)
    }

    /// Last padded index that maps to a real item.
    #[inline]
    fn end_real(&self) -> usize {
        debug_assert!(self.padded.len() >= 2);
        self.padded.len() - 2
    }

    /// Take the queued silent jump, if any. Drained by the render layer
    /// after a draw completes, never inside event handling.
    pub fn take_pending_jump(&mut self) -> Option<usize> {
        self.pending_jump.take()
    }

    /// Resting offset of a padded index.
    #[inline]
    pub fn offset_of(index: usize, page_width: f64) -> f64 {
        index as f64 * page_width
    }

    /// Advance the auto-scroll cursor and decide the next move.
    ///
    /// Called once per elapsed `scrolling_time` interval. Returns `None`
    /// when looping is inactive. The wrap case fires only when the
    /// viewport actually rests on the last real item; if the user dragged
    /// elsewhere mid-interval the cursor still wraps but the move is a
    /// plain animated advance.
    pub fn on_auto_scroll_tick(&mut self, current_offset: f64, page_width: f64) -> Option<TickMove> {
        if !self.is_looping() || page_width <= 0.0 {
            return None;
        }
        let end_real = self.end_real();
        let move_ = if self.cursor >= end_real {
            self.cursor = 1;
            let last_real_offset = Self::offset_of(end_real, page_width);
            if (current_offset - last_real_offset).abs() < OFFSET_EPSILON {
                debug!(through = end_real + 1, "auto-scroll wrapping through trailing sentinel");
                TickMove::WrapAround {
                    through: end_real + 1,
                    settle: 1,
                }
            } else {
                TickMove::Advance { target: 1 }
            }
        } else {
            self.cursor += 1;
            TickMove::Advance {
                target: self.cursor,
            }
        };
        self.page = self.cursor - 1;
        Some(move_)
    }

    /// Boundary correction for user scrolling (the continuous-loop seam).
    ///
    /// Returns the silently corrected offset when the position rests on a
    /// sentinel, `None` otherwise. Positions more than one page width away
    /// from either boundary short-circuit without further checks.
    /// Idempotent: a corrected offset is interior and corrects to `None`.
    pub fn correct_boundary(&self, offset: f64, page_width: f64) -> Option<f64> {
        if !self.is_looping() || page_width <= 0.0 {
            return None;
        }
        let max_offset = Self::offset_of(self.padded.len() - 1, page_width);
        if offset >= page_width && offset <= max_offset - page_width {
            return None;
        }
        if offset >= max_offset - OFFSET_EPSILON {
            // past the clone-of-first: land on the identical real first item
            debug!(offset, "boundary correction to leading real item");
            Some(page_width)
        } else if offset <= OFFSET_EPSILON {
            // on the clone-of-last: land on the identical real last item
            debug!(offset, "boundary correction to trailing real item");
            Some(Self::offset_of(self.end_real(), page_width))
        } else {
            None
        }
    }

    /// Decide whether a finished drag needs an offset override.
    ///
    /// `current_offset` is where the drag released, `target_offset` where
    /// paging would settle, `velocity` the release velocity (columns/sec,
    /// horizontal then vertical).
    pub fn on_drag_end(
        &mut self,
        current_offset: f64,
        target_offset: f64,
        velocity: (f64, f64),
        page_width: f64,
    ) -> DragOutcome {
        if !self.is_looping() || page_width <= 0.0 {
            return DragOutcome::None;
        }
        let max_offset = Self::offset_of(self.padded.len() - 1, page_width);
        if target_offset >= max_offset - OFFSET_EPSILON {
            // How far the drag penetrated into the final (sentinel) page.
            let penetration = (page_width - (max_offset - current_offset)) / page_width;
            if penetration >= 0.5 {
                debug!(penetration, "drag committed past the end, snapping to start");
                DragOutcome::Snap { target: 1 }
            } else {
                DragOutcome::None
            }
        } else if target_offset < page_width * LEADING_EDGE_BAND {
            // Heading into the leading sentinel: the real last item is
            // visually identical to the clone the drag is aimed at.
            DragOutcome::Snap {
                target: self.end_real(),
            }
        } else {
            let (vx, vy) = velocity;
            // Near-vertical drags are not paging gestures.
            if vx.abs() > vy.abs() {
                let delta = if vx < 0.0 { -1 } else { 1 };
                self.nudge_page(delta);
                DragOutcome::Nudge { delta }
            } else {
                DragOutcome::None
            }
        }
    }

    fn nudge_page(&mut self, delta: i32) {
        let last = self.items.len().saturating_sub(1) as i64;
        self.page = (self.page as i64 + delta as i64).clamp(0, last) as usize;
    }
}
