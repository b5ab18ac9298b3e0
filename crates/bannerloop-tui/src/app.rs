//! Demo application state.
//!
//! Owns the carousel controller, the page animator and the drag tracker,
//! and turns terminal events into carousel operations. Everything runs on
//! the event-loop thread; silent repositions are queued and applied in
//! `after_render`, never inside event handling, except for mid-drag
//! boundary corrections which must land before the next pointer sample.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use bannerloop_core::{AppConfig, Carousel, DragOutcome, TickMove};

use crate::drag::DragTracker;
use crate::input::Action;
use crate::scroll::PagerAnimator;
use crate::theme::Theme;

/// Momentum look-ahead when projecting where a flung drag settles.
const MOMENTUM_SECS: f64 = 0.2;

pub struct App {
    pub config: AppConfig,
    pub carousel: Carousel,
    pub animator: PagerAnimator,
    pub drag: DragTracker,
    pub theme: Theme,
    pub paused: bool,
    pub should_quit: bool,
    /// Last auto-scroll fire time; the clock starts lazily on the first
    /// render and stops when the app is dropped.
    auto_scroll_at: Option<Instant>,
    /// Silent reposition queued for after the next draw.
    pending_silent: Option<f64>,
    /// Page width in columns from the last draw.
    page_width: f64,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let carousel = Carousel::new(config.banner.items.clone(), &config.banner);
        let animator = PagerAnimator::new(config.ui.scroll.clone());
        Self {
            config,
            carousel,
            animator,
            drag: DragTracker::new(),
            theme,
            paused: false,
            should_quit: false,
            auto_scroll_at: None,
            pending_silent: None,
            page_width: 0.0,
        }
    }

    fn scrolling_interval(&self) -> Duration {
        Duration::from_secs_f64(self.config.banner.scrolling_time.max(0.1))
    }

    /// Periodic update: advance the animation, correct resting boundary
    /// positions, and fire auto-scroll when its interval elapsed.
    ///
    /// A tick arriving mid-animation or mid-drag does nothing; the clock
    /// is only consulted once the viewport is at rest.
    pub fn on_tick(&mut self) {
        self.animator.update();
        if self.drag.is_active() || self.animator.is_animating() || self.page_width <= 0.0 {
            return;
        }

        if self.pending_silent.is_none() {
            if let Some(corrected) = self
                .carousel
                .correct_boundary(self.animator.current_offset(), self.page_width)
            {
                self.pending_silent = Some(corrected);
                return;
            }
        }

        if self.paused || !self.carousel.is_looping() {
            return;
        }
        let Some(fired_at) = self.auto_scroll_at else {
            return;
        };
        if fired_at.elapsed() < self.scrolling_interval() {
            return;
        }
        self.auto_scroll_at = Some(Instant::now());

        if let Some(tick_move) = self
            .carousel
            .on_auto_scroll_tick(self.animator.current_offset(), self.page_width)
        {
            let target = match tick_move {
                TickMove::Advance { target } => target,
                // Animate into the sentinel; boundary correction settles
                // the viewport on the real first item once it stops.
                TickMove::WrapAround { through, .. } => through,
            };
            self.animator
                .animate_to(Carousel::offset_of(target, self.page_width));
        }
    }

    /// Called after every draw with the banner's page width.
    ///
    /// Drains queued silent repositions (the initial jump and boundary
    /// snaps) and starts the auto-scroll clock on the first render.
    pub fn after_render(&mut self, page_width: f64) {
        if page_width != self.page_width && self.page_width > 0.0 && page_width > 0.0 {
            // Resize: keep the same page under the new width.
            let page = (self.animator.current_offset() / self.page_width).round();
            self.animator.set_offset(page * page_width);
            self.pending_silent = None;
        }
        self.page_width = page_width;

        if self.auto_scroll_at.is_none() && self.carousel.is_looping() {
            debug!("starting auto-scroll clock");
            self.auto_scroll_at = Some(Instant::now());
        }

        if let Some(index) = self.carousel.take_pending_jump() {
            self.animator
                .set_offset(Carousel::offset_of(index, page_width));
        }
        if let Some(offset) = self.pending_silent.take() {
            self.animator.set_offset(offset);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => self.paused = !self.paused,
            Action::Reload => {
                self.animator.cancel();
                self.drag.cancel();
                self.carousel.set_items(self.config.banner.items.clone());
            }
            Action::NextPage => self.page_by(1),
            Action::PrevPage => self.page_by(-1),
            Action::None => {}
        }
    }

    fn page_by(&mut self, step: i64) {
        if self.carousel.is_hidden() || self.page_width <= 0.0 {
            return;
        }
        let max_index = self.carousel.render_count() as i64 - 1;
        let current = (self.animator.target_offset() / self.page_width).round() as i64;
        let target = (current + step).clamp(0, max_index);
        self.animator
            .animate_to(Carousel::offset_of(target as usize, self.page_width));
        self.restart_clock();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.carousel.is_hidden() || self.page_width <= 0.0 {
                    return;
                }
                self.animator.cancel();
                self.drag
                    .begin(mouse.column, mouse.row, self.animator.current_offset());
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(offset) = self.drag.drag(mouse.column, mouse.row) {
                    let offset = self.clamp_offset(offset);
                    self.animator.set_offset(offset);
                    // Seam correction must land before the next pointer
                    // sample or the drag would fight the reset.
                    if let Some(corrected) =
                        self.carousel.correct_boundary(offset, self.page_width)
                    {
                        self.drag.rebase(corrected - offset);
                        self.animator.set_offset(corrected);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some((pointer_vx, pointer_vy)) = self.drag.release(mouse.column, mouse.row)
                {
                    // Content moves against the pointer.
                    self.end_drag(-pointer_vx, pointer_vy);
                }
            }
            _ => {}
        }
    }

    fn end_drag(&mut self, vx: f64, vy: f64) {
        if self.page_width <= 0.0 {
            return;
        }
        let offset = self.animator.current_offset();
        let max_offset = Carousel::offset_of(
            self.carousel.render_count().saturating_sub(1),
            self.page_width,
        );
        // Tentative settle position: momentum look-ahead, page-quantized.
        let projected = offset + vx * MOMENTUM_SECS;
        let target =
            ((projected / self.page_width).round() * self.page_width).clamp(0.0, max_offset);

        match self
            .carousel
            .on_drag_end(offset, target, (vx, vy), self.page_width)
        {
            DragOutcome::Snap { target } => {
                self.pending_silent = Some(Carousel::offset_of(target, self.page_width));
            }
            DragOutcome::None | DragOutcome::Nudge { .. } => {
                self.animator.animate_to(target);
            }
        }
        self.restart_clock();
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        let max_offset = Carousel::offset_of(
            self.carousel.render_count().saturating_sub(1),
            self.page_width,
        );
        offset.clamp(0.0, max_offset)
    }

    fn restart_clock(&mut self) {
        if self.auto_scroll_at.is_some() {
            self.auto_scroll_at = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bannerloop_core::{BannerConfig, ScrollConfig, UiConfig};
    use crossterm::event::KeyModifiers;

    const PAGE: f64 = 100.0;

    fn test_config(items: &[&str]) -> AppConfig {
        AppConfig {
            banner: BannerConfig {
                items: items.iter().map(|s| s.to_string()).collect(),
                scrolling_time: 5.0,
                auto_scroll_index: 1,
            },
            ui: UiConfig {
                // Instant transitions keep the tests deterministic.
                scroll: ScrollConfig {
                    smooth_enabled: false,
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn app(items: &[&str]) -> App {
        let mut app = App::new(test_config(items), Theme::default());
        app.after_render(PAGE);
        app
    }

    fn force_tick(app: &mut App) {
        app.auto_scroll_at = Some(Instant::now() - Duration::from_secs(60));
        app.on_tick();
        app.after_render(PAGE);
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_first_render_jumps_to_first_real_item() {
        let app = app(&["A", "B", "C"]);
        assert_eq!(app.animator.current_offset(), PAGE);
        assert_eq!(app.carousel.current_page(), 0);
    }

    #[test]
    fn test_auto_scroll_cycles_through_pages_and_wraps() {
        let mut app = app(&["A", "B", "C"]);
        force_tick(&mut app);
        assert_eq!(app.animator.current_offset(), 200.0);
        force_tick(&mut app);
        assert_eq!(app.animator.current_offset(), 300.0);
        // Wrap: moves into the trailing sentinel, then the boundary
        // correction on the following tick settles on index 1.
        force_tick(&mut app);
        assert_eq!(app.animator.current_offset(), 400.0);
        app.on_tick();
        app.after_render(PAGE);
        assert_eq!(app.animator.current_offset(), PAGE);
        assert_eq!(app.carousel.current_page(), 0);
    }

    #[test]
    fn test_tick_is_noop_before_first_render() {
        let mut app = App::new(test_config(&["A", "B"]), Theme::default());
        app.on_tick();
        assert_eq!(app.animator.current_offset(), 0.0);
    }

    #[test]
    fn test_pause_suspends_auto_scroll() {
        let mut app = app(&["A", "B", "C"]);
        app.handle_action(Action::TogglePause);
        force_tick(&mut app);
        assert_eq!(app.animator.current_offset(), PAGE);
        app.handle_action(Action::TogglePause);
        force_tick(&mut app);
        assert_eq!(app.animator.current_offset(), 200.0);
    }

    #[test]
    fn test_single_item_never_starts_clock() {
        let mut app = app(&["only"]);
        assert_eq!(app.animator.current_offset(), 0.0);
        force_tick(&mut app);
        assert_eq!(app.animator.current_offset(), 0.0);
    }

    #[test]
    fn test_drag_moves_viewport_and_settles_on_page() {
        let mut app = app(&["A", "B", "C"]);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 80, 3));
        // Slow leftward pointer drag of 40 columns: offset 100 -> 140.
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 3));
        assert_eq!(app.animator.current_offset(), 140.0);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 40, 3));
        app.after_render(PAGE);
        // Settles on the nearest page boundary.
        assert_eq!(app.animator.current_offset(), 100.0);
    }

    #[test]
    fn test_drag_past_leading_edge_is_seamless() {
        let mut app = app(&["A", "B", "C"]);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 3));
        // Rightward drag of 100 columns lands exactly on the leading
        // sentinel; correction rebases the gesture onto the real last item.
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 150, 3));
        assert_eq!(app.animator.current_offset(), 300.0);
    }

    #[test]
    fn test_manual_paging_onto_sentinel_corrects_silently() {
        let mut app = app(&["A", "B", "C"]);
        app.handle_action(Action::PrevPage);
        assert_eq!(app.animator.current_offset(), 0.0);
        app.on_tick();
        app.after_render(PAGE);
        assert_eq!(app.animator.current_offset(), 300.0);
    }

    #[test]
    fn test_reload_requeues_initial_jump() {
        let mut app = app(&["A", "B", "C"]);
        app.handle_action(Action::NextPage);
        app.handle_action(Action::Reload);
        app.after_render(PAGE);
        assert_eq!(app.animator.current_offset(), PAGE);
    }

    #[test]
    fn test_resize_keeps_current_page() {
        let mut app = app(&["A", "B", "C"]);
        assert_eq!(app.animator.current_offset(), 100.0);
        app.after_render(50.0);
        assert_eq!(app.animator.current_offset(), 50.0);
    }
}
