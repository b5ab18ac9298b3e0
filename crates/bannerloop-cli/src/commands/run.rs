use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use tracing::debug;

use bannerloop_core::AppConfig;
use bannerloop_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{BannerWidget, PageIndicatorWidget, StatusBarWidget},
    Theme,
};

pub fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Bannerloop")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);
    let mut app = App::new(config, Theme::default());

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal. Leaving the loop drops the auto-scroll clock and
    // any queued repositions with the app.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        app.on_tick();

        let mut banner_width = 0u16;
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(7),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            let banner_area: Rect = chunks[0];
            banner_width = banner_area.width;

            BannerWidget::render(frame, banner_area, app);
            PageIndicatorWidget::render(frame, banner_area, app);
            StatusBarWidget::render(frame, chunks[2], app);
        })?;

        // Silent repositions apply only after the render pass completed.
        app.after_render(banner_width as f64);

        match event_handler.next(app.animator.is_animating())? {
            Some(AppEvent::Key(key)) => app.handle_action(handle_key_event(key)),
            Some(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(AppEvent::Resize(w, h)) => debug!(w, h, "terminal resized"),
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
