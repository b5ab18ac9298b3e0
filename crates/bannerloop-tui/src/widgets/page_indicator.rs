use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Passive dot row mirroring the carousel's logical page.
///
/// Rendered over the bottom-right corner of the banner; hidden when there
/// are fewer than two items, like the looping illusion itself.
pub struct PageIndicatorWidget;

impl PageIndicatorWidget {
    pub fn render(frame: &mut Frame, banner_area: Rect, app: &App) {
        let pages = app.carousel.banner_count();
        if pages <= 1 || banner_area.height == 0 {
            return;
        }
        let current = app.carousel.current_page();

        let mut spans = Vec::with_capacity(pages * 2);
        for page in 0..pages {
            if page > 0 {
                spans.push(Span::raw(" "));
            }
            let (dot, color) = if page == current {
                ("●", app.theme.indicator_active)
            } else {
                ("○", app.theme.indicator_inactive)
            };
            spans.push(Span::styled(dot, Style::default().fg(color)));
        }

        let width = (pages * 2 - 1) as u16;
        if banner_area.width < width + 2 {
            return;
        }
        let rect = Rect::new(
            banner_area.right() - width - 2,
            banner_area.bottom() - 1,
            width,
            1,
        );
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bannerloop_core::{AppConfig, BannerConfig};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::theme::Theme;

    fn demo_app(items: &[&str]) -> App {
        let config = AppConfig {
            banner: BannerConfig {
                items: items.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            ..Default::default()
        };
        App::new(config, Theme::default())
    }

    fn draw(app: &App) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(20, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| PageIndicatorWidget::render(frame, frame.area(), app))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn dots(buf: &ratatui::buffer::Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 3)].symbol().to_string())
            .collect::<String>()
            .trim()
            .to_string()
    }

    #[test]
    fn test_one_dot_per_item_with_current_highlighted() {
        let app = demo_app(&["A", "B", "C"]);
        assert_eq!(dots(&draw(&app)), "● ○ ○");
    }

    #[test]
    fn test_hidden_for_single_item() {
        let app = demo_app(&["only"]);
        assert_eq!(dots(&draw(&app)), "");
    }

    #[test]
    fn test_hidden_when_empty() {
        let app = demo_app(&[]);
        assert_eq!(dots(&draw(&app)), "");
    }
}
