use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::widgets::BannerCell;

/// Horizontally paged banner row.
///
/// Page width equals the widget area width; the viewport shows whichever
/// one or two padded cells the current fractional offset intersects.
pub struct BannerWidget;

impl BannerWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if app.carousel.is_hidden() || area.width == 0 || area.height == 0 {
            return;
        }
        let page_width = area.width as f64;
        let offset = app.animator.current_offset();
        let count = app.carousel.render_count();

        let first = (offset / page_width).floor().max(0.0) as usize;
        for index in [first, first + 1] {
            if index >= count {
                continue;
            }
            let cell_left = (index as f64 * page_width - offset).round() as i32;
            let cell_right = cell_left + area.width as i32;
            let vis_left = cell_left.max(0);
            let vis_right = cell_right.min(area.width as i32);
            if vis_right <= vis_left {
                continue;
            }
            let rect = Rect::new(
                area.x + vis_left as u16,
                area.y,
                (vis_right - vis_left) as u16,
                area.height,
            );
            let cell = match app.carousel.item_at(index) {
                Some(text) => {
                    let background = app
                        .carousel
                        .logical_index(index)
                        .map(|i| app.theme.cell_background(i))
                        .unwrap_or(app.theme.bg);
                    BannerCell::new(text, background, app.theme.cell_fg)
                }
                None => BannerCell::empty(app.theme.bg),
            };
            frame.render_widget(cell, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bannerloop_core::{AppConfig, BannerConfig, ScrollConfig, UiConfig};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::theme::Theme;

    fn demo_app(items: &[&str]) -> App {
        let config = AppConfig {
            banner: BannerConfig {
                items: items.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            ui: UiConfig {
                scroll: ScrollConfig {
                    smooth_enabled: false,
                    ..Default::default()
                },
                ..Default::default()
            },
        };
        App::new(config, Theme::default())
    }

    fn draw(app: &App, width: u16) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| BannerWidget::render(frame, frame.area(), app))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buf: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_shows_first_real_item_after_initial_jump() {
        let mut app = demo_app(&["AA", "BB", "CC"]);
        app.after_render(12.0);
        let buf = draw(&app, 12);
        assert!(row(&buf, 1).contains("AA"), "row: {:?}", row(&buf, 1));
    }

    #[test]
    fn test_sentinel_renders_like_its_twin() {
        let mut app = demo_app(&["AA", "BB", "CC"]);
        app.after_render(12.0);
        // Leading sentinel (padded index 0) clones the last item.
        app.animator.set_offset(0.0);
        let buf = draw(&app, 12);
        assert!(row(&buf, 1).contains("CC"));
    }

    #[test]
    fn test_mid_transition_shows_both_neighbors() {
        let mut app = demo_app(&["AA", "BB", "CC"]);
        app.after_render(12.0);
        // Halfway between padded index 1 and 2.
        app.animator.set_offset(18.0);
        let buf = draw(&app, 12);
        let line = row(&buf, 1);
        assert!(line.contains("AA") || line.contains("BB"), "line: {line:?}");
    }

    #[test]
    fn test_empty_carousel_renders_nothing() {
        let app = demo_app(&[]);
        let buf = draw(&app, 12);
        assert_eq!(row(&buf, 1).trim(), "");
    }
}
