use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = if !app.carousel.is_looping() {
            "STATIC"
        } else if app.paused {
            "PAUSED"
        } else {
            "AUTO"
        };

        let status_text = if app.carousel.is_hidden() {
            format!(" {} | no items", mode_str)
        } else {
            format!(
                " {} | Page: {}/{}",
                mode_str,
                app.carousel.current_page() + 1,
                app.carousel.banner_count()
            )
        };

        let help_hint = " q:quit space:pause h/l:page r:reload drag:scroll ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg).bg(app.theme.bg),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bg)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey).bg(app.theme.bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
