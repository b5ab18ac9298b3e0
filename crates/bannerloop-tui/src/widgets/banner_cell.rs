use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Stateless renderer for one banner item.
///
/// Clears its whole area to the background first (the reuse contract) and
/// draws the label centered. An empty label yields a plain colored cell,
/// which is also how out-of-range render requests degrade.
pub struct BannerCell<'a> {
    text: &'a str,
    background: Color,
    foreground: Color,
}

impl<'a> BannerCell<'a> {
    pub fn new(text: &'a str, background: Color, foreground: Color) -> Self {
        Self {
            text,
            background,
            foreground,
        }
    }

    pub fn empty(background: Color) -> Self {
        Self {
            text: "",
            background,
            foreground: background,
        }
    }
}

impl Widget for BannerCell<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(self.foreground).bg(self.background);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_char(' ').set_style(style);
            }
        }
        if self.text.is_empty() {
            return;
        }
        let label_width = self.text.width().min(area.width as usize);
        let x = area.left() + (area.width as usize - label_width) as u16 / 2;
        let y = area.top() + area.height / 2;
        buf.set_stringn(x, y, self.text, area.width as usize, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(cell: BannerCell, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        cell.render(buf.area, &mut buf);
        buf
    }

    #[test]
    fn test_label_is_centered() {
        let buf = rendered(BannerCell::new("ab", Color::Red, Color::White), 10, 3);
        let row: String = (0..10).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "    ab    ");
    }

    #[test]
    fn test_area_cleared_to_background() {
        let buf = rendered(BannerCell::new("x", Color::Blue, Color::White), 4, 2);
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(buf[(x, y)].bg, Color::Blue);
            }
        }
    }

    #[test]
    fn test_empty_cell_renders_blank() {
        let buf = rendered(BannerCell::empty(Color::Green), 4, 1);
        for x in 0..4 {
            assert_eq!(buf[(x, 0)].symbol(), " ");
        }
    }

    #[test]
    fn test_long_label_truncated_to_area() {
        let buf = rendered(
            BannerCell::new("much too long", Color::Red, Color::White),
            5,
            1,
        );
        // Must not panic and must stay inside the area.
        assert_eq!(buf.area.width, 5);
    }
}
