use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Chrome
    pub bg: Color,
    pub fg: Color,
    pub grey: Color,
    pub accent: Color,

    // Page indicator
    pub indicator_active: Color,
    pub indicator_inactive: Color,

    // Cell backgrounds, cycled by padded index
    pub cell_palette: Vec<Color>,
    pub cell_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            indicator_active: Color::Rgb(0xdd, 0xc7, 0xa1),
            indicator_inactive: Color::Rgb(0x7c, 0x6f, 0x64),
            cell_palette: vec![
                Color::Rgb(0xea, 0x69, 0x62),
                Color::Rgb(0x7d, 0xae, 0xa3),
                Color::Rgb(0xa9, 0xb6, 0x65),
            ],
            cell_fg: Color::Rgb(0x28, 0x28, 0x28),
        }
    }
}

impl Theme {
    /// Background for the cell showing a logical (unpadded) item index.
    ///
    /// Keyed by the logical index, not the padded one, so a sentinel
    /// clone always renders with the same color as its real twin and the
    /// silent repositions stay invisible.
    pub fn cell_background(&self, logical_index: usize) -> Color {
        if self.cell_palette.is_empty() {
            return self.bg;
        }
        self.cell_palette[logical_index % self.cell_palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.cell_background(0), theme.cell_background(3));
        assert_ne!(theme.cell_background(0), theme.cell_background(1));
    }
}
