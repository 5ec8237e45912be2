use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

/// Small framed prompt drawn over the grid.
pub struct Popup<'a> {
    title: &'a str,
    content: &'a str,
    accent: Color,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            accent: Color::Yellow,
        }
    }

    /// Rect of `width` x `height` centred in `outer`, shrunk to fit.
    pub fn area(outer: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(outer.width);
        let height = height.min(outer.height);
        Rect {
            x: outer.x + (outer.width - width) / 2,
            y: outer.y + (outer.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for Popup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(Line::from(self.title).bold())
            .border_style(Style::default().fg(self.accent));
        Paragraph::new(self.content)
            .centered()
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_and_clamped() {
        let outer = Rect::new(0, 0, 80, 24);
        assert_eq!(Popup::area(outer, 30, 3), Rect::new(25, 10, 30, 3));
        let small = Rect::new(2, 1, 10, 2);
        assert_eq!(Popup::area(small, 30, 3), small);
    }

    #[test]
    fn renders_over_existing_cells() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 1, "x".repeat(20), Style::default());
        Popup::new("Seed", "42").render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Seed"));
        assert!(text.contains("42"));
        assert!(!text.contains('x'));
    }
}
