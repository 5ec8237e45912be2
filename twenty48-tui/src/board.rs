use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph, Widget},
};
use twenty48_types::{Grid, Tile, NUM_TILES};

/// Background per tile exponent: stone for empty cells, then amber, lime and teal shades.
const TILE_COLORS: [Color; NUM_TILES] = [
    Color::Rgb(0xa8, 0xa2, 0x9e),
    Color::Rgb(0xfd, 0xe6, 0x8a),
    Color::Rgb(0xfc, 0xd3, 0x4d),
    Color::Rgb(0xfb, 0xbf, 0x24),
    Color::Rgb(0xf5, 0x9e, 0x0b),
    Color::Rgb(0xd9, 0x77, 0x06),
    Color::Rgb(0xb4, 0x53, 0x09),
    Color::Rgb(0x92, 0x40, 0x0e),
    Color::Rgb(0x78, 0x35, 0x0f),
    Color::Rgb(0xbe, 0xf2, 0x64),
    Color::Rgb(0xa3, 0xe6, 0x35),
    Color::Rgb(0x84, 0xcc, 0x16),
    Color::Rgb(0x65, 0xa3, 0x0d),
    Color::Rgb(0x4d, 0x7c, 0x0f),
    Color::Rgb(0x3f, 0x62, 0x12),
    Color::Rgb(0x5e, 0xea, 0xd4),
    Color::Rgb(0x2d, 0xd4, 0xbf),
    Color::Rgb(0x14, 0xb8, 0xa6),
    Color::Rgb(0x0d, 0x94, 0x88),
    Color::Rgb(0x0f, 0x76, 0x6e),
    Color::Rgb(0x11, 0x5e, 0x59),
];

fn tile_style(tile: Tile) -> Style {
    let fg = match tile.exponent() {
        6..=8 | 13 | 14 | 19 | 20 => Color::White,
        _ => Color::Black,
    };
    Style::default()
        .bg(TILE_COLORS[tile.exponent() as usize])
        .fg(fg)
}

#[derive(Default)]
pub struct GridView {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    title: String,
}

impl GridView {
    pub fn new(grid: &Grid, title: &str) -> Self {
        let mut view = Self {
            title: title.to_owned(),
            ..Self::default()
        };
        view.on_state_change(grid);
        view
    }

    pub fn on_state_change(&mut self, grid: &Grid) {
        self.width = grid.width();
        self.height = grid.height();
        self.tiles.clear();
        self.tiles.extend_from_slice(grid.cells());
    }

    pub fn draw(&self) -> impl Widget + '_ {
        Tiles { view: self }
    }
}

struct Tiles<'a> {
    view: &'a GridView,
}

impl Widget for Tiles<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let GridView {
            width,
            height,
            tiles,
            title,
        } = self.view;
        let block = Block::bordered().title(title.as_str());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical(vec![Constraint::Ratio(1, *height as u32); *height])
            .spacing(1)
            .split(inner);
        for (r, row_area) in rows.iter().enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, *width as u32); *width])
                .spacing(1)
                .split(*row_area);
            for (c, cell_area) in cells.iter().enumerate() {
                let tile = tiles[r * width + c];
                let style = tile_style(tile);
                Block::new().style(style).render(*cell_area, buf);
                if tile.is_empty() {
                    continue;
                }
                let [_, label, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(*cell_area);
                Paragraph::new(tile.to_string())
                    .style(style)
                    .centered()
                    .render(label, buf);
            }
        }
    }
}
