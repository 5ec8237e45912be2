use itertools::Itertools;
use ratatui::{
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use twenty48::Game;

pub struct StatusView;

impl StatusView {
    pub fn draw(&self, game: &Game, seed: u64) -> impl Widget + '_ {
        let history = game.history();
        // mirrors a disabled undo button
        let undo = if game.can_undo() {
            Line::from(format!("Undo (u): {}/{}", history.len(), history.capacity()))
        } else {
            Line::from("Undo (u): -").style(Style::default().fg(Color::DarkGray))
        };
        let moves = game
            .slides()
            .iter()
            .map(|(direction, count)| format!("{direction} {count}"))
            .join("  ");
        let mut lines = vec![
            Line::from(format!("Value: {}", game.tile_sum())).bold(),
            undo,
            Line::from(format!("Seed: {seed}")),
            Line::from(format!("Moves: {moves}")),
            Line::default(),
            Line::from("arrows/wasd slide  r restart"),
            Line::from("n new seed  q quit"),
        ];
        if !game.has_moves() {
            lines.insert(0, Line::from("No moves left").style(Style::default().fg(Color::Red)));
        }
        Paragraph::new(lines).block(Block::bordered().title("Status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::{buffer::Buffer, layout::Rect};
    use twenty48::GameConfig;
    use twenty48_types::{Direction, Grid};

    fn rendered(game: &Game) -> String {
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        StatusView.draw(game, 9).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn shows_sum_and_undo_state() {
        let grid = Grid::from_values(2, 2, &[2, 2, 0, 0]).unwrap();
        let config = GameConfig {
            width: 2,
            height: 2,
            ..GameConfig::default()
        };
        let mut game = Game::from_grid(config, grid, StdRng::seed_from_u64(0)).unwrap();
        let text = rendered(&game);
        assert!(text.contains("Value: 4"));
        assert!(text.contains("Undo (u): -"));
        assert!(text.contains("Seed: 9"));

        assert!(game.slide(Direction::Left));
        let text = rendered(&game);
        assert!(text.contains("Undo (u): 1/10"));
        assert!(text.contains("left 1"));
    }
}
