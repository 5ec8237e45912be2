use ratatui::{
    crossterm::event::{Event, KeyCode},
    widgets::Widget,
};

use crate::{app::Message, popup::Popup};

#[derive(Default)]
pub struct SeedInput {
    input: String,
}

impl SeedInput {
    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Char(c) => {
                    if c.is_ascii_digit() {
                        self.input.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Esc => {
                    self.input.clear();
                    return Some(Message::CloseSeedInput);
                }
                KeyCode::Enter => {
                    // Too many digits for a u64 leaves the prompt open
                    if let Ok(seed) = self.input.parse::<u64>() {
                        self.input.clear();
                        return Some(Message::NewGame(seed));
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn draw(&self) -> impl Widget + '_ {
        Popup::new("Seed for new game", &self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn digits_only() {
        let mut input = SeedInput::default();
        for c in ['4', 'x', '2'] {
            assert_eq!(input.update(&key(KeyCode::Char(c))), None);
        }
        assert_eq!(input.update(&key(KeyCode::Enter)), Some(Message::NewGame(42)));
        assert!(input.input.is_empty());
    }

    #[test]
    fn empty_or_overflowing_input_is_ignored() {
        let mut input = SeedInput::default();
        assert_eq!(input.update(&key(KeyCode::Enter)), None);
        for _ in 0..25 {
            input.update(&key(KeyCode::Char('9')));
        }
        assert_eq!(input.update(&key(KeyCode::Enter)), None);
        assert_eq!(input.update(&key(KeyCode::Esc)), Some(Message::CloseSeedInput));
    }
}
