use ratatui::crossterm::event::KeyCode;
use twenty48::Action;
use twenty48_types::Direction;

use crate::app::Message;

/// Key bindings while playing.
pub fn message_for(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('n') => Some(Message::OpenSeedInput),
        KeyCode::Char('u') => Some(Message::Act(Action::Undo)),
        KeyCode::Char('r') => Some(Message::Act(Action::Restart)),
        code => direction_for(code).map(|d| Message::Act(Action::Slide(d))),
    }
}

/// Arrow keys and WASD.
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        _ => None,
    }
}
