use std::{io, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    layout::{Constraint, Layout},
    DefaultTerminal, Frame,
};
use tracing::{error, info};
use twenty48::{Action, ConfigError, Game, GameConfig, Record};

use crate::{
    board::GridView, input::message_for, popup::Popup, seed_input::SeedInput,
    status::StatusView,
};

enum Mode {
    Play,
    SeedEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Quit,
    Act(Action),
    OpenSeedInput,
    CloseSeedInput,
    NewGame(u64),
}

pub struct App {
    game: Game,
    record: Record,
    mode: Mode,
    grid_view: GridView,
    status: StatusView,
    seed_input: SeedInput,
}

impl App {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let game = Game::new_with_seed(config, seed)?;
        let grid_view = GridView::new(game.grid(), game.name());
        Ok(Self {
            game,
            record: Record::new(seed),
            mode: Mode::Play,
            grid_view,
            status: StatusView,
            seed_input: SeedInput::default(),
        })
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update() {
                if !self.handle(message) {
                    break;
                }
            }
        }
        info!(
            seed = self.record.seed,
            actions = self.record.actions.len(),
            tile_sum = self.game.tile_sum(),
            "quit"
        );
        Ok(())
    }

    /// Applies `message`, returns `false` once the app should exit.
    pub fn handle(&mut self, message: Message) -> bool {
        match message {
            Message::Quit => return false,
            Message::Act(action) => {
                if self.game.apply(action) {
                    self.record.push(action);
                    self.on_state_change();
                }
            }
            Message::OpenSeedInput => self.mode = Mode::SeedEdit,
            Message::CloseSeedInput => self.mode = Mode::Play,
            Message::NewGame(seed) => {
                match Game::new_with_seed(self.game.config().clone(), seed) {
                    Ok(game) => {
                        info!(seed, "new game");
                        self.game = game;
                        self.record = Record::new(seed);
                        self.on_state_change();
                    }
                    // the config was validated when the first game started
                    Err(err) => error!(%err, "could not start a new game"),
                }
                self.mode = Mode::Play;
            }
        }
        true
    }

    pub fn update(&mut self) -> Option<Message> {
        if event::poll(Duration::from_millis(100)).ok()? {
            let event = event::read().ok()?;
            let Event::Key(key) = &event else {
                return None;
            };
            if key.kind != KeyEventKind::Press {
                return None;
            }
            return match self.mode {
                Mode::SeedEdit => self.seed_input.update(&event),
                Mode::Play => message_for(key.code),
            };
        }
        None
    }

    fn on_state_change(&mut self) {
        self.grid_view.on_state_change(self.game.grid());
    }

    fn draw(&self, frame: &mut Frame) {
        let horizontal =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]);
        let [grid, status] = horizontal.areas(frame.area());
        frame.render_widget(self.grid_view.draw(), grid);
        frame.render_widget(self.status.draw(&self.game, self.record.seed), status);
        if matches!(self.mode, Mode::SeedEdit) {
            let area = Popup::area(frame.area(), 30, 3);
            frame.render_widget(self.seed_input.draw(), area);
        }
    }
}
