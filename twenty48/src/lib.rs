#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod config;
pub mod game;
pub mod history;
pub mod record;
pub mod slide;
pub mod spawn;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use record::{Action, Record};
