mod board;
mod cell;
pub mod cli;
mod config;
mod game;
mod hint;
mod logging;
mod mask;
mod ui;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use game::*;
pub use hint::*;
pub use logging::init_logging;
pub use mask::*;
pub use ui::*;
