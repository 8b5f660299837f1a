//! Single-game state

mod session;

pub use session::{GameSession, GameStatus, GuessRecord};
