pub mod board;
pub mod figure;
pub mod state;

pub use board::Block;
pub use state::{Game, GameState};
