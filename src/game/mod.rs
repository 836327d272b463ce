pub mod types;
pub mod error;
pub mod state;
pub mod game_loop;

pub mod entities;
pub mod grid;
pub mod systems;


pub use error::GameResult;
pub use game_loop::run_game_loop;
pub use state::GameState;
