mod config;
mod game_state;
pub mod random_soup;

pub use config::MatchConfig;
pub use game_state::{GameState, Phase, StepResult};
pub use random_soup::{Placement, RandomSoup};
