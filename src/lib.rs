//! Sparse Game of Life engine with a two-color competitive mode.
//!
//! The domain layer holds the rules and the generation step; the
//! application layer wraps them in a match with phases, scores and config.
//! Nothing here renders, reads input or schedules ticks.

// Domain layer - Core rules and data
pub mod domain;

// Application layer - Match orchestration and configuration
pub mod application;

pub mod error;

// Re-exports for convenience
pub use domain::{
    Algorithm, BirthEvent, CellStore, Color, Coord, IterationCap, MatchResult, MatchStatus, Mode,
    Pattern, presets,
};
pub use application::{GameState, MatchConfig, Phase, RandomSoup, StepResult};
pub use error::{ConfigError, LifeError};
