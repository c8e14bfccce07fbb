//! Error types for the engine and its configuration layer.

use thiserror::Error;

use crate::domain::Coord;

/// Contract violations reported by the engine.
///
/// None of these are transient: they mean the caller used the API in a way
/// it does not support, so they are returned immediately and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Queried the color of a cell that is not alive.
    #[error("cell at {0} is dead and has no color")]
    InvalidState(Coord),

    /// Pattern rejected by the loader.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Operation not allowed in the current match phase.
    #[error("precondition violated: {0}")]
    PreconditionViolated(&'static str),
}

/// Errors raised while loading a [`MatchConfig`](crate::application::MatchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed values are out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
