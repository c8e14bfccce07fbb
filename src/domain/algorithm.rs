//! Algorithm enum for selecting how a generation is evaluated.
//!
//! Both strategies read the same current generation and produce the same
//! next generation; they differ only in how candidate cells are scheduled.

use serde::{Deserialize, Serialize};

/// Available candidate evaluation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// One candidate after another on the calling thread
    Serial,
    /// Candidates split across the rayon thread pool
    #[default]
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and benchmark tables
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Sparse candidate set, serial",
            Algorithm::Parallel => "Sparse candidate set, rayon par_iter",
        }
    }
}
