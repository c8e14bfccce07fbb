//! Caller-side random board filler.
//!
//! The engine has no notion of board size or density. This helper picks
//! cells inside a square and hands each one to [`GameState::set_alive`].

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{GameState, MatchConfig};
use crate::domain::{Color, Coord, Mode};
use crate::error::LifeError;

/// How live cells are assigned to colors in two-color mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Placement {
    /// Each live cell is A or B with equal odds
    #[default]
    Mixed,
    /// Left half (x < 0) belongs to A, right half to B
    Split,
}

/// Fills `[-extent, extent)` squared with live cells at `density`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomSoup {
    pub density: f64,
    pub extent: i32,
    pub placement: Placement,
}

impl RandomSoup {
    pub fn new(density: f64, extent: i32) -> Self {
        Self {
            density: if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) },
            extent: extent.max(0),
            placement: Placement::default(),
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.initial_density, config.board_extent)
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Populate `game` from a fresh RNG, seeded when `seed` is given
    pub fn fill(&self, game: &mut GameState, seed: Option<u64>) -> Result<usize, LifeError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.fill_with(game, &mut rng)
    }

    /// Populate `game` using `rng`; returns the number of cells set alive
    pub fn fill_with<R: Rng>(&self, game: &mut GameState, rng: &mut R) -> Result<usize, LifeError> {
        let mode = game.mode();
        let mut placed = 0;

        for y in -self.extent..self.extent {
            for x in -self.extent..self.extent {
                if !rng.random_bool(self.density) {
                    continue;
                }
                let color = match (mode, self.placement) {
                    (Mode::SingleColor, _) => Color::A,
                    (Mode::TwoColor, Placement::Split) => {
                        if x < 0 { Color::A } else { Color::B }
                    }
                    (Mode::TwoColor, Placement::Mixed) => {
                        if rng.random_bool(0.5) { Color::A } else { Color::B }
                    }
                };
                game.set_alive(Coord::new(x, y), true, color)?;
                placed += 1;
            }
        }

        info!(
            "[Soup] Placed {} cells in a {}x{} square at density {:.2}",
            placed,
            self.extent * 2,
            self.extent * 2,
            self.density
        );
        Ok(placed)
    }
}
