mod coord;
mod cell;
mod store;
mod neighborhood;
mod rules;
mod algorithm;
mod score;
pub mod patterns;
pub mod transition;

pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use cell::Color;
pub use store::CellStore;
pub use neighborhood::{NeighborCounts, count_neighbors};
pub use rules::Mode;
pub use algorithm::Algorithm;
pub use score::{IterationCap, MatchResult, MatchStatus, Scoreboard};
pub use patterns::{Pattern, presets};
pub use transition::BirthEvent;
