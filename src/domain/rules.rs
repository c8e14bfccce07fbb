use serde::{Deserialize, Serialize};

use super::{Color, NeighborCounts};

/// Rule set applied by the transition engine.
///
/// Single-color Life is the two-color rule's degenerate case where only
/// [`Color::A`] ever exists, so both share one step loop and differ only in
/// [`Mode::outcome`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Conway's Game of Life (B3/S23)
    #[default]
    SingleColor,
    /// PvP Life: cells carry an owner and births are scored
    TwoColor,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::SingleColor => "Conway",
            Mode::TwoColor => "PvP",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Mode::SingleColor => "B3/S23 - Classic",
            Mode::TwoColor => "B3/S23 - Two colors, majority births",
        }
    }

    pub const fn is_scored(self) -> bool {
        matches!(self, Mode::TwoColor)
    }

    /// Color a newly placed cell actually gets in this mode
    pub const fn normalize(self, color: Color) -> Color {
        match self {
            Mode::SingleColor => Color::A,
            Mode::TwoColor => color,
        }
    }

    /// Next state of a cell given its current owner (`None` = dead) and
    /// the neighbor counts taken from the current generation.
    pub fn outcome(self, current: Option<Color>, counts: NeighborCounts) -> Option<Color> {
        match self {
            Mode::SingleColor => conway(current.is_some(), counts.total()).then_some(Color::A),
            Mode::TwoColor => two_color(current, counts),
        }
    }
}

/// B3/S23 on a plain neighbor count
const fn conway(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

fn two_color(current: Option<Color>, counts: NeighborCounts) -> Option<Color> {
    if let Some(sole) = counts.sole_color() {
        // Only one color around: plain thresholds on the total, and the
        // cell ends up owned by that color whether born or surviving.
        return conway(current.is_some(), counts.total()).then_some(sole);
    }

    match current {
        // Mixed neighbors: a live cell is kept alive only by its own color.
        Some(own) => conway(true, counts.of(own)).then_some(own),
        None => (counts.total() == 3).then(|| counts.majority()),
    }
}
