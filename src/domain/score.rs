//! Scoring and end-of-match policy.

use serde::{Deserialize, Serialize};

use super::{BirthEvent, Color, Mode};

/// Whether the match can keep stepping.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MatchStatus {
    #[default]
    Ongoing,
    Ended,
}

/// Outcome of a finished match, decided by score alone.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MatchResult {
    AWins,
    BWins,
    Draw,
}

impl MatchResult {
    pub const fn from_scores(score_a: u64, score_b: u64) -> Self {
        if score_a > score_b {
            MatchResult::AWins
        } else if score_b > score_a {
            MatchResult::BWins
        } else {
            MatchResult::Draw
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            MatchResult::AWins => Some(Color::A),
            MatchResult::BWins => Some(Color::B),
            MatchResult::Draw => None,
        }
    }
}

/// Maximum number of steps in a match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IterationCap {
    #[default]
    Unbounded,
    Limited(u64),
}

impl IterationCap {
    /// Decode the config form, where -1 means unbounded.
    /// Anything below -1 is not a cap.
    pub const fn from_config(value: i64) -> Option<Self> {
        match value {
            -1 => Some(IterationCap::Unbounded),
            v if v >= 0 => Some(IterationCap::Limited(v as u64)),
            _ => None,
        }
    }

    pub const fn to_config(self) -> i64 {
        match self {
            IterationCap::Unbounded => -1,
            IterationCap::Limited(n) => n as i64,
        }
    }

    pub const fn is_reached(self, iterations: u64) -> bool {
        match self {
            IterationCap::Unbounded => false,
            IterationCap::Limited(n) => iterations >= n,
        }
    }
}

/// Per-match counters updated after every step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    mode: Mode,
    cap: IterationCap,
    score_a: u64,
    score_b: u64,
    iterations: u64,
    status: MatchStatus,
}

impl Scoreboard {
    pub fn new(mode: Mode, cap: IterationCap) -> Self {
        Self {
            mode,
            cap,
            ..Self::default()
        }
    }

    /// Zero the counters, keeping mode and cap
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.cap);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_cap(&mut self, cap: IterationCap) {
        self.cap = cap;
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn cap(&self) -> IterationCap {
        self.cap
    }

    pub const fn scores(&self) -> (u64, u64) {
        (self.score_a, self.score_b)
    }

    pub const fn score_of(&self, color: Color) -> u64 {
        match color {
            Color::A => self.score_a,
            Color::B => self.score_b,
        }
    }

    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    /// Account for one completed step and decide whether the match is over.
    ///
    /// Births score only in two-color mode. Two-color matches end on total
    /// extinction; any match ends once the iteration cap is reached.
    pub fn on_step_complete(&mut self, births: &[BirthEvent], new_alive_count: usize) -> MatchStatus {
        if self.mode.is_scored() {
            for birth in births {
                match birth.color {
                    Color::A => self.score_a += 1,
                    Color::B => self.score_b += 1,
                }
            }
        }
        self.iterations += 1;

        let extinct = self.mode == Mode::TwoColor && new_alive_count == 0;
        if extinct || self.cap.is_reached(self.iterations) {
            self.status = MatchStatus::Ended;
        }
        self.status
    }

    /// Result from the current scores, whether or not the match has ended
    pub const fn standing(&self) -> MatchResult {
        MatchResult::from_scores(self.score_a, self.score_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coord;

    fn births(colors: &[Color]) -> Vec<BirthEvent> {
        colors
            .iter()
            .enumerate()
            .map(|(i, &color)| BirthEvent { coord: Coord::new(i as i32, 0), color })
            .collect()
    }

    #[test]
    fn test_births_scored_per_color() {
        let mut board = Scoreboard::new(Mode::TwoColor, IterationCap::Unbounded);
        let status = board.on_step_complete(&births(&[Color::A, Color::B, Color::A]), 10);
        assert_eq!(status, MatchStatus::Ongoing);
        assert_eq!(board.scores(), (2, 1));
        assert_eq!(board.iterations(), 1);
    }

    #[test]
    fn test_single_color_does_not_score() {
        let mut board = Scoreboard::new(Mode::SingleColor, IterationCap::Unbounded);
        board.on_step_complete(&births(&[Color::A, Color::A]), 0);
        assert_eq!(board.scores(), (0, 0));
        // Extinction only ends two-color matches
        assert_eq!(board.status(), MatchStatus::Ongoing);
    }

    #[test]
    fn test_extinction_ends_two_color_match() {
        let mut board = Scoreboard::new(Mode::TwoColor, IterationCap::Unbounded);
        board.on_step_complete(&births(&[Color::B]), 4);
        assert_eq!(board.on_step_complete(&[], 0), MatchStatus::Ended);
        assert_eq!(board.standing(), MatchResult::BWins);
    }

    #[test]
    fn test_cap_reached_exactly() {
        let mut board = Scoreboard::new(Mode::SingleColor, IterationCap::Limited(3));
        assert_eq!(board.on_step_complete(&[], 5), MatchStatus::Ongoing);
        assert_eq!(board.on_step_complete(&[], 5), MatchStatus::Ongoing);
        assert_eq!(board.on_step_complete(&[], 5), MatchStatus::Ended);
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let mut board = Scoreboard::new(Mode::TwoColor, IterationCap::Limited(1));
        board.on_step_complete(&births(&[Color::A]), 1);
        board.reset();
        assert_eq!(board.scores(), (0, 0));
        assert_eq!(board.iterations(), 0);
        assert_eq!(board.status(), MatchStatus::Ongoing);
        assert_eq!(board.mode(), Mode::TwoColor);
        assert_eq!(board.cap(), IterationCap::Limited(1));
    }

    #[test]
    fn test_result_from_scores() {
        assert_eq!(MatchResult::from_scores(5, 2), MatchResult::AWins);
        assert_eq!(MatchResult::from_scores(2, 5), MatchResult::BWins);
        assert_eq!(MatchResult::from_scores(4, 4), MatchResult::Draw);
        assert_eq!(MatchResult::Draw.winner(), None);
    }

    #[test]
    fn test_cap_config_sentinel() {
        assert_eq!(IterationCap::from_config(-1), Some(IterationCap::Unbounded));
        assert_eq!(IterationCap::from_config(0), Some(IterationCap::Limited(0)));
        assert_eq!(IterationCap::from_config(250), Some(IterationCap::Limited(250)));
        assert_eq!(IterationCap::from_config(-2), None);
        assert_eq!(IterationCap::Limited(7).to_config(), 7);
    }
}
