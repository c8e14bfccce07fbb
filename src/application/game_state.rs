use log::{debug, info, trace, warn};

use super::MatchConfig;
use crate::domain::{
    Algorithm, BirthEvent, CellStore, Color, Coord, IterationCap, MatchResult, MatchStatus, Mode,
    Pattern, Scoreboard, patterns, transition,
};
use crate::error::LifeError;

/// Lifecycle of a match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    /// Empty board, nothing seeded
    #[default]
    Idle,
    /// Board populated, no step taken yet
    Seeded,
    /// At least one step taken and the match is still going
    Running,
    /// Termination reached; only `reset` leaves this phase
    Ended,
}

/// Outcome of a single [`GameState::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    pub new_alive_count: usize,
    pub birth_events: Vec<BirthEvent>,
    pub status: MatchStatus,
}

/// GameState orchestrates a match.
/// It owns both generation buffers and the scoreboard; callers only reach
/// them through the methods below. Ticking is driven from outside.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    current: CellStore,
    next: CellStore,
    scoreboard: Scoreboard,
    algorithm: Algorithm,
    phase: Phase,
}

impl GameState {
    /// Create an idle match
    pub fn new(mode: Mode, cap: IterationCap) -> Self {
        Self {
            scoreboard: Scoreboard::new(mode, cap),
            ..Self::default()
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.mode, config.cap()).with_algorithm(config.algorithm)
    }

    /// Set evolution algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn set_iteration_cap(&mut self, cap: IterationCap) {
        self.scoreboard.set_cap(cap);
    }

    /// Clear the board and counters and return to Idle under `mode`
    pub fn reset(&mut self, mode: Mode) {
        self.current.clear();
        self.next.clear();
        self.scoreboard.set_mode(mode);
        self.scoreboard.reset();
        self.phase = Phase::Idle;
        info!("[Match] Reset to {} mode", mode.name());
    }

    /// Start a fresh match from `pattern`, centered on the origin in color A.
    /// Previous cells and scores are discarded.
    pub fn seed(&mut self, pattern: &Pattern) -> Result<(), LifeError> {
        self.ensure_editable()?;
        patterns::seed(&mut self.current, pattern, Color::A, false)?;
        self.scoreboard.reset();
        self.phase = if self.current.is_empty() { Phase::Idle } else { Phase::Seeded };
        info!(
            "[Match] Seeded '{}' with {} cells",
            pattern.name,
            self.current.count()
        );
        Ok(())
    }

    /// Add `pattern` centered on `at` without clearing the board
    pub fn place(&mut self, pattern: &Pattern, at: Coord, color: Color) -> Result<(), LifeError> {
        self.ensure_editable()?;
        let color = self.normalize(color);
        patterns::stamp(&mut self.current, pattern, at, color);
        self.mark_edited();
        debug!("[Match] Placed '{}' at {} for {}", pattern.name, at, color);
        Ok(())
    }

    /// Flip a cell between dead and alive (as `color`)
    pub fn toggle(&mut self, coord: Coord, color: Color) -> Result<(), LifeError> {
        let alive = !self.current.is_alive(coord);
        self.set_alive(coord, alive, color)
    }

    pub fn set_alive(&mut self, coord: Coord, alive: bool, color: Color) -> Result<(), LifeError> {
        self.ensure_editable()?;
        if alive {
            let color = self.normalize(color);
            self.current.set_alive(coord, color);
        } else {
            self.current.set_dead(coord);
        }
        self.mark_edited();
        Ok(())
    }

    /// Advance one generation, score the births and report the match status
    pub fn step(&mut self) -> Result<StepResult, LifeError> {
        if self.phase == Phase::Ended {
            warn!("[Match] Step requested after the match ended");
            return Err(LifeError::PreconditionViolated("match has ended; reset first"));
        }

        let mode = self.scoreboard.mode();
        trace!(
            "[Match] Generation {} evaluating from {} live cells",
            self.scoreboard.iterations(),
            self.current.count()
        );
        let birth_events = transition::step_with(self.algorithm, &self.current, mode, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.clear();

        let new_alive_count = self.current.count();
        let status = self.scoreboard.on_step_complete(&birth_events, new_alive_count);
        debug!(
            "[Match] Generation {}: {} alive, {} births",
            self.scoreboard.iterations(),
            new_alive_count,
            birth_events.len()
        );

        self.phase = match status {
            MatchStatus::Ongoing => Phase::Running,
            MatchStatus::Ended => {
                let (a, b) = self.scoreboard.scores();
                info!(
                    "[Match] Ended after {} generations, score {}-{} ({:?})",
                    self.scoreboard.iterations(),
                    a,
                    b,
                    self.scoreboard.standing()
                );
                Phase::Ended
            }
        };

        Ok(StepResult {
            new_alive_count,
            birth_events,
            status,
        })
    }

    /// Step until the match ends or `max_steps` steps were taken
    pub fn run_until_end(&mut self, max_steps: u64) -> Result<MatchStatus, LifeError> {
        let mut status = self.match_status();
        for _ in 0..max_steps {
            if status == MatchStatus::Ended {
                break;
            }
            status = self.step()?.status;
        }
        Ok(status)
    }

    /// Read-only view of the live cells for renderers
    pub fn current_alive_cells(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.current.iter()
    }

    pub fn cells(&self) -> &CellStore {
        &self.current
    }

    pub fn alive_count(&self) -> usize {
        self.current.count()
    }

    pub fn scores(&self) -> (u64, u64) {
        self.scoreboard.scores()
    }

    pub fn generation(&self) -> u64 {
        self.scoreboard.iterations()
    }

    pub fn match_status(&self) -> MatchStatus {
        self.scoreboard.status()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.scoreboard.mode()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Final result; only available once the match has ended
    pub fn result(&self) -> Result<MatchResult, LifeError> {
        match self.phase {
            Phase::Ended => Ok(self.scoreboard.standing()),
            _ => Err(LifeError::PreconditionViolated("match has not ended")),
        }
    }

    fn ensure_editable(&self) -> Result<(), LifeError> {
        if self.phase == Phase::Ended {
            warn!("[Match] Edit rejected, match has ended");
            return Err(LifeError::PreconditionViolated("board is read-only after the match ended"));
        }
        Ok(())
    }

    fn normalize(&self, color: Color) -> Color {
        let mode = self.scoreboard.mode();
        let normalized = mode.normalize(color);
        if normalized != color {
            warn!("[Match] {} mode stores every cell as {}", mode.name(), normalized);
        }
        normalized
    }

    fn mark_edited(&mut self) {
        if self.phase == Phase::Idle && !self.current.is_empty() {
            self.phase = Phase::Seeded;
        }
    }
}
