//! Generation step over the sparse live-cell set.
//!
//! Only cells in the 3x3 neighborhood of a live cell can change state, so a
//! step visits that candidate set instead of a bounded board. Every decision
//! reads the current generation; results are written into a separate buffer
//! that the owner swaps in afterwards.

use std::collections::HashSet;

use rayon::prelude::*;

use super::{count_neighbors, Algorithm, CellStore, Color, Coord, Mode};

/// A dead cell that came alive during a step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BirthEvent {
    pub coord: Coord,
    pub color: Color,
}

/// Union of every live cell's 3x3 block
pub fn candidates(store: &CellStore) -> HashSet<Coord> {
    let mut set = HashSet::with_capacity(store.count() * 9);
    for (coord, _) in store.iter() {
        set.extend(coord.block3x3());
    }
    set
}

/// Evaluate one cell against the current generation
fn evaluate(coord: Coord, current: &CellStore, mode: Mode) -> Option<(Color, bool)> {
    let before = current.get(coord);
    let counts = count_neighbors(coord, current);
    mode.outcome(before, counts)
        .map(|color| (color, before.is_none()))
}

/// Serial step. Clears `next`, fills it with the next generation of
/// `current` and returns the births in candidate iteration order.
pub fn step(current: &CellStore, mode: Mode, next: &mut CellStore) -> Vec<BirthEvent> {
    next.clear();
    let mut births = Vec::new();

    for coord in candidates(current) {
        if let Some((color, born)) = evaluate(coord, current, mode) {
            next.set_alive(coord, color);
            if born {
                births.push(BirthEvent { coord, color });
            }
        }
    }

    births
}

/// Parallel step using rayon. Same contract as [`step`]; the candidate
/// order is fixed before the split, so birth order is stable too.
pub fn step_parallel(current: &CellStore, mode: Mode, next: &mut CellStore) -> Vec<BirthEvent> {
    next.clear();
    let cells: Vec<Coord> = candidates(current).into_iter().collect();

    let survivors: Vec<(Coord, Color, bool)> = cells
        .par_iter()
        .filter_map(|&coord| {
            evaluate(coord, current, mode).map(|(color, born)| (coord, color, born))
        })
        .collect();

    let mut births = Vec::new();
    for (coord, color, born) in survivors {
        next.set_alive(coord, color);
        if born {
            births.push(BirthEvent { coord, color });
        }
    }
    births
}

/// Dispatch to the selected algorithm
pub fn step_with(
    algorithm: Algorithm,
    current: &CellStore,
    mode: Mode,
    next: &mut CellStore,
) -> Vec<BirthEvent> {
    match algorithm {
        Algorithm::Serial => step(current, mode, next),
        Algorithm::Parallel => step_parallel(current, mode, next),
    }
}

/// Functional form: returns the next generation as a fresh store
pub fn evolve(current: &CellStore, mode: Mode) -> (CellStore, Vec<BirthEvent>) {
    let mut next = CellStore::with_capacity(current.count());
    let births = step(current, mode, &mut next);
    (next, births)
}
