use super::{CellStore, Color, Coord};
use crate::error::LifeError;

/// A named list of live-cell offsets that can be seeded onto a board.
/// Patterns carry no color; the loader assigns one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<Coord>,
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        Self {
            name,
            description,
            cells: cells.into_iter().map(Coord::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest (min, max) corners enclosing every offset
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let (first, rest) = self.cells.split_first()?;
        Some(rest.iter().fold((*first, *first), |(lo, hi), c| {
            (
                Coord::new(lo.x.min(c.x), lo.y.min(c.y)),
                Coord::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }

    /// Width and height of the bounding box
    pub fn size(&self) -> (u32, u32) {
        self.bounds().map_or((0, 0), |(lo, hi)| {
            (lo.x.abs_diff(hi.x) + 1, lo.y.abs_diff(hi.y) + 1)
        })
    }

    /// Midpoint of the bounding box, floor-divided.
    /// This offset lands on the board origin when seeding.
    pub fn anchor(&self) -> Coord {
        self.bounds().map_or(Coord::ORIGIN, |(lo, hi)| {
            let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)).div_euclid(2)) as i32;
            Coord::new(mid(lo.x, hi.x), mid(lo.y, hi.y))
        })
    }

    /// Offsets re-centered so the anchor sits at `at`
    pub fn placed_at(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        let anchor = self.anchor();
        self.cells.iter().map(move |&c| c - anchor + at)
    }
}

/// Clear `store` and write `pattern` centered on the origin.
///
/// An empty pattern leaves an empty board unless `require_non_empty` is set,
/// in which case it is rejected before the store is touched.
pub fn seed(
    store: &mut CellStore,
    pattern: &Pattern,
    color: Color,
    require_non_empty: bool,
) -> Result<(), LifeError> {
    if require_non_empty && pattern.is_empty() {
        return Err(LifeError::InvalidPattern(format!(
            "pattern '{}' has no cells",
            pattern.name
        )));
    }

    store.clear();
    stamp(store, pattern, Coord::ORIGIN, color);
    Ok(())
}

/// Write `pattern` centered on `at` without clearing existing cells
pub fn stamp(store: &mut CellStore, pattern: &Pattern, at: Coord, color: Color) {
    for coord in pattern.placed_at(at) {
        store.set_alive(coord, color);
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 1), (1, 1), (2, 1)]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let arm = [2, 3, 4, 8, 9, 10];
        let bar = [0, 5, 7, 12];
        let mut cells = Vec::with_capacity(48);
        for &row in &[0, 5, 7, 12] {
            cells.extend(arm.iter().map(|&x| (x, row)));
        }
        for &row in &[2, 3, 4, 8, 9, 10] {
            cells.extend(bar.iter().map(|&x| (x, row)));
        }
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                (0, 4), (0, 5), (1, 4), (1, 5),
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                (34, 2), (34, 3), (35, 2), (35, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![(0, 0), (1, 0), (0, 1), (1, 1)]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }

    /// Look a preset up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
