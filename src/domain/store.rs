use std::collections::HashMap;

use super::{Color, Coord};
use crate::error::LifeError;

/// Sparse set of live cells and their owners.
///
/// A key present in the map is alive; anything else is dead. The store holds
/// no rule logic, so the same type serves as the current generation and as
/// the scratch buffer the next generation is written into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellStore {
    cells: HashMap<Coord, Color>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
        }
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Owner of a live cell. Dead cells have no color.
    pub fn color_of(&self, coord: Coord) -> Result<Color, LifeError> {
        self.cells
            .get(&coord)
            .copied()
            .ok_or(LifeError::InvalidState(coord))
    }

    /// Owner of the cell, or `None` when dead
    pub fn get(&self, coord: Coord) -> Option<Color> {
        self.cells.get(&coord).copied()
    }

    /// Mark a cell alive, replacing any previous owner
    pub fn set_alive(&mut self, coord: Coord, color: Color) {
        self.cells.insert(coord, color);
    }

    pub fn set_dead(&mut self, coord: Coord) {
        self.cells.remove(&coord);
    }

    pub fn count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drop every cell but keep the allocation for reuse
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// All live cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.cells.iter().map(|(&coord, &color)| (coord, color))
    }

    /// Live cells owned by `color`
    pub fn count_of(&self, color: Color) -> usize {
        self.cells.values().filter(|&&c| c == color).count()
    }

    /// Live cell totals as (A, B)
    pub fn count_by_color(&self) -> (usize, usize) {
        self.cells
            .values()
            .fold((0, 0), |(a, b), color| match color {
                Color::A => (a + 1, b),
                Color::B => (a, b + 1),
            })
    }

    /// Smallest (min, max) corners enclosing every live cell
    pub fn bounding_box(&self) -> Option<(Coord, Coord)> {
        let mut keys = self.cells.keys();
        let first = *keys.next()?;
        Some(keys.fold((first, first), |(lo, hi), c| {
            (
                Coord::new(lo.x.min(c.x), lo.y.min(c.y)),
                Coord::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }
}

impl FromIterator<(Coord, Color)> for CellStore {
    fn from_iter<I: IntoIterator<Item = (Coord, Color)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Coord, Color)> for CellStore {
    fn extend<I: IntoIterator<Item = (Coord, Color)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
