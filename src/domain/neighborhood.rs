use super::{CellStore, Color, Coord};

/// Live neighbors of a cell, split by owner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NeighborCounts {
    pub a: u8,
    pub b: u8,
}

impl NeighborCounts {
    pub const fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    pub const fn total(self) -> u8 {
        self.a + self.b
    }

    pub const fn of(self, color: Color) -> u8 {
        match color {
            Color::A => self.a,
            Color::B => self.b,
        }
    }

    /// The only color present among the neighbors.
    /// `None` when there are no neighbors or both colors appear.
    pub const fn sole_color(self) -> Option<Color> {
        match (self.a, self.b) {
            (0, 0) => None,
            (_, 0) => Some(Color::A),
            (0, _) => Some(Color::B),
            _ => None,
        }
    }

    /// Both colors have at least one neighbor
    pub const fn is_mixed(self) -> bool {
        self.a > 0 && self.b > 0
    }

    /// Color with strictly more neighbors, ties going to A
    pub const fn majority(self) -> Color {
        if self.b > self.a { Color::B } else { Color::A }
    }

    fn record(&mut self, color: Color) {
        match color {
            Color::A => self.a += 1,
            Color::B => self.b += 1,
        }
    }
}

/// Count live neighbors of `coord` in the eight surrounding cells.
/// Pure: reads `store` only, at most eight lookups.
pub fn count_neighbors(coord: Coord, store: &CellStore) -> NeighborCounts {
    coord
        .neighbors()
        .filter_map(|n| store.get(n))
        .fold(NeighborCounts::default(), |mut counts, color| {
            counts.record(color);
            counts
        })
}
