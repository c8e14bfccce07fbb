use std::fmt;

/// Owner color of a live cell.
///
/// "No color" is expressed as `Option<Color>::None` rather than a third
/// variant, so a stored live cell can never be neutral. Single-color Life
/// uses [`Color::A`] for every cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Color {
    A,
    B,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::A, Color::B];

    /// The competing color
    pub const fn opponent(self) -> Self {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::A => "A",
            Color::B => "B",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
