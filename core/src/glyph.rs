use core::fmt;

use crate::*;

/// Visual symbol for a cell, shared by every front-end that draws a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Unrevealed,
    Flag,
    Explosion,
    Blank,
    Digit(u8),
}

impl Cell {
    pub const fn glyph(&self) -> Glyph {
        match (self.state, self.value) {
            (CellState::Hidden, _) => Glyph::Unrevealed,
            (CellState::Flagged, _) => Glyph::Flag,
            (CellState::Revealed, CellValue::Mine) => Glyph::Explosion,
            (CellState::Revealed, CellValue::Count(0)) => Glyph::Blank,
            (CellState::Revealed, CellValue::Count(count)) => Glyph::Digit(count),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrevealed => f.write_str("□"),
            Self::Flag => f.write_str("⚑"),
            Self::Explosion => f.write_str("*"),
            Self::Blank => f.write_str(" "),
            Self::Digit(count) => write!(f, "{count}"),
        }
    }
}
