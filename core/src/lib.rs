//! Minesweeper game state with value semantics.
//!
//! A [`Grid`] is a snapshot. [`Grid::reveal`] and [`Grid::toggle_flag`] never
//! touch the grid they are called on, they hand back a new one.

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use glyph::*;
pub use grid::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod glyph;
mod grid;
mod types;

/// Board dimensions and mine count, validated so that generation always terminates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    size: Coord2,
    mines: CellCount,
}

impl BoardConfig {
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width == 0 || height == 0 {
            log::warn!("Rejected empty board {}x{}", width, height);
            return Err(GameError::EmptyBoard);
        }
        let total_cells = mult(width, height);
        if mines >= total_cells {
            log::warn!(
                "Rejected {} mines for {}x{}, at most {} fit",
                mines,
                width,
                height,
                total_cells - 1
            );
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            size: (width, height),
            mines,
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

#[derive(Deserialize)]
struct RawBoardConfig {
    size: Coord2,
    mines: CellCount,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = GameError;

    fn try_from(RawBoardConfig { size, mines }: RawBoardConfig) -> Result<Self> {
        Self::new(size.0, size.1, mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_up_to_one_safe_cell() {
        let config = BoardConfig::new(3, 2, 5).unwrap();
        assert_eq!(config.size(), (3, 2));
        assert_eq!(config.total_cells(), 6);
        assert_eq!(config.mines(), 5);
    }

    #[test]
    fn config_accepts_no_mines() {
        assert!(BoardConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(BoardConfig::new(3, 3, 9), Err(GameError::TooManyMines));
        assert_eq!(BoardConfig::new(3, 3, 40), Err(GameError::TooManyMines));
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(BoardConfig::new(0, 4, 0), Err(GameError::EmptyBoard));
        assert_eq!(BoardConfig::new(4, 0, 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_json_goes_through_validation() {
        let config: BoardConfig = serde_json::from_str(r#"{"size":[4,3],"mines":5}"#).unwrap();
        assert_eq!(config, BoardConfig::new(4, 3, 5).unwrap());

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<BoardConfig>(&json).unwrap(), config);
    }

    #[test]
    fn config_json_rejects_unplaceable_boards() {
        for json in [
            r#"{"size":[3,3],"mines":9}"#,
            r#"{"size":[3,3],"mines":40}"#,
            r#"{"size":[0,3],"mines":1}"#,
            r#"{"size":[3,0],"mines":0}"#,
        ] {
            assert!(serde_json::from_str::<BoardConfig>(json).is_err(), "{json}");
        }
    }
}
