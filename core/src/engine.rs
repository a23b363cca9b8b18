use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::*;

/// Caller-level reading of a grid: the engine itself never stops a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// User action on a cell: primary opens, secondary toggles the flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    Primary,
    Secondary,
}

impl Grid {
    /// Returns a copy with the cell at `coords` revealed, flooding outwards
    /// through hidden neighbours of every zero cell it opens.
    ///
    /// Out of bounds, revealed and flagged targets leave the copy unchanged.
    /// Revealing a mine is allowed, see [`Grid::status`].
    pub fn reveal(&self, coords: Coord2) -> Grid {
        let mut next = self.clone();
        next.reveal_in_place(coords);
        next
    }

    /// Returns a copy with the flag at `coords` toggled. Revealed cells are left as is.
    pub fn toggle_flag(&self, coords: Coord2) -> Result<Grid> {
        use CellState::*;

        let coords = self.validate_coords(coords).inspect_err(|_| {
            log::warn!("Flag at {:?} outside of {:?} board", coords, self.size());
        })?;

        let mut next = self.clone();
        let cell = next.cell_mut(coords);
        cell.state = match cell.state {
            Hidden => Flagged,
            Flagged => Hidden,
            Revealed => Revealed,
        };
        Ok(next)
    }

    /// Every mine flagged and every safe cell revealed.
    pub fn check_win(&self) -> bool {
        self.cells().all(|(_, cell)| cell.is_settled())
    }

    pub fn status(&self) -> GameStatus {
        if self
            .cells()
            .any(|(_, cell)| cell.is_mine() && cell.is_revealed())
        {
            GameStatus::Lost
        } else if self.check_win() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn apply(&self, gesture: Gesture, coords: Coord2) -> Result<Grid> {
        match gesture {
            Gesture::Primary => Ok(self.reveal(coords)),
            Gesture::Secondary => self.toggle_flag(coords),
        }
    }

    fn reveal_in_place(&mut self, coords: Coord2) -> CellCount {
        if !self.get(coords).is_some_and(Cell::is_hidden) {
            return 0;
        }

        let mut opened: CellCount = 0;
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = self.cell_mut(visit_coords);
            if !cell.is_hidden() {
                continue;
            }
            cell.state = CellState::Revealed;
            opened += 1;

            if cell.value.is_zero() {
                let hidden: Vec<_> = self
                    .neighbors(visit_coords)
                    .filter(|&pos| self[pos].is_hidden())
                    .collect();
                to_visit.extend(hidden);
            }
        }

        log::trace!("Reveal at {:?} opened {} cells", coords, opened);
        opened
    }
}
