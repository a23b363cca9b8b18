//! Fixed 5x5 playthrough that reveals, flags and finishes a board step by step.

use std::io::Write;

use anyhow::{Context, bail};
use minestep_core::{Coord2, GameStatus, Grid};

use crate::runner::StepRunner;

pub const SIZE: Coord2 = (5, 5);
pub const MINES: [Coord2; 3] = [(1, 1), (2, 3), (4, 4)];
pub const TOTAL_STEPS: usize = 7;

pub fn run<W: Write>(runner: &mut StepRunner<W>) -> anyhow::Result<Grid> {
    let mut grid = Grid::from_mine_coords(SIZE, &MINES).context("building the scripted board")?;
    runner.step("Initial board created", &grid)?;

    grid = grid.reveal((0, 0));
    runner.step("Revealing cell (0,0), should be safe", &grid)?;

    grid = grid.toggle_flag(MINES[0])?;
    runner.step("Flagging suspected mine at (1,1)", &grid)?;

    grid = grid.reveal((0, 4));
    runner.step("Revealing cell (0,4), should open several safe cells", &grid)?;

    grid = grid.toggle_flag(MINES[1])?;
    runner.step("Flagging second mine at (2,3)", &grid)?;

    grid = grid.toggle_flag(MINES[2])?;
    runner.step("Flagging last mine at (4,4)", &grid)?;

    let hidden: Vec<Coord2> = grid
        .cells()
        .filter(|(_, cell)| cell.is_hidden())
        .map(|(coords, _)| coords)
        .collect();
    for coords in hidden {
        grid = grid.reveal(coords);
    }
    runner.step("Revealing remaining safe cells", &grid)?;

    match grid.status() {
        GameStatus::Won => {
            runner.note("All steps passed, game won")?;
            Ok(grid)
        }
        status => bail!("scripted playthrough ended as {:?} instead of won", status),
    }
}
