use std::io::Write;

use anyhow::Context;
use clap::Args;
use minestep_core::{
    BoardConfig, CellCount, Coord, Coord2, Gesture, Grid, GridGenerator, RandomGridGenerator,
};

use crate::runner::StepRunner;

#[derive(Args, Debug)]
pub struct RandomArgs {
    #[arg(long, default_value_t = 9)]
    pub width: Coord,

    #[arg(long, default_value_t = 9)]
    pub height: Coord,

    #[arg(long, default_value_t = 10)]
    pub mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Moves applied in order, `open:X,Y` or `flag:X,Y`
    #[arg(value_parser = parse_move)]
    pub moves: Vec<(Gesture, Coord2)>,
}

pub fn parse_move(s: &str) -> Result<(Gesture, Coord2), String> {
    let (kind, coords) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `open:X,Y` or `flag:X,Y`, got `{s}`"))?;
    let gesture = match kind {
        "open" => Gesture::Primary,
        "flag" => Gesture::Secondary,
        other => return Err(format!("unknown move `{other}`")),
    };
    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{coords}`"))?;
    let x = x.trim().parse::<Coord>().map_err(|err| format!("bad x `{x}`: {err}"))?;
    let y = y.trim().parse::<Coord>().map_err(|err| format!("bad y `{y}`: {err}"))?;
    Ok((gesture, (x, y)))
}

pub fn total_steps(args: &RandomArgs) -> usize {
    args.moves.len() + 1
}

pub fn run<W: Write>(args: &RandomArgs, runner: &mut StepRunner<W>) -> anyhow::Result<Grid> {
    let config = BoardConfig::new(args.width, args.height, args.mines).with_context(|| {
        format!(
            "invalid board {}x{} with {} mines",
            args.width, args.height, args.mines
        )
    })?;

    let mut grid = match args.seed {
        Some(seed) => RandomGridGenerator::new(seed).generate(config),
        None => Grid::create(config),
    };
    runner.step(
        &format!(
            "Created {}x{} board with {} mines",
            config.width(),
            config.height(),
            config.mines()
        ),
        &grid,
    )?;

    for &(gesture, (x, y)) in &args.moves {
        grid = grid
            .apply(gesture, (x, y))
            .with_context(|| format!("applying {:?} at ({},{})", gesture, x, y))?;
        let verb = match gesture {
            Gesture::Primary => "Revealing",
            Gesture::Secondary => "Toggling flag at",
        };

        let status = grid.status();
        if status.is_finished() {
            log::info!("game finished: {:?}", status);
            runner.end_after_next();
        }
        runner.step(&format!("{} ({},{})", verb, x, y), &grid)?;
        if status.is_finished() {
            break;
        }
    }

    runner.note(&format!(
        "Status: {:?}, mines left: {}",
        grid.status(),
        grid.mines_left()
    ))?;
    Ok(grid)
}
