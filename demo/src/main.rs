use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod random;
mod runner;
mod script;
mod visualize;

use runner::StepRunner;

/// Steps through a minesweeper game in the terminal, one board at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Pause between steps in milliseconds, 0 disables
    #[arg(long, default_value_t = 1000, global = true)]
    delay_ms: u64,

    /// Print the final board as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scripted playthrough of a fixed 5x5 board
    Script,
    /// Random board with moves given on the command line
    Random(random::RandomArgs),
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .without_time()
        .init();
    log::debug!("args: {:?}", args);

    let delay = Duration::from_millis(args.delay_ms);
    let stdout = io::stdout().lock();

    let grid = match &args.command {
        Command::Script => {
            let mut runner = StepRunner::new(stdout, delay, script::TOTAL_STEPS);
            script::run(&mut runner)?
        }
        Command::Random(random_args) => {
            let total = random::total_steps(random_args);
            let mut runner = StepRunner::new(stdout, delay, total);
            random::run(random_args, &mut runner)?
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&grid).context("serializing final board")?;
        println!("{}", json);
    }
    Ok(())
}
