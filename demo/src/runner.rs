use std::io::Write;
use std::thread;
use std::time::Duration;

use minestep_core::Grid;

use crate::visualize::visualize;

/// Prints numbered steps with the board after each one, pausing in between.
pub struct StepRunner<W> {
    out: W,
    delay: Duration,
    total: usize,
    current: usize,
}

impl<W: Write> StepRunner<W> {
    pub fn new(out: W, delay: Duration, total: usize) -> Self {
        Self {
            out,
            delay,
            total,
            current: 0,
        }
    }

    pub fn step(&mut self, message: &str, grid: &Grid) -> anyhow::Result<()> {
        self.current += 1;
        log::info!("step {}/{}: {}", self.current, self.total, message);

        writeln!(self.out, "Step {} of {}", self.current, self.total)?;
        writeln!(self.out, "{}", message)?;
        write!(self.out, "{}", visualize(grid))?;
        self.out.flush()?;

        self.pause();
        Ok(())
    }

    /// Makes the next step the last one, for runs that end before their planned total.
    pub fn end_after_next(&mut self) {
        self.total = self.current + 1;
    }

    /// A line without advancing the progress counter.
    pub fn note(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered() {
        let grid = Grid::from_mine_coords((2, 1), &[]).unwrap();
        let mut runner = StepRunner::new(Vec::new(), Duration::ZERO, 2);

        runner.step("first", &grid).unwrap();
        runner.step("second", &grid.reveal((0, 0))).unwrap();
        runner.note("done").unwrap();

        assert_eq!(runner.current(), 2);
        let text = String::from_utf8(runner.into_inner()).unwrap();
        assert!(text.starts_with("Step 1 of 2\nfirst\n"));
        assert!(text.contains("Step 2 of 2\nsecond\n"));
        assert!(text.contains("0|□ □\n"));
        assert!(text.contains("0|   \n"));
        assert!(text.ends_with("done\n"));
    }

    #[test]
    fn ending_early_shrinks_the_total() {
        let grid = Grid::from_mine_coords((1, 1), &[]).unwrap();
        let mut runner = StepRunner::new(Vec::new(), Duration::ZERO, 5);

        runner.step("first", &grid).unwrap();
        runner.end_after_next();
        runner.step("last", &grid).unwrap();

        let text = String::from_utf8(runner.into_inner()).unwrap();
        assert!(text.contains("Step 1 of 5\n"));
        assert!(text.contains("Step 2 of 2\nlast\n"));
    }
}
