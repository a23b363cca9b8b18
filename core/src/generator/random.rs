use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Scatters mines uniformly at random, one rejection-sampled cell at a time.
///
/// Without a seed every board is different; with one the layout is reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RandomGridGenerator {
    seed: Option<u64>,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn unseeded() -> Self {
        Self { seed: None }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: BoardConfig) -> Grid {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        place_mines(config, &mut rng)
    }
}

/// Places `config.mines()` mines on a blank grid using `rng`.
///
/// Terminates because [`BoardConfig`] guarantees at least one safe cell.
pub fn place_mines<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Grid {
    let (width, height) = config.size();
    let mut grid = Grid::blank(config.size());
    let mut mines_left = config.mines();
    let mut attempts: u32 = 0;

    while mines_left > 0 {
        attempts += 1;
        let coords = (rng.random_range(0..width), rng.random_range(0..height));
        if grid.place_mine(coords) {
            mines_left -= 1;
        }
    }

    log::debug!(
        "Placed {} mines on {}x{} in {} attempts",
        config.mines(),
        width,
        height,
        attempts
    );
    grid
}

impl Grid {
    /// Creates a fresh board with randomly placed mines, every cell hidden.
    pub fn create(config: BoardConfig) -> Self {
        RandomGridGenerator::unseeded().generate(config)
    }

    pub fn create_with_rng<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        place_mines(config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mines_around(grid: &Grid, coords: Coord2) -> u8 {
        grid.neighbors(coords)
            .filter(|&pos| grid[pos].is_mine())
            .count() as u8
    }

    #[test]
    fn board_has_requested_shape() {
        let config = BoardConfig::new(5, 6, 5).unwrap();
        let grid = RandomGridGenerator::new(1).generate(config);

        assert_eq!(grid.size(), (5, 6));
        assert_eq!(grid.rows().count(), 6);
        assert!(grid.rows().all(|row| row.len() == 5));
    }

    #[test]
    fn exact_mine_count_and_all_hidden() {
        for seed in 0..20 {
            let config = BoardConfig::new(8, 8, 10).unwrap();
            let grid = RandomGridGenerator::new(seed).generate(config);

            assert_eq!(grid.mine_count(), 10, "seed {seed}");
            assert!(grid.cells().all(|(_, cell)| cell.is_hidden()));
        }
    }

    #[test]
    fn counts_match_neighboring_mines() {
        for seed in 0..20 {
            let config = BoardConfig::new(9, 7, 20).unwrap();
            let grid = RandomGridGenerator::new(seed).generate(config);

            for (coords, cell) in grid.cells() {
                if let CellValue::Count(count) = cell.value {
                    assert_eq!(count, mines_around(&grid, coords), "seed {seed} at {coords:?}");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = BoardConfig::new(10, 10, 25).unwrap();

        let first = RandomGridGenerator::new(42).generate(config);
        let second = RandomGridGenerator::new(42).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn nearly_full_board_terminates() {
        let config = BoardConfig::new(3, 3, 8).unwrap();
        let grid = RandomGridGenerator::new(7).generate(config);

        assert_eq!(grid.mine_count(), 8);
        let (coords, safe) = grid.cells().find(|(_, cell)| !cell.is_mine()).unwrap();
        let neighbors = grid.neighbors(coords).count() as u8;
        assert_eq!(safe.value, CellValue::Count(neighbors));
    }

    #[test]
    fn zero_mines_is_all_zero() {
        let config = BoardConfig::new(4, 3, 0).unwrap();
        let grid = Grid::create(config);

        assert!(grid.cells().all(|(_, cell)| cell.value == CellValue::Count(0)));
    }

    #[test]
    fn injected_rng_is_used() {
        let config = BoardConfig::new(6, 6, 6).unwrap();

        let mut rng = SmallRng::seed_from_u64(3);
        let injected = Grid::create_with_rng(config, &mut rng);

        assert_eq!(injected, RandomGridGenerator::new(3).generate(config));
    }
}
