use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of cells, stored row-major and addressed by `(x, y)`.
///
/// Shape is fixed at construction and every row has the same length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// All cells hidden, no mines.
    pub(crate) fn blank((width, height): Coord2) -> Self {
        Self {
            cells: Array2::default((usize::from(height), usize::from(width))),
        }
    }

    /// Builds a hidden board with mines at the given coordinates and
    /// neighbour counts filled in. Duplicate coordinates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut grid = Self::blank(size);
        for &coords in mine_coords {
            grid.validate_coords(coords)?;
            grid.place_mine(coords);
        }
        Ok(grid)
    }

    /// Wraps an existing array of cells, rejecting shapes that cannot be addressed by [`Coord2`]
    /// and counts that disagree with the mines around them.
    pub fn from_array(cells: Array2<Cell>) -> Result<Self> {
        let (height, width) = cells.dim();
        let max = usize::from(Coord::MAX);
        if width == 0 || height == 0 || width > max || height > max {
            return Err(GameError::InvalidBoardShape);
        }

        let grid = Self { cells };
        if let Some((coords, _)) = grid.cells().find(|&(coords, cell)| {
            matches!(cell.value, CellValue::Count(count) if count != grid.adjacent_mine_count(coords))
        }) {
            log::warn!("Rejected grid, count at {:?} does not match its mines", coords);
            return Err(GameError::MismatchedCounts);
        }
        Ok(grid)
    }

    /// Builds a grid from a list of rows, which must be non-empty and equally long.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(GameError::InvalidBoardShape);
        }

        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_array(cells)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// `(width, height)`
    pub fn size(&self) -> Coord2 {
        let (height, width) = self.cells.dim();
        // from_array keeps both dimensions within Coord
        (width as Coord, height as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords)
            .then(|| &self.cells[coords.to_nd_index()])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> + '_ {
        self.cells.rows().into_iter()
    }

    /// Every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours
        self.neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(Cell::is_mine)
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_where(Cell::is_flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(Cell::is_revealed)
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flag_count() as isize)
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        // at most Coord::MAX squared cells, which fits CellCount
        self.cells.iter().filter(|&cell| pred(cell)).count() as CellCount
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Turns `coords` into a mine and bumps the count of every non-mine neighbour.
    ///
    /// Returns `false` when there was already a mine there.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = self.cell_mut(coords);
        if cell.is_mine() {
            return false;
        }
        cell.value = CellValue::Mine;

        for pos in self.neighbors(coords) {
            let neighbor = self.cell_mut(pos);
            if let CellValue::Count(count) = neighbor.value {
                neighbor.value = CellValue::Count(count + 1);
            }
        }
        true
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
