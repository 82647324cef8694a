// grid.rs - Fixed-size grid and the Game of Life transition

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, ParseError};

/// State of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn flipped(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// Relative positions of the 8 neighbors, column by column.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A `width` x `height` generation, stored row-major.
///
/// The edges are absorbing: positions off the grid are never stored and
/// always count as dead when computing the next generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>, // always width * height long
}

impl Grid {
    /// An all-dead grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let idx = self.index(x, y)?;
        let cell = self.cells[idx].flipped();
        self.cells[idx] = cell;
        Ok(cell)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Overwrites every cell with `f(x, y)`, row by row.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> Cell) {
        let width = self.width;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(idx % width, idx / width);
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx % self.width, idx / self.width))
    }

    /// Computes the next generation into a fresh grid.
    ///
    /// Every cell of the result is derived from `self` alone, so the update
    /// is simultaneous; `self` is left untouched.
    pub fn step(&self) -> Grid {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[y * self.width + x];
                match (current, self.live_neighbors(x, y)) {
                    (Cell::Alive, 2 | 3) => Cell::Alive,  // Survival
                    (Cell::Dead, 3)      => Cell::Alive,  // Birth
                    _                    => Cell::Dead,   // Isolation, overcrowding, or stays dead
                }
            })
            .collect();

        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    fn live_neighbors(&self, x: usize, y: usize) -> usize {
        NEIGHBORS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx).filter(|&nx| nx < self.width)?;
                let ny = y.checked_add_signed(dy).filter(|&ny| ny < self.height)?;
                Some(self.cells[ny * self.width + nx])
            })
            .filter(|cell| cell.is_alive())
            .count()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Parses an ASCII board: `o`, `#` or `*` is alive, `.` or any whitespace
/// is dead. Lines are rows; short rows are padded with dead cells to the
/// widest one. Blank lines at either end and leading spaces common to every
/// row are ignored.
impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .skip_while(|line| line.is_empty())
            .collect();
        let rows = match rows.iter().rposition(|line| !line.is_empty()) {
            Some(last) => &rows[..=last],
            None => return Err(ParseError::Empty),
        };
        // Only ASCII spaces count as indentation, so the cut is always on a
        // char boundary.
        let indent = rows
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| line.len() - line.trim_start_matches(' ').len())
            .min()
            .unwrap_or(0);
        let rows: Vec<&str> = rows
            .iter()
            .map(|&line| if line.is_empty() { line } else { &line[indent..] })
            .collect();
        let width = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut grid = Grid::new(width, rows.len())?;
        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    'o' | '#' | '*' => grid.cells[y * width + x] = Cell::Alive,
                    '.' => (),
                    ch if ch.is_whitespace() => (),
                    ch => return Err(ParseError::UnexpectedChar { ch, x, y }),
                }
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_alive() { "o" } else { "." })?;
            }
        }
        Ok(())
    }
}
