use std::fmt;

use crate::constants::N;
use crate::position::MoveError;

/// One of the two players. `X` moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player leaves on the board.
    #[inline]
    pub fn stone(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

/// Occupancy of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player owning this cell, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.stone()
    }
}

/// A `(row, col)` coordinate, 0-indexed.
pub type Point = (usize, usize);

/// Fixed-size N×N grid. Storage only: legality is enforced by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        N
    }

    /// Check whether a signed coordinate falls inside the grid.
    #[inline]
    pub fn in_bounds(row: isize, col: isize) -> bool {
        row >= 0 && row < N as isize && col >= 0 && col < N as isize
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if row >= N || col >= N {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Overwrite a cell unconditionally.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), MoveError> {
        if row >= N || col >= N {
            return Err(MoveError::OutOfBounds { row, col });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Read a cell at a signed offset, `None` when it falls off the board.
    #[inline]
    pub(crate) fn at(&self, row: isize, col: isize) -> Option<Cell> {
        if Self::in_bounds(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// All empty cells in row-major order.
    pub fn empty_points(&self) -> Vec<Point> {
        self.points().filter(|&(r, c)| self.cells[r][c].is_empty()).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Every coordinate of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        (0..N).flat_map(|r| (0..N).map(move |c| (r, c)))
    }
}

/// Rows and columns are labelled 1-based, matching the console input.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 1..=N {
            write!(f, "{col:>2} ")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{:>2} ", row + 1)?;
            for cell in cells {
                write!(f, "{:>2} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
