//! Game state and move execution.
//!
//! This module provides the rules of five-in-a-row:
//! - Move legality (bounds, occupancy, game already decided)
//! - Strict turn alternation
//! - Win detection along the four line directions
//! - Draw detection on a full board
//!
//! A [`Game`] owns its [`Board`]. It never performs I/O; rendering goes through
//! `Display` and persistence through [`crate::sink`].

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::board::{Board, Cell, Player, Point};
use crate::constants::{LINES, WIN_LENGTH};

/// Reasons a move is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Coordinate outside the grid
    #[error("illegal move: ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    /// Target cell already holds a stone
    #[error("illegal move: ({row}, {col}) is not empty")]
    CellOccupied { row: usize, col: usize },
    /// The game is already won or drawn
    #[error("illegal move: the game is already over")]
    GameAlreadyOver,
}

/// Overall state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Player),
    Drawn,
}

impl Status {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }
}

/// Which run lengths count as a win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WinRule {
    /// Only a run of exactly five wins; six or more in a row does not.
    #[default]
    ExactlyFive,
    /// Any run of five or more wins.
    FiveOrMore,
}

impl WinRule {
    #[inline]
    pub fn is_win(self, run: usize) -> bool {
        match self {
            WinRule::ExactlyFive => run == WIN_LENGTH,
            WinRule::FiveOrMore => run >= WIN_LENGTH,
        }
    }
}

/// A five-in-a-row game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: Status,
    rule: WinRule,
    /// Number of accepted moves
    moves: usize,
    last: Option<Point>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board, `X` to move, exact-five wins.
    pub fn new() -> Self {
        Self::with_rule(WinRule::default())
    }

    pub fn with_rule(rule: WinRule) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: Status::InProgress,
            rule,
            moves: 0,
            last: None,
        }
    }

    /// Build a game from an arbitrary position.
    ///
    /// The status is computed by scanning the whole board: the first winning
    /// run found in row-major order decides the winner, otherwise a full board
    /// is a draw.
    pub fn from_board(board: Board, to_move: Player, rule: WinRule) -> Self {
        let status = match find_winner(&board, rule) {
            Some(player) => Status::Won(player),
            None if board.is_full() => Status::Drawn,
            None => Status::InProgress,
        };
        let moves = board.stone_count();
        Self {
            board,
            to_move,
            status,
            rule,
            moves,
            last: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn rule(&self) -> WinRule {
        self.rule
    }

    /// Number of accepted moves (or stones, for games built with `from_board`).
    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// The last accepted move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Point> {
        self.last
    }

    /// Play a stone for the player to move.
    ///
    /// On success the stone is placed, the status is updated and the turn
    /// passes to the opponent.
    ///
    /// # Errors
    /// - [`MoveError::GameAlreadyOver`] if the game is won or drawn
    /// - [`MoveError::OutOfBounds`] if the coordinate is off the board
    /// - [`MoveError::CellOccupied`] if the cell is not empty
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.board.get(row, col)?.is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }

        let mover = self.to_move;
        self.board.set(row, col, mover.stone())?;
        self.moves += 1;
        self.last = Some((row, col));

        if wins_at(&self.board, row, col, self.rule) {
            self.status = Status::Won(mover);
        } else if self.board.is_full() {
            self.status = Status::Drawn;
        }
        debug!("{mover} plays ({row}, {col}), status {:?}", self.status);

        self.to_move = mover.opponent();
        Ok(())
    }

    /// Boolean form of [`Game::make_move`]: `false` leaves the game untouched.
    pub fn play(&mut self, row: usize, col: usize) -> bool {
        self.make_move(row, col).is_ok()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

/// Render the board as a text grid: `-` for empty, `X`/`O` for stones.
pub fn render(game: &Game) -> String {
    game.to_string()
}

/// Length of the contiguous run through `(row, col)` along `(dr, dc)`.
///
/// Counts same-mark cells in the positive and the negative direction and adds
/// the cell itself. Returns 0 for an empty cell.
pub fn run_length(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> usize {
    let Ok(cell) = board.get(row, col) else {
        return 0;
    };
    if cell.is_empty() {
        return 0;
    }
    1 + count_dir(board, row, col, dr, dc, cell) + count_dir(board, row, col, -dr, -dc, cell)
}

fn count_dir(board: &Board, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row as isize + dr, col as isize + dc);
    while board.at(r, c) == Some(cell) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check whether the stone at `(row, col)` completes a winning run.
pub fn wins_at(board: &Board, row: usize, col: usize, rule: WinRule) -> bool {
    LINES
        .iter()
        .any(|&(dr, dc)| rule.is_win(run_length(board, row, col, dr, dc)))
}

/// Scan the whole board for a winning run, first stone in row-major order wins.
pub fn find_winner(board: &Board, rule: WinRule) -> Option<Player> {
    board
        .points()
        .filter(|&(r, c)| wins_at(board, r, c, rule))
        .find_map(|(r, c)| board.get(r, c).ok().and_then(Cell::owner))
}
