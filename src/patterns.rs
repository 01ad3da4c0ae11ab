//! Pattern scoring for move generation.
//!
//! Each empty cell is scored from the point of view of the player to move by
//! looking along the eight directions around it. Along one direction the
//! evaluator walks up to [`EVAL_REACH`] cells and records:
//!
//! - `count`: friendly stones seen
//! - `empty`: empty cells seen
//!
//! The walk stops at the edge of the board or at the first opponent stone.
//! A direction whose very first cell holds an opponent stone is ignored.
//!
//! The `(count, empty)` pair is then looked up in a fixed table:
//!
//! | count | empty | score |
//! |-------|-------|-------|
//! | 0     | 0     | 10    |
//! | 0     | 1     | 20    |
//! | 0     | 2     | 50    |
//! | 0     | 3     | 100   |
//! | 1     | 0     | 30    |
//! | 1     | 1     | 100   |
//! | 1     | 2     | 1000  |
//!
//! Any other combination scores 0.

use crate::board::{Board, Cell};
use crate::constants::{
    DELTA, EVAL_REACH, SCORE_BLOCKED_THREE, SCORE_BLOCKED_TWO, SCORE_ISOLATED, SCORE_OPEN_THREE,
    SCORE_OPEN_TWO, SCORE_SEMI_OPEN_THREE, SCORE_SEMI_OPEN_TWO,
};
use crate::position::Game;

/// What a walk along one direction found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub count: usize,
    pub empty: usize,
}

impl Shape {
    /// Score contribution of this shape.
    pub fn value(self) -> u32 {
        match (self.count, self.empty) {
            (0, 0) => SCORE_ISOLATED,
            (0, 1) => SCORE_BLOCKED_TWO,
            (0, 2) => SCORE_SEMI_OPEN_TWO,
            (0, 3) => SCORE_OPEN_TWO,
            (1, 0) => SCORE_BLOCKED_THREE,
            (1, 1) => SCORE_SEMI_OPEN_THREE,
            (1, 2) => SCORE_OPEN_THREE,
            _ => 0,
        }
    }
}

/// Walk from `(row, col)` along `(dr, dc)` and classify what lies there.
///
/// Returns `None` when the adjacent cell is off the board or holds an
/// opponent stone; such a direction contributes nothing.
pub fn shape(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    own: Cell,
) -> Option<Shape> {
    let (row, col) = (row as isize, col as isize);
    let first = board.at(row + dr, col + dc)?;
    if !first.is_empty() && first != own {
        return None;
    }

    let mut shape = Shape { count: 0, empty: 0 };
    for i in 1..=EVAL_REACH as isize {
        match board.at(row + i * dr, col + i * dc) {
            None => break,
            Some(Cell::Empty) => shape.empty += 1,
            Some(c) if c == own => shape.count += 1,
            Some(_) => break,
        }
    }
    Some(shape)
}

/// Score one direction from `(row, col)` for the player to move.
pub fn direction_score(game: &Game, row: usize, col: usize, dr: isize, dc: isize) -> u32 {
    let own = game.to_move().stone();
    shape(game.board(), row, col, dr, dc, own).map_or(0, Shape::value)
}

/// Desirability of playing at `(row, col)` for the player to move.
///
/// Sums [`direction_score`] over the eight directions. Off-board coordinates
/// score 0.
pub fn score(game: &Game, row: usize, col: usize) -> u32 {
    if row >= game.board().size() || col >= game.board().size() {
        return 0;
    }
    DELTA
        .iter()
        .map(|&(dr, dc)| direction_score(game, row, col, dr, dc))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::constants::N;
    use crate::position::WinRule;

    fn game_with(stones: &[(usize, usize, Cell)], to_move: Player) -> Game {
        let mut board = Board::new();
        for &(r, c, cell) in stones {
            board.set(r, c, cell).unwrap();
        }
        Game::from_board(board, to_move, WinRule::ExactlyFive)
    }

    #[test]
    fn test_table_values() {
        let cases = [
            ((0, 0), 10),
            ((0, 1), 20),
            ((0, 2), 50),
            ((0, 3), 100),
            ((0, 4), 0),
            ((1, 0), 30),
            ((1, 1), 100),
            ((1, 2), 1000),
            ((1, 3), 0),
            ((2, 2), 0),
            ((4, 0), 0),
        ];
        for ((count, empty), expected) in cases {
            assert_eq!(Shape { count, empty }.value(), expected, "({count}, {empty})");
        }
    }

    #[test]
    fn test_open_direction_scores_nothing() {
        // Four empty cells ahead is not a recognised shape
        let game = Game::new();
        assert_eq!(direction_score(&game, 7, 7, 0, 1), 0);
        assert_eq!(score(&game, 7, 7), 0);
    }

    #[test]
    fn test_open_three() {
        let game = game_with(&[(7, 7, Cell::X), (7, 10, Cell::O)], Player::X);
        assert_eq!(
            shape(game.board(), 7, 6, 0, 1, Cell::X),
            Some(Shape { count: 1, empty: 2 })
        );
        assert_eq!(direction_score(&game, 7, 6, 0, 1), 1000);
    }

    #[test]
    fn test_adjacent_opponent_skips_direction() {
        let game = game_with(&[(7, 8, Cell::O)], Player::X);
        assert_eq!(shape(game.board(), 7, 7, 0, 1, Cell::X), None);
        assert_eq!(direction_score(&game, 7, 7, 0, 1), 0);

        // The same stone is friendly for O
        let game = game_with(&[(7, 8, Cell::O)], Player::O);
        assert_eq!(
            shape(game.board(), 7, 7, 0, 1, Cell::O),
            Some(Shape { count: 1, empty: 3 })
        );
    }

    #[test]
    fn test_edge_of_board() {
        let game = Game::new();
        // Nothing to the north of row 0
        assert_eq!(shape(game.board(), 0, 5, -1, 0, Cell::X), None);
        // Two cells to the east of column N-3
        assert_eq!(
            shape(game.board(), 3, N - 3, 0, 1, Cell::X),
            Some(Shape { count: 0, empty: 2 })
        );
        assert_eq!(direction_score(&game, 3, N - 3, 0, 1), 50);
    }

    #[test]
    fn test_blocked_walk() {
        // X . O : one empty then blocked
        let game = game_with(&[(4, 6, Cell::O)], Player::X);
        assert_eq!(
            shape(game.board(), 4, 4, 0, 1, Cell::X),
            Some(Shape { count: 0, empty: 1 })
        );
        assert_eq!(direction_score(&game, 4, 4, 0, 1), 20);
    }

    #[test]
    fn test_score_sums_directions() {
        // Corner cell: only E, S and SE stay on the board
        let game = game_with(&[(0, 3, Cell::O)], Player::X);
        assert_eq!(direction_score(&game, 0, 0, 0, 1), 50);
        assert_eq!(direction_score(&game, 0, 0, 1, 0), 0);
        assert_eq!(direction_score(&game, 0, 0, 1, 1), 0);
        assert_eq!(score(&game, 0, 0), 50);
        assert_eq!(score(&game, N, 0), 0);
    }
}
