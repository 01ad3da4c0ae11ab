//! Move selection for the computer player.
//!
//! Every empty cell is scored with [`crate::patterns::score`] and the best one
//! is played. Candidates are sorted stably by descending score, so ties go to
//! the first cell in row-major order. If no ranked candidate is playable the
//! selector falls back to a uniformly random empty cell.

use log::{debug, warn};

use crate::board::Point;
use crate::patterns::score;
use crate::position::Game;

/// A scored empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub point: Point,
    pub score: u32,
}

/// Score every empty cell, best first.
pub fn rank_candidates(game: &Game) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = game
        .board()
        .empty_points()
        .into_iter()
        .map(|(r, c)| Candidate {
            point: (r, c),
            score: score(game, r, c),
        })
        .collect();
    // Stable: equal scores keep row-major order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

/// Pick a move for the player to move. `None` only when the board is full.
pub fn select_move(game: &Game) -> Option<Point> {
    select_move_with(game, &mut fastrand::Rng::new())
}

/// Same as [`select_move`] with an explicit random source for the fallback.
///
/// Ranked candidates are empty when scored, so the re-check before returning
/// one only fails if the board changed underneath; the random fallback keeps
/// a legal move available even then.
pub fn select_move_with(game: &Game, rng: &mut fastrand::Rng) -> Option<Point> {
    let board = game.board();
    let best = rank_candidates(game).into_iter().find(|cand| {
        let (r, c) = cand.point;
        board.get(r, c).is_ok_and(|cell| cell.is_empty())
    });

    match best {
        Some(cand) => {
            debug!(
                "{} picks ({}, {}) with score {}",
                game.to_move(),
                cand.point.0,
                cand.point.1,
                cand.score
            );
            Some(cand.point)
        }
        None => {
            let pt = random_empty(game, rng);
            if pt.is_some() {
                warn!("no ranked candidate playable, falling back to a random cell");
            }
            pt
        }
    }
}

/// A uniformly random empty cell, `None` on a full board.
pub fn random_empty(game: &Game, rng: &mut fastrand::Rng) -> Option<Point> {
    let empty = game.board().empty_points();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.usize(..empty.len())])
}
