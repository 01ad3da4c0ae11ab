//! Gobang: a five-in-a-row engine with a simple heuristic opponent.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and heuristic weights
//! - [`board`] - Fixed-size grid, players and cells
//! - [`position`] - Game rules (legality, turns, win and draw detection)
//! - [`patterns`] - Directional pattern scoring of empty cells
//! - [`selector`] - Move selection for the computer player
//! - [`console`] - Text console driver
//! - [`sink`] - Game-start notifications
//!
//! ## Example
//!
//! ```
//! use gobang::position::{Game, Status};
//! use gobang::selector::select_move;
//!
//! // Create a new game
//! let mut game = Game::new();
//!
//! // Play a move
//! game.make_move(7, 7).unwrap();
//!
//! // Ask the computer for a reply
//! let (row, col) = select_move(&game).unwrap();
//! game.make_move(row, col).unwrap();
//! assert_eq!(game.status(), Status::InProgress);
//! println!("{game}");
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod patterns;
pub mod position;
pub mod selector;
pub mod sink;
