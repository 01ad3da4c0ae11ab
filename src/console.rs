//! Text console driver.
//!
//! Runs one game over any line-oriented input and text output: prints the
//! board, reads `row col` pairs for human players, asks the selector for the
//! computer's moves and announces the result.
//!
//! Coordinates typed and printed here are 1-based (`1..=N`); the engine is
//! 0-based.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use gobang::console::{Console, Mode};
//! use gobang::position::{Game, Status};
//! use gobang::board::Player;
//!
//! let moves = "1 1\n2 1\n1 2\n2 2\n1 3\n2 3\n1 4\n2 4\n1 5\n";
//! let mut out = Vec::new();
//! let mut console = Console::new(Game::new(), Mode::PlayerVsPlayer, Cursor::new(moves), &mut out);
//! let status = console.run().unwrap();
//! assert_eq!(status, Some(Status::Won(Player::X)));
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use log::{info, warn};

use crate::board::Player;
use crate::constants::N;
use crate::position::{Game, MoveError, Status};
use crate::selector::select_move_with;
use crate::sink::{GameStartSink, NullSink};

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Two humans share the console
    PlayerVsPlayer,
    /// One human against the computer, which plays as `ai`
    PlayerVsAi { ai: Player },
    /// The computer plays both sides
    AiVsAi,
}

impl Mode {
    /// Whether `player` is driven by the selector.
    pub fn is_ai(self, player: Player) -> bool {
        match self {
            Mode::PlayerVsPlayer => false,
            Mode::PlayerVsAi { ai } => ai == player,
            Mode::AiVsAi => true,
        }
    }
}

/// Console game state.
pub struct Console<R, W> {
    /// Current game
    game: Game,
    mode: Mode,
    /// Random source for the selector fallback
    rng: fastrand::Rng,
    sink: Box<dyn GameStartSink>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(game: Game, mode: Mode, input: R, output: W) -> Self {
        Self {
            game,
            mode,
            rng: fastrand::Rng::new(),
            sink: Box::new(NullSink),
            input,
            output,
        }
    }

    /// Replace the game-start sink.
    pub fn with_sink(mut self, sink: impl GameStartSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Seed the random source used by the computer player.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play the game to the end.
    ///
    /// Returns the final status, or `None` if the input ran out first.
    pub fn run(&mut self) -> anyhow::Result<Option<Status>> {
        info!("game started: {:?}, {:?}", self.mode, self.game.rule());
        if let Err(e) = self.sink.game_started(&self.game) {
            warn!("game-start sink failed: {e:#}");
        }

        loop {
            write!(self.output, "{}", self.game).context("writing board")?;

            match self.game.status() {
                Status::InProgress => {}
                Status::Won(player) => {
                    info!("{player} wins after {} moves", self.game.move_count());
                    writeln!(self.output, "Player {player} wins!").context("writing result")?;
                    return Ok(Some(self.game.status()));
                }
                Status::Drawn => {
                    info!("draw after {} moves", self.game.move_count());
                    writeln!(self.output, "The board is full, it's a draw.")
                        .context("writing result")?;
                    return Ok(Some(self.game.status()));
                }
            }

            let player = self.game.to_move();
            if self.mode.is_ai(player) {
                self.ai_turn(player)?;
            } else if !self.human_turn(player)? {
                info!("input closed, abandoning game");
                return Ok(None);
            }
        }
    }

    fn ai_turn(&mut self, player: Player) -> anyhow::Result<()> {
        let Some((row, col)) = select_move_with(&self.game, &mut self.rng) else {
            bail!("no empty cell left for {player}");
        };
        self.game.make_move(row, col)?;
        writeln!(self.output, "Computer ({player}) plays {} {}", row + 1, col + 1)
            .context("writing computer move")?;
        Ok(())
    }

    /// Read lines until one holds a legal move. Returns `false` at end of input.
    fn human_turn(&mut self, player: Player) -> anyhow::Result<bool> {
        loop {
            write!(self.output, "Player {player}, enter row and column (e.g. 7 7): ")
                .context("writing prompt")?;
            self.output.flush().context("flushing prompt")?;

            let mut line = String::new();
            let n = self.input.read_line(&mut line).context("reading move")?;
            if n == 0 {
                writeln!(self.output).context("writing prompt")?;
                return Ok(false);
            }

            let Some((row, col)) = parse_coords(&line) else {
                writeln!(self.output, "Invalid input, enter a row and a column.")
                    .context("writing error")?;
                continue;
            };

            let result = match (row.checked_sub(1), col.checked_sub(1)) {
                (Some(r), Some(c)) => self.game.make_move(r, c),
                _ => Err(MoveError::OutOfBounds { row, col }),
            };
            match result {
                Ok(()) => return Ok(true),
                Err(e) => {
                    writeln!(self.output, "Invalid move: {}, try again.", describe(e, row, col))
                        .context("writing error")?;
                }
            }
        }
    }
}

/// Parse two 1-based integers separated by whitespace or a comma.
pub fn parse_coords(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Human-readable reason, with the coordinates as the player typed them.
fn describe(err: MoveError, row: usize, col: usize) -> String {
    match err {
        MoveError::OutOfBounds { .. } => format!("{row} {col} is off the board (1-{N})"),
        MoveError::CellOccupied { .. } => format!("{row} {col} is already taken"),
        MoveError::GameAlreadyOver => "the game is over".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as StdCell;
    use std::io::Cursor;
    use std::rc::Rc;

    fn run_script(mode: Mode, script: &str) -> (Option<Status>, String, Game) {
        let mut out = Vec::new();
        let mut console = Console::new(Game::new(), mode, Cursor::new(script.to_string()), &mut out)
            .with_seed(1);
        let status = console.run().unwrap();
        let game = console.game().clone();
        drop(console);
        (status, String::from_utf8(out).unwrap(), game)
    }

    #[test]
    fn test_parse_coords() {
        assert_eq!(parse_coords("7 7"), Some((7, 7)));
        assert_eq!(parse_coords("  3\t12 \n"), Some((3, 12)));
        assert_eq!(parse_coords("3,4"), Some((3, 4)));
        assert_eq!(parse_coords("3"), None);
        assert_eq!(parse_coords("a b"), None);
        assert_eq!(parse_coords("-1 2"), None);
        assert_eq!(parse_coords("1 2 3"), None);
        assert_eq!(parse_coords(""), None);
    }

    #[test]
    fn test_mode_is_ai() {
        assert!(!Mode::PlayerVsPlayer.is_ai(Player::X));
        assert!(Mode::PlayerVsAi { ai: Player::X }.is_ai(Player::X));
        assert!(!Mode::PlayerVsAi { ai: Player::X }.is_ai(Player::O));
        assert!(Mode::AiVsAi.is_ai(Player::O));
    }

    #[test]
    fn test_eof_abandons_game() {
        let (status, out, game) = run_script(Mode::PlayerVsPlayer, "8 8\n");
        assert_eq!(status, None);
        assert_eq!(game.move_count(), 1);
        assert!(out.contains("Player O, enter row and column"));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let (_, out, game) = run_script(Mode::PlayerVsPlayer, "hello\n0 3\n16 1\n1 1\n1 1\n");
        assert!(out.contains("Invalid input"));
        assert!(out.contains("0 3 is off the board"));
        assert!(out.contains("16 1 is off the board"));
        assert!(out.contains("1 1 is already taken"));
        // Only the first "1 1" was accepted
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_vertical_win() {
        let script = "1 1\n1 2\n2 1\n2 2\n3 1\n3 2\n4 1\n4 2\n5 1\n";
        let (status, out, _) = run_script(Mode::PlayerVsPlayer, script);
        assert_eq!(status, Some(Status::Won(Player::X)));
        assert!(out.contains("Player X wins!"));
    }

    #[test]
    fn test_computer_moves_first() {
        let (status, out, game) = run_script(Mode::PlayerVsAi { ai: Player::X }, "");
        assert_eq!(status, None);
        assert!(out.contains("Computer (X) plays"));
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.to_move(), Player::O);
    }

    /// Counts notifications and always fails.
    struct FailingSink(Rc<StdCell<usize>>);

    impl GameStartSink for FailingSink {
        fn game_started(&mut self, _game: &Game) -> anyhow::Result<()> {
            self.0.set(self.0.get() + 1);
            bail!("store unavailable")
        }
    }

    #[test]
    fn test_sink_fires_once_and_failure_is_ignored() {
        let hits = Rc::new(StdCell::new(0));
        let mut out = Vec::new();
        let mut console = Console::new(Game::new(), Mode::AiVsAi, Cursor::new(""), &mut out)
            .with_seed(5)
            .with_sink(FailingSink(Rc::clone(&hits)));
        let status = console.run().unwrap();
        assert_eq!(hits.get(), 1);
        assert!(status.is_some_and(Status::is_over));
        assert!(console.game().move_count() > 1);
    }

    #[test]
    fn test_self_play_terminates() {
        let (status, out, game) = run_script(Mode::AiVsAi, "");
        assert!(status.is_some_and(Status::is_over));
        assert!(game.is_game_over());
        assert!(out.contains("wins!") || out.contains("draw"));
    }
}
