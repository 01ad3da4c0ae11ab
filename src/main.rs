//! Gobang: five-in-a-row on the console.
//!
//! ## Usage
//!
//! - `gobang` - Play against the computer (the computer moves first)
//! - `gobang play --mode pvp` - Two players share the console
//! - `gobang demo` - Watch the computer play itself
//!
//! Set `RUST_LOG=debug` to trace every move and the computer's choices.

use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use gobang::board::Player;
use gobang::console::{Console, Mode};
use gobang::position::{Game, WinRule};
use gobang::sink::FileSink;

/// Gobang: five-in-a-row against a friend or a simple heuristic opponent
#[derive(Parser)]
#[command(name = "gobang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the console
    Play(PlayArgs),
    /// Let the computer play both sides
    Demo(EngineArgs),
}

/// Options shared by every way of running a game.
#[derive(clap::Args, Default)]
struct EngineArgs {
    /// Seed for the computer's random fallback
    #[arg(long)]
    seed: Option<u64>,
    /// Count runs longer than five as wins
    #[arg(long)]
    overline_wins: bool,
}

impl EngineArgs {
    fn win_rule(&self) -> WinRule {
        if self.overline_wins {
            WinRule::FiveOrMore
        } else {
            WinRule::ExactlyFive
        }
    }

    fn console<R, W>(&self, mode: Mode, input: R, output: W) -> Console<R, W>
    where
        R: io::BufRead,
        W: io::Write,
    {
        let console = Console::new(Game::with_rule(self.win_rule()), mode, input, output);
        match self.seed {
            Some(seed) => console.with_seed(seed),
            None => console,
        }
    }
}

#[derive(clap::Args, Default)]
struct PlayArgs {
    /// Who plays
    #[arg(long, value_enum, default_value_t = ModeArg::Ai)]
    mode: ModeArg,
    /// In AI mode, let the human move first
    #[arg(long)]
    human_first: bool,
    #[command(flatten)]
    engine: EngineArgs,
    /// Append a snapshot of the starting board to this file
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Copy, Clone, Default, ValueEnum)]
enum ModeArg {
    /// Human against human
    Pvp,
    /// Human against the computer
    #[default]
    Ai,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command {
        Some(Commands::Demo(args)) => {
            // The computer plays both sides and never reads input
            let input = BufReader::new(io::empty());
            args.console(Mode::AiVsAi, input, stdout.lock()).run()?;
        }
        Some(Commands::Play(args)) => play(args, stdin.lock(), stdout.lock())?,
        None => play(PlayArgs::default(), stdin.lock(), stdout.lock())?,
    }
    Ok(())
}

fn play(args: PlayArgs, input: impl io::BufRead, output: impl io::Write) -> anyhow::Result<()> {
    let mode = match args.mode {
        ModeArg::Pvp => Mode::PlayerVsPlayer,
        ModeArg::Ai if args.human_first => Mode::PlayerVsAi { ai: Player::O },
        ModeArg::Ai => Mode::PlayerVsAi { ai: Player::X },
    };

    let mut console = args.engine.console(mode, input, output);
    if let Some(path) = args.snapshot {
        console = console.with_sink(FileSink::new(path));
    }
    console.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gobang::position::Status;

    #[test]
    fn test_demo_args() {
        let cli =
            Cli::try_parse_from(["gobang", "demo", "--seed", "4", "--overline-wins"]).unwrap();
        let Some(Commands::Demo(args)) = cli.command else {
            panic!("expected the demo subcommand");
        };
        assert_eq!(args.seed, Some(4));
        assert_eq!(args.win_rule(), WinRule::FiveOrMore);
    }

    #[test]
    fn test_play_shares_engine_args() {
        let cli = Cli::try_parse_from(["gobang", "play", "--mode", "pvp", "--seed", "9"]).unwrap();
        let Some(Commands::Play(args)) = cli.command else {
            panic!("expected the play subcommand");
        };
        assert_eq!(args.engine.seed, Some(9));
        assert_eq!(args.engine.win_rule(), WinRule::ExactlyFive);
    }

    #[test]
    fn test_demo_needs_no_input() {
        let args = EngineArgs {
            seed: Some(11),
            overline_wins: false,
        };
        let mut out = Vec::new();
        let mut console = args.console(Mode::AiVsAi, BufReader::new(io::empty()), &mut out);
        let status = console.run().unwrap();
        assert!(status.is_some_and(Status::is_over));
    }
}
