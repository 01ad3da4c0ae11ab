//! Game-start notifications.
//!
//! The console fires [`GameStartSink::game_started`] once per game, before the
//! first move. Failures are logged by the caller and otherwise ignored: a sink
//! never influences play.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use crate::position::Game;

pub trait GameStartSink {
    fn game_started(&mut self, game: &Game) -> anyhow::Result<()>;
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl GameStartSink for NullSink {
    fn game_started(&mut self, _game: &Game) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Appends a snapshot of the starting board to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GameStartSink for FileSink {
    fn game_started(&mut self, game: &Game) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening snapshot file {}", self.path.display()))?;
        writeln!(file, "# new game, {} to move\n{game}", game.to_move())
            .with_context(|| format!("writing snapshot to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink() {
        assert!(NullSink.game_started(&Game::new()).is_ok());
    }

    #[test]
    fn test_file_sink_appends() {
        let path = std::env::temp_dir().join(format!("gobang-sink-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut sink = FileSink::new(&path);
        sink.game_started(&Game::new()).unwrap();
        sink.game_started(&Game::new()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("# new game, X to move").count(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_sink_bad_path() {
        let mut sink = FileSink::new("/nonexistent-dir/for/gobang/snapshot.txt");
        assert!(sink.game_started(&Game::new()).is_err());
    }
}
