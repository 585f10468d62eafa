//! End-of-game result persistence
//!
//! The engine never touches the filesystem. When a game ends the host builds a
//! [`ResultRecord`] and hands it to a [`ResultSink`], normally a [`ResultLog`]
//! that appends one line per game to `results.txt`.

pub mod log;
pub mod player;

pub use log::{DEFAULT_RESULTS_PATH, ResultLog};
pub use player::player_name;

use anyhow::Result;
use std::fmt;

/// Outcome of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub player: String,
    pub score: usize,
}

impl ResultRecord {
    pub fn new(player: impl Into<String>, score: usize) -> Self {
        Self {
            player: player.into(),
            score,
        }
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {}, Score: {}", self.player, self.score)
    }
}

/// What happened to the result of the game that just ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed(String),
}

/// Somewhere finished games get written to
pub trait ResultSink {
    fn record(&mut self, record: &ResultRecord) -> Result<()>;
}

/// Keeps records in memory. Useful for tests and for running without a
/// results file.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<ResultRecord>,
}

impl ResultSink for MemorySink {
    fn record(&mut self, record: &ResultRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line_format() {
        let record = ResultRecord::new("alice", 7);
        assert_eq!(record.to_string(), "Player: alice, Score: 7");
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::default();
        sink.record(&ResultRecord::new("a", 1)).unwrap();
        sink.record(&ResultRecord::new("b", 0)).unwrap();
        assert_eq!(
            sink.records,
            vec![ResultRecord::new("a", 1), ResultRecord::new("b", 0)]
        );
    }
}
