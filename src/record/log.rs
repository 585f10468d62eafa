use anyhow::{Context, Result};
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use super::{ResultRecord, ResultSink};

pub const DEFAULT_RESULTS_PATH: &str = "results.txt";

/// Append-only text file of finished games, one `Player: .., Score: ..` line
/// each. The file is created on first use and never truncated.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ResultLog {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_PATH)
    }
}

impl ResultSink for ResultLog {
    fn record(&mut self, record: &ResultRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open results file {}", self.path.display()))?;
        writeln!(file, "{record}")
            .with_context(|| format!("Failed to write results file {}", self.path.display()))?;
        Ok(())
    }
}
