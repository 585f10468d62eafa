use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::logging::{DEFAULT_LOG_PATH, init_logging};
use grid_snake::modes::{PlayMode, PlaySettings};
use grid_snake::record::{DEFAULT_RESULTS_PATH, ResultLog, player_name};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a bounded grid, with results saved to a text file")]
struct Cli {
    /// Game configuration as JSON; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Seed for food placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// File that finished games are appended to
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Player name for the results file (defaults to the OS user)
    #[arg(long)]
    player: Option<String>,

    /// Log file
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    log_file: PathBuf,
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }

    let mut settings = PlaySettings::new(config, cli.player.unwrap_or_else(player_name));
    settings.seed = cli.seed;
    settings.tick_interval = Duration::from_millis(cli.tick_ms.max(1));

    let results = ResultLog::new(cli.results);
    info!(path = %results.path().display(), "recording results");

    let mut play_mode = PlayMode::new(settings, results)?;
    play_mode.run().await?;

    Ok(())
}
