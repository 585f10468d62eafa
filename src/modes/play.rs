use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::game::{GameConfig, GameEngine, GameError, GameStatus};
use crate::input::{InputHandler, KeyAction};
use crate::record::{ResultLog, ResultRecord, ResultSink, SaveStatus};
use crate::render::Renderer;

/// Tick cadence of the reference game
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Everything needed to start (and restart) a game
#[derive(Debug, Clone)]
pub struct PlaySettings {
    pub config: GameConfig,
    /// Fixed seed for reproducible food; each restart uses the next seed
    pub seed: Option<u64>,
    pub tick_interval: Duration,
    pub player: String,
}

impl PlaySettings {
    pub fn new(config: GameConfig, player: impl Into<String>) -> Self {
        Self {
            config,
            seed: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
            player: player.into(),
        }
    }

    fn new_engine(&self, game_index: u64) -> Result<GameEngine, GameError> {
        match self.seed {
            Some(seed) => GameEngine::seeded(&self.config, seed.wrapping_add(game_index)),
            None => GameEngine::from_entropy(&self.config),
        }
    }
}

/// Interactive terminal game.
///
/// Owns the engine and is its only caller: key presses become
/// `set_direction` calls straight away, the tick timer calls `tick`, and the
/// first time a game reports `Ended` its result goes to the sink exactly once.
pub struct PlayMode<S: ResultSink = ResultLog> {
    settings: PlaySettings,
    engine: GameEngine,
    sink: S,
    renderer: Renderer,
    input_handler: InputHandler,
    save_status: Option<SaveStatus>,
    games_started: u64,
    should_quit: bool,
}

impl<S: ResultSink> PlayMode<S> {
    pub fn new(settings: PlaySettings, sink: S) -> Result<Self> {
        let engine = settings
            .new_engine(0)
            .context("Failed to start game")?;
        info!(
            width = settings.config.grid_width,
            height = settings.config.grid_height,
            player = %settings.player,
            "game started"
        );

        Ok(Self {
            settings,
            engine,
            sink,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            save_status: None,
            games_started: 1,
            should_quit: false,
        })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.settings.tick_interval);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &snapshot,
                            &self.settings.player,
                            self.save_status.as_ref(),
                        );
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                if self.engine.is_running() && !self.engine.set_direction(direction) {
                    debug!(?direction, current = ?self.engine.direction(), "turn rejected");
                }
            }
            KeyAction::Restart => {
                if !self.engine.is_running() {
                    self.reset_game();
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if !self.engine.is_running() {
            return;
        }

        let score_before = self.engine.score();
        let status = self.engine.tick();
        if self.engine.score() > score_before {
            debug!(score = self.engine.score(), food = ?self.engine.food(), "food eaten");
        }

        if status == GameStatus::Ended {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        if self.save_status.is_some() {
            return;
        }

        let record = ResultRecord::new(self.settings.player.clone(), self.engine.score());
        info!(
            reason = ?self.engine.end_reason(),
            score = record.score,
            length = self.engine.snake_len(),
            "game over"
        );

        self.save_status = Some(match self.sink.record(&record) {
            Ok(()) => {
                info!(%record, "result saved");
                SaveStatus::Saved
            }
            Err(err) => {
                error!("failed to save result: {err:#}");
                SaveStatus::Failed(err.to_string())
            }
        });
    }

    fn reset_game(&mut self) {
        match self.settings.new_engine(self.games_started) {
            Ok(engine) => {
                self.engine = engine;
                self.games_started += 1;
                self.save_status = None;
                info!(game = self.games_started, "game restarted");
            }
            Err(err) => error!(error = %err, "failed to restart game"),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
