use thiserror::Error;

/// Failures the game engine can report.
///
/// Running into a wall or into the snake's own body is not an error: it is the
/// normal way a game ends and is reported through [`super::GameStatus::Ended`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid game configuration: {0}")]
    InvalidConfiguration(String),
    #[error("no free cell left on the board for food")]
    BoardSaturated,
}
