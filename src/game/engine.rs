use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    action::Direction,
    config::GameConfig,
    error::GameError,
    snapshot::GameSnapshot,
    state::{EndReason, GameStatus, Position, Snake},
};

/// Tick-based snake simulation.
///
/// The engine owns the snake, the food, the direction and the game status; a
/// host only talks to it through [`GameEngine::set_direction`],
/// [`GameEngine::tick`] and the read-only accessors. It performs no I/O and
/// takes its randomness from the injected `rng`.
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    snake: Snake,
    direction: Direction,
    food: Option<Position>,
    status: GameStatus,
    end_reason: Option<EndReason>,
    initial_len: usize,
    ticks: u64,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Engine with a reproducible food sequence
    pub fn seeded(config: &GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from the operating system
    pub fn from_entropy(config: &GameConfig) -> Result<Self, GameError> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Start a game: one-segment snake at `config.initial_head`, food already
    /// placed, status Running.
    pub fn new(config: &GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let snake = Snake::new(config.initial_head);
        let mut engine = Self {
            config: config.clone(),
            initial_len: snake.len(),
            snake,
            direction: config.initial_direction,
            food: None,
            status: GameStatus::Running,
            end_reason: None,
            ticks: 0,
            rng,
        };
        // A validated board always has a free cell next to a one-segment snake.
        engine.food = Some(engine.place_food()?);

        Ok(engine)
    }

    /// Request a new heading for the next tick.
    ///
    /// Returns whether the request was accepted. A 180-degree turn relative
    /// to the current direction is ignored, and once the game has ended every
    /// request is a silent no-op rather than an error. The latest accepted
    /// request before a tick is the one that tick uses.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::Ended || self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance the game by one step and return the resulting status.
    ///
    /// Calling this after the game ended changes nothing and returns `Ended`.
    pub fn tick(&mut self) -> GameStatus {
        if self.status == GameStatus::Ended {
            return self.status;
        }

        self.snake.advance(self.direction);
        self.ticks += 1;

        let head = self.snake.head();
        if let Some(reason) = self.check_collision(head) {
            self.end(reason);
            return self.status;
        }

        if self.food == Some(head) {
            // Length goes up now; the new cell separates from the tail on the
            // next advance.
            self.snake.grow();
            match self.place_food() {
                Ok(food) => self.food = Some(food),
                Err(_) => {
                    self.food = None;
                    self.end(EndReason::BoardSaturated);
                }
            }
        }

        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// Segments gained since the start. Stops changing once the game ends.
    pub fn score(&self) -> usize {
        self.snake.len() - self.initial_len
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
            segments: self.snake.segments().to_vec(),
            food: self.food,
            status: self.status,
            end_reason: self.end_reason,
            score: self.score(),
            ticks: self.ticks,
        }
    }

    fn end(&mut self, reason: EndReason) {
        self.status = GameStatus::Ended;
        self.end_reason = Some(reason);
    }

    /// Check the already-moved head against the walls and the rest of the body
    fn check_collision(&self, head: Position) -> Option<EndReason> {
        if !self.config.in_bounds(head) {
            return Some(EndReason::Wall);
        }

        if self.snake.collides_with_body(head) {
            return Some(EndReason::SelfCollision);
        }

        None
    }

    /// Pick a uniformly random cell the snake does not cover
    fn place_food(&mut self) -> Result<Position, GameError> {
        pick_free_cell(&self.config, &self.snake, &mut self.rng).ok_or(GameError::BoardSaturated)
    }
}

/// Uniform choice among the cells `snake` leaves free, without visiting the
/// whole board: draw the k-th free cell index, then skip past every occupied
/// index at or below it. Cost depends on the snake length, not the board area.
fn pick_free_cell<R: Rng + ?Sized>(
    config: &GameConfig,
    snake: &Snake,
    rng: &mut R,
) -> Option<Position> {
    let width = config.grid_width as u64;
    let area = width * config.grid_height as u64;

    let mut occupied: Vec<u64> = snake
        .segments()
        .iter()
        .filter(|pos| config.in_bounds(**pos))
        .map(|pos| pos.y as u64 * width + pos.x as u64)
        .collect();
    occupied.sort_unstable();
    occupied.dedup();

    let free = area - occupied.len() as u64;
    if free == 0 {
        return None;
    }

    let mut index = rng.gen_range(0..free);
    for cell in occupied {
        if cell <= index {
            index += 1;
        } else {
            break;
        }
    }

    Some(Position::new((index % width) as i32, (index / width) as i32))
}
