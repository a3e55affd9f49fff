use super::{
    config::GameConfig,
    direction::Direction,
    state::{CollisionType, GameState, Point, Snake},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of one game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Set when this step ended the game
    pub collision: Option<CollisionType>,
    /// Whether the game has terminated
    pub terminated: bool,
}

impl StepResult {
    fn advanced(ate_food: bool) -> Self {
        Self {
            ate_food,
            collision: None,
            terminated: false,
        }
    }

    fn ended(collision: Option<CollisionType>) -> Self {
        Self {
            ate_food: false,
            collision,
            terminated: true,
        }
    }
}

/// The game engine that handles all game logic
///
/// One `step` call is one tick of game logic; pacing is left to the caller,
/// so update behavior is testable without real delays. The RNG is seeded
/// once at construction and food placement is reproducible under a fixed
/// seed.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new engine with a randomly seeded RNG
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a new engine with a fixed seed, for reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reset to the starting state: a single-segment snake at the playfield
    /// center, score 0, the initial move interval, food somewhere off the
    /// snake.
    pub fn reset(&mut self) -> GameState {
        let block = self.config.block_size;
        let center = Point::new(self.config.width / 2, self.config.height / 2);

        let snake = Snake::new(center, Direction::Right, 1, block);
        let food = self.spawn_food(&snake);

        GameState::new(
            snake,
            food,
            self.config.width,
            self.config.height,
            block,
            self.config.initial_speed_ms,
        )
    }

    /// Advance the game by one move
    ///
    /// A requested direction that reverses the current one is ignored. The
    /// head moves one block; leaving the playfield or hitting the body stops
    /// the game with the body unchanged. Eating food grows the snake, adds
    /// to the score, shortens the move interval down to the configured
    /// floor, and respawns the food.
    pub fn step(&mut self, state: &mut GameState, requested: Option<Direction>) -> StepResult {
        if !state.running {
            return StepResult::ended(None);
        }

        if let Some(direction) = requested {
            if !state.snake.direction.is_opposite(direction) {
                state.snake.direction = direction;
            }
        }

        let new_head = state.snake.head().stepped(state.snake.direction, state.block_size);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.running = false;
            return StepResult::ended(Some(collision));
        }

        let ate_food = new_head == state.food;
        state.snake.advance(state.block_size, ate_food);

        if ate_food {
            state.score += self.config.food_score;
            state.speed_ms = state
                .speed_ms
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_speed_ms);
            state.food = self.spawn_food(&state.snake);
        }

        StepResult::advanced(ate_food)
    }

    fn check_collision(&self, state: &GameState, head: Point) -> Option<CollisionType> {
        if !state.in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.occupies(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a random block-aligned point that the snake does not occupy
    fn spawn_food(&mut self, snake: &Snake) -> Point {
        let block = self.config.block_size;
        loop {
            let x = self.rng.gen_range(0..self.config.grid_width()) * block;
            let y = self.rng.gen_range(0..self.config.grid_height()) * block;
            let point = Point::new(x, y);

            if !snake.occupies(point) {
                return point;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_engine() -> GameEngine {
        GameEngine::with_seed(GameConfig::small(), 7)
    }

    #[test]
    fn test_starting_state() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 7);
        let state = engine.reset();

        assert!(state.running);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_ms, 150);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Point::new(400, 300));
        assert_ne!(state.food, state.snake.head());
    }

    #[test]
    fn test_food_is_block_aligned() {
        let mut engine = test_engine();
        for _ in 0..50 {
            let state = engine.reset();
            assert_eq!(state.food.x % 20, 0);
            assert_eq!(state.food.y % 20, 0);
            assert!(state.in_bounds(state.food));
        }
    }

    #[test]
    fn test_constant_length_movement() {
        let mut engine = test_engine();
        let mut state = engine.reset();
        state.food = Point::new(0, 0); // out of the snake's path
        let initial_head = state.snake.head();

        let result = engine.step(&mut state, None);

        assert!(!result.terminated);
        assert!(!result.ate_food);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Point::new(initial_head.x + 20, initial_head.y));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = test_engine();
        let mut state = engine.reset();

        // Place food directly in front of the head
        state.food = state.snake.head().stepped(state.snake.direction, 20);
        let initial_length = state.snake.len();

        let result = engine.step(&mut state, None);

        assert!(result.ate_food);
        assert_eq!(state.snake.len(), initial_length + 1);
        assert_eq!(state.score, 10);
        assert_eq!(state.speed_ms, 145);
        assert_ne!(state.food, state.snake.head());
    }

    #[test]
    fn test_speed_floor() {
        let mut engine = test_engine();
        let mut state = engine.reset();
        state.speed_ms = 52;

        state.food = state.snake.head().stepped(state.snake.direction, 20);
        engine.step(&mut state, None);
        assert_eq!(state.speed_ms, 50);

        state.food = state.snake.head().stepped(state.snake.direction, 20);
        engine.step(&mut state, None);
        assert_eq!(state.speed_ms, 50);
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = test_engine();
        let snake = Snake::new(Point::new(0, 100), Direction::Left, 3, 20);
        let body_before = snake.body.clone();
        let mut state = GameState::new(snake, Point::new(40, 40), 200, 200, 20, 150);

        let result = engine.step(&mut state, None);

        assert!(result.terminated);
        assert_eq!(result.collision, Some(CollisionType::Wall));
        assert!(!state.running);
        assert_eq!(state.snake.body, body_before);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = test_engine();

        // Length-5 snake headed right; a tight clockwise box brings the head
        // back onto the body.
        let snake = Snake::new(Point::new(100, 100), Direction::Right, 5, 20);
        let mut state = GameState::new(snake, Point::new(180, 180), 200, 200, 20, 150);

        engine.step(&mut state, Some(Direction::Down));
        engine.step(&mut state, Some(Direction::Left));
        let result = engine.step(&mut state, Some(Direction::Up));

        assert!(result.terminated);
        assert_eq!(result.collision, Some(CollisionType::SelfCollision));
        assert!(!state.running);
    }

    #[test]
    fn test_reverse_direction_ignored() {
        let mut engine = test_engine();
        let mut state = engine.reset();
        state.food = Point::new(0, 0);
        assert_eq!(state.snake.direction, Direction::Right);

        engine.step(&mut state, Some(Direction::Left));

        assert_eq!(state.snake.direction, Direction::Right);
    }

    #[test]
    fn test_food_respawn_avoids_snake() {
        let mut engine = test_engine();
        let mut state = engine.reset();

        for _ in 0..30 {
            let previous_food = state.food;
            // Steer toward the food one axis at a time
            while state.running && state.food == previous_food {
                let head = state.snake.head();
                let requested = if head.x < state.food.x {
                    Direction::Right
                } else if head.x > state.food.x {
                    Direction::Left
                } else if head.y < state.food.y {
                    Direction::Down
                } else {
                    Direction::Up
                };
                engine.step(&mut state, Some(requested));
            }
            if !state.running {
                break;
            }
            assert_ne!(state.food, previous_food);
            assert!(!state.snake.occupies(state.food));
        }
    }

    #[test]
    fn test_step_after_game_over() {
        let mut engine = test_engine();
        let mut state = engine.reset();
        state.running = false;
        let snapshot = state.clone();

        let result = engine.step(&mut state, Some(Direction::Up));

        assert!(result.terminated);
        assert_eq!(state, snapshot);
    }
}
