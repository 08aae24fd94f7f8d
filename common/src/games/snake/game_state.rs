use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Board, DeathReason, Direction, Point};

const RANDOM_FOOD_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No heading chosen yet.
    Idle,
    Moved,
    Ate,
    Died(DeathReason),
    /// Food ate the last free cell; nothing left to spawn.
    BoardFilled,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::Died(_) | TickOutcome::BoardFilled)
    }
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub food: Option<Point>,
    pub board: Board,
    pub tick: u64,
    pub tick_interval: Duration,
    settings: SnakeSettings,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(settings.board.center());
        let mut state = Self::with_snake(settings, snake, None);
        state.food = state.spawn_food(rng);
        state
    }

    /// Builds a state around a prepared snake and food cell.
    pub fn with_snake(settings: SnakeSettings, snake: Snake, food: Option<Point>) -> Self {
        Self {
            snake,
            food,
            board: settings.board,
            tick: 0,
            tick_interval: settings.initial_tick_interval,
            settings,
        }
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn score(&self) -> u32 {
        self.snake.score
    }

    pub fn set_snake_direction(&mut self, direction: Direction) -> bool {
        self.snake.queue_direction(direction)
    }

    /// Advances the simulation by one tick.
    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if let Some(reason) = self.snake.death_reason {
            return TickOutcome::Died(reason);
        }

        self.snake.apply_pending_direction();
        let Some(direction) = self.snake.direction else {
            return TickOutcome::Idle;
        };

        let next_head = match self.peek_move(direction) {
            Ok(point) => point,
            Err(reason) => {
                self.snake.death_reason = Some(reason);
                log!(
                    "Snake died at tick {} ({:?}), score {}",
                    self.tick,
                    reason,
                    self.snake.score
                );
                return TickOutcome::Died(reason);
            }
        };

        let ate = self.food == Some(next_head);
        self.snake.advance(next_head, ate);
        self.tick += 1;

        if !ate {
            return TickOutcome::Moved;
        }

        self.snake.score += 1;
        self.tick_interval = self.settings.next_tick_interval(self.tick_interval);
        self.food = self.spawn_food(rng);

        match self.food {
            Some(_) => TickOutcome::Ate,
            None => TickOutcome::BoardFilled,
        }
    }

    /// Where the head would land moving in `direction`, or why that move is
    /// fatal. The tail cell counts as free unless the move eats food.
    pub fn peek_move(&self, direction: Direction) -> Result<Point, DeathReason> {
        let next_head = self.snake.head().step(direction);

        if !self.board.contains(next_head) {
            return Err(DeathReason::WallCollision);
        }

        let grows = self.food == Some(next_head);
        if self.snake.occupies(next_head) && (next_head != self.snake.tail() || grows) {
            return Err(DeathReason::SelfCollision);
        }

        Ok(next_head)
    }

    /// Picks a uniformly random free cell. Random probes first, then a scan of
    /// the free cells once the board is crowded.
    fn spawn_food(&self, rng: &mut SessionRng) -> Option<Point> {
        if self.board.cell_count() == 0 {
            return None;
        }

        for _ in 0..RANDOM_FOOD_ATTEMPTS {
            let pos = Point::new(
                rng.random_range(0..self.board.columns),
                rng.random_range(0..self.board.rows),
            );
            if !self.snake.occupies(pos) {
                return Some(pos);
            }
        }

        let free: Vec<Point> = self
            .board
            .cells()
            .filter(|p| !self.snake.occupies(*p))
            .collect();
        rng.choose(&free).copied()
    }
}
