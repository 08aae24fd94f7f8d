use std::collections::HashSet;

use super::game_state::SnakeGameState;
use super::pathfinding::find_first_step;
use super::types::{AutopilotKind, Direction, Point};

/// Single-step autopilots. Both read only the current state and return the
/// heading for the next tick.
pub struct BotController;

impl BotController {
    pub fn calculate_move(kind: AutopilotKind, state: &SnakeGameState) -> Option<Direction> {
        if !state.snake.is_alive() {
            return None;
        }

        match kind {
            AutopilotKind::Greedy => Self::greedy_move(state),
            AutopilotKind::Pathfinding => Self::pathfinding_move(state),
        }
    }

    fn greedy_move(state: &SnakeGameState) -> Option<Direction> {
        let current = state.snake.direction;
        let Some(food) = state.food else {
            return current;
        };

        let head = state.snake.head();
        let dx = food.x - head.x;
        let dy = food.y - head.y;
        if dx == 0 && dy == 0 {
            return current;
        }

        let horizontal = Self::axis_direction(dx, Direction::Right, Direction::Left);
        let vertical = Self::axis_direction(dy, Direction::Down, Direction::Up);
        let (preferred, other) = if dx.abs() >= dy.abs() {
            (horizontal, vertical)
        } else {
            (vertical, horizontal)
        };

        let candidates = preferred
            .into_iter()
            .chain(other)
            .chain(Direction::ALL);

        for direction in candidates {
            if Self::is_allowed(direction, current) && Self::is_safe_direction(state, direction) {
                return Some(direction);
            }
        }

        current
    }

    fn pathfinding_move(state: &SnakeGameState) -> Option<Direction> {
        let current = state.snake.direction;
        let head = state.snake.head();

        if let Some(food) = state.food {
            let blocked = Self::blocked_cells(state);
            let forbidden = current.map(|d| d.opposite());
            if let Some(direction) = find_first_step(&state.board, head, food, &blocked, forbidden)
                && Self::is_safe_direction(state, direction)
            {
                return Some(direction);
            }
        }

        Self::most_open_direction(state).or(current)
    }

    /// Among the safe headings, the one whose landing cell has the most free
    /// neighbours. Ties keep `Direction::ALL` order.
    fn most_open_direction(state: &SnakeGameState) -> Option<Direction> {
        let current = state.snake.direction;
        let mut best: Option<(Direction, usize)> = None;

        for direction in Direction::ALL {
            if !Self::is_allowed(direction, current) {
                continue;
            }
            let Ok(next) = state.peek_move(direction) else {
                continue;
            };

            let open = Self::safe_neighbor_count(state, next);
            if best.is_none_or(|(_, best_open)| open > best_open) {
                best = Some((direction, open));
            }
        }

        best.map(|(direction, _)| direction)
    }

    fn safe_neighbor_count(state: &SnakeGameState, pos: Point) -> usize {
        let tail = state.snake.tail();
        Direction::ALL
            .iter()
            .map(|d| pos.step(*d))
            .filter(|p| state.board.contains(*p))
            .filter(|p| !state.snake.occupies(*p) || (*p == tail && state.snake.len() > 1))
            .count()
    }

    pub fn is_safe_direction(state: &SnakeGameState, direction: Direction) -> bool {
        state.peek_move(direction).is_ok()
    }

    fn is_allowed(direction: Direction, current: Option<Direction>) -> bool {
        current.is_none_or(|c| !direction.is_opposite(&c))
    }

    fn axis_direction(offset: i32, positive: Direction, negative: Direction) -> Option<Direction> {
        match offset.signum() {
            1 => Some(positive),
            -1 => Some(negative),
            _ => None,
        }
    }

    /// Every body cell except the tail, which moves away on the next tick.
    fn blocked_cells(state: &SnakeGameState) -> HashSet<Point> {
        let body = &state.snake.body;
        body.iter().take(body.len().saturating_sub(1)).copied().collect()
    }
}
