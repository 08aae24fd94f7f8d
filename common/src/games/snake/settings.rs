use std::time::Duration;

use super::types::Board;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSettings {
    pub board: Board,
    pub initial_tick_interval: Duration,
    pub min_tick_interval: Duration,
    /// Interval multiplier applied each time food is eaten.
    pub speedup_factor: f32,
}

impl SnakeSettings {
    pub fn next_tick_interval(&self, current: Duration) -> Duration {
        let millis = (current.as_millis() as f64 * self.speedup_factor as f64).round() as u64;
        Duration::from_millis(millis).max(self.min_tick_interval)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            board: Board::from_canvas(600, 500),
            initial_tick_interval: Duration::from_millis(200),
            min_tick_interval: Duration::from_millis(50),
            speedup_factor: 0.95,
        }
    }
}
