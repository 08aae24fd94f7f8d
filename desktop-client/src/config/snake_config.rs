use common::config::Validate;
use common::games::snake::{AutopilotKind, Board, SnakeSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub initial_tick_interval_ms: u64,
    pub min_tick_interval_ms: u64,
    pub speedup_factor: f32,
    /// Autopilot engaged when the window opens.
    pub autopilot: Option<AutopilotKind>,
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.canvas_width < Board::CELLS_ACROSS_SHORT_SIDE
            || self.canvas_height < Board::CELLS_ACROSS_SHORT_SIDE
        {
            return Err(format!(
                "canvas must be at least {0}x{0} pixels",
                Board::CELLS_ACROSS_SHORT_SIDE
            ));
        }
        if self.canvas_width > 4000 || self.canvas_height > 4000 {
            return Err("canvas must not exceed 4000x4000 pixels".to_string());
        }
        if self.min_tick_interval_ms < 10 {
            return Err("min_tick_interval_ms must be at least 10".to_string());
        }
        if self.initial_tick_interval_ms < self.min_tick_interval_ms {
            return Err("initial_tick_interval_ms must not be below min_tick_interval_ms".to_string());
        }
        if self.initial_tick_interval_ms > 2000 {
            return Err("initial_tick_interval_ms must not exceed 2000".to_string());
        }
        if self.speedup_factor <= 0.0 || self.speedup_factor > 1.0 {
            return Err("speedup_factor must be greater than 0 and at most 1".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 500,
            initial_tick_interval_ms: 200,
            min_tick_interval_ms: 50,
            speedup_factor: 0.95,
            autopilot: None,
        }
    }
}

impl From<&SnakeConfig> for SnakeSettings {
    fn from(config: &SnakeConfig) -> Self {
        Self {
            board: Board::from_canvas(config.canvas_width, config.canvas_height),
            initial_tick_interval: Duration::from_millis(config.initial_tick_interval_ms),
            min_tick_interval: Duration::from_millis(config.min_tick_interval_ms),
            speedup_factor: config.speedup_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_defaults() {
        let settings = SnakeSettings::from(&SnakeConfig::default());

        assert_eq!(settings, SnakeSettings::default());
    }

    #[test]
    fn test_interval_order_is_validated() {
        let config = SnakeConfig {
            initial_tick_interval_ms: 40,
            min_tick_interval_ms: 50,
            ..SnakeConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_speedup_factor_is_validated() {
        let config = SnakeConfig {
            speedup_factor: 1.5,
            ..SnakeConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
