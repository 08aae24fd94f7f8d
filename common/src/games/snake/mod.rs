mod bot_controller;
mod game_state;
mod pathfinding;
mod session;
mod settings;
mod snake;
mod types;

pub use bot_controller::BotController;
pub use game_state::{SnakeGameState, TickOutcome};
pub use pathfinding::find_first_step;
pub use session::{
    GameEndReason, GameOverSummary, SnakeBroadcaster, SnakeCommand, SnakeSession,
    SnakeSessionState, SnakeSnapshot,
};
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{AutopilotKind, Board, DeathReason, Direction, Point};
