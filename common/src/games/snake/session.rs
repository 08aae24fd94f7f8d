use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::time::{Instant, sleep_until};

use crate::games::SessionRng;
use crate::log;
use super::bot_controller::BotController;
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::SnakeSettings;
use super::types::{AutopilotKind, Board, DeathReason, Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    SetAutopilot(Option<AutopilotKind>),
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub board: Board,
    pub body: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub tick: u64,
    pub tick_interval: Duration,
    pub autopilot: Option<AutopilotKind>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    Died(DeathReason),
    BoardFilled,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub ticks: u64,
    pub reason: GameEndReason,
}

pub trait SnakeBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<SnakeGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub autopilot: Arc<Mutex<Option<AutopilotKind>>>,
}

impl SnakeSessionState {
    pub fn create(settings: &SnakeSettings, seed: u64, autopilot: Option<AutopilotKind>) -> Self {
        let mut rng = SessionRng::new(seed);
        let game_state = SnakeGameState::new(settings.clone(), &mut rng);
        Self::from_parts(game_state, rng, autopilot)
    }

    pub fn from_parts(
        game_state: SnakeGameState,
        rng: SessionRng,
        autopilot: Option<AutopilotKind>,
    ) -> Self {
        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            autopilot: Arc::new(Mutex::new(autopilot)),
        }
    }

    pub async fn snapshot(&self) -> SnakeSnapshot {
        let autopilot = *self.autopilot.lock().await;
        let game_state = self.game_state.lock().await;
        build_snapshot(&game_state, autopilot)
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Runs one game until the snake dies, the board fills up, or a `Stop`
    /// command arrives (or the command channel closes).
    pub async fn run<B: SnakeBroadcaster>(
        session_state: SnakeSessionState,
        broadcaster: B,
        mut commands: mpsc::UnboundedReceiver<SnakeCommand>,
    ) -> GameOverSummary {
        broadcaster.broadcast_state(session_state.snapshot().await).await;

        let first_interval = session_state.game_state.lock().await.tick_interval;
        let mut next_tick = Instant::now() + first_interval;

        loop {
            tokio::select! {
                _ = sleep_until(next_tick) => {
                    let (outcome, interval) = Self::tick(&session_state).await;
                    broadcaster.broadcast_state(session_state.snapshot().await).await;

                    let reason = match outcome {
                        TickOutcome::Died(reason) => Some(GameEndReason::Died(reason)),
                        TickOutcome::BoardFilled => Some(GameEndReason::BoardFilled),
                        _ => None,
                    };
                    if let Some(reason) = reason {
                        return Self::finish(&session_state, &broadcaster, reason).await;
                    }

                    next_tick = Instant::now() + interval;
                }
                command = commands.recv() => {
                    let Some(command) = command else {
                        return Self::finish(&session_state, &broadcaster, GameEndReason::Stopped).await;
                    };
                    if command == SnakeCommand::Stop {
                        return Self::finish(&session_state, &broadcaster, GameEndReason::Stopped).await;
                    }
                    Self::handle_command(&session_state, command).await;
                }
            }
        }
    }

    pub async fn handle_command(session_state: &SnakeSessionState, command: SnakeCommand) {
        match command {
            SnakeCommand::Turn(direction) => {
                let mut game_state = session_state.game_state.lock().await;
                game_state.set_snake_direction(direction);
            }
            SnakeCommand::SetAutopilot(kind) => {
                *session_state.autopilot.lock().await = kind;
                log!("Autopilot set to {:?}", kind);
            }
            SnakeCommand::Stop => {}
        }
    }

    async fn tick(session_state: &SnakeSessionState) -> (TickOutcome, Duration) {
        let autopilot = *session_state.autopilot.lock().await;
        let mut game_state = session_state.game_state.lock().await;
        let mut rng = session_state.rng.lock().await;

        if let Some(kind) = autopilot
            && let Some(direction) = BotController::calculate_move(kind, &game_state)
        {
            game_state.set_snake_direction(direction);
        }

        let outcome = game_state.update(&mut rng);
        if outcome == TickOutcome::Ate {
            log!("Food eaten, score {}", game_state.score());
        }
        (outcome, game_state.tick_interval)
    }

    async fn finish<B: SnakeBroadcaster>(
        session_state: &SnakeSessionState,
        broadcaster: &B,
        reason: GameEndReason,
    ) -> GameOverSummary {
        let summary = {
            let game_state = session_state.game_state.lock().await;
            GameOverSummary {
                score: game_state.score(),
                ticks: game_state.tick,
                reason,
            }
        };
        log!("Game over: {:?}, score {}", summary.reason, summary.score);
        broadcaster.broadcast_game_over(summary).await;
        summary
    }
}

fn build_snapshot(state: &SnakeGameState, autopilot: Option<AutopilotKind>) -> SnakeSnapshot {
    SnakeSnapshot {
        board: state.board,
        body: state.snake.body.iter().copied().collect(),
        food: state.food,
        score: state.score(),
        tick: state.tick,
        tick_interval: state.tick_interval,
        autopilot,
    }
}
