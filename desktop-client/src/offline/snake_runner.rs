use tokio::sync::mpsc;
use common::games::snake::{
    AutopilotKind, GameOverSummary, SnakeCommand, SnakeSession, SnakeSessionState,
};
use common::high_score::{HighScoreRecord, HighScoreStore};
use common::log;
use crate::state::{ClientCommand, SharedState};

use super::ip_task::spawn_ip_lookup;
use super::{LocalBroadcaster, LocalTaskSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerExit {
    /// The game ended; carries the autopilot choice for the next one.
    Finished(Option<AutopilotKind>),
    Shutdown,
}

pub async fn run_snake_game<S: HighScoreStore>(
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    settings: &LocalTaskSettings,
    autopilot: Option<AutopilotKind>,
    high_score_store: &S,
) -> RunnerExit {
    let seed: u64 = rand::random();
    let session_state = SnakeSessionState::create(&settings.snake, seed, autopilot);
    log!("Starting snake game (seed {}, autopilot {:?})", seed, autopilot);

    run_session(shared_state, command_rx, settings, session_state, autopilot, high_score_store).await
}

/// Drives a prepared session to its end, forwarding UI commands and
/// submitting the final score.
async fn run_session<S: HighScoreStore>(
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    settings: &LocalTaskSettings,
    session_state: SnakeSessionState,
    mut autopilot: Option<AutopilotKind>,
    high_score_store: &S,
) -> RunnerExit {
    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let (session_tx, session_rx) = mpsc::unbounded_channel();

    let mut game_handle = tokio::spawn(async move {
        SnakeSession::run(session_state, broadcaster, session_rx).await
    });

    loop {
        tokio::select! {
            result = &mut game_handle => {
                match result {
                    Ok(summary) => submit_high_score(shared_state, high_score_store, &settings.player_name, &summary),
                    Err(e) => log!("Snake session task failed: {}", e),
                }
                return RunnerExit::Finished(autopilot);
            }
            command = command_rx.recv() => {
                match command {
                    Some(ClientCommand::Snake(snake_command)) => {
                        if let SnakeCommand::SetAutopilot(kind) = snake_command {
                            autopilot = kind;
                        }
                        let _ = session_tx.send(snake_command);
                    }
                    Some(ClientCommand::RefreshIp) => {
                        spawn_ip_lookup(shared_state.clone(), &settings.ip_lookup);
                    }
                    Some(ClientCommand::Shutdown) | None => {
                        let _ = session_tx.send(SnakeCommand::Stop);
                        let _ = (&mut game_handle).await;
                        return RunnerExit::Shutdown;
                    }
                }
            }
        }
    }
}

fn submit_high_score<S: HighScoreStore>(
    shared_state: &SharedState,
    high_score_store: &S,
    player_name: &str,
    summary: &GameOverSummary,
) {
    let record = HighScoreRecord::new(summary.score, player_name);
    match high_score_store.submit(&record) {
        Ok(true) => shared_state.set_high_score(Some(record)),
        Ok(false) => {}
        Err(e) => {
            log!("Failed to save high score: {}", e);
            shared_state.set_error(format!("Failed to save high score: {}", e));
        }
    }
}
