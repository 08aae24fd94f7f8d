use tokio::sync::mpsc;
use common::games::snake::{AutopilotKind, SnakeSettings};
use common::high_score::{FileHighScoreStore, HighScoreStore};
use common::log;
use crate::config::{Config, IpLookupConfig};
use crate::state::{ClientCommand, SharedState};

use super::ip_task::spawn_ip_lookup;
use super::snake_runner::{run_snake_game, RunnerExit};

#[derive(Debug, Clone)]
pub struct LocalTaskSettings {
    pub snake: SnakeSettings,
    pub autopilot: Option<AutopilotKind>,
    pub ip_lookup: IpLookupConfig,
    pub player_name: String,
    pub high_score_path: String,
}

impl LocalTaskSettings {
    pub fn from_config(config: &Config, player_name: String) -> Self {
        Self {
            snake: SnakeSettings::from(&config.snake),
            autopilot: config.snake.autopilot,
            ip_lookup: config.ip_lookup.clone(),
            player_name,
            high_score_path: config.high_score_path(),
        }
    }
}

/// Background work for the window: the IP lookup and back-to-back snake games
/// until the UI asks to shut down.
pub async fn local_task(
    shared_state: SharedState,
    settings: LocalTaskSettings,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let high_score_store = FileHighScoreStore::from_yaml_file(&settings.high_score_path);
    match high_score_store.load() {
        Ok(record) => shared_state.set_high_score(record),
        Err(e) => {
            log!("Failed to load high score from {}: {}", settings.high_score_path, e);
            shared_state.set_error(format!("Failed to load high score: {}", e));
        }
    }

    spawn_ip_lookup(shared_state.clone(), &settings.ip_lookup);

    let mut autopilot = settings.autopilot;
    loop {
        let exit = run_snake_game(
            &shared_state,
            &mut command_rx,
            &settings,
            autopilot,
            &high_score_store,
        )
        .await;

        match exit {
            RunnerExit::Finished(next_autopilot) => autopilot = next_autopilot,
            RunnerExit::Shutdown => break,
        }
    }

    log!("Background task stopped");
}
