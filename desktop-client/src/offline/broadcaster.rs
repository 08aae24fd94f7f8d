use common::games::snake::{GameOverSummary, SnakeBroadcaster, SnakeSnapshot};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl SnakeBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
        self.shared_state.set_snake_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        self.shared_state.record_game_over(summary);
    }
}
