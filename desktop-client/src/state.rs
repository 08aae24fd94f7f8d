use common::games::snake::{GameOverSummary, SnakeCommand, SnakeSnapshot};
use common::high_score::HighScoreRecord;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

pub const RECENT_RUNS_BUFFER_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Snake(SnakeCommand),
    RefreshIp,
    Shutdown,
}

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ClientCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: ClientCommand) {
        let _ = self.tx.send(command);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicIp {
    Loading,
    Disabled,
    Resolved(String),
}

/// Everything the background runtime publishes for the UI thread.
#[derive(Clone)]
pub struct SharedState {
    snake: Arc<Mutex<Option<SnakeSnapshot>>>,
    last_game_over: Arc<Mutex<Option<GameOverSummary>>>,
    recent_runs: Arc<Mutex<AllocRingBuffer<GameOverSummary>>>,
    high_score: Arc<Mutex<Option<HighScoreRecord>>>,
    public_ip: Arc<Mutex<PublicIp>>,
    error: Arc<Mutex<Option<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snake: Arc::new(Mutex::new(None)),
            last_game_over: Arc::new(Mutex::new(None)),
            recent_runs: Arc::new(Mutex::new(AllocRingBuffer::new(RECENT_RUNS_BUFFER_SIZE))),
            high_score: Arc::new(Mutex::new(None)),
            public_ip: Arc::new(Mutex::new(PublicIp::Loading)),
            error: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn set_snake_snapshot(&self, snapshot: SnakeSnapshot) {
        *self.snake.lock().unwrap() = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snake_snapshot(&self) -> Option<SnakeSnapshot> {
        self.snake.lock().unwrap().clone()
    }

    pub fn record_game_over(&self, summary: GameOverSummary) {
        *self.last_game_over.lock().unwrap() = Some(summary);
        self.recent_runs.lock().unwrap().enqueue(summary);
        self.request_repaint();
    }

    pub fn get_last_game_over(&self) -> Option<GameOverSummary> {
        *self.last_game_over.lock().unwrap()
    }

    /// Newest first.
    pub fn get_recent_runs(&self) -> Vec<GameOverSummary> {
        let mut runs: Vec<GameOverSummary> = self.recent_runs.lock().unwrap().iter().copied().collect();
        runs.reverse();
        runs
    }

    pub fn set_high_score(&self, record: Option<HighScoreRecord>) {
        *self.high_score.lock().unwrap() = record;
        self.request_repaint();
    }

    pub fn get_high_score(&self) -> Option<HighScoreRecord> {
        self.high_score.lock().unwrap().clone()
    }

    pub fn set_public_ip(&self, ip: PublicIp) {
        *self.public_ip.lock().unwrap() = ip;
        self.request_repaint();
    }

    pub fn get_public_ip(&self) -> PublicIp {
        self.public_ip.lock().unwrap().clone()
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::GameEndReason;

    fn summary(score: u32) -> GameOverSummary {
        GameOverSummary {
            score,
            ticks: score as u64 * 10,
            reason: GameEndReason::Stopped,
        }
    }

    #[test]
    fn test_recent_runs_keep_newest_first_and_drop_oldest() {
        let state = SharedState::new();

        for score in 0..(RECENT_RUNS_BUFFER_SIZE as u32 + 3) {
            state.record_game_over(summary(score));
        }

        let runs = state.get_recent_runs();
        assert_eq!(runs.len(), RECENT_RUNS_BUFFER_SIZE);
        assert_eq!(runs[0].score, RECENT_RUNS_BUFFER_SIZE as u32 + 2);
        assert_eq!(runs.last().unwrap().score, 3);
        assert_eq!(state.get_last_game_over(), Some(summary(RECENT_RUNS_BUFFER_SIZE as u32 + 2)));
    }

    #[test]
    fn test_public_ip_starts_loading() {
        let state = SharedState::new();

        assert_eq!(state.get_public_ip(), PublicIp::Loading);
        state.set_public_ip(PublicIp::Resolved("203.0.113.7".to_string()));
        assert_eq!(state.get_public_ip(), PublicIp::Resolved("203.0.113.7".to_string()));
    }
}
