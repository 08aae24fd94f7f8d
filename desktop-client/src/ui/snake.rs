use common::games::snake::{
    AutopilotKind, DeathReason, GameEndReason, GameOverSummary, SnakeCommand,
    SnakeSnapshot,
};
use common::high_score::HighScoreRecord;
use eframe::egui;

use crate::state::{ClientCommand, CommandSender, SharedState};

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1B, 0x1F, 0x24);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x8B, 0xE0, 0x8E);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xE5, 0x39, 0x35);

pub struct SnakePanel {
    autopilot_enabled: bool,
    autopilot_kind: AutopilotKind,
}

impl SnakePanel {
    pub fn new(autopilot: Option<AutopilotKind>) -> Self {
        Self {
            autopilot_enabled: autopilot.is_some(),
            autopilot_kind: autopilot.unwrap_or(AutopilotKind::Pathfinding),
        }
    }

    fn autopilot(&self) -> Option<AutopilotKind> {
        self.autopilot_enabled.then_some(self.autopilot_kind)
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        shared_state: &SharedState,
        command_sender: &CommandSender,
    ) {
        ui.heading("Snake");
        self.render_controls(ui, command_sender);
        ui.add_space(6.0);

        let Some(snapshot) = shared_state.get_snake_snapshot() else {
            ui.spinner();
            return;
        };

        render_scores(ui, &snapshot, shared_state.get_high_score().as_ref());
        render_board(ui, &snapshot);

        if let Some(summary) = shared_state.get_last_game_over() {
            ui.add_space(4.0);
            ui.label(game_over_text(&summary));
        }

        let runs = shared_state.get_recent_runs();
        if !runs.is_empty() {
            egui::CollapsingHeader::new("Recent runs").show(ui, |ui| {
                for run in runs {
                    ui.label(format!("{} points in {} ticks ({})", run.score, run.ticks, end_reason_text(run.reason)));
                }
            });
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, command_sender: &CommandSender) {
        let before = self.autopilot();

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.autopilot_enabled, "Autopilot");
            egui::ComboBox::from_id_salt("autopilot_kind")
                .selected_text(autopilot_label(self.autopilot_kind))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.autopilot_kind, AutopilotKind::Greedy, autopilot_label(AutopilotKind::Greedy));
                    ui.selectable_value(&mut self.autopilot_kind, AutopilotKind::Pathfinding, autopilot_label(AutopilotKind::Pathfinding));
                });
            ui.separator();
            if ui.button("Restart").clicked() {
                command_sender.send(ClientCommand::Snake(SnakeCommand::Stop));
            }
        });
        ui.weak("Arrow keys steer the snake.");

        let after = self.autopilot();
        if before != after {
            command_sender.send(ClientCommand::Snake(SnakeCommand::SetAutopilot(after)));
        }
    }
}

fn render_scores(ui: &mut egui::Ui, snapshot: &SnakeSnapshot, high_score: Option<&HighScoreRecord>) {
    ui.horizontal(|ui| {
        ui.strong(format!("Score: {}", snapshot.score));
        ui.separator();
        match high_score {
            Some(record) => ui.label(format!("High score: {} by {}", record.score, record.player)),
            None => ui.label("High score: none yet"),
        };
        ui.separator();
        ui.weak(format!("{} ms/tick", snapshot.tick_interval.as_millis()));
    });
}

fn render_board(ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
    let board = snapshot.board;
    let cell = board.cell_size as f32;
    let (response, painter) = ui.allocate_painter(
        egui::vec2(board.width_px() as f32, board.height_px() as f32),
        egui::Sense::hover(),
    );
    let origin = response.rect.min;
    painter.rect_filled(response.rect, 0.0, BACKGROUND_COLOR);

    let cell_rect = |x: i64, y: i64| {
        egui::Rect::from_min_size(
            origin + egui::vec2(x as f32, y as f32),
            egui::vec2(cell, cell),
        )
    };

    if let Some(food) = snapshot.food {
        let (x, y) = board.to_pixels(food);
        let rect = cell_rect(x, y);
        painter.circle_filled(rect.center(), cell / 2.0, FOOD_COLOR);
    }

    for (index, segment) in snapshot.body.iter().enumerate().rev() {
        let (x, y) = board.to_pixels(*segment);
        let color = if index == 0 { HEAD_COLOR } else { BODY_COLOR };
        painter.rect_filled(cell_rect(x, y).shrink(0.5), 1.0, color);
    }
}

fn autopilot_label(kind: AutopilotKind) -> &'static str {
    match kind {
        AutopilotKind::Greedy => "Greedy",
        AutopilotKind::Pathfinding => "A*",
    }
}

fn end_reason_text(reason: GameEndReason) -> &'static str {
    match reason {
        GameEndReason::Died(DeathReason::WallCollision) => "hit the wall",
        GameEndReason::Died(DeathReason::SelfCollision) => "bit itself",
        GameEndReason::BoardFilled => "filled the board",
        GameEndReason::Stopped => "restarted",
    }
}

fn game_over_text(summary: &GameOverSummary) -> String {
    match summary.reason {
        GameEndReason::Died(_) => format!("Snek ded :( Score: {}", summary.score),
        GameEndReason::BoardFilled => format!("Board filled! Score: {}", summary.score),
        GameEndReason::Stopped => format!("Restarted at score {}", summary.score),
    }
}
