use common::log;
use eframe::egui;

use crate::config::ScriptSnippet;

const COPIED_MESSAGE: &str = "Script copied to clipboard!";

pub struct ScriptsPanel {
    scripts: Vec<ScriptSnippet>,
    copied_notice: bool,
}

impl ScriptsPanel {
    pub fn new(scripts: Vec<ScriptSnippet>) -> Self {
        Self {
            scripts,
            copied_notice: false,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Scripts");
        ui.add_space(6.0);

        if self.scripts.is_empty() {
            ui.weak("No scripts configured");
        }

        for script in &self.scripts {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&script.name);
                    if ui.button("📋 Copy").clicked() {
                        ctx.copy_text(script.content.clone());
                        log!("Copied script '{}'", script.name);
                        self.copied_notice = true;
                    }
                });
                ui.code(&script.content);
            });
            ui.add_space(4.0);
        }

        if self.copied_notice {
            egui::Window::new("Copied")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(COPIED_MESSAGE);
                    if ui.button("OK").clicked() {
                        self.copied_notice = false;
                    }
                });
        }
    }
}
