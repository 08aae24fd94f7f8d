use common::games::snake::Direction;
use common::log;
use common::tools::banner::{AccessGate, AccessResult, LinkLabel};
use common::tools::title::TitleOffset;
use eframe::egui;

const TITLE_TEXT: &str = "Welcome to my homepage";
const TITLE_HEIGHT: f32 = 48.0;

pub struct BannerPanel {
    gate: AccessGate,
    label: LinkLabel,
    title_offset: TitleOffset,
    code_prompt_open: bool,
    code_input: String,
    denied: bool,
}

impl BannerPanel {
    pub fn new(gate: AccessGate) -> Self {
        Self {
            gate,
            label: LinkLabel::default(),
            title_offset: TitleOffset::default(),
            code_prompt_open: false,
            code_input: String::new(),
            denied: false,
        }
    }

    pub fn nudge_title(&mut self, direction: Direction) {
        self.title_offset.nudge(direction);
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            if ui.link(self.label.text()).clicked() {
                self.label.toggle();
            }
            ui.separator();
            if ui.button("🔒 Enter code").clicked() {
                self.code_prompt_open = true;
                self.code_input.clear();
            }
            if self.title_offset != TitleOffset::default() && ui.small_button("Reset title").clicked() {
                self.title_offset.reset();
            }
        });

        self.render_title(ui);
        self.render_code_prompt(ctx);
        self.render_denied(ctx);
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width(), TITLE_HEIGHT),
            egui::Sense::hover(),
        );
        let position = response.rect.center()
            + egui::vec2(self.title_offset.left, self.title_offset.top);
        painter.text(
            position,
            egui::Align2::CENTER_CENTER,
            TITLE_TEXT,
            egui::FontId::proportional(28.0),
            ui.visuals().strong_text_color(),
        );
    }

    fn render_code_prompt(&mut self, ctx: &egui::Context) {
        if !self.code_prompt_open {
            return;
        }

        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new("Access")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Enter code: XXX");
                let response = ui.add(egui::TextEdit::singleline(&mut self.code_input).password(true));
                response.request_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            self.code_prompt_open = false;
            match self.gate.check(&self.code_input) {
                AccessResult::Granted { destination } => {
                    log!("Access code accepted, opening {}", destination);
                    ctx.open_url(egui::OpenUrl::new_tab(destination));
                }
                AccessResult::Denied => {
                    log!("Access code rejected");
                    self.denied = true;
                }
            }
            self.code_input.clear();
        } else if cancelled {
            self.code_prompt_open = false;
            self.code_input.clear();
        }
    }

    fn render_denied(&mut self, ctx: &egui::Context) {
        if !self.denied {
            return;
        }

        egui::Window::new("Access denied")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(AccessGate::DENIED_MESSAGE);
                if ui.button("OK").clicked() {
                    self.denied = false;
                }
            });
    }
}
