use common::games::snake::SnakeCommand;
use common::log;
use common::tools::consent::{ConsentState, ConsentView};
use eframe::egui;

use crate::config::{Config, HomepageConfigManager};
use crate::state::{ClientCommand, CommandSender, PublicIp, SharedState};

use super::banner::BannerPanel;
use super::consent::{render_consent_prompt, render_error_page};
use super::converter::ConverterPanel;
use super::pressed_direction;
use super::scripts::ScriptsPanel;
use super::snake::SnakePanel;
use super::subnet_quiz::SubnetQuizPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Snake,
    Converter,
    SubnetQuiz,
    Scripts,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Snake, Tab::Converter, Tab::SubnetQuiz, Tab::Scripts];

    fn title(&self) -> &'static str {
        match self {
            Tab::Snake => "🐍 Snake",
            Tab::Converter => "🔢 Converter",
            Tab::SubnetQuiz => "🌐 Subnet quiz",
            Tab::Scripts => "📜 Scripts",
        }
    }
}

pub struct HomepageApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: HomepageConfigManager,
    config_path: String,
    consent: ConsentState,
    selected_tab: Tab,
    scroll_to_top: bool,
    banner: BannerPanel,
    snake: SnakePanel,
    converter: ConverterPanel,
    subnet_quiz: SubnetQuizPanel,
    scripts: ScriptsPanel,
}

impl HomepageApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: HomepageConfigManager,
        config_path: String,
        config: Config,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            config_manager,
            config_path,
            consent: config.consent,
            selected_tab: Tab::Snake,
            scroll_to_top: false,
            banner: BannerPanel::new(config.access.clone()),
            snake: SnakePanel::new(config.snake.autopilot),
            converter: ConverterPanel::new(),
            subnet_quiz: SubnetQuizPanel::new(),
            scripts: ScriptsPanel::new(config.scripts.clone()),
        }
    }

    fn set_consent(&mut self, consent: ConsentState) {
        self.consent = consent;
        log!("Cookie consent: {:?}", consent);
        if let Err(e) = self.config_manager.update_config(|config| config.consent = consent) {
            log!("Failed to save consent: {}", e);
            self.shared_state.set_error(format!("Failed to save consent: {}", e));
        }
    }

    fn handle_arrow_keys(&mut self, ctx: &egui::Context) {
        let Some(direction) = pressed_direction(ctx) else {
            return;
        };

        // The snake owns the arrow keys while its tab is open.
        if self.selected_tab == Tab::Snake {
            self.command_sender
                .send(ClientCommand::Snake(SnakeCommand::Turn(direction)));
        } else {
            self.banner.nudge_title(direction);
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("banner").show(ctx, |ui| {
            ui.add_space(4.0);
            self.banner.render(ui, ctx);

            ui.horizontal(|ui| {
                ui.label("Your IP:");
                match self.shared_state.get_public_ip() {
                    PublicIp::Loading => {
                        ui.spinner();
                    }
                    PublicIp::Disabled => {
                        ui.weak("lookup disabled");
                    }
                    PublicIp::Resolved(text) => {
                        ui.monospace(text);
                    }
                }
                if ui.small_button("⟳").on_hover_text("Look up again").clicked() {
                    self.command_sender.send(ClientCommand::RefreshIp);
                }
            });

            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.selected_tab, tab, tab.title());
                }
            });
            ui.add_space(4.0);
        });
    }

    fn render_error(&mut self, ctx: &egui::Context) {
        let Some(error) = self.shared_state.get_error() else {
            return;
        };

        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(&error);
                if ui.button("OK").clicked() {
                    self.shared_state.clear_error();
                }
            });
    }

    fn render_teleport_button(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("teleport_to_top"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -40.0))
            .show(ctx, |ui| {
                if ui.button("🌀").on_hover_text("🌀 Teleport to top").clicked() {
                    log!("🌀 teleporting to top");
                    self.scroll_to_top = true;
                }
            });
    }
}

impl eframe::App for HomepageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if self.consent.view() == ConsentView::ErrorPage {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_error_page(ui, &self.config_path);
            });
            return;
        }

        self.handle_arrow_keys(ctx);
        self.render_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll_area = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if self.scroll_to_top {
                scroll_area = scroll_area.vertical_scroll_offset(0.0);
                self.scroll_to_top = false;
            }

            scroll_area.show(ui, |ui| match self.selected_tab {
                Tab::Snake => self.snake.render(ui, &self.shared_state, &self.command_sender),
                Tab::Converter => self.converter.render(ui),
                Tab::SubnetQuiz => self.subnet_quiz.render(ui, ctx),
                Tab::Scripts => self.scripts.render(ui, ctx),
            });
        });

        self.render_teleport_button(ctx);
        self.render_error(ctx);

        if self.consent.view() == ConsentView::Prompt
            && let Some(choice) = render_consent_prompt(ctx)
        {
            self.set_consent(choice);
        }
    }
}
