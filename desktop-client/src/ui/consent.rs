use common::tools::consent::ConsentState;
use eframe::egui;

/// Shows the cookie prompt; returns the visitor's choice once a button is clicked.
pub fn render_consent_prompt(ctx: &egui::Context) -> Option<ConsentState> {
    let mut choice = None;

    egui::Window::new("Cookies")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -20.0))
        .show(ctx, |ui| {
            ui.label(ConsentState::PROMPT_TEXT);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Accept").clicked() {
                    choice = Some(ConsentState::Accepted);
                }
                if ui.button("Decline").clicked() {
                    choice = Some(ConsentState::Declined);
                }
            });
        });

    choice
}

pub fn render_error_page(ui: &mut egui::Ui, config_path: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading("Cookies declined");
        ui.add_space(10.0);
        ui.label("This site cannot be used without cookies.");
        ui.add_space(10.0);
        ui.weak(format!(
            "Set `consent: Undecided` in {} to be asked again.",
            config_path
        ));
    });
}
