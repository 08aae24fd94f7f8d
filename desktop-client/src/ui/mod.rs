mod app;
mod banner;
mod consent;
mod converter;
mod scripts;
mod snake;
mod subnet_quiz;

pub use app::HomepageApp;

use common::games::snake::Direction;
use eframe::egui;

/// Arrow key pressed this frame, unless a text field has focus.
fn pressed_direction(ctx: &egui::Context) -> Option<Direction> {
    if ctx.wants_keyboard_input() {
        return None;
    }

    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowUp) {
            Some(Direction::Up)
        } else if i.key_pressed(egui::Key::ArrowDown) {
            Some(Direction::Down)
        } else if i.key_pressed(egui::Key::ArrowLeft) {
            Some(Direction::Left)
        } else if i.key_pressed(egui::Key::ArrowRight) {
            Some(Direction::Right)
        } else {
            None
        }
    })
}
