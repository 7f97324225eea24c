//! Start screen rendering.

use crate::app::{AppState, Screen};
use egui::RichText;
use rquiz::SessionStore;

/// Renders the start screen with the quiz entry point.
pub fn render_start(ui: &mut egui::Ui, state: &mut AppState, session: &SessionStore) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("Quiz").size(40.0).strong());
        ui.label("Answer questions, earn coins, unlock themes");
        ui.add_space(30.0);

        let start = egui::Button::new(RichText::new("▶ Start Quiz").size(20.0))
            .min_size(egui::vec2(220.0, 48.0));
        if ui.add(start).clicked() {
            state.quiz.start(rquiz::shuffled_questions());
            state.go_to(Screen::Quiz);
        }

        if !session.is_logged_in() {
            ui.add_space(16.0);
            ui.label("Log in to keep your coins and themes");
        }
    });
}
