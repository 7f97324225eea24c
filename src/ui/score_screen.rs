//! Score and end screen rendering.

use crate::app::{AppState, Screen};
use egui::RichText;

/// Renders the score summary shown right after the last question.
pub fn render_score(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("Quiz finished!").size(30.0).strong());
        ui.add_space(20.0);
        ui.label(
            RichText::new(format!(
                "You answered {} of {} questions correctly",
                state.quiz.score(),
                state.quiz.total_questions()
            ))
            .size(18.0),
        );
        ui.add_space(30.0);
        if ui.button(RichText::new("Continue ➡").size(16.0)).clicked() {
            state.go_to(Screen::End);
        }
    });
}

/// Renders the end screen with restart and home options.
pub fn render_end(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("Thanks for playing!").size(30.0).strong());
        ui.add_space(30.0);

        if ui
            .button(RichText::new("🔄 Play again").size(16.0))
            .clicked()
        {
            state.quiz.start(rquiz::shuffled_questions());
            state.go_to(Screen::Quiz);
        }
        ui.add_space(8.0);
        if ui.button(RichText::new("🏠 Home").size(16.0)).clicked() {
            state.go_to(Screen::Start);
        }
    });
}
