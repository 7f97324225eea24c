//! Question card rendering.
//!
//! Shows the current question with four answer buttons. A wrong pick is
//! marked red but leaves the question open; the first correct pick scores,
//! reveals the answer and awards coins. Skipping reveals without scoring.

use crate::app::{AppState, Screen};
use crate::state::AnswerOutcome;
use crate::ui::ScreenInteraction;
use egui::{Color32, RichText};
use rquiz::Difficulty;

const CORRECT_COLOR: Color32 = Color32::from_rgb(46, 204, 113);
const WRONG_COLOR: Color32 = Color32::from_rgb(231, 76, 60);

/// Renders the quiz screen for the current question.
pub fn render_quiz(ui: &mut egui::Ui, state: &mut AppState) -> Option<ScreenInteraction> {
    let question = match state.quiz.current_question() {
        Some(question) => question.clone(),
        None => {
            // No quiz running (e.g. app restarted mid-run); bail out.
            state.go_to(Screen::Start);
            return None;
        }
    };

    let mut interaction = None;

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label(format!(
            "Question {} / {}",
            state.quiz.question_number(),
            state.quiz.total_questions()
        ));
        ui.label(
            RichText::new(format!(
                "{} · 🪙 {}",
                difficulty_label(question.difficulty),
                question.difficulty.coin_reward()
            ))
            .small(),
        );
        ui.add_space(16.0);
        ui.label(RichText::new(question.prompt).size(22.0).strong());
        ui.add_space(24.0);

        for (index, answer) in question.answers.iter().enumerate() {
            let mut button = egui::Button::new(RichText::new(*answer).size(16.0))
                .min_size(egui::vec2(320.0, 40.0));

            if state.quiz.is_resolved() {
                // Reveal: correct answer green, everything else red
                button = button.fill(if question.is_correct(index) {
                    CORRECT_COLOR
                } else {
                    WRONG_COLOR
                });
            } else if state.quiz.selected_answer() == Some(index) {
                // The wrong pick the player just made
                button = button.fill(WRONG_COLOR);
            }

            let clicked = ui.add(button).clicked();
            if clicked && !state.quiz.is_resolved() {
                if let AnswerOutcome::Correct { reward } = state.quiz.answer(index) {
                    interaction = Some(ScreenInteraction::CorrectAnswer { reward });
                }
            }
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        if state.quiz.is_resolved() {
            if ui.button(RichText::new("Next ➡").size(16.0)).clicked()
                && !state.quiz.advance()
            {
                state.go_to(Screen::Score);
            }
        } else if ui.button("Skip").clicked() {
            state.quiz.skip();
        }

        ui.add_space(16.0);
        if ui.link("🏠 Back to start").clicked() {
            state.go_to(Screen::Start);
        }
    });

    interaction
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}
