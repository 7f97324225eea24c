//! Header panel rendering.
//!
//! Shows the app title, the logged-in user with their coin balance, and
//! navigation to the shop and settings screens.

use crate::app::{AppState, Screen};
use egui::RichText;
use rquiz::SessionStore;

/// Renders the header bar with navigation and the coin counter.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState, session: &SessionStore) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("❓ Quiz").heading().strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if session.is_logged_in() {
                if ui.button("⚙ Settings").clicked() {
                    state.go_to(Screen::Settings);
                }
                if ui.button("🛒 Shop").clicked() {
                    state.go_to(Screen::Shop);
                }
                ui.separator();
                ui.label(RichText::new(format!("🪙 {}", session.coins())).strong());
                if let Some(username) = session.current_username() {
                    ui.label(format!("👤 {}", username));
                }
            } else {
                if ui.button("Log in").clicked() {
                    state.go_to(Screen::Login);
                }
                if ui.button("Sign up").clicked() {
                    state.go_to(Screen::Signup);
                }
            }
        });
    });

    if let Some(notice) = &state.notice {
        ui.label(RichText::new(notice).italics());
    }
}
