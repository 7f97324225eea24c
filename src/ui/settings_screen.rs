//! Settings screen rendering: logout and account deletion.

use crate::app::{AppState, Screen};
use crate::ui::ScreenInteraction;
use egui::{Color32, RichText};
use rquiz::SessionStore;

/// Renders the settings screen.
pub fn render_settings(
    ui: &mut egui::Ui,
    state: &mut AppState,
    session: &SessionStore,
) -> Option<ScreenInteraction> {
    let mut interaction = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.label(RichText::new("⚙ Settings").size(28.0).strong());
        ui.add_space(20.0);

        match session.current_username() {
            Some(username) => {
                ui.label(format!("Logged in as {}", username));
                ui.add_space(12.0);
                if ui.button(RichText::new("Log out").size(16.0)).clicked() {
                    interaction = Some(ScreenInteraction::Logout);
                }

                ui.add_space(8.0);
                if ui.button("Reset theme to default").clicked() {
                    interaction = Some(ScreenInteraction::ResetTheme);
                }

                ui.add_space(30.0);
                ui.separator();
                ui.add_space(10.0);
                ui.label(RichText::new("Delete account").strong());
                ui.label(
                    RichText::new("Removes your account, coins and themes permanently")
                        .small(),
                );
                ui.add_space(8.0);
                ui.label("Confirm password");
                ui.add(
                    egui::TextEdit::singleline(&mut state.form.password)
                        .password(true)
                        .desired_width(220.0),
                );
                ui.add_space(8.0);
                let delete = egui::Button::new(RichText::new("🗑 Delete account"))
                    .fill(Color32::from_rgb(120, 30, 30));
                if ui.add(delete).clicked() {
                    interaction = Some(ScreenInteraction::DeleteAccount);
                }

                if let Some(error) = &state.form.error {
                    ui.add_space(8.0);
                    ui.colored_label(Color32::RED, error);
                }
            }
            None => {
                ui.label("You are not logged in");
                ui.add_space(12.0);
                if ui.button("Log in").clicked() {
                    state.go_to(Screen::Login);
                }
            }
        }

        ui.add_space(24.0);
        if ui.link("← Back").clicked() {
            state.go_to(Screen::Start);
        }
    });

    interaction
}
