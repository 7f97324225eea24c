//! Login and signup form rendering.
//!
//! The forms only edit the shared form buffers; credential checks happen
//! in the coordinator when a submit interaction comes back.

use crate::app::{AppState, Screen};
use crate::ui::ScreenInteraction;
use egui::{Color32, RichText};

/// Renders the login form.
pub fn render_login(ui: &mut egui::Ui, state: &mut AppState) -> Option<ScreenInteraction> {
    let mut interaction = None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Log in").size(28.0).strong());
        ui.add_space(20.0);

        ui.label("Username");
        ui.add(egui::TextEdit::singleline(&mut state.form.username).desired_width(220.0));
        ui.label("Password");
        ui.add(
            egui::TextEdit::singleline(&mut state.form.password)
                .password(true)
                .desired_width(220.0),
        );

        ui.add_space(12.0);
        let submit = ui.button(RichText::new("Log in").size(16.0));
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submit.clicked() || enter {
            interaction = Some(ScreenInteraction::SubmitLogin);
        }

        if let Some(error) = &state.form.error {
            ui.add_space(8.0);
            ui.colored_label(Color32::RED, error);
        }

        ui.add_space(16.0);
        if ui.link("No account yet? Sign up").clicked() {
            state.go_to(Screen::Signup);
        }
        if ui.link("Back").clicked() {
            state.go_to(Screen::Start);
        }
    });

    interaction
}

/// Renders the signup form.
pub fn render_signup(ui: &mut egui::Ui, state: &mut AppState) -> Option<ScreenInteraction> {
    let mut interaction = None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Create account").size(28.0).strong());
        ui.add_space(20.0);

        ui.label("Username");
        ui.add(egui::TextEdit::singleline(&mut state.form.username).desired_width(220.0));
        ui.label("Password");
        ui.add(
            egui::TextEdit::singleline(&mut state.form.password)
                .password(true)
                .desired_width(220.0),
        );
        ui.label("Confirm password");
        ui.add(
            egui::TextEdit::singleline(&mut state.form.password_confirm)
                .password(true)
                .desired_width(220.0),
        );

        ui.add_space(12.0);
        if ui.button(RichText::new("Sign up").size(16.0)).clicked() {
            interaction = Some(ScreenInteraction::SubmitSignup);
        }

        if let Some(error) = &state.form.error {
            ui.add_space(8.0);
            ui.colored_label(Color32::RED, error);
        }

        ui.add_space(16.0);
        if ui.link("Already registered? Log in").clicked() {
            state.go_to(Screen::Login);
        }
        if ui.link("Back").clicked() {
            state.go_to(Screen::Start);
        }
    });

    interaction
}
