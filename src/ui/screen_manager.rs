//! Screen orchestration and dispatch.
//!
//! Renders the header plus whichever screen is active and funnels
//! store-facing interactions back to the application coordinator.

use crate::app::{AppState, Screen};
use crate::ui::{
    auth_screens, header, quiz_screen, score_screen, settings_screen, shop_screen,
    start_screen,
};
use rquiz::{OwnershipStore, SessionStore};

/// Result of screen interactions that must be handled by the coordinator.
///
/// Pure navigation mutates [`AppState`] inside the screens directly; only
/// operations touching the stores surface here.
pub enum ScreenInteraction {
    /// Submit the login form (credentials are in the form state)
    SubmitLogin,
    /// Submit the signup form
    SubmitSignup,
    /// The current question was answered correctly
    CorrectAnswer { reward: i64 },
    /// Buy a theme through the checked payment path
    PurchaseTheme(String),
    /// Equip an owned theme
    EquipTheme(String),
    /// Force the default theme
    ResetTheme,
    /// End the session
    Logout,
    /// Delete the current account (password is in the form state)
    DeleteAccount,
}

/// Manages the layout and rendering of all screens.
pub struct ScreenManager;

impl ScreenManager {
    /// Renders the whole window for this frame.
    ///
    /// This is the main entry point for rendering, called from the
    /// eframe::App::update() implementation.
    pub fn render_current(
        ctx: &egui::Context,
        state: &mut AppState,
        session: &SessionStore,
        ownership: &OwnershipStore,
    ) -> Option<ScreenInteraction> {
        let mut interaction: Option<ScreenInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render_header(ui, state, session);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            interaction = match state.screen {
                Screen::Start => {
                    start_screen::render_start(ui, state, session);
                    None
                }
                Screen::Login => auth_screens::render_login(ui, state),
                Screen::Signup => auth_screens::render_signup(ui, state),
                Screen::Quiz => quiz_screen::render_quiz(ui, state),
                Screen::Score => {
                    score_screen::render_score(ui, state);
                    None
                }
                Screen::End => {
                    score_screen::render_end(ui, state);
                    None
                }
                Screen::Shop => shop_screen::render_shop(ui, state, session, ownership),
                Screen::Settings => settings_screen::render_settings(ui, state, session),
            };
        });

        interaction
    }
}
