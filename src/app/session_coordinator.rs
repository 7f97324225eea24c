//! Store-facing workflow coordination.
//!
//! Screens render and collect input; everything that touches the session
//! or ownership stores funnels through here as a [`ScreenInteraction`].
//! This keeps the screens free of store wiring and puts every
//! login/purchase/deletion workflow in one place.

use crate::app::{AppState, Screen};
use crate::ui::ScreenInteraction;
use rquiz::{OwnershipStore, SessionStore, ShopError};
use std::cell::RefCell;
use std::rc::Rc;

/// Coordinates interactions between the UI and the stores.
pub struct SessionCoordinator;

impl SessionCoordinator {
    /// Applies one screen interaction to the stores and navigation state.
    pub fn handle_interaction(
        state: &mut AppState,
        session: &mut SessionStore,
        ownership: &Rc<RefCell<OwnershipStore>>,
        interaction: ScreenInteraction,
    ) {
        match interaction {
            ScreenInteraction::SubmitLogin => Self::submit_login(state, session),
            ScreenInteraction::SubmitSignup => Self::submit_signup(state, session),
            ScreenInteraction::CorrectAnswer { reward } => {
                // The reward already includes the difficulty multiplier;
                // the store just credits it.
                session.add_coins(reward);
            }
            ScreenInteraction::PurchaseTheme(theme_id) => {
                Self::purchase_theme(state, session, ownership, &theme_id);
            }
            ScreenInteraction::EquipTheme(theme_id) => {
                ownership.borrow_mut().equip(&theme_id);
            }
            ScreenInteraction::ResetTheme => {
                ownership.borrow_mut().reset_active();
            }
            ScreenInteraction::Logout => {
                // Equips already persisted, but flush anyway before the
                // session (and with it the active username) goes away.
                ownership.borrow_mut().flush();
                session.logout();
                state.go_to(Screen::Start);
            }
            ScreenInteraction::DeleteAccount => Self::delete_account(state, session),
        }
    }

    fn submit_login(state: &mut AppState, session: &mut SessionStore) {
        let username = state.form.username.trim().to_string();
        match session.login(&username, &state.form.password) {
            Ok(()) => {
                state.go_to(Screen::Start);
                state.notice = Some(format!("Welcome back, {}!", username));
            }
            Err(e) => state.form.error = Some(e.to_string()),
        }
    }

    fn submit_signup(state: &mut AppState, session: &mut SessionStore) {
        if state.form.password != state.form.password_confirm {
            state.form.error = Some("passwords do not match".to_string());
            return;
        }
        if state.form.password.is_empty() {
            state.form.error = Some("password must not be empty".to_string());
            return;
        }

        let username = state.form.username.trim().to_string();
        match session.signup(&username, &state.form.password) {
            Ok(()) => {
                state.go_to(Screen::Login);
                state.notice = Some("Account created, please log in".to_string());
            }
            Err(e) => state.form.error = Some(e.to_string()),
        }
    }

    fn purchase_theme(
        state: &mut AppState,
        session: &mut SessionStore,
        ownership: &Rc<RefCell<OwnershipStore>>,
        theme_id: &str,
    ) {
        let result = ownership
            .borrow_mut()
            .purchase_with_payment(session, theme_id);
        state.notice = Some(match result {
            Ok(()) => format!("Theme {} purchased!", theme_id),
            Err(ShopError::NotLoggedIn) => "Log in to buy themes".to_string(),
            Err(e) => e.to_string(),
        });
    }

    fn delete_account(state: &mut AppState, session: &mut SessionStore) {
        match session.delete_account(&state.form.password) {
            Ok(()) => {
                state.go_to(Screen::Start);
                state.notice = Some("Account deleted".to_string());
            }
            Err(e) => state.form.error = Some(e.to_string()),
        }
    }
}
