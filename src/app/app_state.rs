//! Centralized UI state for the quiz application.
//!
//! Composes focused state components (quiz progress, form buffers) with
//! top-level navigation. The session and ownership stores are deliberately
//! not part of this struct: they are injected services owned by the app
//! shell, while `AppState` stays plain data that every screen can borrow
//! mutably without fighting the borrow checker.

use crate::state::{FormState, QuizState};

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Login,
    Signup,
    Quiz,
    Score,
    End,
    Shop,
    Settings,
}

/// Main UI state composed of focused state components.
pub struct AppState {
    /// Currently visible screen
    pub screen: Screen,

    /// Quiz run progress
    pub quiz: QuizState,

    /// Login/signup/settings input buffers
    pub form: FormState,

    /// Transient notice shown in the header (purchase results, errors)
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the initial state: start screen, no quiz running.
    pub fn new() -> Self {
        Self {
            screen: Screen::Start,
            quiz: QuizState::new(),
            form: FormState::new(),
            notice: None,
        }
    }

    /// Switches screens, clearing form buffers and the notice.
    pub fn go_to(&mut self, screen: Screen) {
        self.screen = screen;
        self.form.clear();
        self.notice = None;
    }
}
