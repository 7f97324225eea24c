//! UI screen rendering subsystem.
//!
//! This module contains all screen rendering logic for the quiz GUI:
//! - Header (title, coin balance, shop/settings navigation)
//! - Start screen (quiz entry point)
//! - Auth screens (login and signup forms)
//! - Quiz screen (question card with answer reveal and skip)
//! - Score and end screens
//! - Shop screen (theme purchase and activation)
//! - Settings screen (logout, account deletion)
//! - Screen manager (screen orchestration and dispatch)

pub mod auth_screens;
pub mod header;
pub mod quiz_screen;
pub mod score_screen;
pub mod screen_manager;
pub mod settings_screen;
pub mod shop_screen;
pub mod start_screen;

pub use screen_manager::{ScreenInteraction, ScreenManager};
