//! Application-level modules for the quiz GUI.
//!
//! This module contains the centralized state, the coordinator handling
//! store-facing workflows, and the theme application glue.

mod app_state;
mod session_coordinator;
mod theme_coordinator;

pub use app_state::{AppState, Screen};
pub use session_coordinator::SessionCoordinator;
pub use theme_coordinator::ThemeCoordinator;
