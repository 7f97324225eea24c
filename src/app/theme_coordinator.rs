//! Theme application glue.
//!
//! The ownership store tracks which theme is equipped; this coordinator
//! turns that into egui visuals every frame. Because it always reads the
//! current value, logout and account deletion reset the displayed theme
//! on the very next frame without any extra wiring.

use rquiz::{OwnershipStore, ThemeCatalog};

/// Applies the equipped theme to the egui context.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the active theme's palette. Called every frame.
    pub fn apply_current_theme(ctx: &egui::Context, ownership: &OwnershipStore) {
        let catalog = ThemeCatalog::global();
        let theme = catalog
            .get(ownership.active())
            .unwrap_or_else(|| catalog.default_theme());

        let mut visuals = egui::Visuals::dark();
        catalog.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
