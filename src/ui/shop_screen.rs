//! Theme shop rendering.
//!
//! Lists every purchasable theme with its price and a buy/activate button.
//! Purchases go through the checked payment path in the coordinator; the
//! buy button is disabled up front when the balance is too low, but the
//! store re-validates regardless.

use crate::app::{AppState, Screen};
use crate::ui::ScreenInteraction;
use egui::RichText;
use rquiz::{OwnershipStore, SessionStore, ThemeCatalog, DEFAULT_THEME_ID};

/// Renders the theme shop.
pub fn render_shop(
    ui: &mut egui::Ui,
    state: &mut AppState,
    session: &SessionStore,
    ownership: &OwnershipStore,
) -> Option<ScreenInteraction> {
    let mut interaction = None;

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(RichText::new("🛒 Theme Shop").size(28.0).strong());
        if !session.is_logged_in() {
            ui.label("Log in to buy and keep themes");
        }
        ui.add_space(12.0);
    });

    egui::ScrollArea::vertical().show(ui, |ui| {
        for theme in ThemeCatalog::global().themes() {
            if theme.id == DEFAULT_THEME_ID {
                continue;
            }

            let owned = ownership.is_owned(theme.id);
            let active = ownership.active() == theme.id;

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    // Color swatch for the theme accent
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 6.0, theme.colors.accent);

                    ui.vertical(|ui| {
                        ui.label(RichText::new(theme.name).strong());
                        ui.label(RichText::new(format!("🪙 {}", theme.price)).small());
                    });

                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            if active {
                                ui.add_enabled(
                                    false,
                                    egui::Button::new("✔ Active"),
                                );
                            } else if owned {
                                if ui.button("Activate").clicked() {
                                    interaction = Some(ScreenInteraction::EquipTheme(
                                        theme.id.to_string(),
                                    ));
                                }
                            } else {
                                let affordable = session.is_logged_in()
                                    && session.coins() >= theme.price as i64;
                                let buy = ui.add_enabled(
                                    affordable,
                                    egui::Button::new(format!("Buy for 🪙 {}", theme.price)),
                                );
                                if buy.clicked() {
                                    interaction = Some(ScreenInteraction::PurchaseTheme(
                                        theme.id.to_string(),
                                    ));
                                }
                            }
                        },
                    );
                });
            });
            ui.add_space(6.0);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            if ui.link("← Back").clicked() {
                state.go_to(Screen::Start);
            }
        });
    });

    interaction
}
