//! Purchasable theme catalog for the quiz GUI.
//!
//! Themes are fixed at build time: each one has an identifier, a display
//! name, a coin price and a color palette. Exactly one theme (the default)
//! is free and implicitly owned by every user; it can never be purchased
//! or removed. Prices and mutable ownership live elsewhere - this module
//! is a static lookup table plus the egui styling glue.

use egui::Color32;
use once_cell::sync::Lazy;

/// Identifier of the free theme every user owns.
pub const DEFAULT_THEME_ID: &str = "default";

/// Color palette applied to the egui visuals when a theme is active.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub background: Color32,
    pub panel_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    /// Primary accent used for selections, buttons and the coin counter.
    pub accent: Color32,
    /// Softer accent used for hover states.
    pub accent_soft: Color32,
}

/// A purchasable theme: identifier, display name, coin price, palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u64,
    pub colors: ThemeColors,
}

/// Static catalog of all themes, in shop display order.
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

static CATALOG: Lazy<ThemeCatalog> = Lazy::new(ThemeCatalog::build);

impl ThemeCatalog {
    /// Returns the process-wide catalog instance.
    pub fn global() -> &'static ThemeCatalog {
        &CATALOG
    }

    fn build() -> Self {
        let themes = vec![
            Theme {
                id: DEFAULT_THEME_ID,
                name: "Default",
                price: 0,
                colors: accent_palette("#5a5f6e"),
            },
            Theme {
                id: "pink",
                name: "Pink Style",
                price: 10,
                colors: accent_palette("#ec4899"),
            },
            Theme {
                id: "green",
                name: "Green Style",
                price: 20,
                colors: accent_palette("#22c55e"),
            },
            Theme {
                id: "orange",
                name: "Orange Style",
                price: 30,
                colors: accent_palette("#f97316"),
            },
            Theme {
                id: "blue",
                name: "Blue Style",
                price: 40,
                colors: accent_palette("#3b82f6"),
            },
            Theme {
                id: "purple",
                name: "Purple Style",
                price: 50,
                colors: accent_palette("#a855f7"),
            },
            Theme {
                id: "red",
                name: "Red Style",
                price: 60,
                colors: accent_palette("#ef4444"),
            },
            Theme {
                id: "yellow",
                name: "Yellow Style",
                price: 70,
                colors: accent_palette("#eab308"),
            },
            Theme {
                id: "teal",
                name: "Teal Style",
                price: 80,
                colors: accent_palette("#14b8a6"),
            },
            Theme {
                id: "indigo",
                name: "Indigo Style",
                price: 90,
                colors: accent_palette("#6366f1"),
            },
        ];
        Self { themes }
    }

    /// Retrieves a theme by identifier.
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Returns the price of a theme, or None for an unknown identifier.
    pub fn price_of(&self, id: &str) -> Option<u64> {
        self.get(id).map(|t| t.price)
    }

    /// Returns true if `id` names a theme in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the free default theme.
    pub fn default_theme(&self) -> &Theme {
        self.get(DEFAULT_THEME_ID)
            .unwrap_or_else(|| &self.themes[0])
    }

    /// All themes in shop display order (default first, then by price).
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// All theme identifiers, in catalog order.
    pub fn all_ids(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.id.to_string()).collect()
    }

    /// Applies a theme's palette to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.faint_bg_color = colors.accent_soft;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.accent;
        visuals.selection.stroke.color = colors.text;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.accent_soft;
        visuals.widgets.hovered.bg_fill = colors.accent_soft;
        visuals.widgets.active.bg_fill = colors.accent;

        visuals.hyperlink_color = colors.accent;
    }
}

/// Builds a dark palette around a single accent color.
fn accent_palette(accent_hex: &str) -> ThemeColors {
    let accent = hex_to_color32(accent_hex);
    ThemeColors {
        background: Color32::from_rgb(16, 16, 20),
        panel_background: Color32::from_rgb(30, 30, 36),
        text: Color32::from_rgb(240, 240, 245),
        text_dim: Color32::from_rgb(150, 150, 160),
        accent,
        accent_soft: adjust_brightness(accent, 0.35),
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}
