//! Theme styling module for the TUI UI layer.
//!
//! Dracula (with a high-contrast variant) and an indexed fallback, both
//! expressed as [`roles::ThemeRoles`], plus widget builders in
//! [`theme_helpers`].

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use roles::Theme;

/// Environment variable naming the preferred palette.
pub const THEME_ENV: &str = "EXTDASH_THEME";
/// Environment variable forcing the color mode (`truecolor` or `ansi256`).
pub const COLOR_MODE_ENV: &str = "EXTDASH_COLOR_MODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme based on environment variables and terminal capabilities.
///
/// ANSI-only terminals always get the indexed fallback palette.
pub fn load() -> Box<dyn Theme> {
    if detect_color_capability() == ColorCapability::Ansi256 {
        debug!("ANSI-only terminal detected; using fallback palette");
        return Box::new(Ansi256Theme::new());
    }

    let requested = env::var(THEME_ENV).unwrap_or_default();
    match requested.trim().to_ascii_lowercase().as_str() {
        "dracula_hc" | "dracula-hc" | "high-contrast" => Box::new(DraculaThemeHighContrast::new()),
        "ansi256" => Box::new(Ansi256Theme::new()),
        _ => Box::new(DraculaTheme::new()),
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var(COLOR_MODE_ENV).ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
