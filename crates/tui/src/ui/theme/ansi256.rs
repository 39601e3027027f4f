//! Indexed-color fallback for terminals without truecolor.

use ratatui::style::Color::Indexed;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    /// Nearest xterm-256 entries to the Dracula palette.
    pub fn new() -> Self {
        let roles = ThemeRoles {
            background: Indexed(236),
            surface: Indexed(236),
            header_band: Indexed(239),
            border: Indexed(239),
            focus: Indexed(117),
            text: Indexed(255),
            text_secondary: Indexed(250),
            text_muted: Indexed(247),
            accent: Indexed(212),
            button: Indexed(117),
            loading: Indexed(117),
            failure: Indexed(203),
            selection_bg: Indexed(239),
            selection_fg: Indexed(255),
            menu_bg: Indexed(232),
            table_row_even: Indexed(235),
            table_row_odd: Indexed(237),
        };
        Self { roles }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
