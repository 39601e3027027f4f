use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Colors the dashboard draws with, by what they paint.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    /// Full-screen fill behind every panel.
    pub background: Color,
    /// Panel and button interiors.
    pub surface: Color,
    /// Table header band.
    pub header_band: Color,
    pub border: Color,
    /// Border of the panel that owns keyboard input.
    pub focus: Color,

    pub text: Color,
    /// Tab titles, panel titles, column headers.
    pub text_secondary: Color,
    /// Disabled buttons and hint descriptions.
    pub text_muted: Color,

    /// List markers and the filter line.
    pub accent: Color,
    /// Toolbar button labels.
    pub button: Color,

    /// Status line and spinner while a fetch is in flight.
    pub loading: Color,
    /// Status line after a failed fetch.
    pub failure: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub menu_bg: Color,

    pub table_row_even: Color,
    pub table_row_odd: Color,
}

/// Theme trait exposes the roles and the styles built from them.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if focused { roles.focus } else { roles.border })
    }

    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    fn menu_style(&self) -> Style {
        Style::default().bg(self.roles().menu_bg)
    }

    fn loading_style(&self) -> Style {
        Style::default().fg(self.roles().loading)
    }
    fn failure_style(&self) -> Style {
        Style::default().fg(self.roles().failure).add_modifier(Modifier::BOLD)
    }

    fn accent_style(&self) -> Style {
        Style::default().fg(self.roles().accent)
    }
    /// Selected list entry, detail title, hint keys.
    fn accent_emphasis_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }
}
