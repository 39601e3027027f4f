use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4

pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6
pub const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9); // #bd93f9
pub const RED: Color = Color::Rgb(0xFF, 0x55, 0x55); // #ff5555

pub const BG_MODAL_OVERLAY: Color = Color::Rgb(0x1D, 0x1F, 0x27);
pub const ROW_EVEN: Color = Color::Rgb(0x18, 0x19, 0x20);
pub const ROW_ODD: Color = Color::Rgb(0x29, 0x2B, 0x36);

/// Dracula roles; `high_contrast` swaps in stronger borders.
fn roles(high_contrast: bool) -> ThemeRoles {
    ThemeRoles {
        background: BG,
        surface: BG,
        header_band: CURRENT_LINE,
        border: if high_contrast { PURPLE } else { CURRENT_LINE },
        focus: CYAN,

        text: FOREGROUND,
        text_secondary: COMMENT,
        text_muted: COMMENT,

        accent: PINK,
        button: CYAN,

        loading: CYAN,
        failure: RED,

        selection_bg: CURRENT_LINE,
        selection_fg: FOREGROUND,
        menu_bg: BG_MODAL_OVERLAY,

        table_row_even: ROW_EVEN,
        table_row_odd: ROW_ODD,
    }
}

/// Default theme tuned for dark truecolor terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self { roles: roles(false) }
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Dracula: stronger borders.
#[derive(Debug, Clone)]
pub struct DraculaThemeHighContrast {
    roles: ThemeRoles,
}

impl DraculaThemeHighContrast {
    pub fn new() -> Self {
        Self { roles: roles(true) }
    }
}

impl Theme for DraculaThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
