//! Extensions tab: navigation list on the left, selected extension on the
//! right.

mod detail;
mod list;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use extdash_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
};

use super::component::Component;
use crate::app::App;
use crate::ui::{
    theme::theme_helpers as th,
    utils::{find_target, hit},
};

/// Rows moved per PgUp/PgDn.
const DETAIL_PAGE: isize = 10;
/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

#[derive(Debug, Default)]
pub struct ExtensionsComponent;

impl ExtensionsComponent {
    fn handle_filter_keys(app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char(ch) => app.update(Msg::FilterChar(ch)),
            KeyCode::Backspace => app.update(Msg::FilterBackspace),
            KeyCode::Esc => app.update(Msg::FilterClear),
            KeyCode::Enter => {
                app.extensions.filter_active = false;
                app.update(Msg::ActivateCursor)
            }
            KeyCode::Up => app.update(Msg::MoveCursor(-1)),
            KeyCode::Down => app.update(Msg::MoveCursor(1)),
            _ => Vec::new(),
        }
    }
}

impl Component for ExtensionsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.extensions.filter_active {
            return Self::handle_filter_keys(app, key);
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.update(Msg::MoveCursor(-1)),
            KeyCode::Down | KeyCode::Char('j') => app.update(Msg::MoveCursor(1)),
            KeyCode::Home | KeyCode::Char('g') => app.update(Msg::CursorHome),
            KeyCode::End | KeyCode::Char('G') => app.update(Msg::CursorEnd),
            KeyCode::Enter => app.update(Msg::ActivateCursor),
            KeyCode::Char('/') => app.update(Msg::FilterStart),
            KeyCode::Esc => app.update(Msg::FilterClear),
            KeyCode::PageUp => app.update(Msg::ScrollDetail(-DETAIL_PAGE)),
            KeyCode::PageDown => app.update(Msg::ScrollDetail(DETAIL_PAGE)),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match find_target(&app.areas.list_rows, column, row) {
                Some(key) => app.update(Msg::SelectExtension(key)),
                None => Vec::new(),
            },
            MouseEventKind::ScrollDown if hit(app.areas.detail_area, column, row) => app.update(Msg::ScrollDetail(WHEEL_STEP)),
            MouseEventKind::ScrollUp if hit(app.areas.detail_area, column, row) => app.update(Msg::ScrollDetail(-WHEEL_STEP)),
            MouseEventKind::ScrollDown if hit(app.areas.list_area, column, row) => app.update(Msg::MoveCursor(1)),
            MouseEventKind::ScrollUp if hit(app.areas.list_area, column, row) => app.update(Msg::MoveCursor(-1)),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let [list_area, detail_area] = Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(rect);
        list::render(frame, list_area, app);
        detail::render(frame, detail_area, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let theme = &*app.ctx.theme;
        if app.extensions.filter_active {
            return th::build_hint_spans(theme, &[("Enter", " Select  "), ("Esc", " Clear filter  ")]);
        }
        th::build_hint_spans(
            theme,
            &[
                ("↑/↓", " Move  "),
                ("Enter", " Select  "),
                ("/", " Filter  "),
                ("PgUp/PgDn", " Scroll details  "),
            ],
        )
    }
}
