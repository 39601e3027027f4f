//! Environment dropdown anchored under the toolbar's environment button.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use extdash_types::{Effect, Environment, Msg};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState},
};

use super::component::Component;
use crate::app::{App, ToolbarTarget};
use crate::ui::{
    theme::theme_helpers as th,
    utils::{dropdown_rect, find_target, hit},
};

const MENU_WIDTH: u16 = 26;

#[derive(Debug, Default)]
pub struct EnvironmentMenuComponent;

impl EnvironmentMenuComponent {
    /// Area below the environment button, if it has been rendered.
    fn menu_area(app: &App, bounds: Rect) -> Option<Rect> {
        let anchor = app
            .areas
            .toolbar
            .iter()
            .find(|(_, target)| *target == ToolbarTarget::EnvironmentMenu)
            .map(|(area, _)| *area)?;
        let height = Environment::ALL.len() as u16 + 2;
        Some(dropdown_rect(anchor, MENU_WIDTH.max(anchor.width), height, bounds))
    }
}

impl Component for EnvironmentMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.update(Msg::MoveEnvironmentMenu(-1)),
            KeyCode::Down | KeyCode::Char('j') => app.update(Msg::MoveEnvironmentMenu(1)),
            KeyCode::Enter => app.update(Msg::ConfirmEnvironmentMenu),
            KeyCode::Esc | KeyCode::Char('e') => app.update(Msg::CloseEnvironmentMenu),
            KeyCode::Char('q') => app.update(Msg::Quit),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if let Some(environment) = find_target(&app.areas.environment_menu, mouse.column, mouse.row) {
            return app.update(Msg::SelectEnvironment(environment));
        }
        // a click on the button itself is handled by the toolbar
        let on_button = app
            .areas
            .toolbar
            .iter()
            .any(|(area, target)| *target == ToolbarTarget::EnvironmentMenu && hit(*area, mouse.column, mouse.row));
        if on_button {
            return Vec::new();
        }
        app.update(Msg::CloseEnvironmentMenu)
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(area) = Self::menu_area(app, rect) else {
            return;
        };
        let theme = &*app.ctx.theme;
        let items: Vec<ListItem> = Environment::ALL
            .iter()
            .map(|environment| {
                let marker = if *environment == app.view.environment { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, theme.accent_style()),
                    Span::styled(environment.display_name(), theme.text_primary_style()),
                ]))
            })
            .collect();
        let block = th::block(theme, Some("Environment"), true).style(theme.menu_style());
        let inner = block.inner(area);
        let list = List::new(items).block(block).highlight_style(th::table_selected_style(theme));
        let mut state = ListState::default().with_selected(Some(app.environment_menu.highlighted));

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);

        app.areas.environment_menu = Environment::ALL
            .iter()
            .enumerate()
            .filter(|(index, _)| (*index as u16) < inner.height)
            .map(|(index, environment)| (Rect::new(inner.x, inner.y + index as u16, inner.width, 1), *environment))
            .collect();
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[("↑/↓", " Move  "), ("Enter", " Select  "), ("Esc", " Close  ")])
    }
}
