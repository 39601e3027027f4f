//! Tab strip for the Extensions, Build and Server panels.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use extdash_types::{Effect, Msg, Tab};
use ratatui::{Frame, layout::Rect, text::Span};
use unicode_width::UnicodeWidthStr;

use super::component::Component;
use crate::app::App;
use crate::ui::{theme::theme_helpers as th, utils::find_target};

/// Ratatui's default tab padding and divider widths.
const TAB_PADDING: u16 = 1;
const DIVIDER_WIDTH: u16 = 1;

#[derive(Debug, Default)]
pub struct TabsComponent;

fn tab_label(tab: Tab) -> String {
    format!("{} {}", tab.index() + 1, tab.title())
}

/// Per-tab hit areas matching how `Tabs` lays out its titles.
pub(crate) fn tab_areas(rect: Rect) -> Vec<(Rect, Tab)> {
    let mut x = rect.x;
    let mut areas = Vec::with_capacity(Tab::ALL.len());
    for tab in Tab::ALL {
        let width = tab_label(tab).width() as u16 + TAB_PADDING * 2;
        let area = Rect::new(x, rect.y, width, 1).intersection(rect);
        areas.push((area, tab));
        x = x.saturating_add(width + DIVIDER_WIDTH);
    }
    areas
}

impl Component for TabsComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match find_target(&app.areas.tabs, mouse.column, mouse.row) {
            Some(tab) => app.update(Msg::SelectTab(tab)),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let titles: Vec<Span> = Tab::ALL.iter().map(|tab| Span::raw(tab_label(*tab))).collect();
        frame.render_widget(th::tabs(theme, titles, app.view.tab.index()), rect);
        app.areas.tabs = tab_areas(rect);
    }
}
