//! Root view: toolbar, tabs, the active panel and the hint bar.
//!
//! Routes input to the component that owns it and renders the frame. While
//! no snapshot is available only the toolbar and a status line are shown.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use extdash_types::{Effect, Msg, Shortcut, Tab};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::components::{
    BuildInfoComponent, Component, EnvironmentMenuComponent, ExtensionsComponent, ServerInfoComponent, TabsComponent,
    ToolbarComponent, hint_bar, toolbar::activate_shortcut,
};
use super::utils::{centered_rect, hit};
use crate::app::{App, LoadState};

/// Status text shown in place of the panels, if any.
pub(crate) fn status_text(app: &App) -> Option<String> {
    match &app.load {
        LoadState::Ready(_) => None,
        LoadState::Loading { environment } => Some(format!(
            "{} Loading diagnostics for {}…",
            app.throbber(),
            environment.display_name()
        )),
        LoadState::Failed { environment, message } => Some(format!(
            "Failed to load diagnostics for {}: {message}\nPress r to retry or e to choose another environment.",
            environment.display_name()
        )),
    }
}

#[derive(Debug, Default)]
pub struct MainView {
    toolbar: ToolbarComponent,
    environment_menu: EnvironmentMenuComponent,
    tabs: TabsComponent,
    extensions: ExtensionsComponent,
    build_info: BuildInfoComponent,
    server_info: ServerInfoComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn active_panel(&mut self, tab: Tab) -> &mut dyn Component {
        match tab {
            Tab::Extensions => &mut self.extensions,
            Tab::Build => &mut self.build_info,
            Tab::Server => &mut self.server_info,
        }
    }

    /// Keys that work whether or not a snapshot is loaded.
    fn handle_global_keys(app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        let effects = match key.code {
            KeyCode::Char('q') => app.update(Msg::Quit),
            KeyCode::Char('e') => app.update(Msg::OpenEnvironmentMenu),
            KeyCode::Char('r') => app.update(Msg::Refresh),
            _ => return None,
        };
        Some(effects)
    }

    fn handle_panel_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char(digit @ '1'..='3') => {
                let index = digit as usize - '1' as usize;
                app.update(Msg::SelectTab(Tab::ALL[index]))
            }
            KeyCode::Left | KeyCode::BackTab => app.update(Msg::CycleTab { forward: false }),
            KeyCode::Right | KeyCode::Tab => app.update(Msg::CycleTab { forward: true }),
            KeyCode::Char('p') => activate_shortcut(app, Shortcut::PaasServerless),
            KeyCode::Char('w') => activate_shortcut(app, Shortcut::Websites),
            _ => {
                let tab = app.view.tab;
                self.active_panel(tab).handle_key_events(app, key)
            }
        }
    }

    fn layout(app: &App, area: Rect) -> [Rect; 4] {
        let tabs_height = u16::from(app.snapshot().is_some());
        Layout::vertical([
            Constraint::Length(3),           // toolbar
            Constraint::Length(tabs_height), // tabs
            Constraint::Min(1),              // panel or status
            Constraint::Length(1),           // hints
        ])
        .areas(area)
    }

    fn render_status(frame: &mut Frame, area: Rect, app: &App, text: String) {
        let style = match app.load {
            LoadState::Failed { .. } => app.ctx.theme.failure_style(),
            _ => app.ctx.theme.loading_style(),
        };
        let status_area = centered_rect(80, 40, area);
        frame.render_widget(
            Paragraph::new(text).centered().style(style).wrap(Wrap { trim: true }),
            status_area,
        );
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.environment_menu.open {
            return self.environment_menu.handle_key_events(app, key);
        }
        let ready = app.snapshot().is_some();
        if ready && app.view.tab == Tab::Extensions && app.extensions.filter_active {
            return self.extensions.handle_key_events(app, key);
        }
        if let Some(effects) = Self::handle_global_keys(app, key) {
            return effects;
        }
        if !ready {
            return Vec::new();
        }
        self.handle_panel_keys(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let on_toolbar = app.areas.toolbar.iter().any(|(area, _)| hit(*area, mouse.column, mouse.row));
        if app.environment_menu.open {
            let mut effects = self.environment_menu.handle_mouse_events(app, mouse);
            if on_toolbar {
                effects.extend(self.toolbar.handle_mouse_events(app, mouse));
            }
            return effects;
        }

        let mut effects = self.toolbar.handle_mouse_events(app, mouse);
        if on_toolbar || app.snapshot().is_none() {
            return effects;
        }
        effects.extend(self.tabs.handle_mouse_events(app, mouse));
        let tab = app.view.tab;
        effects.extend(self.active_panel(tab).handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let [toolbar_area, tabs_area, body_area, hints_area] = Self::layout(app, area);
        self.toolbar.render(frame, toolbar_area, app);

        let hint_spans = match status_text(app) {
            Some(text) => {
                app.areas.tabs.clear();
                app.areas.list_rows.clear();
                Self::render_status(frame, body_area, app, text);
                Vec::new()
            }
            None => {
                self.tabs.render(frame, tabs_area, app);
                let tab = app.view.tab;
                let panel = self.active_panel(tab);
                panel.render(frame, body_area, app);
                panel.get_hint_spans(app)
            }
        };

        if app.environment_menu.open {
            self.environment_menu.render(frame, area, app);
            hint_bar::render(frame, hints_area, app, self.environment_menu.get_hint_spans(app));
        } else {
            app.areas.environment_menu.clear();
            hint_bar::render(frame, hints_area, app, hint_spans);
        }
    }
}
