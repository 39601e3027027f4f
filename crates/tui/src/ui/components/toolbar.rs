//! Toolbar: environment menu button plus the extension shortcut buttons.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use extdash_types::{Effect, Msg, Shortcut, Tab};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use unicode_width::UnicodeWidthStr;

use super::component::Component;
use crate::app::{App, ToolbarTarget};
use crate::ui::{theme::theme_helpers as th, utils::find_target};

#[derive(Debug, Default)]
pub struct ToolbarComponent;

/// Label of the environment menu button.
pub(crate) fn environment_label(app: &App) -> String {
    format!("Environment: {} ▾", app.view.environment.display_name())
}

fn button_width(label: &str) -> u16 {
    // borders plus one column of padding each side
    label.width() as u16 + 4
}

/// Buttons in display order. Shortcuts are listed only once a snapshot is
/// available.
fn buttons(app: &App) -> Vec<(String, ToolbarTarget)> {
    let mut buttons = vec![(environment_label(app), ToolbarTarget::EnvironmentMenu)];
    if app.snapshot().is_some() {
        buttons.extend(
            app.offered_shortcuts()
                .into_iter()
                .map(|shortcut| (shortcut.key().to_string(), ToolbarTarget::Shortcut(shortcut))),
        );
    }
    buttons
}

/// Select a shortcut's extension and bring the Extensions tab forward.
pub(crate) fn activate_shortcut(app: &mut App, shortcut: Shortcut) -> Vec<Effect> {
    if !app.shortcut_offered(shortcut) || app.snapshot().is_none() {
        return Vec::new();
    }
    let mut effects = app.update(Msg::Shortcut(shortcut));
    effects.extend(app.update(Msg::SelectTab(Tab::Extensions)));
    effects
}

impl Component for ToolbarComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match find_target(&app.areas.toolbar, mouse.column, mouse.row) {
            Some(ToolbarTarget::EnvironmentMenu) => {
                if app.environment_menu.open {
                    app.update(Msg::CloseEnvironmentMenu)
                } else {
                    app.update(Msg::OpenEnvironmentMenu)
                }
            }
            Some(ToolbarTarget::Shortcut(shortcut)) => activate_shortcut(app, shortcut),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let buttons = buttons(app);
        let constraints: Vec<Constraint> = buttons
            .iter()
            .map(|(label, _)| Constraint::Length(button_width(label)))
            .chain([Constraint::Fill(1)])
            .collect();
        let areas = Layout::horizontal(constraints).spacing(1).split(rect);

        let selected = app.view.selected_extension.clone();
        let theme = &*app.ctx.theme;
        let mut hit_areas = Vec::with_capacity(buttons.len());
        for ((label, target), area) in buttons.into_iter().zip(areas.iter()) {
            let is_selected = match target {
                ToolbarTarget::EnvironmentMenu => app.environment_menu.open,
                ToolbarTarget::Shortcut(shortcut) => selected.as_deref() == Some(shortcut.key()),
            };
            th::render_button(frame, *area, &label, is_selected, theme);
            hit_areas.push((*area, target));
        }

        if app.is_fetching() {
            let spinner_area = areas[areas.len() - 1];
            frame.render_widget(
                ratatui::widgets::Paragraph::new(format!("{} loading", app.throbber()))
                    .right_aligned()
                    .style(theme.loading_style()),
                Rect { y: spinner_area.y + 1, height: 1, ..spinner_area },
            );
        }
        app.areas.toolbar = hit_areas;
    }
}
