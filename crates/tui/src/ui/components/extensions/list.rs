//! Navigation list of valid extensions, with an optional filter line.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::app::App;
use crate::ui::theme::theme_helpers as th;
use extdash_util::truncate_to_width;

/// Text of the filter line, or `None` when no filter is in use.
pub(crate) fn filter_line(app: &App) -> Option<String> {
    let state = &app.extensions;
    if !state.filter_active && state.filter.is_empty() {
        return None;
    }
    let cursor = if state.filter_active { "▏" } else { "" };
    Some(format!("/{}{cursor}", state.filter))
}

pub(crate) fn render(frame: &mut Frame, rect: Rect, app: &mut App) {
    let links = app.visible_links();
    let total = app.nav_links().len();
    let title = if links.len() == total {
        format!("Extensions ({total})")
    } else {
        format!("Extensions ({}/{total})", links.len())
    };

    let theme = &*app.ctx.theme;
    let block = th::block(theme, Some(title.as_str()), true);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let filter = filter_line(app);
    let [filter_area, list_area] =
        Layout::vertical([Constraint::Length(u16::from(filter.is_some())), Constraint::Min(0)]).areas(inner);
    if let Some(filter) = filter {
        frame.render_widget(Paragraph::new(filter).style(theme.accent_style()), filter_area);
    }

    if links.is_empty() {
        let message = if total == 0 { "No extensions reported." } else { "No extensions match the filter." };
        frame.render_widget(Paragraph::new(message).style(theme.text_muted_style()), list_area);
        app.areas.list_area = list_area;
        app.areas.list_rows.clear();
        return;
    }

    let selected = app.view.selected_extension.as_deref();
    let label_width = list_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = links
        .iter()
        .map(|link| {
            let is_selected = selected == Some(link.key.as_str());
            let marker = if is_selected { "● " } else { "  " };
            let style = if is_selected { theme.accent_emphasis_style() } else { theme.text_primary_style() };
            ListItem::new(Line::from(vec![
                Span::styled(marker, theme.accent_style()),
                Span::styled(truncate_to_width(&link.display_name, label_width), style),
            ]))
        })
        .collect();
    let list = List::new(items).highlight_style(th::table_selected_style(theme));

    let cursor = app.extensions.cursor.min(links.len() - 1);
    app.extensions.list_state.select(Some(cursor));
    frame.render_stateful_widget(list, list_area, &mut app.extensions.list_state);

    let offset = app.extensions.list_state.offset();
    app.areas.list_area = list_area;
    app.areas.list_rows = links
        .into_iter()
        .skip(offset)
        .take(list_area.height as usize)
        .enumerate()
        .map(|(row, link)| (Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1), link.key))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use extdash_types::{Environment, Msg, Tab};

    #[test]
    fn filter_line_reflects_input_state() {
        let mut app = App::new(Environment::Public, Tab::Extensions);
        assert_eq!(filter_line(&app), None);

        app.update(Msg::FilterStart);
        assert_eq!(filter_line(&app).as_deref(), Some("/▏"));
        app.update(Msg::FilterChar('w'));
        assert_eq!(filter_line(&app).as_deref(), Some("/w▏"));

        app.extensions.filter_active = false;
        assert_eq!(filter_line(&app).as_deref(), Some("/w"));
    }
}
