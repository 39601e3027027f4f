use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers.
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Background style for the whole header row to avoid gaps between columns.
pub fn table_header_row_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default()
        .bg(theme.roles().header_band)
        .fg(theme.roles().text_secondary)
        .add_modifier(Modifier::BOLD)
}

/// Zebra striping: alternating row backgrounds without dimming the text.
pub fn table_row_style<T: Theme + ?Sized>(theme: &T, row_index: usize) -> Style {
    let ThemeRoles {
        table_row_even,
        table_row_odd,
        text,
        ..
    } = *theme.roles();
    let bg = if row_index % 2 == 0 { table_row_even } else { table_row_odd };
    Style::default().bg(bg).fg(text)
}

pub fn table_selected_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.selection_style().add_modifier(Modifier::BOLD)
}

/// Build tabs with active/inactive styles.
pub fn tabs<'a, T: Theme + ?Sized>(theme: &T, titles: Vec<Span<'a>>, index: usize) -> Tabs<'a> {
    Tabs::new(titles)
        .select(index)
        .highlight_style(
            theme
                .text_primary_style()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED),
        )
        .style(theme.text_secondary_style())
}

/// Secondary button style (outline-like, rely on border color in Block).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool, selected: bool) -> Style {
    if !enabled {
        return theme.text_muted_style();
    }
    let style = Style::default().fg(theme.roles().button);
    if selected { style.bg(theme.roles().selection_bg) } else { style }
}

/// Renders a bordered toolbar button.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, selected: bool, theme: &T) {
    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(Block::bordered().border_style(theme.border_style(selected)))
            .style(button_secondary_style(theme, true, selected)),
        area,
    );
}

/// Key/description pairs as styled spans: keys accented, descriptions muted.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(key.to_string(), theme.accent_emphasis_style()),
                Span::styled(description.to_string(), theme.text_muted_style()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    #[test]
    fn zebra_rows_alternate() {
        let theme = DraculaTheme::new();
        assert_ne!(table_row_style(&theme, 0), table_row_style(&theme, 1));
        assert_eq!(table_row_style(&theme, 0), table_row_style(&theme, 2));
    }

    #[test]
    fn hint_spans_pair_keys_with_descriptions() {
        let theme = DraculaTheme::new();
        let spans = build_hint_spans(&theme, &[("q", " Quit "), ("r", " Refresh ")]);
        let text: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, vec!["q", " Quit ", "r", " Refresh "]);
        assert_eq!(spans[0].style, theme.accent_emphasis_style());
    }
}
