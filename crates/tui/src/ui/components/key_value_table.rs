//! Two-column table renderer shared by the Build, Server and extension views.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use crate::tables::KeyValueRow;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Widest first column, as a share of the table width.
const MAX_NAME_PERCENT: u16 = 45;

/// Width of the name column: the widest name (or header) plus padding,
/// capped so values keep room.
pub(crate) fn name_column_width(header: &str, rows: &[KeyValueRow], total_width: u16) -> u16 {
    let widest = rows.iter().map(|row| row.name.width()).chain([header.width()]).max().unwrap_or_default();
    let cap = (total_width as usize * MAX_NAME_PERCENT as usize / 100).max(1);
    (widest + 2).min(cap) as u16
}

/// Render `rows` as a zebra-striped table with `headers`, first row at the top.
pub(crate) fn render_key_value_table(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    title: &str,
    headers: [&str; 2],
    rows: &[KeyValueRow],
) {
    let block = th::block(theme, Some(title), false);
    let name_width = name_column_width(headers[0], rows, block.inner(area).width);
    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            Row::new(vec![Cell::from(row.name.as_str()), Cell::from(row.value.as_str())])
                .style(th::table_row_style(theme, index))
        })
        .collect();
    let header = Row::new(headers.map(|h| Cell::from(Line::from(h)))).style(th::table_header_row_style(theme));

    let table = Table::new(body, [Constraint::Length(name_width), Constraint::Min(1)])
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;
    use ratatui::{Terminal, backend::TestBackend};

    fn rows() -> Vec<KeyValueRow> {
        vec![
            KeyValueRow::new("Hostname", "host-1"),
            KeyValueRow::new("Uptime", "42"),
            KeyValueRow::new("Node Versions", "v20.1.0"),
        ]
    }

    #[test]
    fn name_column_fits_widest_name() {
        assert_eq!(name_column_width("Name", &rows(), 80), 15);
        assert_eq!(name_column_width("Name", &rows(), 20), 9);
        assert_eq!(name_column_width("Name", &[], 80), 6);
    }

    fn rendered_text(width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = DraculaTheme::new();
        terminal
            .draw(|frame| render_key_value_table(frame, frame.area(), &theme, "Server", ["Name", "Value"], &rows()))
            .unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_headers_and_values() {
        let text = rendered_text(40, 8);
        assert!(text.contains("Server"));
        assert!(text.contains("Name"));
        assert!(text.contains("Value"));
        assert!(text.contains("host-1"));
        assert!(text.contains("v20.1.0"));
    }

    #[test]
    fn short_area_keeps_leading_rows() {
        // border, header and one row
        let text = rendered_text(40, 4);
        assert!(text.contains("host-1"));
        assert!(!text.contains("v20.1.0"));
    }
}
