//! Detail pane for the selected extension: its name, then the Configuration
//! and Stage Definitions tables when the extension carries them.

use extdash_types::ExtensionInfo;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Modifier,
    widgets::{Cell, Paragraph, Row, Table, TableState, Wrap},
};

use crate::app::App;
use crate::tables::{KeyValueRow, configuration_rows, stage_definition_rows};
use crate::ui::components::key_value_table::name_column_width;
use crate::ui::theme::{Theme, theme_helpers as th};

pub(crate) const CONFIGURATION_TITLE: &str = "Configuration";
pub(crate) const STAGE_DEFINITION_TITLE: &str = "Stage Definitions";
const TABLE_HEADERS: [&str; 2] = ["Key", "Value"];

/// One rendered line of the detail pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DetailLine {
    Title(String),
    Section(&'static str),
    /// Column headers of the table that follows
    Header,
    /// Table row; `index` restarts for each table so striping does too
    Row { index: usize, row: KeyValueRow },
    Blank,
}

fn push_table(lines: &mut Vec<DetailLine>, title: &'static str, rows: Vec<KeyValueRow>) {
    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Section(title));
    lines.push(DetailLine::Header);
    lines.extend(rows.into_iter().enumerate().map(|(index, row)| DetailLine::Row { index, row }));
}

/// Lines for `info`. A table appears only when its field is present, even
/// if empty.
pub(crate) fn detail_lines(info: &ExtensionInfo) -> Vec<DetailLine> {
    let mut lines = vec![DetailLine::Title(info.name.clone())];
    if let Some(config) = &info.config {
        push_table(&mut lines, CONFIGURATION_TITLE, configuration_rows(config));
    }
    if let Some(stage_definition) = &info.stage_definition {
        push_table(&mut lines, STAGE_DEFINITION_TITLE, stage_definition_rows(stage_definition));
    }
    lines
}

fn to_row<'a>(line: &'a DetailLine, theme: &dyn Theme) -> Row<'a> {
    match line {
        DetailLine::Title(name) => Row::new([Cell::from(name.as_str())]).style(theme.accent_emphasis_style()),
        DetailLine::Section(title) => {
            Row::new([Cell::from(*title)]).style(theme.text_secondary_style().add_modifier(Modifier::BOLD))
        }
        DetailLine::Header => Row::new(TABLE_HEADERS.map(Cell::from)).style(th::table_header_row_style(theme)),
        DetailLine::Row { index, row } => {
            Row::new([Cell::from(row.name.as_str()), Cell::from(row.value.as_str())]).style(th::table_row_style(theme, *index))
        }
        DetailLine::Blank => Row::new([Cell::from("")]),
    }
}

pub(crate) fn render(frame: &mut Frame, rect: Rect, app: &mut App) {
    let theme = &*app.ctx.theme;
    let block = th::block(theme, Some("Details"), false);
    let inner = block.inner(rect);

    let Some(info) = app.selected_extension() else {
        frame.render_widget(
            Paragraph::new("Select an extension to view its configuration.")
                .style(theme.text_muted_style())
                .wrap(Wrap { trim: true })
                .block(block),
            rect,
        );
        app.areas.detail_area = rect;
        return;
    };

    let lines = detail_lines(info);
    let offset = app
        .extensions
        .detail_offset
        .min(lines.len().saturating_sub(inner.height as usize));
    let table_rows: Vec<KeyValueRow> = lines
        .iter()
        .filter_map(|line| match line {
            DetailLine::Row { row, .. } => Some(row.clone()),
            _ => None,
        })
        .collect();
    let name_width = name_column_width(TABLE_HEADERS[0], &table_rows, inner.width);

    let rows: Vec<Row> = lines.iter().map(|line| to_row(line, theme)).collect();
    let table = Table::new(rows, [Constraint::Length(name_width), Constraint::Min(1)])
        .column_spacing(1)
        .block(block);
    let mut state = TableState::default().with_offset(offset);
    frame.render_stateful_widget(table, rect, &mut state);

    app.extensions.detail_offset = offset;
    app.areas.detail_area = rect;
}
