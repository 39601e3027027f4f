use ratatui::{Frame, layout::Rect};

use super::{component::Component, key_value_table::render_key_value_table};
use crate::app::App;
use crate::tables::build_info_rows;

/// Build Information tab: a single "Build Version" row.
#[derive(Debug, Default)]
pub struct BuildInfoComponent;

impl Component for BuildInfoComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(snapshot) = app.snapshot() else {
            return;
        };
        let rows = build_info_rows(&snapshot.build_info);
        render_key_value_table(frame, rect, &*app.ctx.theme, "Build Information", ["Name", "Value"], &rows);
    }
}
