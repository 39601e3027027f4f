use ratatui::{Frame, layout::Rect};

use super::{component::Component, key_value_table::render_key_value_table};
use crate::app::App;
use crate::tables::server_info_rows;

/// Server Information tab: six fixed rows describing the serving host.
#[derive(Debug, Default)]
pub struct ServerInfoComponent;

impl Component for ServerInfoComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(snapshot) = app.snapshot() else {
            return;
        };
        let rows = server_info_rows(&snapshot.server_info);
        render_key_value_table(frame, rect, &*app.ctx.theme, "Server Information", ["Name", "Value"], &rows);
    }
}
