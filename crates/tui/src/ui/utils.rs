//! Layout and hit-testing helpers shared by the components.

use ratatui::prelude::*;

/// Creates a centered rectangle sized as a percentage of `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Whether the terminal cell at (`column`, `row`) falls inside `area`.
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

/// Target recorded for the first area containing (`column`, `row`).
pub fn find_target<T: Clone>(targets: &[(Rect, T)], column: u16, row: u16) -> Option<T> {
    targets
        .iter()
        .find(|(area, _)| hit(*area, column, row))
        .map(|(_, target)| target.clone())
}

/// A `width` x `height` rectangle anchored at `anchor`'s bottom-left corner,
/// clipped to `bounds`.
pub fn dropdown_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let rect = Rect::new(anchor.x, anchor.bottom(), width, height);
    rect.intersection(bounds)
}
