//! Single-line strip of key hints at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::theme::theme_helpers as th;

/// Hints available on every screen, after the active component's own.
pub(crate) fn global_hint_spans(app: &App) -> Vec<Span<'static>> {
    let theme = &*app.ctx.theme;
    let mut hints = Vec::with_capacity(6);
    if app.snapshot().is_some() {
        hints.extend([("1-3", " Tabs  "), ("p/w", " Shortcuts  ")]);
    }
    hints.extend([("e", " Environment  "), ("r", " Refresh  "), ("q", " Quit")]);
    th::build_hint_spans(theme, &hints)
}

pub(crate) fn render(frame: &mut Frame, rect: Rect, app: &App, mut spans: Vec<Span<'static>>) {
    spans.extend(global_hint_spans(app));
    frame.render_widget(Paragraph::new(Line::from(spans)).style(app.ctx.theme.text_muted_style()), rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use extdash_types::{Environment, Tab};

    #[test]
    fn tab_hints_hidden_while_loading() {
        let app = App::new(Environment::Mooncake, Tab::Server);
        let text: String = global_hint_spans(&app).iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "e Environment  r Refresh  q Quit");
    }
}
