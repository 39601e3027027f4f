//! Component system for the dashboard.
//!
//! Components are self-contained UI elements that translate terminal input
//! into [`Msg`](extdash_types::Msg) values for [`App::update`], report the
//! resulting [`Effect`]s back to the runtime, and render themselves into a
//! provided `Rect`. State that outlives a frame belongs in [`App`], so
//! components stay thin and the update rules stay testable.

use crossterm::event::{KeyEvent, MouseEvent};
use extdash_types::Effect;
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

pub(crate) trait Component {
    /// Handle a key event routed to this component.
    ///
    /// Returns the effects produced by the resulting state updates.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event; hit testing uses the areas recorded during the
    /// last render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into `rect`.
    ///
    /// Takes `&mut App` so renderers can record hit areas and clamp scroll
    /// offsets to what is actually visible.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
