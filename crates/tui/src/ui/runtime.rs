//! Runtime: event loop and terminal lifecycle for the dashboard.
//!
//! - Owns the terminal (raw mode, alternate screen, mouse capture) and
//!   always restores it on exit, including when the loop fails.
//! - A dedicated input thread blocks on `crossterm::event::read()` and
//!   forwards events over a channel.
//! - Fetches run as spawned tasks; their outcomes are polled from a
//!   `FuturesUnordered` and fed back as `Msg::DiagnosticsLoaded`.
//! - Ticking is fast only while a fetch is in flight (spinner) and slow
//!   otherwise.

use std::{io::Stdout, sync::Arc, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use extdash_api::DiagnosticsSource;
use extdash_types::{Effect, Msg};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::RunOptions;
use crate::app::App;
use crate::cmd::{self, PendingCmd};
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

type Backend = CrosstermBackend<Stdout>;

const FAST_TICK: Duration = Duration::from_millis(100);
const IDLE_TICK: Duration = Duration::from_millis(5000);

/// Spawn the input thread. It exits once the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn is_ctrl_c(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translate a terminal event into state updates.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        // ignore release/repeat reports from terminals that send them
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => app.update(Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Entry point for the dashboard: sets up the terminal, runs the event loop
/// and restores the terminal however the loop ends.
pub async fn run_app(source: Arc<dyn DiagnosticsSource>, options: RunOptions) -> Result<()> {
    let mut app = App::new(options.environment, options.tab);
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view, source).await;
    let cleanup = cleanup_terminal(&mut terminal);
    result?;
    cleanup
}

async fn event_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    main_view: &mut MainView,
    source: Arc<dyn DiagnosticsSource>,
) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut pending: FuturesUnordered<PendingCmd> = FuturesUnordered::new();
    pending.extend(cmd::run_from_effects(&source, app.start()));

    let mut current_interval = FAST_TICK;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(environment = %app.view.environment, tab = app.view.tab.id(), "dashboard started");
    render(terminal, app, main_view)?;

    while !app.should_quit {
        let target_interval = if app.is_fetching() { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    warn!("input channel closed; shutting down");
                    break;
                };
                if is_ctrl_c(&event) {
                    break;
                }
                handle_input_event(app, main_view, event)
            }
            _ = ticker.tick() => app.update(Msg::Tick),
            Some(outcome) = pending.next(), if !pending.is_empty() => {
                app.update(Msg::DiagnosticsLoaded(outcome))
            }
            _ = signal::ctrl_c() => break,
        };

        pending.extend(cmd::run_from_effects(&source, effects));
        render(terminal, app, main_view)?;
    }

    info!("dashboard stopped");
    Ok(())
}
