//! Application state and logic for the diagnostics dashboard.
//!
//! All view state lives in [`App`]. Input and fetch results arrive as
//! [`Msg`] values; side effects are returned as [`Effect`] values for the
//! runtime to execute. `App::update` performs no I/O, which keeps the
//! environment/tab/extension rules testable in one place.

use extdash_types::{
    DiagnosticsSnapshot, Effect, Environment, ExtensionInfo, FetchOutcome, FetchTicket, Msg, NavLink, Shortcut, Tab, filter_nav_links,
    is_extension_info,
};
use ratatui::{layout::Rect, widgets::ListState};
use tracing::{debug, info, warn};

use crate::ui::theme::{self, Theme};

/// Frames for the loading spinner.
pub const THROBBER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the dashboard currently has to show.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// No snapshot yet for this environment
    Loading { environment: Environment },
    /// Latest committed snapshot
    Ready(Box<DiagnosticsSnapshot>),
    /// The latest fetch failed
    Failed { environment: Environment, message: String },
}

/// The three user-controlled axes of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub environment: Environment,
    pub tab: Tab,
    /// Key of the selected extension. Always resolves to an
    /// `ExtensionInfo` in the current snapshot.
    pub selected_extension: Option<String>,
}

/// Extension list navigation state.
#[derive(Debug, Default)]
pub struct ExtensionListState {
    /// Index into the filtered links
    pub cursor: usize,
    pub filter: String,
    /// Whether keystrokes currently edit the filter
    pub filter_active: bool,
    /// First visible row of the detail tables
    pub detail_offset: usize,
    pub list_state: ListState,
}

#[derive(Debug, Default)]
pub struct EnvironmentMenuState {
    pub open: bool,
    pub highlighted: usize,
}

/// Clickable toolbar targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarTarget {
    EnvironmentMenu,
    Shortcut(Shortcut),
}

/// Areas recorded during the last render, used for mouse hit testing.
#[derive(Debug, Default)]
pub struct HitAreas {
    pub toolbar: Vec<(Rect, ToolbarTarget)>,
    pub tabs: Vec<(Rect, Tab)>,
    pub list_area: Rect,
    pub list_rows: Vec<(Rect, String)>,
    pub detail_area: Rect,
    pub environment_menu: Vec<(Rect, Environment)>,
}

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
}

impl SharedCtx {
    pub fn new() -> Self {
        Self { theme: theme::load() }
    }
}

impl Default for SharedCtx {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub view: ViewState,
    pub load: LoadState,
    pub extensions: ExtensionListState,
    pub environment_menu: EnvironmentMenuState,
    pub areas: HitAreas,
    /// Ticket of the only fetch allowed to commit
    pub pending: Option<FetchTicket>,
    next_ticket_id: u64,
    pub throbber_idx: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(environment: Environment, tab: Tab) -> Self {
        Self {
            ctx: SharedCtx::new(),
            view: ViewState {
                environment,
                tab,
                selected_extension: None,
            },
            load: LoadState::Loading { environment },
            extensions: ExtensionListState::default(),
            environment_menu: EnvironmentMenuState::default(),
            areas: HitAreas::default(),
            pending: None,
            next_ticket_id: 0,
            throbber_idx: 0,
            should_quit: false,
        }
    }

    /// Effects to run once the event loop is live: the initial fetch.
    pub fn start(&mut self) -> Vec<Effect> {
        vec![self.issue_fetch()]
    }

    pub fn snapshot(&self) -> Option<&DiagnosticsSnapshot> {
        match &self.load {
            LoadState::Ready(snapshot) => Some(snapshot.as_ref()),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn throbber(&self) -> &'static str {
        THROBBER_FRAMES[self.throbber_idx % THROBBER_FRAMES.len()]
    }

    /// The selected extension resolved against the current snapshot.
    pub fn selected_extension(&self) -> Option<&ExtensionInfo> {
        let key = self.view.selected_extension.as_deref()?;
        self.snapshot()?.extension_info(key)
    }

    /// Sorted links for every valid extension.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.snapshot().map(DiagnosticsSnapshot::nav_links).unwrap_or_default()
    }

    /// Links after applying the list filter.
    pub fn visible_links(&self) -> Vec<NavLink> {
        let links = self.nav_links();
        filter_nav_links(&links, &self.extensions.filter).into_iter().cloned().collect()
    }

    /// Whether a toolbar shortcut is offered for the current snapshot.
    pub fn shortcut_offered(&self, shortcut: Shortcut) -> bool {
        match shortcut {
            Shortcut::PaasServerless => self
                .snapshot()
                .is_some_and(|snapshot| is_extension_info(snapshot.extensions.get(shortcut.key()))),
            Shortcut::Websites => true,
        }
    }

    pub fn offered_shortcuts(&self) -> Vec<Shortcut> {
        Shortcut::ALL.into_iter().filter(|s| self.shortcut_offered(*s)).collect()
    }

    /// Updates the application state based on a message.
    ///
    /// Returns the side effects the runtime should perform.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::SelectEnvironment(environment) => return self.select_environment(environment),
            Msg::SelectTab(tab) => self.view.tab = tab,
            Msg::CycleTab { forward } => self.view.tab = self.view.tab.cycle(forward),
            Msg::SelectExtension(key) => self.select_extension(&key),
            Msg::Shortcut(shortcut) => {
                if self.shortcut_offered(shortcut) {
                    self.select_extension(shortcut.key());
                }
            }
            Msg::MoveCursor(delta) => self.move_cursor(delta),
            Msg::CursorHome => self.extensions.cursor = 0,
            Msg::CursorEnd => self.extensions.cursor = self.visible_links().len().saturating_sub(1),
            Msg::ActivateCursor => {
                if let Some(link) = self.visible_links().get(self.extensions.cursor) {
                    let key = link.key.clone();
                    self.select_extension(&key);
                }
            }
            Msg::FilterStart => self.extensions.filter_active = true,
            Msg::FilterChar(ch) => {
                if self.extensions.filter_active {
                    self.extensions.filter.push(ch);
                    self.extensions.cursor = 0;
                }
            }
            Msg::FilterBackspace => {
                if self.extensions.filter_active {
                    self.extensions.filter.pop();
                    self.extensions.cursor = 0;
                }
            }
            Msg::FilterClear => {
                self.extensions.filter.clear();
                self.extensions.filter_active = false;
                self.extensions.cursor = 0;
            }
            Msg::OpenEnvironmentMenu => {
                self.environment_menu.open = true;
                self.environment_menu.highlighted = Environment::ALL
                    .iter()
                    .position(|e| *e == self.view.environment)
                    .unwrap_or_default();
            }
            Msg::CloseEnvironmentMenu => self.environment_menu.open = false,
            Msg::MoveEnvironmentMenu(delta) => {
                let len = Environment::ALL.len() as isize;
                let next = (self.environment_menu.highlighted as isize + delta).rem_euclid(len);
                self.environment_menu.highlighted = next as usize;
            }
            Msg::ConfirmEnvironmentMenu => {
                let environment = Environment::ALL[self.environment_menu.highlighted % Environment::ALL.len()];
                return self.select_environment(environment);
            }
            Msg::ScrollDetail(delta) => {
                self.extensions.detail_offset = self.extensions.detail_offset.saturating_add_signed(delta);
            }
            Msg::Refresh => {
                if self.snapshot().is_none() {
                    self.load = LoadState::Loading {
                        environment: self.view.environment,
                    };
                }
                return vec![self.issue_fetch()];
            }
            Msg::Tick => {
                if self.is_fetching() {
                    self.throbber_idx = (self.throbber_idx + 1) % THROBBER_FRAMES.len();
                }
            }
            Msg::Resize(_, _) => {}
            Msg::Quit => self.should_quit = true,
            Msg::DiagnosticsLoaded(outcome) => self.commit(outcome),
        }
        Vec::new()
    }

    /// Switch environment. The selection always clears, before any fetch
    /// resolves; a fetch is only issued when the environment changes.
    fn select_environment(&mut self, environment: Environment) -> Vec<Effect> {
        self.view.selected_extension = None;
        self.extensions.detail_offset = 0;
        self.environment_menu.open = false;
        if environment == self.view.environment {
            return Vec::new();
        }

        info!(from = %self.view.environment, to = %environment, "switching environment");
        self.view.environment = environment;
        self.load = LoadState::Loading { environment };
        self.extensions.cursor = 0;
        self.extensions.filter.clear();
        self.extensions.filter_active = false;
        vec![self.issue_fetch()]
    }

    /// Select `key` only if it resolves to a valid extension; otherwise the
    /// current selection is left untouched.
    fn select_extension(&mut self, key: &str) {
        let valid = self
            .snapshot()
            .is_some_and(|snapshot| is_extension_info(snapshot.extensions.get(key)));
        if !valid {
            debug!(key, "ignoring selection of non-selectable extension");
            return;
        }
        if self.view.selected_extension.as_deref() != Some(key) {
            self.extensions.detail_offset = 0;
        }
        self.view.selected_extension = Some(key.to_string());
        if let Some(position) = self.visible_links().iter().position(|link| link.key == key) {
            self.extensions.cursor = position;
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_links().len();
        if len == 0 {
            self.extensions.cursor = 0;
            return;
        }
        let next = (self.extensions.cursor as isize + delta).clamp(0, len as isize - 1);
        self.extensions.cursor = next as usize;
    }

    fn issue_fetch(&mut self) -> Effect {
        self.next_ticket_id += 1;
        let ticket = FetchTicket {
            id: self.next_ticket_id,
            environment: self.view.environment,
        };
        self.pending = Some(ticket);
        self.throbber_idx = 0;
        debug!(id = ticket.id, environment = %ticket.environment, "issuing diagnostics fetch");
        Effect::FetchDiagnostics(ticket)
    }

    /// Commit a fetch result if it belongs to the latest ticket.
    fn commit(&mut self, outcome: FetchOutcome) {
        if self.pending != Some(outcome.ticket) {
            debug!(
                id = outcome.ticket.id,
                environment = %outcome.ticket.environment,
                "discarding stale diagnostics result"
            );
            return;
        }
        self.pending = None;
        self.throbber_idx = 0;

        match outcome.result {
            Ok(snapshot) => {
                info!(
                    environment = %outcome.ticket.environment,
                    extensions = snapshot.extensions.len(),
                    "diagnostics loaded"
                );
                if let Some(key) = self.view.selected_extension.as_deref()
                    && snapshot.extension_info(key).is_none()
                {
                    self.view.selected_extension = None;
                }
                self.load = LoadState::Ready(snapshot);
                let len = self.visible_links().len();
                self.extensions.cursor = self.extensions.cursor.min(len.saturating_sub(1));
            }
            Err(message) => {
                warn!(environment = %outcome.ticket.environment, %message, "diagnostics fetch failed");
                self.view.selected_extension = None;
                self.load = LoadState::Failed {
                    environment: outcome.ticket.environment,
                    message,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(extensions: serde_json::Value) -> Box<DiagnosticsSnapshot> {
        Box::new(
            serde_json::from_value(json!({
                "buildInfo": { "buildVersion": "1.0.0" },
                "extensions": extensions,
                "serverInfo": {}
            }))
            .expect("decode snapshot"),
        )
    }

    fn default_extensions() -> serde_json::Value {
        json!({
            "websites": { "extensionName": "websites", "config": {} },
            "paasserverless": { "extensionName": "paasserverless", "config": {} },
            "Broken": { "lastError": { "errorMessage": "failed", "time": "now" } }
        })
    }

    fn fetch_ticket(effects: &[Effect]) -> FetchTicket {
        match effects {
            [Effect::FetchDiagnostics(ticket)] => *ticket,
            other => panic!("expected a single fetch effect, got {other:?}"),
        }
    }

    /// App with the initial fetch for Public resolved.
    fn ready_app(extensions: serde_json::Value) -> App {
        let mut app = App::new(Environment::Public, Tab::Extensions);
        let ticket = fetch_ticket(&app.start());
        app.update(Msg::DiagnosticsLoaded(FetchOutcome {
            ticket,
            result: Ok(snapshot(extensions)),
        }));
        app
    }

    #[test]
    fn starts_loading_public_extensions() {
        let mut app = App::new(Environment::default(), Tab::default());
        assert!(matches!(app.load, LoadState::Loading { environment: Environment::Public }));
        assert_eq!(app.view.tab, Tab::Extensions);
        assert!(app.view.selected_extension.is_none());

        let ticket = fetch_ticket(&app.start());
        assert_eq!(ticket.environment, Environment::Public);
        assert!(app.snapshot().is_none());
        assert!(app.is_fetching());
    }

    #[test]
    fn environment_change_clears_selection_before_fetch_resolves() {
        let mut app = ready_app(default_extensions());
        app.update(Msg::SelectExtension("websites".into()));
        assert_eq!(app.view.selected_extension.as_deref(), Some("websites"));

        let effects = app.update(Msg::SelectEnvironment(Environment::Fairfax));
        let ticket = fetch_ticket(&effects);

        assert_eq!(ticket.environment, Environment::Fairfax);
        assert!(app.view.selected_extension.is_none());
        assert!(app.selected_extension().is_none());
        assert!(matches!(app.load, LoadState::Loading { environment: Environment::Fairfax }));
    }

    #[test]
    fn same_environment_clears_selection_without_fetch() {
        let mut app = ready_app(default_extensions());
        app.update(Msg::SelectExtension("websites".into()));

        let effects = app.update(Msg::SelectEnvironment(Environment::Public));
        assert!(effects.is_empty());
        assert!(app.view.selected_extension.is_none());
        assert!(app.snapshot().is_some());
    }

    #[test]
    fn tab_switch_keeps_selection_and_never_fetches() {
        let mut app = ready_app(default_extensions());
        app.update(Msg::SelectExtension("paasserverless".into()));

        for tab in [Tab::Build, Tab::Server, Tab::Extensions] {
            assert!(app.update(Msg::SelectTab(tab)).is_empty());
            assert_eq!(app.view.tab, tab);
            assert_eq!(app.view.selected_extension.as_deref(), Some("paasserverless"));
        }
        assert!(app.update(Msg::CycleTab { forward: true }).is_empty());
        assert_eq!(app.view.tab, Tab::Build);
        assert!(!app.is_fetching());
    }

    #[test]
    fn selecting_error_entry_is_a_no_op() {
        let mut app = ready_app(default_extensions());
        app.update(Msg::SelectExtension("websites".into()));

        let effects = app.update(Msg::SelectExtension("Broken".into()));
        assert!(effects.is_empty());
        assert_eq!(app.view.selected_extension.as_deref(), Some("websites"));

        app.update(Msg::SelectExtension("missing".into()));
        assert_eq!(app.view.selected_extension.as_deref(), Some("websites"));

        let mut app = ready_app(json!({
            "websites": { "extensionName": "websites" },
            "odd": { "something": true }
        }));
        app.update(Msg::SelectExtension("websites".into()));
        app.update(Msg::SelectExtension("odd".into()));
        assert_eq!(app.view.selected_extension.as_deref(), Some("websites"));
    }

    #[test]
    fn activating_a_link_selects_its_map_key() {
        let mut app = ready_app(json!({
            "Microsoft_Azure_Compute": { "extensionName": "Compute" }
        }));
        let links = app.visible_links();
        assert_eq!(links[0].key, "Microsoft_Azure_Compute");
        assert_eq!(links[0].display_name, "Compute");

        app.update(Msg::ActivateCursor);
        assert_eq!(app.view.selected_extension.as_deref(), Some("Microsoft_Azure_Compute"));
        assert_eq!(app.selected_extension().map(|info| info.name.as_str()), Some("Compute"));
    }

    #[test]
    fn selection_before_snapshot_is_ignored() {
        let mut app = App::new(Environment::Public, Tab::Extensions);
        app.start();
        app.update(Msg::SelectExtension("websites".into()));
        assert!(app.view.selected_extension.is_none());
    }

    #[test]
    fn paasserverless_shortcut_requires_valid_entry() {
        let app = ready_app(default_extensions());
        assert!(app.shortcut_offered(Shortcut::PaasServerless));
        assert_eq!(app.offered_shortcuts(), vec![Shortcut::PaasServerless, Shortcut::Websites]);

        let app = ready_app(json!({
            "websites": { "extensionName": "websites" },
            "paasserverless": { "lastError": { "errorMessage": "down", "time": "t" } }
        }));
        assert!(!app.shortcut_offered(Shortcut::PaasServerless));
        assert_eq!(app.offered_shortcuts(), vec![Shortcut::Websites]);

        let app = ready_app(json!({}));
        assert!(!app.shortcut_offered(Shortcut::PaasServerless));
        assert!(app.shortcut_offered(Shortcut::Websites));
    }

    #[test]
    fn websites_shortcut_goes_through_validity_guard() {
        let mut app = ready_app(json!({
            "paasserverless": { "extensionName": "paasserverless" },
            "websites": { "lastError": { "errorMessage": "down", "time": "t" } }
        }));
        app.update(Msg::Shortcut(Shortcut::PaasServerless));
        assert_eq!(app.view.selected_extension.as_deref(), Some("paasserverless"));

        app.update(Msg::Shortcut(Shortcut::Websites));
        assert_eq!(app.view.selected_extension.as_deref(), Some("paasserverless"));
    }

    #[test]
    fn stale_fetch_result_is_discarded() {
        let mut app = App::new(Environment::Public, Tab::Extensions);
        let slow = fetch_ticket(&app.start());
        let fast = fetch_ticket(&app.update(Msg::SelectEnvironment(Environment::Mooncake)));

        app.update(Msg::DiagnosticsLoaded(FetchOutcome {
            ticket: fast,
            result: Ok(snapshot(json!({ "mooncake-only": { "extensionName": "mooncake-only" } }))),
        }));
        app.update(Msg::DiagnosticsLoaded(FetchOutcome {
            ticket: slow,
            result: Ok(snapshot(json!({ "public-only": { "extensionName": "public-only" } }))),
        }));

        let snapshot = app.snapshot().expect("ready");
        assert!(snapshot.extensions.contains_key("mooncake-only"));
        assert!(!snapshot.extensions.contains_key("public-only"));
        assert_eq!(app.view.environment, Environment::Mooncake);
        assert!(!app.is_fetching());
    }

    #[test]
    fn stale_failure_does_not_replace_loading_state() {
        let mut app = App::new(Environment::Public, Tab::Extensions);
        let slow = fetch_ticket(&app.start());
        app.update(Msg::SelectEnvironment(Environment::Fairfax));

        app.update(Msg::DiagnosticsLoaded(FetchOutcome {
            ticket: slow,
            result: Err("timed out".into()),
        }));
        assert!(matches!(app.load, LoadState::Loading { environment: Environment::Fairfax }));
        assert!(app.is_fetching());
    }

    #[test]
    fn failure_of_current_fetch_is_surfaced() {
        let mut app = App::new(Environment::Public, Tab::Extensions);
        let ticket = fetch_ticket(&app.start());
        app.update(Msg::DiagnosticsLoaded(FetchOutcome {
            ticket,
            result: Err("request failed: connection refused".into()),
        }));

        match &app.load {
            LoadState::Failed { environment, message } => {
                assert_eq!(*environment, Environment::Public);
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        let retry = fetch_ticket(&app.update(Msg::Refresh));
        assert_eq!(retry.environment, Environment::Public);
        assert!(matches!(app.load, LoadState::Loading { .. }));
    }

    #[test]
    fn refresh_keeps_selection_only_while_still_valid() {
        let mut app = ready_app(default_extensions());
        app.update(Msg::SelectExtension("paasserverless".into()));

        let ticket = fetch_ticket(&app.update(Msg::Refresh));
        assert!(app.snapshot().is_some(), "snapshot stays visible while refreshing");
        app.update(Msg::DiagnosticsLoaded(FetchOutcome {
            ticket,
            result: Ok(snapshot(default_extensions())),
        }));
        assert_eq!(app.view.selected_extension.as_deref(), Some("paasserverless"));

        let ticket = fetch_ticket(&app.update(Msg::Refresh));
        app.update(Msg::DiagnosticsLoaded(FetchOutcome {
            ticket,
            result: Ok(snapshot(json!({
                "paasserverless": { "lastError": { "errorMessage": "now broken", "time": "t" } }
            }))),
        }));
        assert!(app.view.selected_extension.is_none());
    }

    #[test]
    fn cursor_navigation_and_activation() {
        let mut app = ready_app(json!({
            "c": { "extensionName": "c" },
            "a": { "extensionName": "a" },
            "err": { "lastError": { "errorMessage": "x", "time": "t" } },
            "b": { "extensionName": "b" }
        }));
        let keys: Vec<String> = app.visible_links().into_iter().map(|l| l.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);

        app.update(Msg::MoveCursor(1));
        app.update(Msg::ActivateCursor);
        assert_eq!(app.view.selected_extension.as_deref(), Some("b"));

        app.update(Msg::MoveCursor(10));
        assert_eq!(app.extensions.cursor, 2);
        app.update(Msg::MoveCursor(-10));
        assert_eq!(app.extensions.cursor, 0);
        app.update(Msg::CursorEnd);
        assert_eq!(app.extensions.cursor, 2);
        app.update(Msg::CursorHome);
        assert_eq!(app.extensions.cursor, 0);
    }

    #[test]
    fn filter_narrows_visible_links() {
        let mut app = ready_app(default_extensions());
        app.update(Msg::FilterChar('x'));
        assert!(app.extensions.filter.is_empty(), "typing is ignored until filter starts");

        app.update(Msg::FilterStart);
        for ch in "PAAS".chars() {
            app.update(Msg::FilterChar(ch));
        }
        let keys: Vec<String> = app.visible_links().into_iter().map(|l| l.key).collect();
        assert_eq!(keys, vec!["paasserverless"]);

        app.update(Msg::ActivateCursor);
        assert_eq!(app.view.selected_extension.as_deref(), Some("paasserverless"));

        app.update(Msg::FilterClear);
        assert!(!app.extensions.filter_active);
        assert_eq!(app.visible_links().len(), 2);
    }

    #[test]
    fn environment_menu_confirms_highlighted_entry() {
        let mut app = ready_app(default_extensions());
        app.update(Msg::OpenEnvironmentMenu);
        assert!(app.environment_menu.open);
        assert_eq!(app.environment_menu.highlighted, 0);

        app.update(Msg::MoveEnvironmentMenu(-1));
        assert_eq!(app.environment_menu.highlighted, 2);

        let ticket = fetch_ticket(&app.update(Msg::ConfirmEnvironmentMenu));
        assert_eq!(ticket.environment, Environment::Mooncake);
        assert!(!app.environment_menu.open);
    }

    #[test]
    fn detail_scroll_resets_on_new_selection() {
        let mut app = ready_app(default_extensions());
        app.update(Msg::SelectExtension("websites".into()));
        app.update(Msg::ScrollDetail(5));
        assert_eq!(app.extensions.detail_offset, 5);
        app.update(Msg::ScrollDetail(-10));
        assert_eq!(app.extensions.detail_offset, 0);

        app.update(Msg::ScrollDetail(3));
        app.update(Msg::SelectExtension("paasserverless".into()));
        assert_eq!(app.extensions.detail_offset, 0);
    }

    #[test]
    fn tick_advances_throbber_only_while_fetching() {
        let mut app = App::new(Environment::Public, Tab::Extensions);
        app.update(Msg::Tick);
        assert_eq!(app.throbber_idx, 0);

        app.start();
        app.update(Msg::Tick);
        assert_eq!(app.throbber_idx, 1);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new(Environment::Public, Tab::Extensions);
        app.update(Msg::Quit);
        assert!(app.should_quit);
    }
}
