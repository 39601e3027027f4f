//! # Command Execution Layer
//!
//! This module translates application effects ([`Effect`]) into imperative
//! commands ([`Cmd`]) and executes them. It is the boundary where the pure
//! state in [`crate::app::App`] meets I/O:
//! - [`from_effects`] translates state-driven effects into commands.
//! - [`run_cmds`] spawns each command on the Tokio runtime and returns a
//!   future per command that resolves to its [`FetchOutcome`].
//!
//! Results are fed back into the app as `Msg::DiagnosticsLoaded`; the app
//! decides whether a result is still current.

use std::sync::Arc;

use extdash_api::DiagnosticsSource;
use extdash_types::{Effect, FetchOutcome, FetchTicket};
use futures_util::future::BoxFuture;
use tokio::task::spawn;
use tracing::debug;

/// A spawned command whose outcome has not been collected yet.
pub type PendingCmd = BoxFuture<'static, FetchOutcome>;

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// GET the diagnostics endpoint of the ticket's environment.
    FetchDiagnostics(FetchTicket),
}

/// Convert application [`Effect`]s into [`Cmd`]s.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .map(|effect| match effect {
            Effect::FetchDiagnostics(ticket) => Cmd::FetchDiagnostics(ticket),
        })
        .collect()
}

/// Spawn each command and return its pending outcome.
pub fn run_cmds(source: &Arc<dyn DiagnosticsSource>, commands: Vec<Cmd>) -> Vec<PendingCmd> {
    commands
        .into_iter()
        .map(|command| match command {
            Cmd::FetchDiagnostics(ticket) => fetch_diagnostics(Arc::clone(source), ticket),
        })
        .collect()
}

/// Convenience wrapper for `run_cmds(from_effects(..))`.
pub fn run_from_effects(source: &Arc<dyn DiagnosticsSource>, effects: Vec<Effect>) -> Vec<PendingCmd> {
    run_cmds(source, from_effects(effects))
}

fn fetch_diagnostics(source: Arc<dyn DiagnosticsSource>, ticket: FetchTicket) -> PendingCmd {
    let handle = spawn(async move {
        let url = ticket.environment.url();
        debug!(id = ticket.id, url, "diagnostics fetch started");
        let result = source.fetch(url).await.map(Box::new).map_err(|error| error.to_string());
        FetchOutcome { ticket, result }
    });

    Box::pin(async move {
        handle.await.unwrap_or_else(|error| FetchOutcome {
            ticket,
            result: Err(format!("fetch task failed: {error}")),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use extdash_api::FetchError;
    use extdash_types::{DiagnosticsSnapshot, Environment};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSource {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl DiagnosticsSource for RecordingSource {
        async fn fetch(&self, url: &str) -> Result<DiagnosticsSnapshot, FetchError> {
            self.urls.lock().unwrap().push(url.to_string());
            if url.contains("chinacloudapi") {
                return Err(FetchError::InvalidEndpoint {
                    url: url.to_string(),
                    reason: "offline".into(),
                });
            }
            Ok(serde_json::from_str(r#"{"buildInfo":{"buildVersion":"9"}}"#).unwrap())
        }
    }

    #[test]
    fn effects_map_to_fetch_commands() {
        let ticket = FetchTicket {
            id: 4,
            environment: Environment::Fairfax,
        };
        assert_eq!(from_effects(vec![Effect::FetchDiagnostics(ticket)]), vec![Cmd::FetchDiagnostics(ticket)]);
    }

    #[tokio::test]
    async fn fetch_uses_environment_url_and_keeps_ticket() {
        let recording = Arc::new(RecordingSource::default());
        let source: Arc<dyn DiagnosticsSource> = recording.clone();
        let ok_ticket = FetchTicket {
            id: 1,
            environment: Environment::Fairfax,
        };
        let err_ticket = FetchTicket {
            id: 2,
            environment: Environment::Mooncake,
        };

        let pending = run_from_effects(
            &source,
            vec![Effect::FetchDiagnostics(ok_ticket), Effect::FetchDiagnostics(err_ticket)],
        );
        let mut outcomes = Vec::new();
        for future in pending {
            outcomes.push(future.await);
        }

        assert_eq!(outcomes[0].ticket, ok_ticket);
        assert_eq!(outcomes[0].result.as_ref().unwrap().build_info.build_version, "9");
        assert_eq!(outcomes[1].ticket, err_ticket);
        assert!(outcomes[1].result.as_ref().unwrap_err().contains("offline"));

        let mut urls = recording.urls.lock().unwrap().clone();
        urls.sort();
        assert_eq!(urls, vec![Environment::Fairfax.url(), Environment::Mooncake.url()]);
    }
}
