use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use extdash_api::{ClientOptions, DiagnosticsClient, DiagnosticsSource};
use extdash_tui::{
    RunOptions,
    tables::{KeyValueRow, build_info_rows, configuration_rows, server_info_rows, stage_definition_rows},
};
use extdash_types::{DiagnosticsSnapshot, Environment, ExtensionEntry, Tab};
use extdash_util::{LogTarget, format_key_value_table, init_tracing, resolve_log_path};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "extdash", version, about = "Diagnostics dashboard for extension hosting environments")]
struct Cli {
    /// Environment to query: public, fairfax or mooncake
    #[arg(long, short = 'e', global = true, default_value = "public")]
    environment: Environment,

    /// Tab shown when the dashboard opens: extensions, build or server
    #[arg(long, short = 't', default_value = "extensions")]
    tab: Tab,

    /// Whole-request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum Command {
    /// Print the build information table
    Build,
    /// Print the server information table
    Server,
    /// List the keys of all valid extensions, sorted
    Extensions,
    /// Print one extension's configuration and stage definitions
    Extension {
        /// Key in the extensions map
        key: String,
    },
    /// Print the decoded diagnostics payload as JSON
    Dump,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let source: Arc<dyn DiagnosticsSource> = Arc::new(client(cli.timeout_secs)?);

    // No subcommand => TUI
    let Some(command) = cli.command else {
        init_tracing(&LogTarget::File(resolve_log_path()))?;
        let options = RunOptions {
            environment: cli.environment,
            tab: cli.tab,
        };
        return extdash_tui::run(source, options).await;
    };

    init_tracing(&LogTarget::Stderr)?;
    let snapshot = fetch(source.as_ref(), cli.environment).await?;
    let output = render_command(&command, &snapshot)?;
    println!("{output}");
    Ok(())
}

fn client(timeout_secs: Option<u64>) -> Result<DiagnosticsClient> {
    let options = ClientOptions {
        timeout: timeout_secs.map(Duration::from_secs),
    };
    DiagnosticsClient::new(options).context("build HTTP client")
}

async fn fetch(source: &dyn DiagnosticsSource, environment: Environment) -> Result<DiagnosticsSnapshot> {
    let url = environment.url();
    debug!(%environment, url, "fetching diagnostics");
    let snapshot = source
        .fetch(url)
        .await
        .with_context(|| format!("fetch diagnostics for {environment}"))?;
    info!(%environment, extensions = snapshot.extensions.len(), "diagnostics loaded");
    Ok(snapshot)
}

fn table(headers: [&str; 2], rows: Vec<KeyValueRow>) -> String {
    let rows: Vec<(String, String)> = rows.into_iter().map(Into::into).collect();
    format_key_value_table(headers, &rows)
}

fn render_command(command: &Command, snapshot: &DiagnosticsSnapshot) -> Result<String> {
    let output = match command {
        Command::Build => table(["Name", "Value"], build_info_rows(&snapshot.build_info)),
        Command::Server => table(["Name", "Value"], server_info_rows(&snapshot.server_info)),
        Command::Extensions => snapshot
            .nav_links()
            .into_iter()
            .map(|link| link.key)
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Extension { key } => render_extension(snapshot, key)?,
        Command::Dump => serde_json::to_string_pretty(snapshot)?,
    };
    Ok(output)
}

fn render_extension(snapshot: &DiagnosticsSnapshot, key: &str) -> Result<String> {
    match snapshot.extensions.get(key) {
        Some(ExtensionEntry::Info(info)) => {
            let mut sections = vec![info.name.clone()];
            if let Some(config) = &info.config {
                sections.push(format!("\nConfiguration\n{}", table(["Key", "Value"], configuration_rows(config))));
            }
            if let Some(stage_definition) = &info.stage_definition {
                sections.push(format!(
                    "\nStage Definitions\n{}",
                    table(["Key", "Value"], stage_definition_rows(stage_definition))
                ));
            }
            Ok(sections.join("\n"))
        }
        Some(ExtensionEntry::Error(error)) => Ok(format!(
            "{key}: last error at {}: {}",
            error.last_error.timestamp, error.last_error.message
        )),
        Some(ExtensionEntry::Malformed(_)) => bail!("extension '{key}' has an unrecognized shape"),
        None => bail!("unknown extension '{key}'"),
    }
}
