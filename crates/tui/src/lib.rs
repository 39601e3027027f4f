//! # Extension Diagnostics TUI
//!
//! Terminal dashboard over the hosting service's diagnostics endpoint for
//! the Public, Fairfax and Mooncake environments. It shows the loaded
//! extensions with their configuration and stage definitions, the build
//! version and the serving host's details.
//!
//! ## Architecture
//!
//! All state lives in [`app::App`], updated through `Msg` values. Updates
//! return `Effect`s which [`cmd`] turns into spawned fetches; the runtime
//! feeds their outcomes back as messages. Each UI element is a component
//! that routes input and renders itself.

mod app;
mod cmd;
pub mod tables;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use extdash_api::DiagnosticsSource;
use extdash_types::{Environment, Tab};

/// Initial view for [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub environment: Environment,
    pub tab: Tab,
}

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be set up or drawn to. Fetch failures
/// are shown in the dashboard instead.
pub async fn run(source: Arc<dyn DiagnosticsSource>, options: RunOptions) -> Result<()> {
    ui::runtime::run_app(source, options).await
}
