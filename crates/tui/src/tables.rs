//! Row projections for the two-column diagnostics tables.
//!
//! Each function maps part of a snapshot onto `name`/`value` rows. They are
//! pure and shared by the terminal views and the plain-text print commands.

use extdash_types::{BuildInfo, ServerInfo};
use extdash_util::{format_number, join_values};
use indexmap::IndexMap;

/// One row of a two-column table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueRow {
    pub name: String,
    pub value: String,
}

impl KeyValueRow {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<KeyValueRow> for (String, String) {
    fn from(row: KeyValueRow) -> Self {
        (row.name, row.value)
    }
}

pub const BUILD_VERSION_LABEL: &str = "Build Version";

/// Server row labels, in display order.
pub const SERVER_LABELS: [&str; 6] = [
    "Hostname",
    "Uptime",
    "Server ID",
    "Deployment ID",
    "Node Versions",
    "Extension Sync | Total Sync All Count",
];

pub fn build_info_rows(build_info: &BuildInfo) -> Vec<KeyValueRow> {
    vec![KeyValueRow::new(BUILD_VERSION_LABEL, build_info.build_version.as_str())]
}

/// Exactly six rows in fixed order; empty values still get a row.
pub fn server_info_rows(server_info: &ServerInfo) -> Vec<KeyValueRow> {
    let values = [
        server_info.hostname.clone(),
        format_number(server_info.uptime),
        server_info.server_id.clone(),
        server_info.deployment_id.clone(),
        server_info.node_versions.clone(),
        format_number(server_info.extension_sync.total_sync_all_count),
    ];
    SERVER_LABELS
        .iter()
        .zip(values)
        .map(|(label, value)| KeyValueRow::new(*label, value))
        .collect()
}

/// Configuration entries in source order.
pub fn configuration_rows(config: &IndexMap<String, String>) -> Vec<KeyValueRow> {
    config
        .iter()
        .map(|(key, value)| KeyValueRow::new(key.as_str(), value.as_str()))
        .collect()
}

/// Stage definitions in source order, values joined with `", "`.
pub fn stage_definition_rows(stage_definition: &IndexMap<String, Vec<String>>) -> Vec<KeyValueRow> {
    stage_definition
        .iter()
        .map(|(key, values)| KeyValueRow::new(key.as_str(), join_values(values)))
        .collect()
}
