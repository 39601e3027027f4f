//! Diagnostics payload model and the extension classifier.
//!
//! The payload returned by a hosting diagnostics endpoint is decoded into a
//! [`DiagnosticsSnapshot`]. Each value of the `extensions` map is narrowed by
//! [`ExtensionEntry::classify`], which is the only place an entry is built:
//! a record carrying an `extensionName` becomes [`ExtensionEntry::Info`], a
//! record carrying a `lastError` becomes [`ExtensionEntry::Error`], and
//! anything else is retained as [`ExtensionEntry::Malformed`] so a single bad
//! entry never fails the whole payload.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ordered map of extension key to entry, in payload order.
pub type ExtensionMap = IndexMap<String, ExtensionEntry>;

/// One decoded diagnostics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsSnapshot {
    #[serde(default)]
    pub build_info: BuildInfo,
    #[serde(default)]
    pub extensions: ExtensionMap,
    #[serde(default)]
    pub server_info: ServerInfo,
}

impl DiagnosticsSnapshot {
    /// Resolve `key` to a valid extension, if it is one.
    pub fn extension_info(&self, key: &str) -> Option<&ExtensionInfo> {
        self.extensions.get(key).and_then(ExtensionEntry::as_info)
    }

    /// Sorted navigation links for every valid extension.
    pub fn nav_links(&self) -> Vec<NavLink> {
        nav_links(&self.extensions)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    #[serde(default)]
    pub build_version: String,
}

/// Scalar server facts. Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerInfo {
    pub hostname: String,
    pub uptime: f64,
    pub server_id: String,
    pub deployment_id: String,
    pub node_versions: String,
    pub extension_sync: ExtensionSync,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionSync {
    pub total_sync_all_count: f64,
}

/// A valid, navigable extension record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionInfo {
    #[serde(rename = "extensionName")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_definition: Option<IndexMap<String, Vec<String>>>,
}

/// An extension that failed to load on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionError {
    pub last_error: LastError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastError {
    #[serde(rename = "errorMessage", default)]
    pub message: String,
    #[serde(rename = "time", default)]
    pub timestamp: String,
}

/// A value of the `extensions` map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtensionEntry {
    Info(ExtensionInfo),
    Error(ExtensionError),
    /// Neither shape; kept verbatim and excluded from every view.
    Malformed(Value),
}

impl ExtensionEntry {
    /// Narrow a raw JSON record into an entry.
    ///
    /// A record with a string `extensionName` is always an extension, even
    /// when it also carries `lastError` or its optional tables are irregular.
    pub fn classify(value: Value) -> Self {
        if let Some(name) = value.get("extensionName").and_then(Value::as_str) {
            return Self::Info(ExtensionInfo {
                name: name.to_string(),
                config: value.get("config").and_then(lenient_config),
                stage_definition: value.get("stageDefinition").and_then(lenient_stage_definition),
            });
        }
        if value.get("lastError").is_some_and(Value::is_object) {
            return match serde_json::from_value::<ExtensionError>(value.clone()) {
                Ok(error) => Self::Error(error),
                Err(_) => Self::Malformed(value),
            };
        }
        Self::Malformed(value)
    }

    pub fn as_info(&self) -> Option<&ExtensionInfo> {
        match self {
            Self::Info(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ExtensionError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Table cell text for an arbitrary JSON value; `null` is empty.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `None` unless `value` is an object.
fn lenient_config(value: &Value) -> Option<IndexMap<String, String>> {
    let object = value.as_object()?;
    Some(object.iter().map(|(key, value)| (key.clone(), cell_text(value))).collect())
}

/// `None` unless `value` is an object. A non-array stage value becomes a
/// single element; `null` becomes an empty list.
fn lenient_stage_definition(value: &Value) -> Option<IndexMap<String, Vec<String>>> {
    let object = value.as_object()?;
    let stages = object
        .iter()
        .map(|(key, value)| {
            let values = match value {
                Value::Array(items) => items.iter().map(cell_text).collect(),
                Value::Null => Vec::new(),
                other => vec![cell_text(other)],
            };
            (key.clone(), values)
        })
        .collect();
    Some(stages)
}

impl<'de> Deserialize<'de> for ExtensionEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ExtensionEntry::classify)
    }
}

/// Returns `true` when `entry` exists and is a valid extension.
pub fn is_extension_info(entry: Option<&ExtensionEntry>) -> bool {
    matches!(entry, Some(ExtensionEntry::Info(_)))
}

/// A derived, clickable reference to a valid extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub key: String,
    pub display_name: String,
    pub url: String,
}

/// Link for the entry stored under `key`; the label is the extension's name.
pub fn to_nav_link(key: &str, info: &ExtensionInfo) -> NavLink {
    NavLink {
        key: key.to_string(),
        display_name: info.name.clone(),
        url: String::new(),
    }
}

/// Plain byte-wise ordering of link keys; no locale collation.
pub fn by_key(a: &NavLink, b: &NavLink) -> Ordering {
    a.key.cmp(&b.key)
}

/// Build the navigation list: valid extensions only, sorted by key.
pub fn nav_links(extensions: &ExtensionMap) -> Vec<NavLink> {
    let mut links: Vec<NavLink> = extensions
        .iter()
        .filter_map(|(key, entry)| entry.as_info().map(|info| to_nav_link(key, info)))
        .collect();
    links.sort_by(by_key);
    links
}

/// Case-insensitive substring filter over display names.
pub fn filter_nav_links<'a>(links: &'a [NavLink], query: &str) -> Vec<&'a NavLink> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return links.iter().collect();
    }
    links
        .iter()
        .filter(|link| link.display_name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "buildInfo": { "buildVersion": "8.123.0.1" },
            "extensions": {
                "websites": {
                    "extensionName": "websites",
                    "config": { "zeta": "1", "alpha": "2" },
                    "stageDefinition": { "stage1": ["a", "b"], "empty": [] }
                },
                "Broken": { "lastError": { "errorMessage": "boom", "time": "2024-01-01T00:00:00Z" } },
                "paasserverless": { "extensionName": "paasserverless" },
                "weird": 42,
                "Compute": { "extensionName": "Compute", "config": {} }
            },
            "serverInfo": {
                "hostname": "host-1",
                "uptime": 12.5,
                "serverId": "srv",
                "deploymentId": "dep",
                "nodeVersions": "v20.1.0",
                "extensionSync": { "totalSyncAllCount": 7 }
            }
        })
    }

    #[test]
    fn decodes_full_payload() {
        let snapshot: DiagnosticsSnapshot = serde_json::from_value(sample_payload()).expect("decode snapshot");
        assert_eq!(snapshot.build_info.build_version, "8.123.0.1");
        assert_eq!(snapshot.extensions.len(), 5);
        assert_eq!(snapshot.server_info.hostname, "host-1");
        assert_eq!(snapshot.server_info.uptime, 12.5);
        assert_eq!(snapshot.server_info.extension_sync.total_sync_all_count, 7.0);

        let websites = snapshot.extension_info("websites").expect("websites is valid");
        let config_keys: Vec<&str> = websites.config.as_ref().unwrap().keys().map(String::as_str).collect();
        assert_eq!(config_keys, vec!["zeta", "alpha"]);

        let broken = snapshot.extensions.get("Broken").and_then(ExtensionEntry::as_error).expect("error entry");
        assert_eq!(broken.last_error.message, "boom");
        assert_eq!(broken.last_error.timestamp, "2024-01-01T00:00:00Z");
        assert!(matches!(snapshot.extensions.get("weird"), Some(ExtensionEntry::Malformed(_))));
    }

    #[test]
    fn is_extension_info_only_for_named_entries() {
        let info = ExtensionEntry::classify(json!({ "extensionName": "x" }));
        let error = ExtensionEntry::classify(json!({ "lastError": { "errorMessage": "m", "time": "t" } }));
        let malformed = ExtensionEntry::classify(json!({ "something": true }));
        let wrong_type = ExtensionEntry::classify(json!({ "extensionName": 3 }));

        assert!(is_extension_info(Some(&info)));
        assert!(!is_extension_info(Some(&error)));
        assert!(!is_extension_info(Some(&malformed)));
        assert!(!is_extension_info(Some(&wrong_type)));
        assert!(!is_extension_info(None));
    }

    #[test]
    fn named_entries_with_irregular_tables_stay_extensions() {
        let null_stage = ExtensionEntry::classify(json!({
            "extensionName": "nullstage",
            "stageDefinition": { "s": null, "single": "x", "mixed": ["a", 1, null] }
        }));
        let numeric_config = ExtensionEntry::classify(json!({
            "extensionName": "retrying",
            "config": { "retries": 3, "enabled": true, "name": "r", "unset": null }
        }));
        let wrong_shapes = ExtensionEntry::classify(json!({
            "extensionName": "shapes",
            "config": [1, 2],
            "stageDefinition": "nope"
        }));

        assert!(is_extension_info(Some(&null_stage)));
        assert!(is_extension_info(Some(&numeric_config)));
        assert!(is_extension_info(Some(&wrong_shapes)));

        let stages = null_stage.as_info().and_then(|info| info.stage_definition.clone()).unwrap();
        assert_eq!(stages["s"], Vec::<String>::new());
        assert_eq!(stages["single"], vec!["x"]);
        assert_eq!(stages["mixed"], vec!["a", "1", ""]);

        let config = numeric_config.as_info().and_then(|info| info.config.clone()).unwrap();
        let values: Vec<&str> = config.values().map(String::as_str).collect();
        assert_eq!(values, vec!["3", "true", "r", ""]);

        let shapes = wrong_shapes.as_info().unwrap();
        assert!(shapes.config.is_none());
        assert!(shapes.stage_definition.is_none());

        let snapshot: DiagnosticsSnapshot = serde_json::from_value(json!({
            "extensions": { "retrying": { "extensionName": "retrying", "config": { "retries": 3 } } }
        }))
        .unwrap();
        assert_eq!(snapshot.nav_links().len(), 1);
    }

    #[test]
    fn link_key_is_the_map_key() {
        let snapshot: DiagnosticsSnapshot = serde_json::from_value(json!({
            "extensions": {
                "Microsoft_Azure_Compute": { "extensionName": "Compute" },
                "Microsoft_Azure_Storage": { "extensionName": "Compute" }
            }
        }))
        .unwrap();
        let links = snapshot.nav_links();

        let keys: Vec<&str> = links.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["Microsoft_Azure_Compute", "Microsoft_Azure_Storage"]);
        assert!(links.iter().all(|l| l.display_name == "Compute"));
        assert!(links.iter().all(|l| snapshot.extension_info(&l.key).is_some()));
    }

    #[test]
    fn name_wins_over_last_error() {
        let entry = ExtensionEntry::classify(json!({
            "extensionName": "both",
            "lastError": { "errorMessage": "m", "time": "t" }
        }));
        assert_eq!(entry.as_info().map(|info| info.name.as_str()), Some("both"));
    }

    #[test]
    fn nav_links_are_filtered_and_sorted() {
        let snapshot: DiagnosticsSnapshot = serde_json::from_value(sample_payload()).unwrap();
        let links = snapshot.nav_links();
        let valid = snapshot.extensions.values().filter(|e| is_extension_info(Some(e))).count();

        assert_eq!(links.len(), valid);
        let keys: Vec<&str> = links.iter().map(|l| l.key.as_str()).collect();
        // Uppercase sorts before lowercase in plain string order.
        assert_eq!(keys, vec!["Compute", "paasserverless", "websites"]);
        assert!(links.windows(2).all(|pair| pair[0].key <= pair[1].key));
        assert!(links.iter().all(|l| l.url.is_empty() && l.display_name == l.key));
    }

    #[test]
    fn filter_matches_case_insensitively() {
        let snapshot: DiagnosticsSnapshot = serde_json::from_value(sample_payload()).unwrap();
        let links = snapshot.nav_links();

        let filtered = filter_nav_links(&links, "WEB");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].key, "websites");
        assert_eq!(filter_nav_links(&links, "  ").len(), links.len());
        assert!(filter_nav_links(&links, "nothing-matches").is_empty());
    }

    #[test]
    fn partial_server_info_uses_defaults() {
        let snapshot: DiagnosticsSnapshot = serde_json::from_value(json!({
            "buildInfo": { "buildVersion": "1.0.0" },
            "extensions": {},
            "serverInfo": { "serverName": "test-server" }
        }))
        .unwrap();
        assert_eq!(snapshot.server_info, ServerInfo::default());
    }

    #[test]
    fn serializes_back_to_wire_names() {
        let snapshot: DiagnosticsSnapshot = serde_json::from_value(sample_payload()).unwrap();
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["extensions"]["paasserverless"]["extensionName"], "paasserverless");
        assert_eq!(value["extensions"]["Broken"]["lastError"]["errorMessage"], "boom");
        assert_eq!(value["extensions"]["weird"], 42);
        assert_eq!(value["serverInfo"]["extensionSync"]["totalSyncAllCount"], 7.0);
    }
}
