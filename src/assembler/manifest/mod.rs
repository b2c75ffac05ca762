//! Output manifest synthesis.
//!
//! The output `package.json` is the host project's descriptor with two fields
//! defaulted: `main` (the Electron entry point) and `config.forge` (the
//! packager configuration path). The host descriptor is only borrowed, so the
//! caller's value can never observe the defaults being written.

mod advisory;

pub use advisory::{check_advisories, AdvisorySink, LogAdvisorySink, WELCOME_PAGE_ADVISORY};

use crate::assembler::error::{Error, Result};
use bytes::Bytes;
use serde_json::{Map, Value};

/// Fallback values for fields the host descriptor leaves unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDefaults {
    /// Path of the main process script, relative to the output root.
    pub entry_point: String,
    /// Path of the packager configuration, relative to the output root.
    pub config_path: String,
}

impl Default for ManifestDefaults {
    fn default() -> Self {
        Self {
            entry_point: "ember-electron/main.js".to_string(),
            config_path: "ember-electron/.electron-forge".to_string(),
        }
    }
}

/// The synthesized output descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// Value of `main`.
    pub fn main(&self) -> Option<&str> {
        self.0.get("main").and_then(Value::as_str)
    }

    /// Value of `config.forge`.
    pub fn forge_config(&self) -> Option<&str> {
        self.0
            .get("config")
            .and_then(|c| c.get("forge"))
            .and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Renders the manifest with two-space indentation.
    ///
    /// Key order follows the host descriptor, with added keys last.
    pub fn to_json(&self) -> Result<Bytes> {
        let rendered = serde_json::to_vec_pretty(&self.0).map_err(|source| Error::Serialization {
            what: "package.json",
            source,
        })?;
        Ok(Bytes::from(rendered))
    }
}

/// Builds the output manifest from the host descriptor.
///
/// - `main` keeps the host value when truthy, else `defaults.entry_point`.
/// - `config` becomes an object when it is not one; its other keys survive.
/// - `config.forge` keeps the host value when truthy, else
///   `defaults.config_path`.
///
/// A descriptor that is not a JSON object is treated as an empty one.
pub fn synthesize(host: &Value, defaults: &ManifestDefaults) -> Manifest {
    let mut manifest = host.as_object().cloned().unwrap_or_default();

    if !manifest.get("main").is_some_and(is_truthy) {
        manifest.insert("main".to_string(), Value::String(defaults.entry_point.clone()));
    }

    let config = manifest
        .entry("config")
        .or_insert_with(|| Value::Object(Map::new()));
    if !config.is_object() {
        *config = Value::Object(Map::new());
    }
    if let Value::Object(config) = config {
        if !config.get("forge").is_some_and(is_truthy) {
            config.insert("forge".to_string(), Value::String(defaults.config_path.clone()));
        }
    }

    Manifest(manifest)
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
