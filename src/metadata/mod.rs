//! Host project descriptor loading from a single package.json

use crate::assembler::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// The host project's `package.json`, kept as an opaque JSON document.
///
/// Only `name` and `version` are read (for log lines); everything else is
/// relayed to the output manifest untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct HostDescriptor {
    value: Value,
}

impl HostDescriptor {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Package name, when present.
    pub fn name(&self) -> Option<&str> {
        self.value.get("name").and_then(Value::as_str)
    }

    /// Package version, when present.
    pub fn version(&self) -> Option<&str> {
        self.value.get("version").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

/// Loads the host descriptor (single read + parse).
///
/// # Errors
///
/// - `MissingInput` when the file does not exist
/// - `Encoding` when it cannot be read
/// - `InvalidDescriptor` when it is not JSON
pub async fn load_host_descriptor(path: &Path) -> Result<HostDescriptor> {
    let content = match tokio::fs::read(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingInput {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(Error::Encoding {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value = serde_json::from_slice(&content).map_err(|source| Error::InvalidDescriptor {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(HostDescriptor::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn loads_name_and_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{ "name": "my-app", "version": "1.2.3" }"#).unwrap();

        let descriptor = load_host_descriptor(&path).await.unwrap();
        assert_eq!(descriptor.name(), Some("my-app"));
        assert_eq!(descriptor.version(), Some("1.2.3"));
        assert_eq!(
            descriptor.as_value(),
            &json!({ "name": "my-app", "version": "1.2.3" })
        );
    }

    #[tokio::test]
    async fn missing_file_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_host_descriptor(&dir.path().join("package.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{ name: ").unwrap();
        let err = load_host_descriptor(&path).await.unwrap_err();
        assert!(matches!(err, Error::InvalidDescriptor { .. }));
    }
}
