//! Target platform identifiers.

use crate::assembler::error::{Error, Result};
use std::fmt;

/// Operating system identifier selecting platform-qualified resources.
///
/// Uses the Node.js naming (`darwin`, `win32`, `linux`, ...) that Electron
/// tooling expects in directory names such as `resources-darwin`. The set is
/// open; any single path component is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlatformId(String);

impl PlatformId {
    /// Validates an explicit identifier.
    pub fn new(id: &str) -> Result<Self> {
        let valid = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\'])
            && !id.chars().any(char::is_whitespace);
        if valid {
            Ok(Self(id.to_string()))
        } else {
            Err(Error::InvalidPlatform(id.to_string()))
        }
    }

    /// The platform the assembler is running on.
    pub fn host() -> Self {
        Self(node_platform_name(std::env::consts::OS).to_string())
    }

    /// An explicit override when given and non-empty, else the host platform.
    pub fn resolve(override_id: Option<&str>) -> Result<Self> {
        match override_id.map(str::trim) {
            Some(id) if !id.is_empty() => Self::new(id),
            _ => Ok(Self::host()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn node_platform_name(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        "solaris" | "illumos" => "sunos",
        other => other,
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
