//! Settings Module
//!
//! Layered settings document consulted for log-level resolution:
//! - private root: top-level `UserAccounts` section
//! - public root: `UserAccounts` section under the `public` key

use crate::core::Result;
use crate::logging::Logger;
use serde_json::Value;
use std::path::Path;

/// Key of the accounts section under each settings root.
pub const SECTION_KEY: &str = "UserAccounts";

/// Key of the public root inside the settings document.
pub const PUBLIC_KEY: &str = "public";

const LOG_LEVEL_KEY: &str = "logLevel";

/// Settings roots in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Root {
    Private,
    Public,
}

/// A layered settings document.
///
/// Any part of the document may be absent; lookups on missing sections
/// resolve to nothing rather than failing.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    doc: Value,
}

impl Settings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-parsed settings document.
    pub fn from_value(doc: Value) -> Self {
        Self { doc }
    }

    /// Parse a settings document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            doc: serde_json::from_str(json)?,
        })
    }

    /// Load a settings document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Raw settings document.
    pub fn as_value(&self) -> &Value {
        &self.doc
    }

    fn section(&self, root: Root) -> Option<&Value> {
        match root {
            Root::Private => self.doc.get(SECTION_KEY),
            Root::Public => self.doc.get(PUBLIC_KEY).and_then(|p| p.get(SECTION_KEY)),
        }
    }

    /// Resolve the configured log level for a logger, if any.
    ///
    /// Precedence, first match wins: private sub-section, private
    /// top-level, public sub-section, public top-level. The sub-section
    /// key is the logger-name component after the namespace separator.
    pub fn log_level_for(&self, logger: &Logger) -> Option<&str> {
        for root in [Root::Private, Root::Public] {
            if let Some(section) = self.section(root) {
                if let Some(sub) = logger.sub() {
                    let scoped = section
                        .get(sub)
                        .and_then(|s| s.get(LOG_LEVEL_KEY))
                        .and_then(Value::as_str);
                    if let Some(level) = scoped {
                        return Some(level);
                    }
                }
                if let Some(level) = section.get(LOG_LEVEL_KEY).and_then(Value::as_str) {
                    return Some(level);
                }
            }
        }
        None
    }
}
