//! Common types used across the accounts registry.

use serde::{Deserialize, Serialize};

/// Kind tag declared by every registrable unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Participates in configuration fan-out and lifecycle
    Module,
    /// Participates in lifecycle only
    Plugin,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitKind::Module => write!(f, "module"),
            UnitKind::Plugin => write!(f, "plugin"),
        }
    }
}

/// Timestamp wrapper for consistent serialization.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Get current UTC timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_kind_display() {
        assert_eq!(UnitKind::Module.to_string(), "module");
        assert_eq!(UnitKind::Plugin.to_string(), "plugin");
    }
}
