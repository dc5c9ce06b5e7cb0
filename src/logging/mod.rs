//! Logging Module
//!
//! Provides verbosity control for named loggers:
//! - Log levels
//! - Namespaced logger names
//! - Per-logger level registry
//! - Tracing subscriber setup

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::RwLock;

/// Separator between a logger's base name and sub name.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace = 0,
    /// Debug level
    Debug = 1,
    /// Info level
    Info = 2,
    /// Warning level
    Warn = 3,
    /// Error level
    Error = 4,
    /// Fatal level
    Fatal = 5,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Fatal => write!(f, "FATAL"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(Error::UnknownLogLevel(s.to_string())),
        }
    }
}

/// A named logger handle.
///
/// Names are optionally namespaced with a single separator, e.g.
/// `"useraccounts:enrollment"` has base `"useraccounts"` and sub
/// `"enrollment"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Create a logger with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Full logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name component before the namespace separator.
    pub fn base(&self) -> &str {
        match self.name.split_once(NAMESPACE_SEPARATOR) {
            Some((base, _)) => base,
            None => &self.name,
        }
    }

    /// Name component after the namespace separator, if any.
    pub fn sub(&self) -> Option<&str> {
        self.name.split_once(NAMESPACE_SEPARATOR).map(|(_, sub)| sub)
    }
}

impl std::fmt::Display for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Collaborator receiving resolved log levels.
pub trait LevelSink {
    /// Set the level for a named logger.
    fn set_level(&self, logger: &str, level: LogLevel);
}

/// In-memory per-logger level store.
pub struct LevelRegistry {
    /// Default level for loggers without an entry
    default: LogLevel,
    /// Levels keyed by logger name
    levels: RwLock<HashMap<String, LogLevel>>,
}

impl LevelRegistry {
    /// Create a registry with the given default level.
    pub fn new(default: LogLevel) -> Self {
        Self {
            default,
            levels: RwLock::new(HashMap::new()),
        }
    }

    /// Effective level for a logger name.
    ///
    /// Falls back from the full name to its base name, then the default.
    pub fn level_for(&self, name: &str) -> LogLevel {
        let levels = self.levels.read().unwrap();
        if let Some(level) = levels.get(name) {
            return *level;
        }
        if let Some((base, _)) = name.split_once(NAMESPACE_SEPARATOR) {
            if let Some(level) = levels.get(base) {
                return *level;
            }
        }
        self.default
    }

    /// Whether a message at `level` would be emitted for `name`.
    pub fn enabled(&self, name: &str, level: LogLevel) -> bool {
        level >= self.level_for(name)
    }

    /// Remove all configured levels.
    pub fn clear(&self) {
        self.levels.write().unwrap().clear();
    }
}

impl LevelSink for LevelRegistry {
    fn set_level(&self, logger: &str, level: LogLevel) {
        self.levels.write().unwrap().insert(logger.to_string(), level);
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

/// Install a global tracing subscriber honoring `RUST_LOG`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
}
