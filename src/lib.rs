//! # UserAccounts - Module and Plugin Registry
//!
//! A registration and configuration facility for accounts systems:
//! - **Registry**: central store for named modules and plugins
//! - **Lifecycle**: `init`/`uninit` hooks fired on registration and removal
//! - **Configuration**: scoped option fan-out to registered modules
//! - **Log levels**: per-logger verbosity resolved from layered settings
//!
//! ## Quick Start
//!
//! ```rust
//! use useraccounts::registry::{BasicModule, UserAccounts};
//!
//! let mut accounts = UserAccounts::new();
//! accounts
//!     .register_module(Box::new(BasicModule::new("signin")))
//!     .unwrap();
//!
//! let options = serde_json::json!({ "signin": { "showLabels": true } });
//! accounts.configure(&options).unwrap();
//! assert!(accounts.module("signin").is_some());
//! ```

pub mod core;
pub mod logging;
pub mod registry;
pub mod settings;

pub use crate::core::error::{Error, Result};
