//! Registry Module
//!
//! Provides the accounts registration facility:
//! - Module and plugin interfaces
//! - Central registry
//! - Lifecycle management

pub mod interface;
pub mod registry;

pub use interface::{
    AccountsModule, AccountsPlugin, BasicModule, BasicPlugin, ModuleInfo, Registrable,
};
pub use registry::{RegisteredModule, RegisteredPlugin, RegisteredUnit, UserAccounts};
