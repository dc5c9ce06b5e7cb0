//! Central registry for accounts modules and plugins.
//!
//! Handles registration, removal, configuration fan-out, and log-level
//! forwarding.

use crate::core::{now, Error, Result, Timestamp, UnitKind};
use crate::logging::{LevelSink, Logger};
use crate::registry::interface::{AccountsModule, AccountsPlugin, ModuleInfo, Registrable};
use crate::settings::Settings;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Registered module entry.
pub struct RegisteredModule {
    /// Module instance
    pub module: Box<dyn AccountsModule>,
    /// Presentation metadata captured at registration
    pub info: ModuleInfo,
    /// Registration time
    pub registered_at: Timestamp,
}

/// Registered plugin entry.
pub struct RegisteredPlugin {
    /// Plugin instance
    pub plugin: Box<dyn AccountsPlugin>,
    /// Registration time
    pub registered_at: Timestamp,
}

/// A registered unit found by [`UserAccounts::get`].
pub enum RegisteredUnit<'a> {
    /// Entry from the module collection
    Module(&'a RegisteredModule),
    /// Entry from the plugin collection
    Plugin(&'a RegisteredPlugin),
}

type StartupHook = Box<dyn FnOnce(&mut UserAccounts) + Send>;

/// Central registry for accounts modules and plugins.
///
/// Modules and plugins live in independent namespaces keyed by unit id.
/// A module and a plugin may share an id; combined lookup through
/// [`UserAccounts::get`] resolves to the module.
pub struct UserAccounts {
    /// Registered modules keyed by id
    modules: HashMap<String, RegisteredModule>,
    /// Registered plugins keyed by id
    plugins: HashMap<String, RegisteredPlugin>,
    /// Layered settings consulted for log-level resolution
    settings: Settings,
    /// Callbacks to run at startup
    startup_hooks: Vec<StartupHook>,
    started: bool,
}

impl UserAccounts {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
            plugins: HashMap::new(),
            settings: Settings::default(),
            startup_hooks: Vec::new(),
            started: false,
        }
    }

    /// Attach a settings document.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the settings document.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Settings document in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Register a module.
    ///
    /// Inserts the module under its id and invokes its `init` hook. An
    /// error from `init` propagates and leaves the module registered.
    pub fn register_module(&mut self, module: Box<dyn AccountsModule>) -> Result<()> {
        let id = Self::check_unit(module.id(), module.kind(), UnitKind::Module)?;
        if self.modules.contains_key(&id) {
            return Err(Error::DuplicateRegistration(UnitKind::Module, id));
        }

        let info = module.info();
        self.modules.insert(
            id.clone(),
            RegisteredModule {
                module,
                info,
                registered_at: now(),
            },
        );
        debug!("registered module {}", id);

        if let Some(entry) = self.modules.get_mut(&id) {
            entry.module.init()?;
        }
        Ok(())
    }

    /// Register a plugin.
    ///
    /// Inserts the plugin under its id and invokes its `init` hook. An
    /// error from `init` propagates and leaves the plugin registered.
    pub fn register_plugin(&mut self, plugin: Box<dyn AccountsPlugin>) -> Result<()> {
        let id = Self::check_unit(plugin.id(), plugin.kind(), UnitKind::Plugin)?;
        if self.plugins.contains_key(&id) {
            return Err(Error::DuplicateRegistration(UnitKind::Plugin, id));
        }

        self.plugins.insert(
            id.clone(),
            RegisteredPlugin {
                plugin,
                registered_at: now(),
            },
        );
        debug!("registered plugin {}", id);

        if let Some(entry) = self.plugins.get_mut(&id) {
            entry.plugin.init()?;
        }
        Ok(())
    }

    /// Remove a registered module.
    ///
    /// Invokes the module's `uninit` hook before deleting the entry. An
    /// error from `uninit` propagates and leaves the module registered.
    pub fn remove_module(&mut self, id: &str) -> Result<()> {
        let entry = self
            .modules
            .get_mut(id)
            .ok_or_else(|| Error::NotRegistered(UnitKind::Module, id.to_string()))?;
        entry.module.uninit()?;
        self.modules.remove(id);
        debug!("removed module {}", id);
        Ok(())
    }

    /// Remove a registered plugin.
    ///
    /// Invokes the plugin's `uninit` hook before deleting the entry. An
    /// error from `uninit` propagates and leaves the plugin registered.
    pub fn remove_plugin(&mut self, id: &str) -> Result<()> {
        let entry = self
            .plugins
            .get_mut(id)
            .ok_or_else(|| Error::NotRegistered(UnitKind::Plugin, id.to_string()))?;
        entry.plugin.uninit()?;
        self.plugins.remove(id);
        debug!("removed plugin {}", id);
        Ok(())
    }

    /// Fan global options out to every registered module.
    ///
    /// Each module's `configure` receives the options value stored under
    /// the module's id, `None` when absent. Modules are visited in
    /// position order; the first error halts the fan-out. Plugins are not
    /// configured.
    pub fn configure(&mut self, global_options: &Value) -> Result<()> {
        for id in self.module_order() {
            let options = global_options.get(&id);
            if let Some(entry) = self.modules.get_mut(&id) {
                entry.module.configure(options)?;
            }
        }
        Ok(())
    }

    /// Resolve and forward the log level for a logger.
    ///
    /// Consults the settings document (see [`Settings::log_level_for`]);
    /// when a level resolves, parses it and calls `sink.set_level` exactly
    /// once. When nothing resolves, the sink is not called.
    pub fn set_log_level(&self, logger: &Logger, sink: &dyn LevelSink) -> Result<()> {
        if let Some(level) = self.settings.log_level_for(logger) {
            let level = level.parse()?;
            sink.set_level(logger.name(), level);
        }
        Ok(())
    }

    /// Look up a module by id.
    pub fn module(&self, id: &str) -> Option<&RegisteredModule> {
        self.modules.get(id)
    }

    /// Look up a plugin by id.
    pub fn plugin(&self, id: &str) -> Option<&RegisteredPlugin> {
        self.plugins.get(id)
    }

    /// Look up a registered unit by id, modules first.
    pub fn get(&self, id: &str) -> Option<RegisteredUnit<'_>> {
        if let Some(entry) = self.modules.get(id) {
            return Some(RegisteredUnit::Module(entry));
        }
        self.plugins.get(id).map(RegisteredUnit::Plugin)
    }

    /// Registered modules sorted by position, ties broken by id.
    pub fn modules(&self) -> Vec<&RegisteredModule> {
        let mut entries: Vec<&RegisteredModule> = self.modules.values().collect();
        entries.sort_by(|a, b| {
            a.info
                .position
                .cmp(&b.info.position)
                .then_with(|| a.module.id().cmp(b.module.id()))
        });
        entries
    }

    /// Registered plugins sorted by id.
    pub fn plugins(&self) -> Vec<&RegisteredPlugin> {
        let mut entries: Vec<&RegisteredPlugin> = self.plugins.values().collect();
        entries.sort_by(|a, b| a.plugin.id().cmp(b.plugin.id()));
        entries
    }

    /// Number of registered modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Number of registered plugins.
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Register a callback to run at startup.
    ///
    /// Hooks registered after [`UserAccounts::startup`] run immediately.
    pub fn on_startup<F>(&mut self, hook: F)
    where
        F: FnOnce(&mut UserAccounts) + Send + 'static,
    {
        if self.started {
            hook(self);
        } else {
            self.startup_hooks.push(Box::new(hook));
        }
    }

    /// Run pending startup hooks in registration order.
    pub fn startup(&mut self) {
        self.started = true;
        let hooks = std::mem::take(&mut self.startup_hooks);
        for hook in hooks {
            hook(self);
        }
    }

    /// Clear the registry without invoking lifecycle hooks.
    ///
    /// Intended for test isolation between cases.
    pub fn reset(&mut self) {
        self.modules.clear();
        self.plugins.clear();
        self.startup_hooks.clear();
        self.started = false;
    }

    fn check_unit(id: &str, declared: UnitKind, expected: UnitKind) -> Result<String> {
        if declared != expected {
            return Err(Error::InvalidKind(
                expected,
                format!("{} declares kind {}", id, declared),
            ));
        }
        if id.is_empty() {
            return Err(Error::InvalidKind(expected, "unit has an empty id".to_string()));
        }
        Ok(id.to_string())
    }

    fn module_order(&self) -> Vec<String> {
        let mut order: Vec<(i32, String)> = self
            .modules
            .iter()
            .map(|(id, entry)| (entry.info.position, id.clone()))
            .collect();
        order.sort();
        order.into_iter().map(|(_, id)| id).collect()
    }
}

impl Default for UserAccounts {
    fn default() -> Self {
        Self::new()
    }
}
