//! Module and plugin interfaces.
//!
//! Defines the capabilities registrable units must implement.

use crate::core::{Result, UnitKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Presentation metadata for a module.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleInfo {
    /// Ordering position among registered modules
    pub position: i32,
    /// Template rendered for the module
    pub template: Option<String>,
    /// CSS class applied to the template
    pub template_class: Option<String>,
}

impl ModuleInfo {
    /// Create new module info.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set position.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Set template.
    pub fn with_template(mut self, template: &str) -> Self {
        self.template = Some(template.to_string());
        self
    }

    /// Set template class.
    pub fn with_template_class(mut self, class: &str) -> Self {
        self.template_class = Some(class.to_string());
        self
    }
}

/// Base capability shared by modules and plugins.
pub trait Registrable: Send + Sync {
    /// Unique identifier of the unit. Must be non-empty.
    fn id(&self) -> &str;

    /// Kind the unit declares itself as. Checked at registration.
    fn kind(&self) -> UnitKind;

    /// Called once when the unit is registered.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once when the unit is removed.
    fn uninit(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A registrable unit participating in configuration fan-out.
pub trait AccountsModule: Registrable {
    /// Presentation metadata for the module.
    fn info(&self) -> ModuleInfo {
        ModuleInfo::default()
    }

    /// Receive the module's slice of the global options.
    ///
    /// `options` is `None` when the global options carry no entry for this
    /// module, and `Some(Value::Null)` when the entry is an explicit null.
    fn configure(&mut self, options: Option<&Value>) -> Result<()> {
        let _ = options;
        Ok(())
    }
}

/// A registrable unit participating in lifecycle only.
pub trait AccountsPlugin: Registrable {}

/// A minimal module implementation for examples and tests.
pub struct BasicModule {
    id: String,
    info: ModuleInfo,
    initialized: bool,
    options: Option<Value>,
}

impl BasicModule {
    /// Create a module with the given id.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            info: ModuleInfo::default(),
            initialized: false,
            options: None,
        }
    }

    /// Attach presentation metadata.
    pub fn with_info(mut self, info: ModuleInfo) -> Self {
        self.info = info;
        self
    }

    /// Whether `init` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Options received from the last `configure` call.
    pub fn options(&self) -> Option<&Value> {
        self.options.as_ref()
    }
}

impl Registrable for BasicModule {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> UnitKind {
        UnitKind::Module
    }

    fn init(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn uninit(&mut self) -> Result<()> {
        self.initialized = false;
        Ok(())
    }
}

impl AccountsModule for BasicModule {
    fn info(&self) -> ModuleInfo {
        self.info.clone()
    }

    fn configure(&mut self, options: Option<&Value>) -> Result<()> {
        self.options = options.cloned();
        Ok(())
    }
}

/// A minimal plugin implementation for examples and tests.
pub struct BasicPlugin {
    id: String,
    initialized: bool,
}

impl BasicPlugin {
    /// Create a plugin with the given id.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            initialized: false,
        }
    }

    /// Whether `init` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Registrable for BasicPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> UnitKind {
        UnitKind::Plugin
    }

    fn init(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn uninit(&mut self) -> Result<()> {
        self.initialized = false;
        Ok(())
    }
}

impl AccountsPlugin for BasicPlugin {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_module_info_builder() {
        let info = ModuleInfo::new()
            .with_position(2)
            .with_template("atForm")
            .with_template_class("at-pwd-form");

        assert_eq!(info.position, 2);
        assert_eq!(info.template.as_deref(), Some("atForm"));
        assert_eq!(info.template_class.as_deref(), Some("at-pwd-form"));
    }

    #[test]
    fn test_module_info_camel_case() {
        let info = ModuleInfo::new().with_template_class("at-form");
        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(value["templateClass"], json!("at-form"));
        assert!(value.get("template_class").is_none());
    }

    #[test]
    fn test_basic_module_lifecycle() {
        let mut module = BasicModule::new("signin");
        assert_eq!(module.id(), "signin");
        assert_eq!(module.kind(), UnitKind::Module);

        assert!(!module.is_initialized());
        module.init().unwrap();
        assert!(module.is_initialized());
        module.uninit().unwrap();
        assert!(!module.is_initialized());
    }

    #[test]
    fn test_basic_module_configure() {
        let mut module = BasicModule::new("signin");
        let options = json!({ "showLabels": true });

        module.configure(Some(&options)).unwrap();
        assert_eq!(module.options(), Some(&options));

        module.configure(None).unwrap();
        assert_eq!(module.options(), None);
    }

    #[test]
    fn test_basic_plugin_lifecycle() {
        let mut plugin = BasicPlugin::new("oauth");
        assert_eq!(plugin.id(), "oauth");
        assert_eq!(plugin.kind(), UnitKind::Plugin);

        plugin.init().unwrap();
        assert!(plugin.is_initialized());
        plugin.uninit().unwrap();
        assert!(!plugin.is_initialized());
    }
}
