//! Generator configuration.

use crate::error::CodegenError;
use serde::Deserialize;
use std::path::Path;

/// Names and limits used by every generator.
///
/// All fields have defaults matching the `ipyplotly` package layout, so a
/// configuration file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root Python package of the generated code.
    pub package: String,
    /// Sub-package grouping the trace datatypes and validators.
    pub section: String,
    /// Base class of every generated datatype.
    pub trace_base_class: String,
    /// Base class of the facade.
    pub facade_base_class: String,
    /// Name of the facade class.
    pub facade_class: String,
    /// Prefix of every facade convenience method.
    pub method_prefix: String,
    /// Facade method registering a new instance.
    pub register_method: String,
    /// Alias prefix for imported validator modules.
    pub validator_alias_prefix: String,
    /// Alias prefix for imported datatype modules.
    pub datatype_alias_prefix: String,
    /// Maximum width of documentation lines.
    pub max_line_width: usize,
    /// External formatter command, program first.
    pub formatter: Option<Vec<String>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: "ipyplotly".to_string(),
            section: "trace".to_string(),
            trace_base_class: "BaseTraceType".to_string(),
            facade_base_class: "BaseFigureWidget".to_string(),
            facade_class: "Figure".to_string(),
            method_prefix: "add_".to_string(),
            register_method: "_add_trace".to_string(),
            validator_alias_prefix: "v_".to_string(),
            datatype_alias_prefix: "d_".to_string(),
            max_line_width: 119,
            formatter: None,
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from TOML.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the TOML is invalid.
    pub fn from_toml_str(toml: &str) -> Result<Self, CodegenError> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads a configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `CodegenError` if reading or parsing fails.
    pub fn from_file(path: &Path) -> Result<Self, CodegenError> {
        let toml = std::fs::read_to_string(path)?;
        Self::from_toml_str(&toml)
    }

    /// Sets the root Python package.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the maximum documentation line width.
    #[must_use]
    pub fn max_line_width(mut self, width: usize) -> Self {
        self.max_line_width = width;
        self
    }

    /// Sets the external formatter command.
    #[must_use]
    pub fn formatter(mut self, command: Vec<String>) -> Self {
        self.formatter = Some(command);
        self
    }

    /// Module path of the validators for a node's children.
    #[must_use]
    pub fn validators_module(&self, package_path: &str) -> String {
        format!("{}.validators.{}{}", self.package, self.section, package_path)
    }

    /// Module path of the datatypes for a node's children.
    #[must_use]
    pub fn datatypes_module(&self, package_path: &str) -> String {
        format!("{}.datatypes.{}{}", self.package, self.section, package_path)
    }

    /// Module path of the runtime base classes.
    #[must_use]
    pub fn base_module(&self) -> String {
        format!("{}.basedatatypes", self.package)
    }
}
