//! # plotgen Codegen
//!
//! Python datatype and figure class generation from plotly schemas.
//!
//! This crate provides:
//! - One datatypes module per schema node with compound children
//! - One typed accessor class per compound attribute
//! - A facade class with one `add_<type>` method per trace type
//! - A driver that walks the schema tree and writes the output
//!
//! Generators build a structured [`model`]; [`render`] serializes it.

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod model;
pub mod python;
pub mod render;

pub use config::GeneratorConfig;
pub use error::{CodegenError, UnknownTypeError};
pub use format::{ExternalFormatter, Passthrough, SourceFormatter};
pub use generator::{GenerationFailure, GenerationReport, Generator, OutputUnit};

/// Generates Python sources from a plotly schema document.
///
/// # Arguments
/// * `json` - plotly schema content
/// * `config` - generator configuration
///
/// # Returns
/// The generated units and any per-node failures.
///
/// # Errors
/// Returns `CodegenError` if the schema cannot be loaded or is invalid.
pub fn generate_from_json(
    json: &str,
    config: &GeneratorConfig,
) -> Result<GenerationReport, CodegenError> {
    let root = plotgen_schema::parse_schema(json)?;
    plotgen_schema::validate_tree(&root)?;
    Ok(Generator::new(&root, config).generate())
}

/// Generates Python sources from a plotly schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, or validation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<GenerationReport, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}
