//! # plotgen Schema
//!
//! Plotly attribute schema tree and loader.
//!
//! This crate provides:
//! - The [`SchemaNode`] tree consumed by the code generator
//! - Loading of plotly `plot-schema.json` documents into that tree
//! - Naming helpers shared by the schema and the generator
//! - Rendering of declared defaults as Python literals
//! - Structural validation of a loaded tree

pub mod error;
pub mod literal;
pub mod naming;
pub mod node;
pub mod parser;
pub mod validation;

pub use error::SchemaError;
pub use literal::{NONE_LITERAL, python_literal};
pub use node::SchemaNode;
pub use parser::{parse_schema, parse_schema_file};
pub use validation::validate_tree;
