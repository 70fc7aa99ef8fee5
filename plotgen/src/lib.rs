//! # plotgen
//!
//! Generates typed Python datatype classes from a plotly schema.
//!
//! Every schema node with compound children yields one module of accessor
//! classes, and the trace types together yield a figure facade with one
//! `add_<trace>` method per type.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plotgen::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let root = parse_schema_file(Path::new("plot-schema.json"))?;
//! validate_tree(&root)?;
//! let report = Generator::new(&root, &config).write(Path::new("out"), &Passthrough)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - plotly schema loading and validation
//! - [`codegen`] - Python source generation from schema trees

pub mod prelude;

/// Schema loading and validation.
pub mod schema {
    pub use plotgen_schema::*;
}

/// Python code generation from schema trees.
pub mod codegen {
    pub use plotgen_codegen::*;
}
