//! Prelude module for convenient imports.
//!
//! ```ignore
//! use plotgen::prelude::*;
//! ```

// Schema types
pub use plotgen_schema::{SchemaError, SchemaNode, parse_schema, parse_schema_file, validate_tree};

// Generator types
pub use plotgen_codegen::python::{
    ClassGenerator, DocBlockBuilder, FacadeGenerator, ModuleGenerator, PropertyEmitter, TypeMapper,
    parameter_list,
};
pub use plotgen_codegen::{
    CodegenError, ExternalFormatter, GenerationReport, Generator, GeneratorConfig, OutputUnit,
    Passthrough, SourceFormatter, generate_from_file, generate_from_json,
};
