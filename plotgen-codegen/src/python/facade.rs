//! Facade class generation.
//!
//! The facade exposes one `add_<type>` method per top-level compound type.
//! Each method's signature comes from the same [`parameter_list`] call the
//! class constructor uses.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::model::{FacadeMethod, FacadeModule, Import, ImportName};
use crate::python::docs::DocBlockBuilder;
use crate::python::naming::facade_method_name;
use crate::python::params::parameter_list;
use plotgen_schema::SchemaNode;

/// Generator for the facade class.
pub struct FacadeGenerator<'a> {
    config: &'a GeneratorConfig,
    docs: DocBlockBuilder<'a>,
}

impl<'a> FacadeGenerator<'a> {
    /// Creates a new facade generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            docs: DocBlockBuilder::new(config),
        }
    }

    /// Generates the facade for the schema root.
    ///
    /// # Errors
    /// Returns `CodegenError::Precondition` if `root` is not the node built
    /// by `SchemaNode::root`.
    pub fn generate(&self, root: &SchemaNode) -> Result<FacadeModule, CodegenError> {
        if !root.is_root() {
            return Err(CodegenError::Precondition {
                path: root.display_path(),
            });
        }

        let methods: Vec<FacadeMethod> = root
            .compound_children()
            .map(|node| {
                let params = parameter_list(node);
                FacadeMethod {
                    name: facade_method_name(&self.config.method_prefix, &node.ident_name),
                    class_name: node.class_name.clone(),
                    doc: self.docs.build(node, &params),
                    params,
                }
            })
            .collect();

        let imports = vec![
            Import::Names {
                module: self.config.base_module(),
                names: vec![ImportName::plain(&self.config.facade_base_class)],
            },
            Import::Names {
                module: self.config.datatypes_module(""),
                names: methods
                    .iter()
                    .map(|m| ImportName::plain(&m.class_name))
                    .collect(),
            },
        ];

        Ok(FacadeModule {
            imports,
            class_name: self.config.facade_class.clone(),
            base: self.config.facade_base_class.clone(),
            register_method: self.config.register_method.clone(),
            methods,
        })
    }
}
