//! Datatype class generation.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::model::{Assignment, ClassDef, Constructor, PropertySpec, ValidatorRegistration};
use crate::python::docs::DocBlockBuilder;
use crate::python::naming::{alias, validator_class_name};
use crate::python::params::parameter_list;
use crate::python::properties::PropertyEmitter;
use plotgen_schema::SchemaNode;

/// Generator for the class of one compound node.
pub struct ClassGenerator<'a> {
    config: &'a GeneratorConfig,
    properties: PropertyEmitter<'a>,
    docs: DocBlockBuilder<'a>,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            properties: PropertyEmitter::new(config),
            docs: DocBlockBuilder::new(config),
        }
    }

    /// Generates the class for a compound node.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if any attribute carries an
    /// unrecognized type tag.
    pub fn generate(&self, node: &SchemaNode) -> Result<ClassDef, CodegenError> {
        let properties = node
            .child_attributes()
            .iter()
            .map(|attribute| self.properties.emit(attribute, node))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClassDef {
            name: node.class_name.clone(),
            base: self.config.trace_base_class.clone(),
            constructor: self.constructor(node, &properties),
            properties,
        })
    }

    fn constructor(
        &self,
        node: &SchemaNode,
        properties: &[PropertySpec],
    ) -> Constructor {
        let params = parameter_list(node);
        let doc = self.docs.build(node, &params);
        let validator_alias = alias(&self.config.validator_alias_prefix, &node.name);

        let validators = node
            .child_attributes()
            .iter()
            .map(|attribute| ValidatorRegistration {
                property: attribute.property_name.clone(),
                module_alias: validator_alias.clone(),
                class_name: validator_class_name(&attribute.property_name),
            })
            .collect();

        // Phase one: seed every shadow field.
        let prepare = properties
            .iter()
            .filter(|p| p.kind.uses_shadow_field())
            .map(|p| p.name.clone())
            .collect();

        // Phase two: assign every attribute through its setter.
        let assign = node
            .child_attributes()
            .iter()
            .zip(&params)
            .map(|(attribute, param)| Assignment {
                property: attribute.property_name.clone(),
                parameter: param.name.clone(),
            })
            .collect();

        Constructor {
            params,
            doc,
            plotly_name: node.property_name.clone(),
            type_discriminator: node.dotted_path(),
            validators,
            prepare,
            assign,
        }
    }
}
