//! Datatype module generation.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::model::{GeneratedModule, Import, ImportName};
use crate::python::classes::ClassGenerator;
use crate::python::naming::alias;
use plotgen_schema::SchemaNode;

/// Generator for the module holding the classes of a node's compound children.
pub struct ModuleGenerator<'a> {
    config: &'a GeneratorConfig,
    classes: ClassGenerator<'a>,
}

impl<'a> ModuleGenerator<'a> {
    /// Creates a new module generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            classes: ClassGenerator::new(config),
        }
    }

    /// Generates the module for `parent`.
    ///
    /// Returns `Ok(None)` when `parent` has no compound children; no file
    /// should be written in that case.
    ///
    /// # Errors
    /// Returns `CodegenError` if any class fails to generate.
    pub fn generate(&self, parent: &SchemaNode) -> Result<Option<GeneratedModule>, CodegenError> {
        if !parent.has_compound_children() {
            return Ok(None);
        }
        let compound: Vec<&SchemaNode> = parent.compound_children().collect();

        let classes = compound
            .iter()
            .map(|node| self.classes.generate(node))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(GeneratedModule {
            imports: self.imports(parent, &compound),
            classes,
        }))
    }

    fn imports(&self, parent: &SchemaNode, compound: &[&SchemaNode]) -> Vec<Import> {
        let package_path = parent.package_path();
        let aliased = |prefix: &str| -> Vec<ImportName> {
            compound
                .iter()
                .map(|node| ImportName::aliased(&node.name, alias(prefix, &node.name)))
                .collect()
        };

        vec![
            Import::Glob {
                module: "typing".to_string(),
            },
            Import::Names {
                module: "numbers".to_string(),
                names: vec![ImportName::plain("Number")],
            },
            Import::Names {
                module: self.config.base_module(),
                names: vec![ImportName::plain(&self.config.trace_base_class)],
            },
            Import::Names {
                module: self.config.validators_module(&package_path),
                names: aliased(&self.config.validator_alias_prefix),
            },
            Import::Names {
                module: self.config.datatypes_module(&package_path),
                names: aliased(&self.config.datatype_alias_prefix),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> SchemaNode {
        SchemaNode::root(vec![
            SchemaNode::compound(
                "scatter",
                vec![
                    SchemaNode::leaf("x", "data_array"),
                    SchemaNode::compound("marker", vec![SchemaNode::leaf("size", "number")]),
                ],
            ),
            SchemaNode::compound("bar", vec![SchemaNode::leaf("x", "data_array")]),
        ])
    }

    #[test]
    fn test_no_compound_children() {
        let config = GeneratorConfig::default();
        let root = tree();
        let generator = ModuleGenerator::new(&config);

        let bar = &root.children[1];
        assert!(generator.generate(bar).expect("generate").is_none());
        let leaf = &bar.children[0];
        assert!(generator.generate(leaf).expect("generate").is_none());
    }

    #[test]
    fn test_root_module_classes_in_order() {
        let config = GeneratorConfig::default();
        let module = ModuleGenerator::new(&config)
            .generate(&tree())
            .expect("generate")
            .expect("module");

        let names: Vec<_> = module.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Scatter", "Bar"]);
    }

    #[test]
    fn test_imports_use_disjoint_aliases() {
        let config = GeneratorConfig::default();
        let module = ModuleGenerator::new(&config)
            .generate(&tree())
            .expect("generate")
            .expect("module");

        assert_eq!(module.imports.len(), 5);
        let Import::Names { module: validators, names: v_names } = &module.imports[3] else {
            panic!("expected named import");
        };
        let Import::Names { module: datatypes, names: d_names } = &module.imports[4] else {
            panic!("expected named import");
        };

        assert_eq!(validators, "ipyplotly.validators.trace");
        assert_eq!(datatypes, "ipyplotly.datatypes.trace");
        assert_eq!(v_names[0], ImportName::aliased("scatter", "v_scatter"));
        assert_eq!(d_names[1], ImportName::aliased("bar", "d_bar"));
    }

    #[test]
    fn test_nested_module_path() {
        let config = GeneratorConfig::default();
        let root = tree();
        let module = ModuleGenerator::new(&config)
            .generate(&root.children[0])
            .expect("generate")
            .expect("module");

        assert_eq!(module.classes.len(), 1);
        assert_eq!(module.classes[0].name, "Marker");
        assert!(matches!(
            &module.imports[3],
            Import::Names { module, .. } if module == "ipyplotly.validators.trace.scatter"
        ));
    }

    #[test]
    fn test_unknown_type_aborts_module() {
        let config = GeneratorConfig::default();
        let root = SchemaNode::root(vec![SchemaNode::compound(
            "pie",
            vec![SchemaNode::leaf("colors", "colorlist")],
        )]);
        let err = ModuleGenerator::new(&config).generate(&root).unwrap_err();
        assert!(matches!(err, CodegenError::UnknownType { .. }));
    }
}
