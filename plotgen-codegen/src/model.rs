//! Structured representation of generated Python modules.
//!
//! Generators build these declarations; [`crate::render`] turns them into
//! text in a single pass. Every list keeps schema attribute order.

use plotgen_schema::SchemaNode;

/// One constructor or facade method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Default value as a Python literal.
    pub default: String,
    /// Position of the attribute in its compound node.
    pub index: usize,
}

/// Storage and rendering strategy of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Primitive value stored in the generic data mapping.
    Simple,
    /// Nested object stored in a dedicated shadow field.
    NestedCompound,
    /// Fixed ordered sequence of a sibling element type, stored in the
    /// generic data mapping.
    ArrayOfCompound,
}

impl PropertyKind {
    /// Classifies an attribute. Array elements take priority over compounds.
    #[must_use]
    pub const fn classify(attribute: &SchemaNode) -> Self {
        if attribute.is_array_element {
            Self::ArrayOfCompound
        } else if attribute.is_compound {
            Self::NestedCompound
        } else {
            Self::Simple
        }
    }

    /// Returns true if the value lives in a shadow field.
    #[must_use]
    pub const fn uses_shadow_field(self) -> bool {
        matches!(self, Self::NestedCompound)
    }
}

/// One read/write accessor pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    /// Property name.
    pub name: String,
    /// Python type annotation of the getter.
    pub rendered_type: String,
    /// Classification.
    pub kind: PropertyKind,
    /// Getter docstring paragraphs, each as returned by
    /// [`crate::python::docs::wrap`].
    pub doc: Vec<Vec<String>>,
}

/// One documented parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParam {
    /// Parameter name.
    pub name: String,
    /// Wrapped description lines, continuation lines already indented.
    pub lines: Vec<String>,
}

/// Structured docstring of a constructor or facade method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    /// Name of the constructed type.
    pub title: String,
    /// One paragraph per parameter.
    pub params: Vec<DocParam>,
    /// Name of the returned type.
    pub returns: String,
}

/// Registration of one validator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRegistration {
    /// Property the validator checks.
    pub property: String,
    /// Alias of the validators module.
    pub module_alias: String,
    /// Validator class name.
    pub class_name: String,
}

/// Assignment of a constructor parameter through its property setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Property assigned.
    pub property: String,
    /// Parameter read.
    pub parameter: String,
}

/// Constructor of a generated datatype.
///
/// Construction is two-phase: every shadow field listed in `prepare` is
/// seeded with `None` before any entry of `assign` runs, because a nested
/// setter reads the current shadow value to decide between reuse and
/// replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    /// Ordered parameters.
    pub params: Vec<ParameterSpec>,
    /// Docstring.
    pub doc: DocBlock,
    /// Name passed to the base class initializer.
    pub plotly_name: String,
    /// Path-derived type discriminator stored under `type`.
    pub type_discriminator: String,
    /// Validator registrations, one per attribute.
    pub validators: Vec<ValidatorRegistration>,
    /// Shadow fields to seed, one per nested compound attribute.
    pub prepare: Vec<String>,
    /// Assignments, one per attribute, in schema order.
    pub assign: Vec<Assignment>,
}

/// One generated datatype class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    /// Class name.
    pub name: String,
    /// Base class name.
    pub base: String,
    /// Accessor pairs in schema order.
    pub properties: Vec<PropertySpec>,
    /// Constructor.
    pub constructor: Constructor,
}

/// One imported symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportName {
    /// Imported name.
    pub name: String,
    /// Local alias.
    pub alias: Option<String>,
}

impl ImportName {
    /// Imports a name under its own name.
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Imports a name under an alias.
    #[must_use]
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}

/// One import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Import {
    /// `from module import *`
    Glob {
        /// Module path.
        module: String,
    },
    /// `from module import (a as b, ...)`
    Names {
        /// Module path.
        module: String,
        /// Imported names.
        names: Vec<ImportName>,
    },
}

/// Source of one datatypes module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Import preamble.
    pub imports: Vec<Import>,
    /// Classes, one per compound child, in declared order.
    pub classes: Vec<ClassDef>,
}

/// One convenience-construction method of the facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeMethod {
    /// Method name.
    pub name: String,
    /// Class instantiated by the method.
    pub class_name: String,
    /// Ordered parameters, identical to the class constructor's.
    pub params: Vec<ParameterSpec>,
    /// Docstring.
    pub doc: DocBlock,
}

/// Source of the facade module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeModule {
    /// Import preamble.
    pub imports: Vec<Import>,
    /// Facade class name.
    pub class_name: String,
    /// Facade base class.
    pub base: String,
    /// Method registering a new instance in the facade.
    pub register_method: String,
    /// Methods, one per top-level compound type, in declared order.
    pub methods: Vec<FacadeMethod>,
}
