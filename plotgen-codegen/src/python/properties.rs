//! Property accessor generation.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::model::{PropertyKind, PropertySpec};
use crate::python::docs::{PROPERTY_DOC_INDENT, wrap};
use crate::python::naming::alias;
use crate::python::types::TypeMapper;
use plotgen_schema::SchemaNode;

/// Generator for one accessor pair per attribute.
pub struct PropertyEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> PropertyEmitter<'a> {
    /// Creates a new property emitter.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Describes the accessor pair of `attribute` on `owner`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a simple attribute carries a
    /// type tag outside the recognized set.
    pub fn emit(
        &self,
        attribute: &SchemaNode,
        owner: &SchemaNode,
    ) -> Result<PropertySpec, CodegenError> {
        let kind = PropertyKind::classify(attribute);
        let owner_alias = alias(&self.config.datatype_alias_prefix, &owner.name);

        let (rendered_type, summary) = match kind {
            PropertyKind::ArrayOfCompound => (
                format!("Tuple[{}.{}, ...]", owner_alias, attribute.class_name),
                None,
            ),
            PropertyKind::NestedCompound => {
                (format!("{}.{}", owner_alias, attribute.class_name), None)
            }
            PropertyKind::Simple => {
                let tag = attribute.val_type.as_deref().unwrap_or_default();
                let expr = TypeMapper::map(tag, attribute.array_ok).map_err(|source| {
                    CodegenError::unknown_type(
                        source,
                        &attribute.property_name,
                        owner.display_path(),
                    )
                })?;
                (expr.annotation, Some(expr.summary))
            }
        };

        Ok(PropertySpec {
            name: attribute.property_name.clone(),
            rendered_type,
            kind,
            doc: self.property_doc(attribute, owner, summary.as_deref()),
        })
    }

    fn property_doc(
        &self,
        attribute: &SchemaNode,
        owner: &SchemaNode,
        summary: Option<&str>,
    ) -> Vec<Vec<String>> {
        let width = self
            .config
            .max_line_width
            .saturating_sub(PROPERTY_DOC_INDENT);
        let mut doc = Vec::new();

        match attribute.description.as_deref() {
            Some(description) if !description.is_empty() => {
                doc.push(wrap(description, PROPERTY_DOC_INDENT, width));
            }
            _ => tracing::warn!(
                node = %owner.display_path(),
                attribute = %attribute.property_name,
                "attribute has no description"
            ),
        }
        if let Some(summary) = summary {
            let sentence = format!(
                "The '{}' property accepts {}.",
                attribute.property_name, summary
            );
            doc.push(wrap(&sentence, PROPERTY_DOC_INDENT, width));
        }
        doc
    }
}
