//! Parameter lists of constructors and facade methods.
//!
//! [`parameter_list`] is the only place parameter order and defaults are
//! decided. The class constructor and the facade method for the same node
//! both call it, so their signatures cannot drift apart.

use crate::model::ParameterSpec;
use plotgen_schema::SchemaNode;

/// Builds the ordered parameter list for a compound node.
///
/// One entry per attribute, in schema order, with the declared default
/// literal used verbatim (`None` included).
#[must_use]
pub fn parameter_list(node: &SchemaNode) -> Vec<ParameterSpec> {
    node.child_attributes()
        .iter()
        .enumerate()
        .map(|(index, attribute)| ParameterSpec {
            name: attribute.ident_name.clone(),
            default: attribute.default_literal.clone(),
            index,
        })
        .collect()
}
