//! Schema tree validation.
//!
//! The generator assumes a well-formed tree and does not re-check these
//! rules; they are enforced once, right after loading.

use crate::error::SchemaError;
use crate::naming::is_python_identifier;
use crate::node::SchemaNode;
use std::collections::HashSet;

const RECEIVER: &str = "self";

/// Validates a loaded tree.
///
/// # Errors
/// Returns `SchemaError::Validation` for the first violation found:
/// a property or parameter name repeated within one compound node, a
/// property or identifier name that is not a valid Python identifier, a
/// parameter named `self`, a compound attribute without attributes, or a
/// leaf without a type tag.
pub fn validate_tree(root: &SchemaNode) -> Result<(), SchemaError> {
    validate_node(root)
}

fn validate_node(node: &SchemaNode) -> Result<(), SchemaError> {
    if !node.is_compound {
        if node.val_type.is_none() {
            return Err(SchemaError::validation(
                node.display_path(),
                "leaf attribute has no type tag",
            ));
        }
        return Ok(());
    }

    if node.children.is_empty() && !node.is_root() {
        return Err(SchemaError::validation(
            node.display_path(),
            "compound attribute has no attributes",
        ));
    }

    let mut seen = HashSet::new();
    let mut idents = HashSet::new();
    for child in &node.children {
        if !seen.insert(child.property_name.as_str()) {
            return Err(SchemaError::validation(
                node.display_path(),
                format!("duplicate attribute '{}'", child.property_name),
            ));
        }
        // Parameter names share one signature with the method receiver.
        if child.ident_name == RECEIVER {
            return Err(SchemaError::validation(
                child.display_path(),
                format!("parameter name '{RECEIVER}' is reserved"),
            ));
        }
        if !idents.insert(child.ident_name.as_str()) {
            return Err(SchemaError::validation(
                node.display_path(),
                format!(
                    "attribute '{}' maps to duplicate parameter '{}'",
                    child.property_name, child.ident_name
                ),
            ));
        }
        for name in [&child.property_name, &child.ident_name] {
            if !is_python_identifier(name) {
                return Err(SchemaError::validation(
                    child.display_path(),
                    format!("'{name}' is not a valid Python identifier"),
                ));
            }
        }
        validate_node(child)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tree() {
        let root = SchemaNode::root(vec![SchemaNode::compound(
            "scatter",
            vec![
                SchemaNode::leaf("x", "data_array"),
                SchemaNode::compound("marker", vec![SchemaNode::leaf("size", "number")]),
                SchemaNode::array_element(
                    "dimensions",
                    "dimension",
                    vec![SchemaNode::leaf("label", "string")],
                ),
            ],
        )]);
        assert!(validate_tree(&root).is_ok());
    }

    #[test]
    fn test_empty_root_is_valid() {
        assert!(validate_tree(&SchemaNode::root(vec![])).is_ok());
    }

    #[test]
    fn test_empty_compound() {
        let root = crate::parse_schema(
            r#"{"traces": {"bar": {"attributes": {"marker": {"role": "object"}}}}}"#,
        )
        .unwrap();
        let err = validate_tree(&root).unwrap_err();
        assert!(matches!(err, SchemaError::Validation { ref path, .. } if path == "bar.marker"));
        assert!(err.to_string().contains("has no attributes"));
    }

    #[test]
    fn test_empty_array_element() {
        let root = SchemaNode::root(vec![SchemaNode::compound(
            "parcoords",
            vec![SchemaNode::array_element("dimensions", "dimension", vec![])],
        )]);
        assert!(validate_tree(&root).is_err());
    }

    #[test]
    fn test_colliding_parameter_names() {
        let root = crate::parse_schema(
            r#"{"traces": {"bar": {"attributes": {
                "xAxis": {"valType": "subplotid"},
                "xaxis": {"valType": "subplotid"}
            }}}}"#,
        )
        .unwrap();
        let err = validate_tree(&root).unwrap_err();
        assert!(matches!(err, SchemaError::Validation { ref path, .. } if path == "bar"));
        assert!(err.to_string().contains("duplicate parameter 'xaxis'"));
    }

    #[test]
    fn test_self_parameter() {
        let root = SchemaNode::root(vec![SchemaNode::compound(
            "scatter",
            vec![SchemaNode::leaf("Self", "string")],
        )]);
        let err = validate_tree(&root).unwrap_err();
        assert!(err.to_string().contains("'self' is reserved"));
    }

    #[test]
    fn test_duplicate_attribute() {
        let root = SchemaNode::root(vec![SchemaNode::compound(
            "scatter",
            vec![
                SchemaNode::leaf("x", "data_array"),
                SchemaNode::leaf("x", "number"),
            ],
        )]);
        let err = validate_tree(&root).unwrap_err();
        assert!(err.to_string().contains("duplicate attribute 'x'"));
        assert!(err.to_string().contains("'scatter'"));
    }

    #[test]
    fn test_keyword_attribute() {
        let root = SchemaNode::root(vec![SchemaNode::compound(
            "scatter",
            vec![SchemaNode::leaf("lambda", "number")],
        )]);
        let err = validate_tree(&root).unwrap_err();
        assert!(err.to_string().contains("scatter.lambda"));
    }

    #[test]
    fn test_leaf_without_type() {
        let mut leaf = SchemaNode::leaf("x", "number");
        leaf.val_type = None;
        let root = SchemaNode::root(vec![SchemaNode::compound("bar", vec![leaf])]);
        assert!(validate_tree(&root).is_err());
    }
}
