//! Plotly schema parser.
//!
//! This module loads a plotly `plot-schema.json` document into a
//! [`SchemaNode`] tree. Only the `traces` section is read; every trace
//! becomes a compound child of the root.

use crate::error::SchemaError;
use crate::literal::python_literal;
use crate::node::SchemaNode;
use serde_json::{Map, Value};
use std::path::Path;

/// Parses a plotly schema document from a string.
///
/// # Arguments
/// * `json` - Schema document content
///
/// # Returns
/// The root node of the attribute tree.
///
/// # Errors
/// Returns `SchemaError` if the JSON is malformed or does not have the
/// expected layout.
pub fn parse_schema(json: &str) -> Result<SchemaNode, SchemaError> {
    let document: Value = serde_json::from_str(json)?;
    let traces = document
        .get("traces")
        .and_then(Value::as_object)
        .ok_or_else(|| SchemaError::MissingSection {
            section: "traces".to_string(),
        })?;

    let mut children = Vec::with_capacity(traces.len());
    for (name, trace) in traces {
        let attributes = trace
            .get("attributes")
            .and_then(Value::as_object)
            .ok_or_else(|| SchemaError::invalid_structure(name, "trace has no attributes"))?;

        let mut node = SchemaNode::compound(name, parse_attributes(name, attributes)?);
        node.description = trace
            .get("meta")
            .and_then(|meta| meta.get("description"))
            .and_then(Value::as_str)
            .map(str::to_string);
        children.push(node);
    }

    Ok(SchemaNode::root(children))
}

/// Parses a plotly schema document from a file.
///
/// # Errors
/// Returns `SchemaError` if reading or parsing fails.
pub fn parse_schema_file(path: &Path) -> Result<SchemaNode, SchemaError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}

/// Parses the attribute entries of one compound object, in document order.
fn parse_attributes(
    path: &str,
    attributes: &Map<String, Value>,
) -> Result<Vec<SchemaNode>, SchemaError> {
    let mut nodes = Vec::new();

    for (key, value) in attributes {
        // Meta entries (role, editType, description, ...) are strings; the
        // private ones are underscore-prefixed objects.
        if key.starts_with('_') {
            continue;
        }
        let Some(object) = value.as_object() else {
            continue;
        };
        nodes.push(parse_attribute(&format!("{path}.{key}"), key, object)?);
    }

    Ok(nodes)
}

/// Parses a single attribute object.
fn parse_attribute(
    path: &str,
    key: &str,
    object: &Map<String, Value>,
) -> Result<SchemaNode, SchemaError> {
    if let Some(val_type) = object.get("valType") {
        let val_type = val_type
            .as_str()
            .ok_or_else(|| SchemaError::invalid_structure(path, "valType is not a string"))?;

        let mut node = SchemaNode::leaf(key, val_type)
            .with_array_ok(object.get("arrayOk").and_then(Value::as_bool).unwrap_or(false));
        if let Some(dflt) = object.get("dflt") {
            node.default_literal = python_literal(dflt);
        }
        node.description = description_of(object);
        return Ok(node);
    }

    if let Some(items) = object.get("items") {
        let items = items
            .as_object()
            .ok_or_else(|| SchemaError::invalid_structure(path, "items is not an object"))?;

        let mut entries = items.iter();
        let (element_name, element) = entries
            .next()
            .ok_or_else(|| SchemaError::invalid_structure(path, "array container has no item"))?;
        if entries.next().is_some() {
            return Err(SchemaError::invalid_structure(
                path,
                "array container declares more than one item type",
            ));
        }
        let element = element.as_object().ok_or_else(|| {
            SchemaError::invalid_structure(path, "array item is not an object")
        })?;

        let element_path = format!("{path}.{element_name}");
        let children = parse_attributes(&element_path, element)?;
        let mut node = SchemaNode::array_element(key, element_name, children);
        node.description = description_of(element).or_else(|| description_of(object));
        return Ok(node);
    }

    let mut node = SchemaNode::compound(key, parse_attributes(path, object)?);
    node.description = description_of(object);
    Ok(node)
}

fn description_of(object: &Map<String, Value>) -> Option<String> {
    object
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string)
}
