//! Schema tree nodes.
//!
//! A [`SchemaNode`] describes one attribute of the plotly trace taxonomy.
//! Leaves carry a primitive type tag; compound nodes carry an ordered list of
//! child attributes. The root node groups every trace type and is the only
//! node with an empty trace path.

use crate::literal::NONE_LITERAL;
use crate::naming::{to_ident, to_pascal_case};

/// One node of the attribute tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Schema name of the node (the element name for array elements).
    pub name: String,
    /// Name of the property exposing this node on its owner.
    pub property_name: String,
    /// Name of the generated class for compound nodes.
    pub class_name: String,
    /// Lower-cased identifier used for parameters and method names.
    pub ident_name: String,
    /// Human-readable description, if the schema declares one.
    pub description: Option<String>,
    /// Primitive type tag for leaves.
    pub val_type: Option<String>,
    /// Whether the value is a structured type.
    pub is_compound: bool,
    /// Whether this node is the element type of an array container.
    pub is_array_element: bool,
    /// Whether a leaf also accepts a sequence of values.
    pub array_ok: bool,
    /// Declared default rendered as a Python literal.
    pub default_literal: String,
    /// Path of names from the root to this node.
    pub trace_path: Vec<String>,
    /// Ordered child attributes.
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    /// Creates a primitive leaf attribute.
    #[must_use]
    pub fn leaf(name: impl Into<String>, val_type: impl Into<String>) -> Self {
        let mut node = Self::named(name.into());
        node.val_type = Some(val_type.into());
        node
    }

    /// Creates a nested compound attribute.
    ///
    /// Trace paths are assigned by [`SchemaNode::root`]; until the node is
    /// placed under a root its path is empty.
    #[must_use]
    pub fn compound(name: impl Into<String>, children: Vec<SchemaNode>) -> Self {
        let mut node = Self::named(name.into());
        node.is_compound = true;
        node.children = children;
        node
    }

    /// Creates the element node of an array container.
    ///
    /// `container` names the property on the owner, `element` names the
    /// element type.
    #[must_use]
    pub fn array_element(
        container: impl Into<String>,
        element: impl Into<String>,
        children: Vec<SchemaNode>,
    ) -> Self {
        let container = container.into();
        let mut node = Self::compound(element, children);
        node.is_array_element = true;
        node.ident_name = to_ident(&container);
        node.property_name = container;
        node
    }

    /// Creates the root node and assigns trace paths to the whole tree.
    #[must_use]
    pub fn root(children: Vec<SchemaNode>) -> Self {
        let mut root = Self::compound(String::new(), children);
        for child in &mut root.children {
            child.assign_paths(&[]);
        }
        root
    }

    fn named(name: String) -> Self {
        Self {
            property_name: name.clone(),
            class_name: to_pascal_case(&name),
            ident_name: to_ident(&name),
            name,
            description: None,
            val_type: None,
            is_compound: false,
            is_array_element: false,
            array_ok: false,
            default_literal: NONE_LITERAL.to_string(),
            trace_path: Vec::new(),
            children: Vec::new(),
        }
    }

    fn assign_paths(&mut self, parent: &[String]) {
        let mut path = parent.to_vec();
        path.push(self.name.clone());
        for child in &mut self.children {
            child.assign_paths(&path);
        }
        self.trace_path = path;
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default literal.
    #[must_use]
    pub fn with_default_literal(mut self, literal: impl Into<String>) -> Self {
        self.default_literal = literal.into();
        self
    }

    /// Marks a leaf as accepting a sequence of values.
    #[must_use]
    pub fn with_array_ok(mut self, array_ok: bool) -> Self {
        self.array_ok = array_ok;
        self
    }

    /// Returns true for nodes that are neither compound nor array elements.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        !self.is_compound && !self.is_array_element
    }

    /// Returns true for the unnamed node built by [`SchemaNode::root`].
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_compound && self.name.is_empty() && self.trace_path.is_empty()
    }

    /// Returns the ordered child attributes.
    #[must_use]
    pub fn child_attributes(&self) -> &[SchemaNode] {
        &self.children
    }

    /// Returns the compound child attributes in declared order.
    pub fn compound_children(&self) -> impl Iterator<Item = &SchemaNode> {
        self.children.iter().filter(|c| c.is_compound)
    }

    /// Returns true if at least one child is compound.
    #[must_use]
    pub fn has_compound_children(&self) -> bool {
        self.children.iter().any(|c| c.is_compound)
    }

    /// Returns the directory path segments for this node's output.
    #[must_use]
    pub fn dir_path(&self) -> &[String] {
        &self.trace_path
    }

    /// Returns the dotted package suffix, `""` for the root and `.a.b` otherwise.
    #[must_use]
    pub fn package_path(&self) -> String {
        self.trace_path.iter().map(|s| format!(".{s}")).collect()
    }

    /// Returns the dotted trace path, used as the type discriminator.
    #[must_use]
    pub fn dotted_path(&self) -> String {
        self.trace_path.join(".")
    }

    /// Returns a printable location for diagnostics.
    #[must_use]
    pub fn display_path(&self) -> String {
        if self.is_root() {
            "<root>".to_string()
        } else if self.trace_path.is_empty() {
            self.name.clone()
        } else {
            self.dotted_path()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scatter() -> SchemaNode {
        SchemaNode::compound(
            "scatter",
            vec![
                SchemaNode::leaf("x", "data_array"),
                SchemaNode::compound("marker", vec![SchemaNode::leaf("size", "number")]),
            ],
        )
    }

    #[test]
    fn test_leaf_names() {
        let node = SchemaNode::leaf("error_x", "number");
        assert_eq!(node.property_name, "error_x");
        assert_eq!(node.class_name, "ErrorX");
        assert_eq!(node.ident_name, "error_x");
        assert_eq!(node.default_literal, "None");
        assert!(node.is_simple());
    }

    #[test]
    fn test_array_element_names() {
        let node = SchemaNode::array_element("annotations", "annotation", vec![]);
        assert_eq!(node.name, "annotation");
        assert_eq!(node.property_name, "annotations");
        assert_eq!(node.ident_name, "annotations");
        assert_eq!(node.class_name, "Annotation");
        assert!(node.is_compound);
        assert!(node.is_array_element);
        assert!(!node.is_simple());
    }

    #[test]
    fn test_root_assigns_paths() {
        let root = SchemaNode::root(vec![scatter()]);
        assert!(root.is_root());
        assert_eq!(root.package_path(), "");
        assert_eq!(root.display_path(), "<root>");

        let scatter = &root.children[0];
        assert_eq!(scatter.trace_path, vec!["scatter"]);
        assert_eq!(scatter.package_path(), ".scatter");

        let marker = &scatter.children[1];
        assert_eq!(marker.dir_path(), ["scatter", "marker"]);
        assert_eq!(marker.dotted_path(), "scatter.marker");
        assert_eq!(marker.package_path(), ".scatter.marker");
        assert!(!marker.is_root());
    }

    #[test]
    fn test_detached_compound_is_not_root() {
        let node = scatter();
        assert!(node.trace_path.is_empty());
        assert!(!node.is_root());
        assert_eq!(node.display_path(), "scatter");
    }

    #[test]
    fn test_compound_children() {
        let node = scatter();
        let names: Vec<_> = node.compound_children().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["marker"]);
        assert!(node.has_compound_children());
        assert!(!node.children[1].has_compound_children());
    }

    #[test]
    fn test_builders() {
        let node = SchemaNode::leaf("size", "number")
            .with_description("Sets the marker size.")
            .with_default_literal("6")
            .with_array_ok(true);
        assert_eq!(node.description.as_deref(), Some("Sets the marker size."));
        assert_eq!(node.default_literal, "6");
        assert!(node.array_ok);
    }
}
