//! Docstring construction and word wrapping.

use crate::config::GeneratorConfig;
use crate::model::{DocBlock, DocParam, ParameterSpec};
use plotgen_schema::SchemaNode;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Column at which parameter description lines start.
pub const PARAM_DOC_INDENT: usize = 12;

/// Column at which property docstring lines start.
pub const PROPERTY_DOC_INDENT: usize = 8;

/// Wraps `text` into lines of at most `width` columns.
///
/// The first line carries no indent; every following line starts with
/// `indent` spaces, counted against `width`. Lines are filled greedily.
/// Words are separated on ASCII spaces only and are never split, so a word
/// longer than the available width sits alone on an over-long line.
#[must_use]
pub fn wrap(text: &str, indent: usize, width: usize) -> Vec<String> {
    let indent = " ".repeat(indent);
    let options = Options::new(width)
        .subsequent_indent(&indent)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Builds constructor and facade method docstrings.
pub struct DocBlockBuilder<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DocBlockBuilder<'a> {
    /// Creates a new docstring builder.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Builds the docstring for constructing `node` with `params`.
    ///
    /// `params` must come from [`crate::python::parameter_list`] for the
    /// same node; paragraphs follow its order.
    #[must_use]
    pub fn build(&self, node: &SchemaNode, params: &[ParameterSpec]) -> DocBlock {
        let width = self.config.max_line_width.saturating_sub(PARAM_DOC_INDENT);
        let params = params
            .iter()
            .zip(node.child_attributes())
            .map(|(param, attribute)| DocParam {
                name: param.name.clone(),
                lines: wrap(
                    attribute.description.as_deref().unwrap_or_default(),
                    PARAM_DOC_INDENT,
                    width,
                ),
            })
            .collect();

        DocBlock {
            title: node.class_name.clone(),
            params,
            returns: node.class_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::parameter_list;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap("Sets the x coordinates.", 12, 107), vec![
            "Sets the x coordinates."
        ]);
    }

    #[test]
    fn test_wrap_indents_continuation_lines() {
        let lines = wrap("one two three four five six", 4, 14);
        assert_eq!(lines, vec!["one two three", "    four five", "    six"]);
        assert!(lines.iter().all(|l| l.len() <= 14));
    }

    #[test]
    fn test_wrap_never_splits_words() {
        let lines = wrap("tiny extraordinarily tiny", 2, 10);
        assert_eq!(lines, vec!["tiny", "  extraordinarily", "  tiny"]);
    }

    #[test]
    fn test_wrap_keeps_hyphenated_words() {
        let lines = wrap("aaaa bbbb-cccc", 0, 10);
        assert_eq!(lines, vec!["aaaa", "bbbb-cccc"]);
    }

    #[test]
    fn test_wrap_empty() {
        let lines = wrap("", 12, 107);
        assert_eq!(lines.concat(), "");
    }

    #[test]
    fn test_build_doc_block() {
        let config = GeneratorConfig::default();
        let node = SchemaNode::compound(
            "scatter",
            vec![
                SchemaNode::leaf("x", "data_array").with_description("Sets the x coordinates."),
                SchemaNode::leaf("y", "data_array"),
            ],
        );
        let params = parameter_list(&node);
        let doc = DocBlockBuilder::new(&config).build(&node, &params);

        assert_eq!(doc.title, "Scatter");
        assert_eq!(doc.returns, "Scatter");
        assert_eq!(doc.params.len(), 2);
        assert_eq!(doc.params[0].name, "x");
        assert_eq!(doc.params[0].lines, vec!["Sets the x coordinates."]);
        assert_eq!(doc.params[1].name, "y");
        assert_eq!(doc.params[1].lines.concat(), "");
    }

    #[test]
    fn test_build_doc_block_respects_width() {
        let config = GeneratorConfig::default().max_line_width(40);
        let text = "Determines the drawing mode for this scatter trace when markers are shown";
        let node = SchemaNode::compound(
            "scatter",
            vec![SchemaNode::leaf("mode", "flaglist").with_description(text)],
        );
        let params = parameter_list(&node);
        let doc = DocBlockBuilder::new(&config).build(&node, &params);

        let lines = &doc.params[0].lines;
        assert!(lines.len() > 1);
        assert!(lines[0].len() + PARAM_DOC_INDENT <= 40);
        for line in &lines[1..] {
            assert!(line.starts_with(&" ".repeat(PARAM_DOC_INDENT)));
            assert!(line.len() <= 40 - PARAM_DOC_INDENT);
        }
    }
}
