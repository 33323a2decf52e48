//! Parser module — dispatch by root element.
//!
//! `doxygenindex` roots go through the index resolver, `doxygen` roots are
//! parsed as a single compound.

pub mod codeline;
pub mod compound;
pub mod description;
pub mod index;
pub mod members;
pub mod section;

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::model::Document;
use roxmltree::{Node, NodeType, ParsingOptions};
use std::path::Path;

pub use index::{CompoundLoader, FsLoader, IndexResolver};

/// Parse Doxygen XML text into a Document.
///
/// Compound files referenced from an index are resolved against `base_dir`
/// and read through `loader`.
pub fn parse_document(
    xml: &str,
    base_dir: &Path,
    loader: &dyn CompoundLoader,
    diag: &mut dyn Diagnostics,
) -> Result<Document> {
    let doc = parse_xml(xml)?;
    let root = doc.root_element();
    match root.tag_name().name() {
        "doxygenindex" => {
            diag.trace("Input root is DoxygenIndex");
            let resolver = IndexResolver::new(base_dir, loader);
            Ok(Document::Index(resolver.resolve(root, diag)?))
        }
        "doxygen" => {
            diag.trace("Input root is Doxygen");
            Ok(Document::Compound(compound::parse_compound_document(
                root, diag,
            )?))
        }
        other => Err(Error::UnknownRoot {
            tag: other.to_string(),
        }),
    }
}

/// Doxygen output may carry a DOCTYPE; accept it.
pub(crate) fn parse_xml(text: &str) -> std::result::Result<roxmltree::Document<'_>, roxmltree::Error> {
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(text, opts)
}

// -- Node helpers -------------------------------------------------------------

/// Concatenated text of every descendant text node.
pub(crate) fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// First direct child element with the given tag.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

/// Direct child elements with the given tag, in document order.
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.has_tag_name(tag))
}

/// Text of the first `tag` child, empty when the child is absent.
pub(crate) fn child_text(node: Node, tag: &str) -> String {
    child(node, tag).map(text_content).unwrap_or_default()
}

pub(crate) fn required_child<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Result<Node<'a, 'input>> {
    child(node, tag).ok_or_else(|| Error::missing_element(node.tag_name().name(), tag))
}

pub(crate) fn required_text(node: Node, tag: &str) -> Result<String> {
    required_child(node, tag).map(text_content)
}

pub(crate) fn required_attr<'a>(node: Node<'a, '_>, attribute: &str) -> Result<&'a str> {
    node.attribute(attribute)
        .ok_or_else(|| Error::missing_attribute(node.tag_name().name(), attribute))
}

/// Human-readable label for a node in warnings.
pub(crate) fn node_label(node: Node) -> String {
    match node.node_type() {
        NodeType::Element => node.tag_name().name().to_string(),
        NodeType::Text => "text".to_string(),
        NodeType::Comment => "comment".to_string(),
        NodeType::PI => "processing-instruction".to_string(),
        NodeType::Root => "root".to_string(),
    }
}
