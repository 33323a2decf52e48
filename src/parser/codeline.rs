//! Source line reconstruction from `<codeline>` markup.
//!
//! Doxygen splits each listing line into `<highlight>` runs and collapses
//! whitespace into `<sp/>` markers. Walking them back in order yields the
//! line exactly as Doxygen rendered it.

use crate::diagnostics::{Diagnostics, Warning};
use crate::parser::node_label;
use roxmltree::Node;

/// Rebuild the text of one `<codeline>`.
pub fn reconstruct_line(codeline: Node, diag: &mut dyn Diagnostics) -> String {
    let mut line = String::new();
    for node in codeline.children() {
        append_node(node, &mut line, diag);
    }
    line
}

fn append_node(node: Node, line: &mut String, diag: &mut dyn Diagnostics) {
    if node.is_text() {
        line.push_str(node.text().unwrap_or_default());
        return;
    }
    if node.is_element() {
        match node.tag_name().name() {
            "sp" => {
                line.push(' ');
                return;
            }
            "highlight" => {
                for child in node.children() {
                    append_node(child, line, diag);
                }
                return;
            }
            _ => {}
        }
    }
    diag.warn(Warning::UnhandledCodeLineNode(node_label(node)));
}
