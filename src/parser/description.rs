//! Detailed-description normalizer.
//!
//! A `<detaileddescription>` is a list of `<para>` nodes whose children mix
//! plain text, code listings, lists, parameter tables and simple sections.
//! Text, code and lists become ordered [`ContentBlock`]s. Parameter tables
//! and return notes never produce blocks: they enrich the function's
//! parameters and return notes instead.

use crate::diagnostics::{Diagnostics, Warning};
use crate::model::{ContentBlock, Direction, Parameter};
use crate::parser::{child, children, codeline, node_label, text_content};
use roxmltree::Node;
use std::collections::HashMap;

/// Normalized content of one detailed description.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Description {
    pub detail: Vec<ContentBlock>,
    pub returns: Vec<String>,
}

/// One `parameteritem`, waiting to be merged into the parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParamDoc {
    name: String,
    direction: Option<Direction>,
    description: Option<String>,
}

/// Immediate child of a `<para>`, discriminated by node kind and tag.
enum ParaChild<'a, 'input> {
    Text(&'a str),
    ProgramListing(Node<'a, 'input>),
    ItemizedList(Node<'a, 'input>),
    ParameterList(Node<'a, 'input>),
    SimpleSect(Node<'a, 'input>),
    Unhandled(String),
}

impl<'a, 'input> ParaChild<'a, 'input> {
    fn classify(node: Node<'a, 'input>) -> Self {
        if node.is_text() {
            return ParaChild::Text(node.text().unwrap_or_default());
        }
        if !node.is_element() {
            return ParaChild::Unhandled(node_label(node));
        }
        match node.tag_name().name() {
            "programlisting" => ParaChild::ProgramListing(node),
            "itemizedlist" => ParaChild::ItemizedList(node),
            "parameterlist" => ParaChild::ParameterList(node),
            "simplesect" => ParaChild::SimpleSect(node),
            other => ParaChild::Unhandled(other.to_string()),
        }
    }
}

#[derive(Default)]
struct Normalizer {
    out: Description,
    param_docs: Vec<ParamDoc>,
}

/// Normalize `detail` and merge any parameter documentation into `params`.
pub fn normalize_description(
    detail: Node,
    params: &mut [Parameter],
    diag: &mut dyn Diagnostics,
) -> Description {
    let mut n = Normalizer::default();

    for para in children(detail, "para") {
        if !para.children().any(|c| c.is_element()) {
            n.out.detail.push(ContentBlock::Text(text_content(para)));
            continue;
        }
        for node in para.children() {
            n.visit(ParaChild::classify(node), diag);
        }
    }

    apply_param_docs(params, &n.param_docs);
    n.out
}

impl Normalizer {
    fn visit(&mut self, item: ParaChild, diag: &mut dyn Diagnostics) {
        match item {
            ParaChild::Text(text) => self.out.detail.push(ContentBlock::Text(text.to_string())),
            ParaChild::ProgramListing(listing) => {
                self.out
                    .detail
                    .push(ContentBlock::Code(code_block(listing, diag)));
            }
            ParaChild::ItemizedList(list) => {
                let items: Vec<String> = children(list, "listitem")
                    .map(|item| child(item, "para").map(text_content).unwrap_or_default())
                    .collect();
                if !items.is_empty() {
                    self.out.detail.push(ContentBlock::List(items));
                }
            }
            ParaChild::ParameterList(list) => self.collect_param_docs(list, diag),
            ParaChild::SimpleSect(sect) => match sect.attribute("kind") {
                Some("return") => self.out.returns.push(text_content(sect)),
                other => diag.warn(Warning::UnhandledSimpleSection(
                    other.unwrap_or_default().to_string(),
                )),
            },
            ParaChild::Unhandled(tag) => diag.warn(Warning::UnhandledParagraphChild(tag)),
        }
    }

    fn collect_param_docs(&mut self, list: Node, diag: &mut dyn Diagnostics) {
        for item in children(list, "parameteritem") {
            let Some(name_node) = children(item, "parameternamelist")
                .flat_map(|names| children(names, "parametername"))
                .next()
            else {
                continue;
            };
            let name = text_content(name_node);
            if name.is_empty() {
                continue;
            }

            let direction = match name_node.attribute("direction") {
                Some(value) => {
                    let parsed = Direction::from_attr(value);
                    if parsed.is_none() {
                        diag.warn(Warning::UnknownDirection(value.to_string()));
                    }
                    parsed
                }
                None => None,
            };
            let description = child(item, "parameterdescription")
                .and_then(|desc| child(desc, "para"))
                .map(text_content);

            self.param_docs.push(ParamDoc {
                name,
                direction,
                description,
            });
        }
    }
}

/// Join the reconstructed lines of a `<programlisting>`.
///
/// Every non-empty line is newline-terminated; empty lines are dropped.
fn code_block(listing: Node, diag: &mut dyn Diagnostics) -> String {
    let mut code = String::new();
    for line in listing.children().filter(|n| n.is_element()) {
        let text = codeline::reconstruct_line(line, diag);
        if !text.is_empty() {
            code.push_str(&text);
            code.push('\n');
        }
    }
    code
}

/// Merge parameter docs by exact declared name.
///
/// Every parameter sharing a name receives the same metadata; when the XML
/// documents a name twice, the later item wins.
fn apply_param_docs(params: &mut [Parameter], docs: &[ParamDoc]) {
    let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, param) in params.iter().enumerate() {
        by_name.entry(param.declname.clone()).or_default().push(i);
    }

    for doc in docs {
        let Some(indices) = by_name.get(&doc.name) else {
            continue;
        };
        for &i in indices {
            params[i].direction = doc.direction;
            params[i].description = doc.description.clone();
        }
    }
}
