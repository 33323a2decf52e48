//! AsciiDoc renderer.
//!
//! Produces one API reference page: enums first, then one table per
//! function. The layout, trailing spaces included, is fixed so that pages
//! regenerate byte-for-byte.

use crate::model::*;
use crate::render::Renderer;

/// Doc text used for enum values without a brief description.
pub const NO_DOC_ENTRY: &str = "No documentation entry.";

/// Fewer detail blocks than this are treated as "no real detail": an
/// otherwise empty description still yields a whitespace text block or two.
const MIN_DETAIL_BLOCKS: usize = 3;

#[derive(Debug, Default, Clone, Copy)]
pub struct AsciidocRenderer {
    /// Emit a `== Typedefs` section before the enums
    pub include_typedefs: bool,
}

impl AsciidocRenderer {
    pub fn new(include_typedefs: bool) -> Self {
        Self { include_typedefs }
    }
}

impl Renderer for AsciidocRenderer {
    fn render(&self, doc: &Document) -> String {
        let compounds = doc.compounds();
        let mut out = String::new();

        out.push_str(&format!("= {} API Documentation\n", doc.name()));
        out.push_str(":source-highlighter: coderay\n");
        out.push_str(":toc: left\n");
        out.push('\n');

        if self.include_typedefs {
            render_typedefs(&mut out, compounds);
        }

        out.push_str("== Enums\n");
        out.push('\n');
        for record in compounds.iter().flat_map(|c| &c.enums) {
            render_enum(&mut out, record);
        }
        out.push('\n');

        out.push_str("== Functions\n");
        out.push('\n');
        for func in compounds.iter().flat_map(|c| &c.functions) {
            render_function(&mut out, func);
        }
        out.push('\n');

        out
    }

    fn file_extension(&self) -> &str {
        "adoc"
    }
}

fn render_typedefs(out: &mut String, compounds: &[CompoundRecord]) {
    let typedefs: Vec<&TypedefRecord> = compounds.iter().flat_map(|c| &c.typedefs).collect();
    if typedefs.is_empty() {
        return;
    }

    out.push_str("== Typedefs\n");
    out.push('\n');
    for typedef in typedefs {
        out.push_str(&format!("=== {}\n", typedef.name));
        out.push('\n');
        out.push_str("[horizontal]\n");
        out.push_str(&format!(
            "{} -> {}:: {}\n",
            typedef.typedef_type,
            typedef.name,
            typedef.doc.as_deref().unwrap_or_default()
        ));
    }
    out.push('\n');
}

fn render_enum(out: &mut String, record: &EnumRecord) {
    out.push_str(&format!("=== {}\n", record.name));
    out.push('\n');
    if let Some(ref doc) = record.doc {
        out.push_str(doc);
    }
    out.push('\n');
    out.push_str("[horizontal]\n");
    for value in &record.values {
        let doc = value.doc.as_deref().unwrap_or(NO_DOC_ENTRY);
        out.push_str(&format!("{}:: {}\n", value.name, doc));
    }
    out.push('\n');
}

/// Render one function as a two-column table.
fn render_function(out: &mut String, func: &FunctionRecord) {
    out.push_str(&format!("=== {}\n", func.name));
    out.push('\n');
    out.push_str("[cols='h,5a']\n");
    out.push_str("|===\n");
    out.push_str("| Description\n");
    out.push_str(&format!("| {}\n", func.brief));
    out.push('\n');

    out.push_str("| Signature \n");
    out.push_str("|\n");
    out.push_str("[source,C]\n");
    out.push_str("----\n");
    out.push_str(&format!("{} {}\n", func.definition, func.argsstring));
    out.push_str("----\n");
    out.push('\n');

    out.push_str("| Parameters\n");
    out.push_str("|\n");
    for param in &func.params {
        out.push_str(&format!(
            "{}`{} {}`::\n",
            direction_marker(param.direction),
            param.param_type,
            param.declname
        ));
        out.push_str(param.description.as_deref().unwrap_or_default());
        out.push('\n');
    }
    out.push('\n');

    if !func.returns.is_empty() {
        out.push_str("| Return\n");
        out.push_str("| ");
        for note in &func.returns {
            out.push_str(&format!("* {} \n", note));
        }
        out.push('\n');
    }

    if func.detail.len() >= MIN_DETAIL_BLOCKS {
        out.push_str("| Details / Examples \n");
        out.push_str("|\n");
        for block in &func.detail {
            render_block(out, block);
        }
        out.push('\n');
    }

    out.push_str("|===\n");
    out.push('\n');
}

fn render_block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::Code(code) => {
            out.push_str("----\n");
            out.push_str(code);
            out.push('\n');
            out.push_str("----\n");
        }
        ContentBlock::Text(text) => {
            out.push_str(text);
            out.push('\n');
        }
        ContentBlock::List(items) => {
            out.push('\n');
            for item in items {
                out.push_str(&format!(" * {}\n", item));
            }
            out.push_str("\n\n");
        }
    }
}

/// `*in* `, `*out* `, `*inout* ` or nothing.
fn direction_marker(direction: Option<Direction>) -> String {
    match direction {
        Some(dir) => format!("*{}* ", dir.as_str()),
        None => String::new(),
    }
}
