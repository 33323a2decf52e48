//! Single-compound (`doxygen` root) parser.

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::model::CompoundRecord;
use crate::parser::section::{dispatch_section, SectionMembers};
use crate::parser::{children, required_attr, required_text};
use roxmltree::Node;

/// Parse a `doxygen` root element into a CompoundRecord.
pub fn parse_compound_document(root: Node, diag: &mut dyn Diagnostics) -> Result<CompoundRecord> {
    if !root.has_tag_name("doxygen") {
        return Err(Error::UnknownRoot {
            tag: root.tag_name().name().to_string(),
        });
    }

    let compounddef = root
        .descendants()
        .find(|n| n.has_tag_name("compounddef"))
        .ok_or_else(|| Error::missing_element("doxygen", "compounddef"))?;

    match required_attr(compounddef, "kind")? {
        "file" => parse_compound(compounddef, diag),
        other => Err(Error::UnknownCompoundKind {
            kind: other.to_string(),
        }),
    }
}

/// Parse a `compounddef kind="file"`.
///
/// Members of sections with the same kind are concatenated in section order.
pub fn parse_compound(compounddef: Node, diag: &mut dyn Diagnostics) -> Result<CompoundRecord> {
    let mut record = CompoundRecord {
        name: required_text(compounddef, "compoundname")?,
        id: compounddef.attribute("id").unwrap_or_default().to_string(),
        language: compounddef.attribute("language").map(str::to_string),
        ..Default::default()
    };

    for section in children(compounddef, "sectiondef") {
        match dispatch_section(section, diag)? {
            SectionMembers::Functions(functions) => record.functions.extend(functions),
            SectionMembers::Enums(enums) => record.enums.extend(enums),
            SectionMembers::Typedefs(typedefs) => record.typedefs.extend(typedefs),
            SectionMembers::Vars(vars) => record.vars.extend(vars),
            SectionMembers::Defines => {}
        }
    }

    Ok(record)
}
