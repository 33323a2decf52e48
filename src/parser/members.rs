//! Per-kind `memberdef` extractors.

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::model::*;
use crate::parser::description::{normalize_description, Description};
use crate::parser::{child, child_text, children, required_text, text_content};
use roxmltree::Node;

/// Extract a `memberdef kind="function"`.
pub fn extract_function(member: Node, diag: &mut dyn Diagnostics) -> Result<FunctionRecord> {
    let name = required_text(member, "name")?;

    let mut params: Vec<Parameter> = children(member, "param")
        .map(|param| Parameter {
            param_type: child_text(param, "type"),
            declname: child_text(param, "declname"),
            ..Default::default()
        })
        .collect();

    let Description { detail, returns } = match child(member, "detaileddescription") {
        Some(node) => normalize_description(node, &mut params, diag),
        None => Description::default(),
    };

    Ok(FunctionRecord {
        name,
        return_type: child_text(member, "type"),
        definition: child_text(member, "definition"),
        argsstring: child_text(member, "argsstring"),
        params,
        detail,
        returns,
        brief: child_text(member, "briefdescription"),
    })
}

/// Extract a `memberdef kind="enum"` with its values.
pub fn extract_enum(member: Node) -> Result<EnumRecord> {
    let values = children(member, "enumvalue")
        .map(|value| -> Result<EnumValue> {
            Ok(EnumValue {
                name: required_text(value, "name")?,
                doc: first_brief_para(value),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(EnumRecord {
        name: required_text(member, "name")?,
        doc: first_brief_para(member),
        values,
    })
}

/// Extract a `memberdef kind="typedef"`.
pub fn extract_typedef(member: Node) -> Result<TypedefRecord> {
    Ok(TypedefRecord {
        name: required_text(member, "name")?,
        typedef_type: child_text(member, "type"),
        doc: child(member, "detaileddescription").map(text_content),
    })
}

fn first_brief_para(node: Node) -> Option<String> {
    child(node, "briefdescription")
        .and_then(|brief| child(brief, "para"))
        .map(text_content)
}
