//! `sectiondef` dispatch by declared kind.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::members::{extract_enum, extract_function, extract_typedef};
use crate::parser::{children, required_attr};
use roxmltree::Node;

/// Section kinds the converter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Func,
    Enum,
    Typedef,
    Var,
    Define,
}

impl SectionKind {
    pub fn from_attr(kind: &str) -> Option<Self> {
        match kind {
            "func" => Some(SectionKind::Func),
            "enum" => Some(SectionKind::Enum),
            "typedef" => Some(SectionKind::Typedef),
            "var" => Some(SectionKind::Var),
            "define" => Some(SectionKind::Define),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Func => "func",
            SectionKind::Enum => "enum",
            SectionKind::Typedef => "typedef",
            SectionKind::Var => "var",
            SectionKind::Define => "define",
        }
    }

    /// `memberdef` kind expected inside this section.
    pub fn member_kind(self) -> &'static str {
        match self {
            SectionKind::Func => "function",
            SectionKind::Enum => "enum",
            SectionKind::Typedef => "typedef",
            SectionKind::Var => "variable",
            SectionKind::Define => "define",
        }
    }
}

/// Typed members of one section.
#[derive(Debug)]
pub enum SectionMembers {
    Functions(Vec<FunctionRecord>),
    Enums(Vec<EnumRecord>),
    Typedefs(Vec<TypedefRecord>),
    Vars(Vec<VarRecord>),
    /// Macro sections carry nothing into the model
    Defines,
}

/// Route one `sectiondef` to the extractor for its kind.
pub fn dispatch_section(section: Node, diag: &mut dyn Diagnostics) -> Result<SectionMembers> {
    let kind_attr = required_attr(section, "kind")?;
    diag.trace(&format!("Parsing sectiondef kind {kind_attr}"));

    let kind = SectionKind::from_attr(kind_attr).ok_or_else(|| Error::UnknownSectionKind {
        kind: kind_attr.to_string(),
    })?;

    let members = match kind {
        SectionKind::Func => SectionMembers::Functions(
            members(section, kind)?
                .into_iter()
                .map(|m| extract_function(m, diag))
                .collect::<Result<_>>()?,
        ),
        SectionKind::Enum => SectionMembers::Enums(
            members(section, kind)?
                .into_iter()
                .map(extract_enum)
                .collect::<Result<_>>()?,
        ),
        SectionKind::Typedef => SectionMembers::Typedefs(
            members(section, kind)?
                .into_iter()
                .map(extract_typedef)
                .collect::<Result<_>>()?,
        ),
        SectionKind::Var => {
            diag.warn(Warning::UnimplementedSection(kind.as_str().to_string()));
            SectionMembers::Vars(Vec::new())
        }
        SectionKind::Define => {
            diag.warn(Warning::UnimplementedSection(kind.as_str().to_string()));
            SectionMembers::Defines
        }
    };
    Ok(members)
}

/// Collect the section's `memberdef`s, rejecting any of the wrong kind.
fn members<'a, 'input>(section: Node<'a, 'input>, kind: SectionKind) -> Result<Vec<Node<'a, 'input>>> {
    let expected = kind.member_kind();
    children(section, "memberdef")
        .map(|member| -> Result<Node<'a, 'input>> {
            let found = required_attr(member, "kind")?;
            if found == expected {
                Ok(member)
            } else {
                Err(Error::MemberKindMismatch {
                    section: kind.as_str().to_string(),
                    expected: expected.to_string(),
                    found: found.to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingDiagnostics;

    fn dispatch(xml: &str) -> (Result<SectionMembers>, CollectingDiagnostics) {
        let doc = roxmltree::Document::parse(xml).unwrap();
        let mut diag = CollectingDiagnostics::default();
        let result = dispatch_section(doc.root_element(), &mut diag);
        (result, diag)
    }

    #[test]
    fn func_section_yields_functions() {
        let (result, diag) = dispatch(
            r#"<sectiondef kind="func"><memberdef kind="function"><name>a</name></memberdef><memberdef kind="function"><name>b</name></memberdef></sectiondef>"#,
        );
        let Ok(SectionMembers::Functions(funcs)) = result else {
            panic!("expected functions");
        };
        let names: Vec<_> = funcs.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(diag.traces, vec!["Parsing sectiondef kind func".to_string()]);
    }

    #[test]
    fn enum_and_typedef_sections() {
        let (result, _) = dispatch(
            r#"<sectiondef kind="enum"><memberdef kind="enum"><name>e</name></memberdef></sectiondef>"#,
        );
        assert!(matches!(result, Ok(SectionMembers::Enums(ref v)) if v.len() == 1));

        let (result, _) = dispatch(
            r#"<sectiondef kind="typedef"><memberdef kind="typedef"><type>int</type><name>t</name></memberdef></sectiondef>"#,
        );
        assert!(matches!(result, Ok(SectionMembers::Typedefs(ref v)) if v[0].typedef_type == "int"));
    }

    #[test]
    fn var_and_define_warn_and_yield_nothing() {
        let (result, diag) = dispatch(
            r#"<sectiondef kind="var"><memberdef kind="variable"><name>v</name></memberdef></sectiondef>"#,
        );
        assert!(matches!(result, Ok(SectionMembers::Vars(ref v)) if v.is_empty()));
        assert_eq!(
            diag.warnings,
            vec![Warning::UnimplementedSection("var".to_string())]
        );

        let (result, diag) = dispatch(r#"<sectiondef kind="define"/>"#);
        assert!(matches!(result, Ok(SectionMembers::Defines)));
        assert_eq!(
            diag.warnings,
            vec![Warning::UnimplementedSection("define".to_string())]
        );
    }

    #[test]
    fn unknown_section_kind_is_fatal() {
        let (result, _) = dispatch(r#"<sectiondef kind="public-attrib"/>"#);
        assert!(matches!(result, Err(Error::UnknownSectionKind { ref kind }) if kind == "public-attrib"));
    }

    #[test]
    fn member_kind_mismatch_is_fatal() {
        let (result, _) = dispatch(
            r#"<sectiondef kind="func"><memberdef kind="function"><name>ok</name></memberdef><memberdef kind="variable"><name>v</name></memberdef></sectiondef>"#,
        );
        match result {
            Err(Error::MemberKindMismatch {
                section,
                expected,
                found,
            }) => {
                assert_eq!(section, "func");
                assert_eq!(expected, "function");
                assert_eq!(found, "variable");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }
}
