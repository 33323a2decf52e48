//! Data model for parsed Doxygen XML — format-agnostic.
//!
//! Every record here is built fresh for one conversion and dropped once the
//! AsciiDoc text has been produced.

use std::fmt;

/// Result of parsing one input document.
#[derive(Debug)]
pub enum Document {
    /// A `doxygenindex` root, with every referenced `file` compound parsed.
    Index(IndexDocument),
    /// A single `doxygen` root holding one `compounddef`.
    Compound(CompoundRecord),
}

impl Document {
    /// Name used for the document title.
    pub fn name(&self) -> &str {
        match self {
            Document::Index(index) => &index.name,
            Document::Compound(compound) => &compound.name,
        }
    }

    /// Compounds to render, in document order.
    pub fn compounds(&self) -> &[CompoundRecord] {
        match self {
            Document::Index(index) => &index.files,
            Document::Compound(compound) => std::slice::from_ref(compound),
        }
    }
}

/// Parsed `doxygenindex`.
#[derive(Debug, Default)]
pub struct IndexDocument {
    pub name: String,
    /// `compound` entries as listed in the index
    pub refs: Vec<CompoundRef>,
    /// Parsed `file` compounds, in index order
    pub files: Vec<CompoundRecord>,
}

/// One `compound` entry of an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRef {
    pub refid: String,
    pub kind: CompoundKind,
}

/// Compound kinds the index resolver distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompoundKind {
    File,
    Struct,
    Dir,
    Other(String),
}

impl CompoundKind {
    pub fn from_attr(kind: &str) -> Self {
        match kind {
            "file" => CompoundKind::File,
            "struct" => CompoundKind::Struct,
            "dir" => CompoundKind::Dir,
            other => CompoundKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CompoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundKind::File => f.write_str("file"),
            CompoundKind::Struct => f.write_str("struct"),
            CompoundKind::Dir => f.write_str("dir"),
            CompoundKind::Other(kind) => f.write_str(kind),
        }
    }
}

/// One documented source file (`compounddef kind="file"`).
#[derive(Debug, Default)]
pub struct CompoundRecord {
    pub name: String,
    pub id: String,
    /// `language` attribute, e.g. "C++"
    pub language: Option<String>,
    pub functions: Vec<FunctionRecord>,
    pub enums: Vec<EnumRecord>,
    pub typedefs: Vec<TypedefRecord>,
    /// Always empty: variable extraction is not implemented
    pub vars: Vec<VarRecord>,
}

/// A documented function.
#[derive(Debug, Default)]
pub struct FunctionRecord {
    pub name: String,
    pub return_type: String,
    /// Full definition text, e.g. "int foo"
    pub definition: String,
    /// Argument list text, e.g. "(void)"
    pub argsstring: String,
    pub params: Vec<Parameter>,
    /// Normalized detailed description, in document order
    pub detail: Vec<ContentBlock>,
    /// `simplesect kind="return"` texts
    pub returns: Vec<String>,
    pub brief: String,
}

/// A function parameter, optionally enriched from a `parameterlist`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub param_type: String,
    /// Empty when the XML carries no `declname` (e.g. `void`)
    pub declname: String,
    pub direction: Option<Direction>,
    pub description: Option<String>,
}

/// Data flow direction of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Direction {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "in" => Some(Direction::In),
            "out" => Some(Direction::Out),
            "inout" => Some(Direction::InOut),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "inout",
        }
    }
}

/// A documented enum.
#[derive(Debug, Default)]
pub struct EnumRecord {
    pub name: String,
    /// First brief-description paragraph
    pub doc: Option<String>,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Default)]
pub struct EnumValue {
    pub name: String,
    pub doc: Option<String>,
}

/// A documented typedef.
#[derive(Debug, Default)]
pub struct TypedefRecord {
    pub name: String,
    /// Underlying type text
    pub typedef_type: String,
    /// Full detailed-description text
    pub doc: Option<String>,
}

/// Placeholder for `sectiondef kind="var"` members.
#[derive(Debug, Default)]
pub struct VarRecord {
    pub name: String,
    pub var_type: String,
}

/// One normalized unit of a detailed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text(String),
    Code(String),
    List(Vec<String>),
}
