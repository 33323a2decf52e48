//! Fatal errors raised while converting Doxygen XML.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conversion errors. Any of these aborts the whole conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// Root element is neither `doxygenindex` nor `doxygen`.
    #[error("unhandled/unknown root element: {tag}")]
    UnknownRoot { tag: String },

    /// `compounddef` kind other than `file`.
    #[error("unknown/unhandled compounddef kind: {kind}")]
    UnknownCompoundKind { kind: String },

    /// `sectiondef` kind outside func/enum/typedef/var/define.
    #[error("unhandled section kind: {kind}")]
    UnknownSectionKind { kind: String },

    /// A `memberdef` whose kind does not belong in its section.
    #[error("member kind '{found}' in sectiondef '{section}', expected '{expected}'")]
    MemberKindMismatch {
        section: String,
        expected: String,
        found: String,
    },

    /// A required child element is absent.
    #[error("<{parent}> has no <{child}> element")]
    MissingElement { parent: String, child: String },

    /// A required attribute is absent.
    #[error("<{element}> has no '{attribute}' attribute")]
    MissingAttribute { element: String, attribute: String },

    /// Input is not a parsable XML document.
    #[error("not a parsable document: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A compound file referenced from an index is not parsable.
    #[error("failed to parse '{path}': {source}")]
    XmlFile {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// Reading an input or writing an output failed.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn missing_element(parent: &str, child: &str) -> Self {
        Self::MissingElement {
            parent: parent.to_string(),
            child: child.to_string(),
        }
    }

    pub(crate) fn missing_attribute(element: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }
}
