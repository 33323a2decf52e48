//! `doxygenindex` resolver.
//!
//! Walks the index in document order and parses every `file` compound from
//! `<base_dir>/<refid>.xml`. Struct and dir compounds are skipped; other
//! kinds only produce a warning.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::{compound, parse_xml, required_attr};
use roxmltree::Node;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of compound XML text referenced by an index.
pub trait CompoundLoader {
    fn load(&self, path: &Path) -> Result<String>;
}

/// Reads compound files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl CompoundLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub struct IndexResolver<'a> {
    base_dir: &'a Path,
    loader: &'a dyn CompoundLoader,
}

impl<'a> IndexResolver<'a> {
    pub fn new(base_dir: &'a Path, loader: &'a dyn CompoundLoader) -> Self {
        Self { base_dir, loader }
    }

    /// Path of the XML file describing compound `refid`.
    pub fn compound_path(&self, refid: &str) -> PathBuf {
        self.base_dir.join(format!("{refid}.xml"))
    }

    pub fn resolve(&self, root: Node, diag: &mut dyn Diagnostics) -> Result<IndexDocument> {
        let mut index = IndexDocument {
            name: "Index".to_string(),
            ..Default::default()
        };

        for entry in root.descendants().filter(|n| n.has_tag_name("compound")) {
            let refid = required_attr(entry, "refid")?;
            let kind = CompoundKind::from_attr(required_attr(entry, "kind")?);
            diag.trace(&format!("Parsing compound... Kind: {kind}"));

            match &kind {
                CompoundKind::File => {
                    let path = self.compound_path(refid);
                    index.files.push(self.parse_file(&path, diag)?);
                }
                CompoundKind::Struct | CompoundKind::Dir => {}
                CompoundKind::Other(other) => {
                    diag.warn(Warning::UnhandledIndexCompound(other.clone()));
                }
            }

            index.refs.push(CompoundRef {
                refid: refid.to_string(),
                kind,
            });
        }

        Ok(index)
    }

    fn parse_file(&self, path: &Path, diag: &mut dyn Diagnostics) -> Result<CompoundRecord> {
        diag.trace(&format!("Parsing input file: {}", path.display()));
        let text = self.loader.load(path)?;
        let doc = parse_xml(&text).map_err(|source| Error::XmlFile {
            path: path.to_path_buf(),
            source,
        })?;
        compound::parse_compound_document(doc.root_element(), diag)
    }
}
