//! doxml2adoc — turn Doxygen XML output into AsciiDoc API reference pages.
//!
//! Conversion runs in two phases: the XML is parsed into the
//! format-agnostic [`model`], then the model is rendered as AsciiDoc.
//! Input is either a single compound file (`<doxygen>` root) or an index
//! (`<doxygenindex>` root) whose file compounds are read from a base
//! directory.

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

pub use diagnostics::{CollectingDiagnostics, Diagnostics, LogDiagnostics, Warning};
pub use error::{Error, Result};
pub use parser::{CompoundLoader, FsLoader};
pub use render::{AsciidocRenderer, Renderer};

/// Settings for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory holding the compound files an index refers to
    pub base_dir: PathBuf,
    /// Emit the typedef section
    pub include_typedefs: bool,
}

impl ConvertOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            include_typedefs: false,
        }
    }

    pub fn with_typedefs(mut self, include_typedefs: bool) -> Self {
        self.include_typedefs = include_typedefs;
        self
    }
}

/// Convert Doxygen XML text to AsciiDoc, reading index compounds from disk.
pub fn convert(xml: &str, options: &ConvertOptions, diag: &mut dyn Diagnostics) -> Result<String> {
    convert_with_loader(xml, options, &FsLoader, diag)
}

/// Convert Doxygen XML text to AsciiDoc, reading index compounds through `loader`.
pub fn convert_with_loader(
    xml: &str,
    options: &ConvertOptions,
    loader: &dyn CompoundLoader,
    diag: &mut dyn Diagnostics,
) -> Result<String> {
    diag.trace("Converting");
    let doc = parser::parse_document(xml, &options.base_dir, loader, diag)?;
    let renderer = AsciidocRenderer::new(options.include_typedefs);
    Ok(renderer.render(&doc))
}

/// Output path for an input file: its extension replaced by the renderer's.
/// "xml/input_8h.xml" → "xml/input_8h.adoc", "index" → "index.adoc"
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(AsciidocRenderer::default().file_extension())
}

/// Convert `input` and write the result next to it (see [`output_path`]).
///
/// Nothing is written when the conversion fails.
pub fn convert_file(input: &Path, options: &ConvertOptions, diag: &mut dyn Diagnostics) -> Result<()> {
    let xml = fs::read_to_string(input).map_err(|source| Error::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let output = convert(&xml, options, diag)?;

    let out_path = output_path(input);
    fs::write(&out_path, output).map_err(|source| Error::Io {
        path: out_path.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(output_path(Path::new("xml/input_8h.xml")), PathBuf::from("xml/input_8h.adoc"));
        assert_eq!(output_path(Path::new("a.b.xml")), PathBuf::from("a.b.adoc"));
    }

    #[test]
    fn output_path_without_extension() {
        assert_eq!(output_path(Path::new("index")), PathBuf::from("index.adoc"));
    }

    #[test]
    fn output_path_follows_renderer_extension() {
        let renderer = AsciidocRenderer::default();
        let ext = renderer.file_extension();
        assert_eq!(ext, "adoc");
        let out = output_path(Path::new("xml/input_8h.xml"));
        assert_eq!(out.extension().and_then(|e| e.to_str()), Some(ext));
    }

    #[test]
    fn convert_traces_progress() {
        let mut diag = CollectingDiagnostics::default();
        convert(
            r#"<doxygen><compounddef id="a" kind="file"><compoundname>a.h</compoundname></compounddef></doxygen>"#,
            &ConvertOptions::new("."),
            &mut diag,
        )
        .unwrap();
        assert_eq!(diag.traces, vec!["Converting", "Input root is Doxygen"]);
    }

    #[test]
    fn class_compound_produces_no_output() {
        let mut diag = CollectingDiagnostics::default();
        let result = convert(
            r#"<doxygen><compounddef id="c" kind="class"><compoundname>C</compoundname></compounddef></doxygen>"#,
            &ConvertOptions::new("."),
            &mut diag,
        );
        assert!(matches!(result, Err(Error::UnknownCompoundKind { .. })));
    }
}
