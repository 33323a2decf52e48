//! Renderer module — trait-based output.

pub mod asciidoc;

use crate::model::Document;

pub use asciidoc::AsciidocRenderer;

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
    fn file_extension(&self) -> &str;
}
