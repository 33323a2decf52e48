//! Non-fatal diagnostics sink.
//!
//! Parsing components never log directly; they report through a
//! `&mut dyn Diagnostics` handed to them by the caller.

use thiserror::Error;

/// Input the converter understood but chose to skip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("sectiondef {0} not implemented")]
    UnimplementedSection(String),

    #[error("detailed description paragraph child not handled: {0}")]
    UnhandledParagraphChild(String),

    #[error("detailed description simplesect kind not handled: {0}")]
    UnhandledSimpleSection(String),

    #[error("unhandled doxygenindex compound kind: {0}")]
    UnhandledIndexCompound(String),

    #[error("codeline node not handled: {0}")]
    UnhandledCodeLineNode(String),

    #[error("unknown parameter direction: {0}")]
    UnknownDirection(String),
}

/// Receiver for warnings and verbose progress lines.
pub trait Diagnostics {
    fn warn(&mut self, warning: Warning);
    fn trace(&mut self, message: &str);
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
    }

    fn trace(&mut self, message: &str) {
        log::debug!("{message}");
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    pub warnings: Vec<Warning>,
    pub traces: Vec<String>,
}

impl Diagnostics for CollectingDiagnostics {
    fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    fn trace(&mut self, message: &str) {
        self.traces.push(message.to_string());
    }
}
