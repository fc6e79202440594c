#![deny(missing_docs)]

//! # Diagnostics
//!
//! Build-time findings accumulated over a generation run.
//!
//! Diagnostics never interrupt processing. A run that records any
//! [`Severity::Error`] still produces all artifacts, but the embedding build
//! is expected to fail the step.

use derive_more::Display;
use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational.
    #[display("note")]
    Note,
    /// Advisory mismatch; both sides agree.
    #[display("warning")]
    Warning,
    /// Structural conflict or failed conversion.
    #[display("error")]
    Error,
}

/// A single finding attributed to the declaration that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[display("{severity}: {origin}: {message}")]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// The originating declaration (e.g. `GET /users/{id}`).
    pub origin: String,
    /// Fixed-format message text.
    pub message: String,
}

/// Append-only collector of diagnostics for one run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and mirrors it to the log.
    pub fn push(&mut self, severity: Severity, origin: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            severity,
            origin: origin.into(),
            message: message.into(),
        };
        match diagnostic.severity {
            Severity::Error => {
                tracing::error!(origin = %diagnostic.origin, "{}", diagnostic.message)
            }
            Severity::Warning => {
                tracing::warn!(origin = %diagnostic.origin, "{}", diagnostic.message)
            }
            Severity::Note => {
                tracing::info!(origin = %diagnostic.origin, "{}", diagnostic.message)
            }
        }
        self.entries.push(diagnostic);
    }

    /// Records an error.
    pub fn error(&mut self, origin: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, origin, message);
    }

    /// Records a warning.
    pub fn warning(&mut self, origin: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, origin, message);
    }

    /// Records a note.
    pub fn note(&mut self, origin: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Note, origin, message);
    }

    /// True when at least one error was recorded.
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    /// Iterates over the recorded diagnostics in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Messages of the given severity, in order.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_tracked() {
        let mut diags = Diagnostics::new();
        diags.warning("GET /a", "advice");
        assert!(!diags.has_errors());

        diags.error("GET /a", "broken");
        assert!(diags.has_errors());
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.messages(Severity::Error), vec!["broken"]);
    }

    #[test]
    fn test_display_format() {
        let mut diags = Diagnostics::new();
        diags.note("POST /b", "hello");
        let d = diags.iter().next().unwrap();
        assert_eq!(d.to_string(), "note: POST /b: hello");
    }
}
