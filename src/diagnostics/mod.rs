//! Diagnostics sink for recoverable conversion problems
//!
//! An MSR value with no braille equivalent does not stop a conversion:
//! the offending element is dropped (or replaced by a "none" value) and a
//! diagnostic pointing at the MSR source position is recorded here.

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Info,
}

/// One recoverable problem found while converting
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Input line of the MSR element at fault
    pub input_line: u32,
    /// Number of the enclosing MSR measure, when inside one
    pub measure_number: Option<String>,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "unsupported_clef", "unsupported_key")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        input_line: u32,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            input_line,
            measure_number: None,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Attach the enclosing measure number
    pub fn in_measure(mut self, measure_number: Option<&str>) -> Self {
        self.measure_number = measure_number.map(str::to_string);
        self
    }
}

/// Collection of diagnostics for one conversion
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    /// All diagnostics, in the order they were found
    pub items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a diagnostic, echoing it to the log
    pub fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Warning => log::warn!(
                "{} (input line {}, measure {}): {}",
                diagnostic.kind,
                diagnostic.input_line,
                diagnostic.measure_number.as_deref().unwrap_or("-"),
                diagnostic.message
            ),
            DiagnosticSeverity::Info => log::info!(
                "{} (input line {}): {}",
                diagnostic.kind,
                diagnostic.input_line,
                diagnostic.message
            ),
        }
        self.items.push(diagnostic);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.items
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Warning)
    }

    /// Diagnostics of the given kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.items.iter().filter(move |d| d.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diagnostic = Diagnostic::new(
            42,
            DiagnosticSeverity::Warning,
            "unsupported_clef",
            "Clef 'percussion' has no braille equivalent",
        )
        .in_measure(Some("3"));

        assert_eq!(diagnostic.input_line, 42);
        assert_eq!(diagnostic.measure_number.as_deref(), Some("3"));
        assert_eq!(diagnostic.severity, DiagnosticSeverity::Warning);
        assert_eq!(diagnostic.kind, "unsupported_clef");
    }

    #[test]
    fn test_diagnostics_has_warnings() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_warnings());
        assert!(diags.is_empty());

        diags.add(Diagnostic::new(0, DiagnosticSeverity::Info, "info", "Info"));
        assert!(!diags.has_warnings());

        diags.add(Diagnostic::new(1, DiagnosticSeverity::Warning, "warn", "Warning"));
        assert!(diags.has_warnings());
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.of_kind("warn").count(), 1);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&DiagnosticSeverity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
