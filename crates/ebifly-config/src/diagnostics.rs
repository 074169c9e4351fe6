//! Severity-graded diagnostics collected during a configuration load
//!
//! Every diagnostic is emitted through `tracing` as it is recorded and kept
//! in order, so callers can report on a load after the fact.

use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The configuration works but needs attention
    Warning,
    /// A value was rejected and replaced by a default or disabled
    Severe,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}

/// A single diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Configuration key the line refers to, if any
    pub key: Option<String>,
    pub message: String,
}

/// Ordered collection of diagnostics from one load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning about `key`.
    pub fn warning(&mut self, key: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        match key {
            Some(key) => tracing::warn!(key, "{}", message),
            None => tracing::warn!("{}", message),
        }
        self.push(Severity::Warning, key, message);
    }

    /// Record a severe diagnostic about `key`.
    pub fn severe(&mut self, key: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        match key {
            Some(key) => tracing::error!(key, "{}", message),
            None => tracing::error!("{}", message),
        }
        self.push(Severity::Severe, key, message);
    }

    fn push(&mut self, severity: Severity, key: Option<&str>, message: String) {
        self.entries.push(Diagnostic {
            severity,
            key: key.map(str::to_string),
            message,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostics recorded against `key`.
    pub fn for_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.entries
            .iter()
            .filter(move |d| d.key.as_deref() == Some(key))
    }

    pub fn has_severe(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Severe)
    }

    /// The highest severity recorded, or `None` for a clean load.
    pub fn worst(&self) -> Option<Severity> {
        self.entries.iter().map(|d| d.severity).max()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
