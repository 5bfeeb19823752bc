//! Collector shared by the rules of one check run.

use crate::code::DiagnosticCode;
use crate::diagnostic::Diagnostic;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Findings {
    list: Vec<Diagnostic>,
    /// Errors ever emitted, including ones already drained.
    errors: usize,
}

/// Collects the findings of structural checks.
///
/// Rules only ever append. Draining with [`take_all`](Self::take_all) hands
/// the findings to a report but keeps the error tally, so a driver can still
/// decide its exit status afterwards.
#[derive(Default)]
pub struct DiagnosticSink {
    findings: Mutex<Findings>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding.
    pub fn emit(&self, diag: Diagnostic) {
        let mut findings = self.lock();
        if diag.severity.is_error() {
            findings.errors += 1;
        }
        findings.list.push(diag);
    }

    /// Returns `true` if any error has been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Returns the number of errors emitted so far.
    pub fn error_count(&self) -> usize {
        self.lock().errors
    }

    /// Returns how many pending findings carry `code`.
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.lock().list.iter().filter(|d| d.code == code).count()
    }

    /// Returns the codes of the pending findings in emission order.
    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.lock().list.iter().map(|d| d.code).collect()
    }

    /// Drains the pending findings in emission order.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.lock().list)
    }

    /// Returns a copy of the pending findings.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().list.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Findings> {
        // A panicking rule cannot leave a half-pushed entry behind.
        self.findings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    const E001: DiagnosticCode = DiagnosticCode {
        category: Category::Error,
        number: 1,
    };
    const W101: DiagnosticCode = DiagnosticCode {
        category: Category::Warning,
        number: 101,
    };

    #[test]
    fn empty_sink() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert!(sink.codes().is_empty());
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn warnings_are_not_errors() {
        let sink = DiagnosticSink::new();
        sink.emit(Diagnostic::warning(W101, "unknown task"));
        assert!(!sink.has_errors());
        assert_eq!(sink.count(W101), 1);
        assert_eq!(sink.count(E001), 0);
    }

    #[test]
    fn drain_keeps_error_tally() {
        let sink = DiagnosticSink::new();
        sink.emit(Diagnostic::error(E001, "ring corrupted"));
        sink.emit(Diagnostic::warning(W101, "unknown task"));
        assert_eq!(sink.codes(), vec![E001, W101]);
        assert_eq!(sink.take_all().len(), 2);
        assert!(sink.take_all().is_empty());
        assert_eq!(sink.count(E001), 0);
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn rules_may_emit_from_several_threads() {
        let sink = DiagnosticSink::new();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        sink.emit(Diagnostic::error(E001, "ring corrupted"));
                    }
                });
            }
        });
        assert_eq!(sink.error_count(), 100);
        assert_eq!(sink.count(E001), 100);
    }
}
