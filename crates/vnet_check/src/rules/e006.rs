//! E006: Event wait without sensitivities.

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::{Design, Stmt};

use crate::helpers::statements_with_context;
use crate::CheckRule;

/// Detects `@(...)` waits whose event list is empty and would never wake.
pub struct EmptySensitivity;

impl CheckRule for EmptySensitivity {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 6)
    }

    fn name(&self) -> &str {
        "empty-sensitivity"
    }

    fn description(&self) -> &str {
        "event wait without sensitivities"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        for site in statements_with_context(design) {
            if let Stmt::Wait { label, events, .. } = site.stmt {
                if events.is_empty() {
                    sink.emit(
                        Diagnostic::error(
                            self.code(),
                            format!("event wait {} has no sensitivities", design.resolve(*label)),
                        )
                        .at(site.context),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vnet_netlist::ProcessKind;

    #[test]
    fn reports_empty_wait_in_task() {
        let mut d = Design::new();
        let body = Stmt::Wait {
            label: d.intern("w0"),
            events: Vec::new(),
            body: None,
        };
        d.add_task("t", Vec::new(), body);
        let line = d.line("a.v", 1);
        d.add_process(ProcessKind::Initial, line, Stmt::empty_block());

        let sink = DiagnosticSink::new();
        EmptySensitivity.check(&d, &sink);
        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].location.as_deref(), Some("task t"));
    }
}
