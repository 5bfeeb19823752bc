//! E004: Case statement with more than one default arm.

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::{Design, Stmt};

use crate::helpers::statements_with_context;
use crate::CheckRule;

/// Detects case statements with several arms lacking a guard.
pub struct MultipleDefaults;

impl CheckRule for MultipleDefaults {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 4)
    }

    fn name(&self) -> &str {
        "multiple-defaults"
    }

    fn description(&self) -> &str {
        "case statement with more than one default arm"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        for site in statements_with_context(design) {
            let Stmt::Case { items, .. } = site.stmt else {
                continue;
            };
            let defaults = items.iter().filter(|i| i.guard.is_none()).count();
            if defaults > 1 {
                sink.emit(
                    Diagnostic::error(
                        self.code(),
                        format!("case statement has {defaults} default arms"),
                    )
                    .at(site.context),
                );
            }
        }
    }
}
