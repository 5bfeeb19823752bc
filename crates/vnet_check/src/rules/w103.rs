//! W103: Memory read or write naming no declared memory.

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::{Design, Expr, Stmt};

use crate::helpers::{all_exprs, statements_with_context};
use crate::CheckRule;

/// Detects memory references and memory writes to undeclared memories.
pub struct UnresolvedMemory;

impl CheckRule for UnresolvedMemory {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 103)
    }

    fn name(&self) -> &str {
        "unresolved-memory"
    }

    fn description(&self) -> &str {
        "memory reference naming no declared memory"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        for site in statements_with_context(design) {
            if let Stmt::AssignMem { memory, line, .. } = site.stmt {
                if design.memory(*memory).is_none() {
                    sink.emit(
                        Diagnostic::warning(
                            self.code(),
                            format!("write to undeclared memory {}", design.resolve(*memory)),
                        )
                        .at(line.display(design.names()).to_string())
                        .with_note(format!("in {}", site.context)),
                    );
                }
            }
        }
        for expr in all_exprs(design) {
            if let Expr::Memory { memory, .. } = expr {
                if design.memory(*memory).is_none() {
                    sink.emit(Diagnostic::warning(
                        self.code(),
                        format!("read of undeclared memory {}", design.resolve(*memory)),
                    ));
                }
            }
        }
    }
}
