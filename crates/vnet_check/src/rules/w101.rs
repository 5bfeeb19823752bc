//! W101: Call of a task the design does not define.

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::{Design, Stmt};

use crate::helpers::statements_with_context;
use crate::CheckRule;

/// Detects user task calls naming no task definition.
pub struct UnresolvedTask;

impl CheckRule for UnresolvedTask {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    fn name(&self) -> &str {
        "unresolved-task"
    }

    fn description(&self) -> &str {
        "task call naming no task definition"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        for site in statements_with_context(design) {
            if let Stmt::UserTask { task } = site.stmt {
                if design.task(*task).is_none() {
                    sink.emit(
                        Diagnostic::warning(
                            self.code(),
                            format!("task {} is not defined", design.resolve(*task)),
                        )
                        .at(site.context),
                    );
                }
            }
        }
    }
}
