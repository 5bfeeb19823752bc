//! W102: Call of a function the design does not define.

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::{Design, Expr};

use crate::helpers::all_exprs;
use crate::CheckRule;

/// Detects function calls naming no function definition.
pub struct UnresolvedFunction;

impl CheckRule for UnresolvedFunction {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 102)
    }

    fn name(&self) -> &str {
        "unresolved-function"
    }

    fn description(&self) -> &str {
        "function call naming no function definition"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        for expr in all_exprs(design) {
            if let Expr::Call { function, .. } = expr {
                if design.function(*function).is_none() {
                    sink.emit(Diagnostic::warning(
                        self.code(),
                        format!("function {} is not defined", design.resolve(*function)),
                    ));
                }
            }
        }
    }
}
