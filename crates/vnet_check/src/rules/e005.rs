//! E005: Function call without arguments.

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::{Design, Expr};

use crate::helpers::all_exprs;
use crate::CheckRule;

/// Detects user function calls with an empty argument list. Elaborated
/// calls always pass at least the first parameter.
pub struct EmptyCall;

impl CheckRule for EmptyCall {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 5)
    }

    fn name(&self) -> &str {
        "empty-call"
    }

    fn description(&self) -> &str {
        "function call without arguments"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        for expr in all_exprs(design) {
            if let Expr::Call { function, args } = expr {
                if args.is_empty() {
                    sink.emit(Diagnostic::error(
                        self.code(),
                        format!("call of function {} has no arguments", design.resolve(*function)),
                    ));
                }
            }
        }
    }
}
