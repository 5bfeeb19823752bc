//! E002: Initial value width differs from the signal's pin count.

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::Design;

use crate::CheckRule;

/// Detects signals whose initial-value vector does not hold exactly one
/// value per pin.
pub struct InitWidth;

impl CheckRule for InitWidth {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 2)
    }

    fn name(&self) -> &str {
        "init-width"
    }

    fn description(&self) -> &str {
        "signal initial value width differs from its pin count"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        for id in design.signals() {
            let obj = design.object(id);
            let Some(info) = obj.as_signal() else {
                continue;
            };
            if info.init.width() != obj.pin_count() {
                sink.emit(
                    Diagnostic::error(
                        self.code(),
                        format!(
                            "initial value has {} bits but the signal has {} pins",
                            info.init.width(),
                            obj.pin_count()
                        ),
                    )
                    .at(design.object_name(id)),
                );
            }
        }
    }
}
