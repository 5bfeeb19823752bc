//! E001: Ring corruption, a pin ring that does not link back consistently.

use std::collections::HashSet;

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::{Design, PinRef};

use crate::CheckRule;

/// Walks the ring of every pin once, reporting rings whose successor and
/// predecessor links disagree or that never return to their start.
pub struct RingCorruption;

impl CheckRule for RingCorruption {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 1)
    }

    fn name(&self) -> &str {
        "ring-corruption"
    }

    fn description(&self) -> &str {
        "pin ring whose links are inconsistent or do not close"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        let mut visited: HashSet<PinRef> = HashSet::new();
        let objects = design.signals().chain(design.nodes());
        for id in objects {
            for idx in 0..design.object(id).pin_count() {
                let pin = PinRef::new(id, idx);
                if visited.contains(&pin) {
                    continue;
                }
                match design.verify_ring(pin) {
                    Ok(_) => {
                        visited.insert(pin);
                        visited.extend(design.ring(pin));
                    }
                    Err(err) => sink.emit(
                        Diagnostic::error(self.code(), err.message)
                            .at(format!("{} pin {idx}", design.object_name(id))),
                    ),
                }
            }
        }
    }
}
