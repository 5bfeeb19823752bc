//! E003: Assignment node with no pins or detached from its target.

use vnet_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::{Design, NodeKind};

use crate::CheckRule;

/// Detects blocking and non-blocking assignment nodes detached from their
/// target: a node without pins, or whose pin 0 does not share a net with
/// the lsb of the recorded target signal.
pub struct EmptyAssignTarget;

impl CheckRule for EmptyAssignTarget {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 3)
    }

    fn name(&self) -> &str {
        "empty-assign-target"
    }

    fn description(&self) -> &str {
        "assignment node with no pins or not connected to its target"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, design: &Design, sink: &DiagnosticSink) {
        for id in design.nodes() {
            let is_assign = matches!(
                design.object(id).as_node(),
                Some(NodeKind::Assign { .. } | NodeKind::AssignNb { .. })
            );
            if !is_assign {
                continue;
            }
            if let Err(err) = design.assign_target(id) {
                sink.emit(
                    Diagnostic::error(self.code(), err.message)
                        .at(design.object_name(id))
                        .with_help("join the node's pins to the assigned signal bits"),
                );
            }
        }
    }
}
