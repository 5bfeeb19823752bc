//! Structural checks over an elaborated design.
//!
//! The netlist core asserts its invariants only where it renders; this crate
//! inspects a whole [`Design`] up front and reports every violation it finds
//! as a [`Diagnostic`](vnet_diagnostics::Diagnostic), so a driver can stop
//! before handing a broken netlist to a back-end.
//!
//! # Rule Categories
//!
//! - **E-series (errors):** broken rings, initial-value widths, dangling
//!   assignment nodes, malformed case, call and wait statements
//! - **W-series (warnings):** references to tasks, functions and memories the
//!   design does not define

#![warn(missing_docs)]

mod engine;
mod helpers;
mod rules;

pub use engine::Checker;
pub use helpers::{all_exprs, statements_with_context, StmtSite};
pub use rules::register_builtin_rules;
pub use rules::{
    EmptyAssignTarget, EmptyCall, EmptySensitivity, InitWidth, MultipleDefaults, RingCorruption,
    UnresolvedFunction, UnresolvedMemory, UnresolvedTask,
};

use vnet_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use vnet_netlist::Design;

/// A single check over a whole design.
///
/// Each rule has a unique diagnostic code, a kebab-case name used in the
/// `[check]` table of `vnet.toml`, a description and a default severity.
pub trait CheckRule: Send + Sync {
    /// Returns the diagnostic code (e.g. E001, W101).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name (e.g. "ring-corruption").
    fn name(&self) -> &str;

    /// Returns what the rule checks.
    fn description(&self) -> &str;

    /// Returns the severity used unless the rule is denied.
    fn default_severity(&self) -> Severity;

    /// Checks the design and emits diagnostics to the sink.
    fn check(&self, design: &Design, sink: &DiagnosticSink);
}
