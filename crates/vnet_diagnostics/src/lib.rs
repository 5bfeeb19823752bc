//! Structured diagnostics for netlist checks.
//!
//! Checks over an elaborated design report through [`Diagnostic`] values with
//! a severity, a category-prefixed code, and the name of the netlist entity
//! involved. The thread-safe [`DiagnosticSink`] collects them and
//! [`TerminalRenderer`] formats them for the compiler driver.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
