//! Top-level behavioral processes.

use crate::stmt::Stmt;
use serde::{Deserialize, Serialize};
use vnet_common::LineRef;

/// `initial` or `always`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessKind {
    /// Runs once from time zero.
    Initial,
    /// Restarts whenever it finishes.
    Always,
}

impl ProcessKind {
    /// Returns the keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            ProcessKind::Initial => "initial",
            ProcessKind::Always => "always",
        }
    }
}

/// A process with its source position and root statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// `initial` or `always`.
    pub kind: ProcessKind,
    /// Where the process was declared.
    pub line: LineRef,
    /// Root statement.
    pub body: Stmt,
}

impl Process {
    /// Creates a process.
    pub fn new(kind: ProcessKind, line: LineRef, body: Stmt) -> Self {
        Self { kind, line, body }
    }
}
