//! Signal data: net type, port role, and per-bit initial values.

use serde::{Deserialize, Serialize};
use std::fmt;
use vnet_common::LogicVec;

/// Net or variable type of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Declared by use, never explicitly.
    Implicit,
    /// `wire`
    Wire,
    /// `tri`
    Tri,
    /// `tri1`
    Tri1,
    /// `supply0`
    Supply0,
    /// `wand`
    Wand,
    /// `triand`
    Triand,
    /// `tri0`
    Tri0,
    /// `supply1`
    Supply1,
    /// `wor`
    Wor,
    /// `trior`
    Trior,
    /// `reg`
    Reg,
    /// `integer`
    Integer,
}

impl SignalKind {
    /// Returns the keyword used in dumps.
    pub fn keyword(self) -> &'static str {
        match self {
            SignalKind::Implicit => "implicit",
            SignalKind::Wire => "wire",
            SignalKind::Tri => "tri",
            SignalKind::Tri1 => "tri1",
            SignalKind::Supply0 => "supply0",
            SignalKind::Wand => "wand",
            SignalKind::Triand => "triand",
            SignalKind::Tri0 => "tri0",
            SignalKind::Supply1 => "supply1",
            SignalKind::Wor => "wor",
            SignalKind::Trior => "trior",
            SignalKind::Reg => "reg",
            SignalKind::Integer => "integer",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Role of a signal in a task or function port list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PortRole {
    /// Not a port.
    #[default]
    NotAPort,
    /// `input`
    Input,
    /// `output`
    Output,
    /// `inout`
    Inout,
}

impl PortRole {
    /// Returns the declaration keyword, e.g. `input`.
    pub fn keyword(self) -> &'static str {
        match self {
            PortRole::NotAPort => "NOT_A_PORT",
            PortRole::Input => "input",
            PortRole::Output => "output",
            PortRole::Inout => "inout",
        }
    }
}

/// Data carried by signal objects.
///
/// The bit width of a signal is its pin count; `init` holds one value per
/// pin, bit 0 first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalInfo {
    /// Net type.
    pub kind: SignalKind,
    /// Port role inside a task or function.
    pub port: PortRole,
    /// Set for compiler-generated signals.
    pub local: bool,
    /// Initial value of each bit.
    pub init: LogicVec,
}

impl SignalInfo {
    /// Creates a non-port, non-local signal whose bits start unknown.
    pub fn new(kind: SignalKind, width: u32) -> Self {
        Self {
            kind,
            port: PortRole::NotAPort,
            local: false,
            init: LogicVec::all_x(width),
        }
    }
}
