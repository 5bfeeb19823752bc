//! Elaborated netlist IR: the connectivity graph of pins and nets, the
//! signals and nodes built on it, behavioral statement and expression trees,
//! and the [`Design`] that owns them all.
//!
//! Producers build a design through the `add_*` methods of [`Design`] and
//! join pins with [`Design::connect`]. Consumers walk it through the signal
//! and node lists, the name-keyed tables and the process list, or render it
//! with [`Design::dump`].

#![warn(missing_docs)]

pub mod arena;
pub mod def;
pub mod design;
mod dump;
pub mod expr;
pub mod ids;
pub mod link;
pub mod memory;
pub mod node;
pub mod object;
pub mod process;
pub mod signal;
pub mod stmt;

pub use arena::{Arena, ArenaId};
pub use def::{FuncDef, TaskDef};
pub use design::{Design, ObjectList};
pub use expr::{BinaryOp, ConstValue, Expr, UnaryOp};
pub use ids::{ObjectId, UdpStateId};
pub use link::{Pin, PinDir, PinRef, Ring};
pub use memory::Memory;
pub use node::{AssignTarget, Edge, LogicType, NodeKind, Udp, UdpEdges, UdpState};
pub use object::{Delay, Object, ObjectKind};
pub use process::{Process, ProcessKind};
pub use signal::{PortRole, SignalInfo, SignalKind};
pub use stmt::{BlockKind, CaseItem, Stmt};
