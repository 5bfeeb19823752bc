//! Node kinds: gates, drivers, assignment nodes, event detectors and
//! user-defined primitives.

use crate::arena::Arena;
use crate::expr::Expr;
use crate::ids::{ObjectId, UdpStateId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vnet_common::{Ident, Logic, LogicVec};

/// The bits of a signal written by an assignment node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignTarget {
    /// The assigned signal.
    pub signal: ObjectId,
    /// Most significant assigned bit.
    pub msb: u32,
    /// Least significant assigned bit.
    pub lsb: u32,
}

impl AssignTarget {
    /// Targets bits `[msb:lsb]` of `signal`.
    pub fn new(signal: ObjectId, msb: u32, lsb: u32) -> Self {
        Self { signal, msb, lsb }
    }

    /// Returns the number of assigned bits.
    pub fn width(&self) -> u32 {
        self.msb - self.lsb + 1
    }
}

/// Built-in logic gate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicType {
    /// `and`
    And,
    /// `buf`
    Buf,
    /// `bufif0`
    Bufif0,
    /// `bufif1`
    Bufif1,
    /// `nand`
    Nand,
    /// `nor`
    Nor,
    /// `not`
    Not,
    /// `or`
    Or,
    /// `xnor`
    Xnor,
    /// `xor`
    Xor,
}

impl LogicType {
    /// Returns the gate keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            LogicType::And => "and",
            LogicType::Buf => "buf",
            LogicType::Bufif0 => "bufif0",
            LogicType::Bufif1 => "bufif1",
            LogicType::Nand => "nand",
            LogicType::Nor => "nor",
            LogicType::Not => "not",
            LogicType::Or => "or",
            LogicType::Xnor => "xnor",
            LogicType::Xor => "xor",
        }
    }
}

/// Edge an event detector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// Any change.
    AnyEdge,
    /// Rising edge.
    PosEdge,
    /// Falling edge.
    NegEdge,
    /// Level sensitive, while high.
    Positive,
}

impl Edge {
    /// Returns the keyword used in dumps.
    pub fn keyword(self) -> &'static str {
        match self {
            Edge::AnyEdge => "anyedge",
            Edge::PosEdge => "posedge",
            Edge::NegEdge => "negedge",
            Edge::Positive => "positive",
        }
    }
}

/// What a node does. Fixed when the node is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A built-in logic gate. Pin 0 is the output.
    Logic(LogicType),
    /// Adder/subtractor.
    AddSub,
    /// Continuous buffer.
    Bufz,
    /// Constant driver.
    Const(LogicVec),
    /// Target of a blocking procedural assignment. The pins join the
    /// assigned bits of the target signal.
    Assign {
        /// The assigned signal bits.
        target: AssignTarget,
        /// Right-hand side.
        value: Expr,
    },
    /// Target of a non-blocking procedural assignment. Its rise delay is the
    /// intra-assignment delay.
    AssignNb {
        /// The assigned signal bits.
        target: AssignTarget,
        /// Optional run-time bit select.
        index: Option<Expr>,
        /// Right-hand side.
        value: Expr,
    },
    /// The connectable side of a signal used in an expression.
    SignalRef,
    /// Edge detector feeding an event wait.
    Event {
        /// Edge that triggers the detector.
        edge: Edge,
        /// Label of the event wait it wakes.
        waiter: Ident,
    },
    /// User-defined primitive.
    Udp(Udp),
    /// Any operator without a dedicated variant, described by name.
    Opaque {
        /// Operator name shown in dumps.
        kind: String,
    },
}

impl NodeKind {
    /// Returns a short name for diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            NodeKind::Logic(ty) => ty.keyword(),
            NodeKind::AddSub => "adder",
            NodeKind::Bufz => "bufz",
            NodeKind::Const(_) => "constant",
            NodeKind::Assign { .. } => "procedural assign",
            NodeKind::AssignNb { .. } => "procedural nb assign",
            NodeKind::SignalRef => "expression node",
            NodeKind::Event { .. } => "event",
            NodeKind::Udp(_) => "udp",
            NodeKind::Opaque { kind } => kind.as_str(),
        }
    }
}

/// Successor states of a sequential primitive for one input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UdpEdges {
    /// Next state when the input goes to 0.
    pub zero: Option<UdpStateId>,
    /// Next state when the input goes to 1.
    pub one: Option<UdpStateId>,
    /// Next state when the input goes to x.
    pub x: Option<UdpStateId>,
}

/// One state of a sequential primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdpState {
    /// Output value in this state.
    pub out: Logic,
    edges: Vec<UdpEdges>,
}

impl UdpState {
    /// Returns the transitions on input pin `pin`. Pin 0 is the output and
    /// never has any.
    pub fn edges(&self, pin: u32) -> UdpEdges {
        self.edges.get(pin as usize).copied().unwrap_or_default()
    }
}

/// A user-defined primitive. Sequential primitives carry a state table keyed
/// by state strings: output character first, then one character per input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Udp {
    sequential: bool,
    init: Logic,
    states: Arena<UdpStateId, UdpState>,
    table: BTreeMap<String, UdpStateId>,
}

impl Udp {
    /// Creates a combinational primitive.
    pub fn combinational() -> Self {
        Self {
            sequential: false,
            init: Logic::X,
            states: Arena::new(),
            table: BTreeMap::new(),
        }
    }

    /// Creates a sequential primitive with the given initial output.
    pub fn sequential(init: Logic) -> Self {
        Self {
            sequential: true,
            init,
            ..Self::combinational()
        }
    }

    /// Returns `true` for sequential primitives.
    pub fn is_sequential(&self) -> bool {
        self.sequential
    }

    /// Returns the initial output value.
    pub fn init(&self) -> Logic {
        self.init
    }

    /// Adds state `key` with output `out`, or returns the existing state.
    ///
    /// `out` is expected to equal the first character of `key`; the dump
    /// reports a mismatch as an internal error.
    pub fn add_state(&mut self, key: &str, out: Logic) -> UdpStateId {
        if let Some(&id) = self.table.get(key) {
            return id;
        }
        let id = self.states.alloc(UdpState {
            out,
            edges: Vec::new(),
        });
        self.table.insert(key.to_string(), id);
        id
    }

    /// Looks up a state by key.
    pub fn state_id(&self, key: &str) -> Option<UdpStateId> {
        self.table.get(key).copied()
    }

    /// Returns a state.
    pub fn state(&self, id: UdpStateId) -> &UdpState {
        &self.states[id]
    }

    /// Records that `from` moves to `to` when input `pin` changes to `value`.
    /// `Z` on an input is treated as `x`.
    pub fn set_transition(&mut self, from: UdpStateId, pin: u32, value: Logic, to: UdpStateId) {
        let edges = &mut self.states[from].edges;
        if edges.len() <= pin as usize {
            edges.resize(pin as usize + 1, UdpEdges::default());
        }
        let slot = &mut edges[pin as usize];
        match value {
            Logic::Zero => slot.zero = Some(to),
            Logic::One => slot.one = Some(to),
            Logic::X | Logic::Z => slot.x = Some(to),
        }
    }

    /// Iterates over the state table in key order.
    pub fn table(&self) -> impl Iterator<Item = (&str, UdpStateId)> {
        self.table.iter().map(|(k, &id)| (k.as_str(), id))
    }
}
