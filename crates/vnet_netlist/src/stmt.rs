//! Procedural statement trees.

use crate::expr::Expr;
use crate::ids::ObjectId;
use serde::{Deserialize, Serialize};
use vnet_common::{Ident, LineRef};

/// Sequential `begin`/`end` or parallel `fork`/`join` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// `begin ... end`
    Sequential,
    /// `fork ... join`
    Parallel,
}

impl BlockKind {
    /// Returns the opening keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            BlockKind::Sequential => "begin",
            BlockKind::Parallel => "fork",
        }
    }
}

/// One arm of a case statement. An absent guard is the default arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseItem {
    /// Value compared against the selector, `None` for `default`.
    pub guard: Option<Expr>,
    /// Statement run when the arm matches, if any.
    pub stmt: Option<Stmt>,
}

/// A procedural statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Statement block, children in order. May be empty.
    Block {
        /// Sequential or parallel.
        kind: BlockKind,
        /// Children in source order.
        stmts: Vec<Stmt>,
    },
    /// `if (cond) ... else ...`
    Condit {
        /// Condition.
        cond: Expr,
        /// Taken branch, possibly empty.
        then_branch: Option<Box<Stmt>>,
        /// Else branch, if written.
        else_branch: Option<Box<Stmt>>,
    },
    /// `case (selector) ... endcase`
    Case {
        /// Selector expression.
        selector: Expr,
        /// Arms in source order. At most one has no guard.
        items: Vec<CaseItem>,
    },
    /// Blocking assignment through an assignment node
    /// ([`NodeKind::Assign`](crate::node::NodeKind::Assign)).
    Assign(ObjectId),
    /// Non-blocking assignment through an assignment node
    /// ([`NodeKind::AssignNb`](crate::node::NodeKind::AssignNb)).
    AssignNb(ObjectId),
    /// Memory word write.
    AssignMem {
        /// Name of the memory.
        memory: Ident,
        /// Word address.
        index: Expr,
        /// Value written.
        value: Expr,
        /// Source position of the write.
        line: LineRef,
    },
    /// `while (cond) body`
    While {
        /// Loop condition.
        cond: Expr,
        /// Loop body.
        body: Box<Stmt>,
    },
    /// `forever body`
    Forever {
        /// Loop body.
        body: Box<Stmt>,
    },
    /// `repeat (count) body`
    Repeat {
        /// Iteration count.
        count: Expr,
        /// Loop body.
        body: Box<Stmt>,
    },
    /// `#amount body`
    Delay {
        /// Delay in simulation time units.
        amount: u64,
        /// Statement run after the delay, if any.
        body: Option<Box<Stmt>>,
    },
    /// `@(events) body`. Each event is an event-detector node
    /// ([`NodeKind::Event`](crate::node::NodeKind::Event)).
    Wait {
        /// Label naming this wait in the detectors.
        label: Ident,
        /// Sensitivities in order. Never empty.
        events: Vec<ObjectId>,
        /// Statement run on wake-up, if any.
        body: Option<Box<Stmt>>,
    },
    /// System task call such as `$display`. Arguments may be left empty.
    SysTask {
        /// Task name including the `$`.
        name: Ident,
        /// Arguments in order, `None` for an empty slot.
        args: Vec<Option<Expr>>,
    },
    /// Call of a task defined in the design.
    UserTask {
        /// Name of the task definition.
        task: Ident,
    },
    /// Any statement without a dedicated variant.
    Opaque {
        /// Description shown in dumps.
        kind: String,
    },
}

impl Stmt {
    /// An empty sequential block.
    pub fn empty_block() -> Self {
        Stmt::Block {
            kind: BlockKind::Sequential,
            stmts: Vec::new(),
        }
    }

    /// A sequential block.
    pub fn seq(stmts: Vec<Stmt>) -> Self {
        Stmt::Block {
            kind: BlockKind::Sequential,
            stmts,
        }
    }

    /// An `if`/`else` statement.
    pub fn condit(cond: Expr, then_branch: Option<Stmt>, else_branch: Option<Stmt>) -> Self {
        Stmt::Condit {
            cond,
            then_branch: then_branch.map(Box::new),
            else_branch: else_branch.map(Box::new),
        }
    }

    /// Returns a short name of the variant for diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Stmt::Block { .. } => "block",
            Stmt::Condit { .. } => "if",
            Stmt::Case { .. } => "case",
            Stmt::Assign(_) => "assignment",
            Stmt::AssignNb(_) => "non-blocking assignment",
            Stmt::AssignMem { .. } => "memory assignment",
            Stmt::While { .. } => "while",
            Stmt::Forever { .. } => "forever",
            Stmt::Repeat { .. } => "repeat",
            Stmt::Delay { .. } => "delay",
            Stmt::Wait { .. } => "event wait",
            Stmt::SysTask { .. } => "system task",
            Stmt::UserTask { .. } => "task call",
            Stmt::Opaque { kind } => kind.as_str(),
        }
    }

    /// Returns the direct child statements in order.
    pub fn children(&self) -> Vec<&Stmt> {
        match self {
            Stmt::Block { stmts, .. } => stmts.iter().collect(),
            Stmt::Condit {
                then_branch,
                else_branch,
                ..
            } => then_branch.iter().chain(else_branch).map(|s| &**s).collect(),
            Stmt::Case { items, .. } => items.iter().filter_map(|i| i.stmt.as_ref()).collect(),
            Stmt::While { body, .. } | Stmt::Forever { body } | Stmt::Repeat { body, .. } => {
                vec![&**body]
            }
            Stmt::Delay { body, .. } | Stmt::Wait { body, .. } => {
                body.iter().map(|s| &**s).collect()
            }
            Stmt::Assign(_)
            | Stmt::AssignNb(_)
            | Stmt::AssignMem { .. }
            | Stmt::SysTask { .. }
            | Stmt::UserTask { .. }
            | Stmt::Opaque { .. } => Vec::new(),
        }
    }

    /// Returns the expressions held directly by this statement.
    ///
    /// Expressions owned by assignment nodes are reached through the node.
    pub fn exprs(&self) -> Vec<&Expr> {
        match self {
            Stmt::Condit { cond, .. } | Stmt::While { cond, .. } => vec![cond],
            Stmt::Repeat { count, .. } => vec![count],
            Stmt::Case { selector, items } => std::iter::once(selector)
                .chain(items.iter().filter_map(|i| i.guard.as_ref()))
                .collect(),
            Stmt::AssignMem { index, value, .. } => vec![index, value],
            Stmt::SysTask { args, .. } => args.iter().flatten().collect(),
            Stmt::Block { .. }
            | Stmt::Assign(_)
            | Stmt::AssignNb(_)
            | Stmt::Forever { .. }
            | Stmt::Delay { .. }
            | Stmt::Wait { .. }
            | Stmt::UserTask { .. }
            | Stmt::Opaque { .. } => Vec::new(),
        }
    }

    /// Calls `f` on this statement and every nested statement, parents first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Stmt)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }
}
