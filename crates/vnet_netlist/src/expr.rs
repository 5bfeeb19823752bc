//! Expression trees attached to statements, nodes and parameters.
//!
//! Trees are owned: every sub-expression has exactly one parent. References
//! to signals go through signal-reference nodes ([`NodeKind::SignalRef`]),
//! which are connectable objects in the design.
//!
//! [`NodeKind::SignalRef`]: crate::node::NodeKind::SignalRef

use crate::ids::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use vnet_common::{Ident, LogicVec};

/// A constant operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstValue {
    /// Unsized integer.
    Int(i64),
    /// Sized four-state vector, e.g. `2'b0x`.
    Vector(LogicVec),
    /// String literal.
    Str(String),
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `~`
    Not,
    /// `!`
    LogicNot,
    /// `-`
    Neg,
    /// Reduction `&`.
    RedAnd,
    /// Reduction `|`.
    RedOr,
    /// Reduction `^`.
    RedXor,
    /// Reduction `~&`.
    RedNand,
    /// Reduction `~|`.
    RedNor,
    /// Reduction `~^`.
    RedXnor,
}

impl UnaryOp {
    const CODES: [(char, UnaryOp); 9] = [
        ('~', UnaryOp::Not),
        ('!', UnaryOp::LogicNot),
        ('-', UnaryOp::Neg),
        ('&', UnaryOp::RedAnd),
        ('|', UnaryOp::RedOr),
        ('^', UnaryOp::RedXor),
        ('A', UnaryOp::RedNand),
        ('N', UnaryOp::RedNor),
        ('X', UnaryOp::RedXnor),
    ];

    /// Maps an elaborator operator code to an operator.
    pub fn from_code(code: char) -> Option<Self> {
        Self::CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, op)| op)
    }

    /// Returns the elaborator operator code.
    pub fn code(self) -> char {
        Self::CODES
            .iter()
            .find(|(_, op)| *op == self)
            .map_or('?', |&(c, _)| c)
    }

    /// Returns the source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "~",
            UnaryOp::LogicNot => "!",
            UnaryOp::Neg => "-",
            UnaryOp::RedAnd => "&",
            UnaryOp::RedOr => "|",
            UnaryOp::RedXor => "^",
            UnaryOp::RedNand => "~&",
            UnaryOp::RedNor => "~|",
            UnaryOp::RedXnor => "~^",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `~^`
    Xnor,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `===`
    CaseEq,
    /// `!==`
    CaseNe,
    /// `&&`
    LogicAnd,
    /// `||`
    LogicOr,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
}

impl BinaryOp {
    const CODES: [(char, BinaryOp); 21] = [
        ('+', BinaryOp::Add),
        ('-', BinaryOp::Sub),
        ('*', BinaryOp::Mul),
        ('/', BinaryOp::Div),
        ('%', BinaryOp::Mod),
        ('&', BinaryOp::And),
        ('|', BinaryOp::Or),
        ('^', BinaryOp::Xor),
        ('X', BinaryOp::Xnor),
        ('<', BinaryOp::Lt),
        ('>', BinaryOp::Gt),
        ('L', BinaryOp::Le),
        ('G', BinaryOp::Ge),
        ('e', BinaryOp::Eq),
        ('n', BinaryOp::Ne),
        ('E', BinaryOp::CaseEq),
        ('N', BinaryOp::CaseNe),
        ('a', BinaryOp::LogicAnd),
        ('o', BinaryOp::LogicOr),
        ('l', BinaryOp::Shl),
        ('r', BinaryOp::Shr),
    ];

    /// Maps an elaborator operator code (`'e'` for `==`, `'l'` for `<<`,
    /// ...) to an operator.
    pub fn from_code(code: char) -> Option<Self> {
        Self::CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, op)| op)
    }

    /// Returns the elaborator operator code.
    pub fn code(self) -> char {
        Self::CODES
            .iter()
            .find(|(_, op)| *op == self)
            .map_or('?', |&(c, _)| c)
    }

    /// Returns the source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Xnor => "~^",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::CaseEq => "===",
            BinaryOp::CaseNe => "!==",
            BinaryOp::LogicAnd => "&&",
            BinaryOp::LogicOr => "||",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Constant value.
    Const(ConstValue),
    /// Name not bound to any object, e.g. a parameter reference.
    Ident(Ident),
    /// Whole-signal reference through a signal-reference node.
    Signal(ObjectId),
    /// Bit select of a signal, through its signal-reference node.
    SubSignal {
        /// The signal-reference node.
        signal: ObjectId,
        /// Bit index.
        index: Box<Expr>,
    },
    /// Memory word read.
    Memory {
        /// Name of the memory.
        memory: Ident,
        /// Word address.
        index: Box<Expr>,
    },
    /// Unary operation.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },
    /// Binary operation.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Concatenation, most significant part first.
    Concat(Vec<Expr>),
    /// `cond ? if_true : if_false`
    Ternary {
        /// Condition.
        cond: Box<Expr>,
        /// Value when the condition holds.
        if_true: Box<Expr>,
        /// Value otherwise.
        if_false: Box<Expr>,
    },
    /// User function call. Calls always have at least one argument.
    Call {
        /// Name of the called function.
        function: Ident,
        /// Arguments in order.
        args: Vec<Expr>,
    },
    /// Any expression without a dedicated variant.
    Opaque {
        /// Description shown in dumps.
        kind: String,
    },
}

impl Expr {
    /// An integer constant.
    pub fn int(value: i64) -> Self {
        Expr::Const(ConstValue::Int(value))
    }

    /// A sized vector constant.
    pub fn vector(bits: LogicVec) -> Self {
        Expr::Const(ConstValue::Vector(bits))
    }

    /// A string constant.
    pub fn string(text: impl Into<String>) -> Self {
        Expr::Const(ConstValue::Str(text.into()))
    }

    /// A unary operation.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// A binary operation.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// A conditional expression.
    pub fn ternary(cond: Expr, if_true: Expr, if_false: Expr) -> Self {
        Expr::Ternary {
            cond: Box::new(cond),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    /// Returns a short name of the variant for diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Expr::Const(_) => "constant",
            Expr::Ident(_) => "identifier",
            Expr::Signal(_) => "signal",
            Expr::SubSignal { .. } => "bit select",
            Expr::Memory { .. } => "memory",
            Expr::Unary { .. } => "unary",
            Expr::Binary { .. } => "binary",
            Expr::Concat(_) => "concatenation",
            Expr::Ternary { .. } => "ternary",
            Expr::Call { .. } => "function call",
            Expr::Opaque { kind } => kind.as_str(),
        }
    }

    /// Calls `f` on this expression and every sub-expression, parents first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        f(self);
        match self {
            Expr::Const(_) | Expr::Ident(_) | Expr::Signal(_) | Expr::Opaque { .. } => {}
            Expr::SubSignal { index, .. } | Expr::Memory { index, .. } => index.walk(f),
            Expr::Unary { operand, .. } => operand.walk(f),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.walk(f);
                rhs.walk(f);
            }
            Expr::Concat(parts) | Expr::Call { args: parts, .. } => {
                for part in parts {
                    part.walk(f);
                }
            }
            Expr::Ternary {
                cond,
                if_true,
                if_false,
            } => {
                cond.walk(f);
                if_true.walk(f);
                if_false.walk(f);
            }
        }
    }

    /// Folds the expression to an integer if it is constant.
    ///
    /// Integer literals and fully definite vectors fold. Names, signal and
    /// memory references and function calls never do. Operators fold when
    /// their operands do and the result is defined: division by zero,
    /// overflow and out-of-range shifts yield `None`, as do width-dependent
    /// operators (concatenation, reduction AND).
    pub fn try_eval(&self) -> Option<i64> {
        match self {
            Expr::Const(ConstValue::Int(v)) => Some(*v),
            Expr::Const(ConstValue::Vector(bits)) => {
                bits.to_u64().and_then(|v| i64::try_from(v).ok())
            }
            Expr::Const(ConstValue::Str(_)) => None,
            Expr::Ident(_)
            | Expr::Signal(_)
            | Expr::SubSignal { .. }
            | Expr::Memory { .. }
            | Expr::Call { .. }
            | Expr::Concat(_)
            | Expr::Opaque { .. } => None,
            Expr::Unary { op, operand } => eval_unary(*op, operand.try_eval()?),
            Expr::Binary { op, lhs, rhs } => eval_binary(*op, lhs.try_eval()?, rhs.try_eval()?),
            Expr::Ternary {
                cond,
                if_true,
                if_false,
            } => {
                if cond.try_eval()? != 0 {
                    if_true.try_eval()
                } else {
                    if_false.try_eval()
                }
            }
        }
    }
}

fn eval_unary(op: UnaryOp, v: i64) -> Option<i64> {
    match op {
        UnaryOp::Not => Some(!v),
        UnaryOp::LogicNot => Some(i64::from(v == 0)),
        UnaryOp::Neg => v.checked_neg(),
        UnaryOp::RedOr => Some(i64::from(v != 0)),
        UnaryOp::RedNor => Some(i64::from(v == 0)),
        UnaryOp::RedXor if v >= 0 => Some(i64::from(v.count_ones() % 2 == 1)),
        UnaryOp::RedXnor if v >= 0 => Some(i64::from(v.count_ones() % 2 == 0)),
        UnaryOp::RedXor | UnaryOp::RedXnor | UnaryOp::RedAnd | UnaryOp::RedNand => None,
    }
}

fn eval_binary(op: BinaryOp, a: i64, b: i64) -> Option<i64> {
    let shift = || u32::try_from(b).ok().filter(|s| *s < 64);
    match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Mod => a.checked_rem(b),
        BinaryOp::And => Some(a & b),
        BinaryOp::Or => Some(a | b),
        BinaryOp::Xor => Some(a ^ b),
        BinaryOp::Xnor => Some(!(a ^ b)),
        BinaryOp::Lt => Some(i64::from(a < b)),
        BinaryOp::Gt => Some(i64::from(a > b)),
        BinaryOp::Le => Some(i64::from(a <= b)),
        BinaryOp::Ge => Some(i64::from(a >= b)),
        BinaryOp::Eq | BinaryOp::CaseEq => Some(i64::from(a == b)),
        BinaryOp::Ne | BinaryOp::CaseNe => Some(i64::from(a != b)),
        BinaryOp::LogicAnd => Some(i64::from(a != 0 && b != 0)),
        BinaryOp::LogicOr => Some(i64::from(a != 0 || b != 0)),
        BinaryOp::Shl => a.checked_shl(shift()?),
        BinaryOp::Shr => a.checked_shr(shift()?),
    }
}
