//! Task and function definitions.

use crate::ids::ObjectId;
use crate::stmt::Stmt;
use serde::{Deserialize, Serialize};
use vnet_common::Ident;

/// A task definition. Ports are signals whose port role gives the direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDef {
    /// Task name.
    pub name: Ident,
    /// Port signals in declaration order.
    pub ports: Vec<ObjectId>,
    /// Task body.
    pub body: Stmt,
}

/// A function definition. The body may be missing while elaboration is in
/// progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDef {
    /// Function name.
    pub name: Ident,
    /// Port signals; the result signal first, then the inputs.
    pub ports: Vec<ObjectId>,
    /// Function body.
    pub body: Option<Stmt>,
}
