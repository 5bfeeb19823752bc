//! Shared foundational types used across the vnet netlist workspace.
//!
//! This crate provides interned identifiers, four-state logic values, packed
//! logic vectors, content hashing, source line markers, and the internal error
//! type used to report structural-invariant violations.

#![warn(missing_docs)]

pub mod hash;
pub mod ident;
pub mod line;
pub mod logic;
pub mod logic_vec;
pub mod result;

pub use hash::ContentHash;
pub use ident::{Ident, Interner};
pub use line::LineRef;
pub use logic::Logic;
pub use logic_vec::LogicVec;
pub use result::{InternalError, VnetResult};
