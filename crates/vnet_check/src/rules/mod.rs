//! Built-in check rules.
//!
//! `register_builtin_rules` adds all nine to a [`Checker`].

mod e001;
mod e002;
mod e003;
mod e004;
mod e005;
mod e006;
mod w101;
mod w102;
mod w103;

pub use e001::RingCorruption;
pub use e002::InitWidth;
pub use e003::EmptyAssignTarget;
pub use e004::MultipleDefaults;
pub use e005::EmptyCall;
pub use e006::EmptySensitivity;
pub use w101::UnresolvedTask;
pub use w102::UnresolvedFunction;
pub use w103::UnresolvedMemory;

use crate::Checker;

/// Registers the built-in rules E001-E006 and W101-W103.
pub fn register_builtin_rules(checker: &mut Checker) {
    checker.register(Box::new(RingCorruption));
    checker.register(Box::new(InitWidth));
    checker.register(Box::new(EmptyAssignTarget));
    checker.register(Box::new(MultipleDefaults));
    checker.register(Box::new(EmptyCall));
    checker.register(Box::new(EmptySensitivity));
    checker.register(Box::new(UnresolvedTask));
    checker.register(Box::new(UnresolvedFunction));
    checker.register(Box::new(UnresolvedMemory));
}
