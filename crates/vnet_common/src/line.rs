//! Source line markers carried by processes and memory writes.

use crate::ident::{Ident, Interner};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `file:line` position in the elaborated source.
///
/// The file name is interned in the design's [`Interner`]; use
/// [`LineRef::display`] to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRef {
    /// Interned source file name.
    pub file: Ident,
    /// 1-based line number.
    pub line: u32,
}

impl LineRef {
    /// Creates a marker for `file:line`.
    pub fn new(file: Ident, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns a value that formats as `file:line`.
    pub fn display<'a>(&self, interner: &'a Interner) -> LineDisplay<'a> {
        LineDisplay {
            file: interner.resolve(self.file),
            line: self.line,
        }
    }
}

/// Display adapter returned by [`LineRef::display`].
pub struct LineDisplay<'a> {
    file: &'a str,
    line: u32,
}

impl fmt::Display for LineDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
