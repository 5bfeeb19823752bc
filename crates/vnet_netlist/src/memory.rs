//! Named memories (arrays of words) declared in the design.

use serde::{Deserialize, Serialize};
use vnet_common::Ident;

/// A memory with `width`-bit words addressed over the inclusive range
/// `[high:low]`. The range may run in either direction and need not
/// start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Memory {
    /// The memory's name.
    pub name: Ident,
    /// Bits per word.
    pub width: u32,
    /// First address as declared.
    pub high: i64,
    /// Last address as declared.
    pub low: i64,
}

impl Memory {
    /// Creates a memory declared as `reg [width-1:0] name [high:low]`.
    pub fn new(name: Ident, width: u32, high: i64, low: i64) -> Self {
        Self {
            name,
            width,
            high,
            low,
        }
    }

    /// Returns the number of words, or `None` when the range spans every
    /// `i64` address and the count does not fit in a `u64`.
    pub fn count(&self) -> Option<u64> {
        self.high.abs_diff(self.low).checked_add(1)
    }

    /// Maps an address to a zero-based row, counting from the `low` end.
    ///
    /// Returns `None` for addresses outside the declared range.
    pub fn row(&self, addr: i64) -> Option<u64> {
        let (min, max) = if self.high >= self.low {
            (self.low, self.high)
        } else {
            (self.high, self.low)
        };
        if addr < min || addr > max {
            return None;
        }
        Some(addr.abs_diff(self.low))
    }
}
