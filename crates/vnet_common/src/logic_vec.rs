//! Packed vectors of four-state values for initial values and sized literals.

use crate::logic::Logic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of logic values packed per u64 word.
const VALUES_PER_WORD: u32 = 32;

/// A vector of four-state [`Logic`] values, bit 0 being the least significant.
///
/// Each value occupies 2 bits, 32 values per `u64` word. Signals keep one
/// entry per pin for their initial value; sized constants such as `2'b0x`
/// keep their bit pattern here.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicVec {
    width: u32,
    data: Vec<u64>,
}

impl LogicVec {
    /// Creates a vector of the given width with every bit set to `value`.
    pub fn filled(width: u32, value: Logic) -> Self {
        let mut v = Self {
            width,
            data: vec![0; word_count(width)],
        };
        if value != Logic::Zero {
            for i in 0..width {
                v.set(i, value);
            }
        }
        v
    }

    /// Creates a vector with all bits `Zero`.
    pub fn all_zero(width: u32) -> Self {
        Self::filled(width, Logic::Zero)
    }

    /// Creates a vector with all bits unknown, the initial state of a signal.
    pub fn all_x(width: u32) -> Self {
        Self::filled(width, Logic::X)
    }

    /// Returns the number of bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Gets the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn get(&self, index: u32) -> Logic {
        assert!(
            index < self.width,
            "bit {index} out of range for width {}",
            self.width
        );
        let word = (index / VALUES_PER_WORD) as usize;
        let shift = (index % VALUES_PER_WORD) * 2;
        match (self.data[word] >> shift) & 0b11 {
            0 => Logic::Zero,
            1 => Logic::One,
            2 => Logic::X,
            _ => Logic::Z,
        }
    }

    /// Sets the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn set(&mut self, index: u32, value: Logic) {
        assert!(
            index < self.width,
            "bit {index} out of range for width {}",
            self.width
        );
        let word = (index / VALUES_PER_WORD) as usize;
        let shift = (index % VALUES_PER_WORD) * 2;
        let mask = !(0b11u64 << shift);
        self.data[word] = (self.data[word] & mask) | ((value as u64) << shift);
    }

    /// Creates a vector holding the low `width` bits of `value`.
    pub fn from_u64(value: u64, width: u32) -> Self {
        let mut v = Self::all_zero(width);
        for i in 0..width.min(64) {
            if (value >> i) & 1 != 0 {
                v.set(i, Logic::One);
            }
        }
        v
    }

    /// Returns the unsigned value if every bit is definite and the width fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.width > 64 {
            return None;
        }
        let mut result = 0u64;
        for i in 0..self.width {
            match self.get(i) {
                Logic::Zero => {}
                Logic::One => result |= 1 << i,
                Logic::X | Logic::Z => return None,
            }
        }
        Some(result)
    }

    /// Returns `true` if no bit is `X` or `Z`.
    pub fn is_definite(&self) -> bool {
        self.iter().all(Logic::is_definite)
    }

    /// Parses a bit string such as `"10xz"`, most significant bit first.
    pub fn from_binary_str(s: &str) -> Option<Self> {
        let mut v = Self::all_zero(s.chars().count() as u32);
        for (i, c) in s.chars().rev().enumerate() {
            v.set(i as u32, Logic::from_char(c)?);
        }
        Some(v)
    }

    /// Iterates from bit 0 upwards.
    pub fn iter(&self) -> impl Iterator<Item = Logic> + '_ {
        (0..self.width).map(|i| self.get(i))
    }

    /// Returns a view that formats as a sized Verilog literal, e.g. `2'b0x`.
    pub fn literal(&self) -> SizedLiteral<'_> {
        SizedLiteral(self)
    }
}

/// Formats bits most significant first, e.g. `xx01`.
impl fmt::Display for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.width).rev() {
            write!(f, "{}", self.get(i))?;
        }
        Ok(())
    }
}

impl fmt::Debug for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicVec({self})")
    }
}

/// Display adapter returned by [`LogicVec::literal`].
pub struct SizedLiteral<'a>(&'a LogicVec);

impl fmt::Display for SizedLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'b{}", self.0.width, self.0)
    }
}

fn word_count(width: u32) -> usize {
    width.div_ceil(VALUES_PER_WORD) as usize
}
