//! Validated bit-string wrapper around the unchecked core routines.
//!
//! [`BitString`] guarantees its invariant at construction time, so the
//! arithmetic methods can delegate to the unchecked core without re-checking.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::arith::{binary_add, binary_multiply};
use crate::error::BitStringError;

/// A bit sequence read most-significant-bit first, guaranteed to be nonempty
/// and to contain only `'0'`/`'1'` characters.
///
/// Values are immutable; arithmetic produces new bit-strings clamped to
/// [`crate::WIDTH`] characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitString(String);

impl BitString {
    /// Validates and wraps a bit sequence.
    pub fn new_checked(bits: &str) -> Result<Self, BitStringError> {
        if bits.is_empty() {
            return Err(BitStringError::Empty);
        }
        for (position, found) in bits.chars().enumerate() {
            if found != '0' && found != '1' {
                return Err(BitStringError::InvalidBit { position, found });
            }
        }
        Ok(Self(bits.to_owned()))
    }

    /// Builds the canonical eight-character encoding of a byte value.
    pub fn from_byte(value: u8) -> Self {
        Self(format!("{value:08b}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Modulo-256 sum, always eight characters wide.
    pub fn add(&self, other: &Self) -> Self {
        Self(binary_add(&self.0, &other.0))
    }

    /// Modulo-256 shift-and-add product, always eight characters wide.
    pub fn mul(&self, other: &Self) -> Self {
        Self(binary_multiply(&self.0, &other.0))
    }

    /// Decimal magnitude of the bit sequence.
    pub fn to_decimal(&self) -> BigUint {
        let mut value = BigUint::zero();
        for digit in self.0.bytes() {
            value = value * 2u32 + u32::from(digit == b'1');
        }
        value
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
