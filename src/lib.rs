#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Fixed-width binary long multiplication over string-encoded bit sequences.
//!
//! This crate demonstrates grade-school binary arithmetic without native
//! integer operations: operands are sequences of `'0'`/`'1'` characters read
//! most-significant-bit first, and every result is clamped to eight
//! characters, so arithmetic wraps modulo 256.
//!
//! Two layers are exposed:
//! - [`binary_add`] and [`binary_multiply`]: the unchecked core routines.
//!   They assume well-formed operands and perform no validation; malformed
//!   input produces unspecified output rather than an error.
//! - [`BitString`]: a validated wrapper whose checked constructor rejects
//!   anything that is not a nonempty `'0'`/`'1'` sequence, with decimal
//!   conversion for display.

mod arith;
mod bitstring;
mod error;

pub use arith::{binary_add, binary_multiply, WIDTH};
pub use bitstring::BitString;
pub use error::BitStringError;
