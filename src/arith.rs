//! Shift-and-add long multiplication over `'0'`/`'1'` bit-string operands.
//!
//! These are the unchecked core routines. They assume well-formed input and
//! perform no validation: a byte other than `'0'`/`'1'` counts as a zero bit,
//! so malformed input yields unspecified arithmetic, never a panic. Every
//! result is clamped to [`WIDTH`] characters, so values wrap modulo
//! 2^[`WIDTH`].

/// Result width in characters. Every core result is clamped to this width.
pub const WIDTH: usize = 8;

/// Adds two bit-strings of arbitrary (possibly unequal) length.
///
/// The shorter operand is left-padded with `'0'`, positions are summed right
/// to left with carry propagation, and a remaining carry is prepended before
/// the result is clamped to [`WIDTH`] characters. The output always equals
/// `(x + y) mod 2^WIDTH` in [`WIDTH`]-character binary.
pub fn binary_add(x: &str, y: &str) -> String {
    let len = x.len().max(y.len());
    let xs = pad_left(x, len);
    let ys = pad_left(y, len);

    let mut digits = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    for (x_digit, y_digit) in xs.iter().zip(ys.iter()).rev() {
        let bit_sum = bit(*x_digit) + bit(*y_digit) + carry;
        digits.push(b'0' + bit_sum % 2);
        carry = bit_sum / 2;
    }
    if carry == 1 {
        digits.push(b'1');
    }
    digits.reverse();

    clamp(&digits)
}

/// Multiplies two bit-strings by grade-school shift-and-add.
///
/// For each set bit of `b` (indexed from the least significant end), `a` is
/// shifted left by appending that many `'0'` characters and added into an
/// accumulator that starts at zero. Each intermediate addition independently
/// wraps to [`WIDTH`] characters inside [`binary_add`]; since modular
/// addition composes, the accumulated result equals `(a * b) mod 2^WIDTH`.
pub fn binary_multiply(a: &str, b: &str) -> String {
    let mut product = "0".repeat(WIDTH);
    for (shift, digit) in b.bytes().rev().enumerate() {
        if digit == b'1' {
            let mut shifted = String::with_capacity(a.len() + shift);
            shifted.push_str(a);
            for _ in 0..shift {
                shifted.push('0');
            }
            product = binary_add(&product, &shifted);
        }
    }
    // binary_add keeps the accumulator at WIDTH characters, so the final
    // truncation of the textbook algorithm is already done.
    product
}

/// Numeric value of one digit byte. Anything that is not `'1'` counts as
/// zero; the caller guarantees well-formed input.
fn bit(digit: u8) -> u8 {
    u8::from(digit == b'1')
}

fn pad_left(bits: &str, len: usize) -> Vec<u8> {
    let mut padded = vec![b'0'; len.saturating_sub(bits.len())];
    padded.extend_from_slice(bits.as_bytes());
    padded
}

/// Keeps the rightmost [`WIDTH`] digits, left-padding with `'0'` when the
/// input is shorter.
fn clamp(digits: &[u8]) -> String {
    let tail = &digits[digits.len().saturating_sub(WIDTH)..];
    let mut clamped = String::with_capacity(WIDTH);
    for _ in tail.len()..WIDTH {
        clamped.push('0');
    }
    clamped.extend(tail.iter().map(|&digit| char::from(digit)));
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(value: u16) -> String {
        format!("{:08b}", value % 256)
    }

    #[test]
    fn add_matches_wrapping_sum_for_all_byte_pairs() {
        for a in 0..=255u16 {
            for b in 0..=255u16 {
                assert_eq!(
                    binary_add(&bits(a), &bits(b)),
                    bits((a + b) % 256),
                    "{a} + {b}"
                );
            }
        }
    }

    #[test]
    fn add_is_commutative_for_unequal_lengths() {
        for (x, y) in [("1101", "00001011"), ("1", "11111111"), ("101010", "1")] {
            assert_eq!(binary_add(x, y), binary_add(y, x));
        }
    }

    #[test]
    fn add_zero_normalizes_width() {
        assert_eq!(binary_add("1101", "0"), "00001101");
        assert_eq!(binary_add("111111111101", "0"), "11111101");
    }

    #[test]
    fn add_pads_the_shorter_operand() {
        assert_eq!(binary_add("1", "1"), "00000010");
        assert_eq!(binary_add("101", "11"), "00001000");
    }

    #[test]
    fn add_drops_carry_out_of_the_result_width() {
        assert_eq!(binary_add("11111111", "00000001"), "00000000");
        assert_eq!(binary_add("11001101", "11101011"), bits(205 + 235));
    }

    #[test]
    fn add_clamps_long_operands() {
        // 2^9 + 1 wraps to 1
        assert_eq!(binary_add("1000000000", "1"), "00000001");
    }

    #[test]
    fn multiply_within_eight_bits() {
        // 13 * 11 = 143
        assert_eq!(binary_multiply("00001101", "00001011"), "10001111");
    }

    #[test]
    fn multiply_overflow_wraps_like_the_reference() {
        // 205 * 235 = 48175; the reference implementation's stepwise
        // truncation lands on 47.
        assert_eq!(binary_multiply("11001101", "11101011"), "00101111");
    }

    #[test]
    fn multiply_matches_wrapping_product_for_all_byte_pairs() {
        for a in 0..=255u16 {
            for b in 0..=255u16 {
                assert_eq!(
                    binary_multiply(&bits(a), &bits(b)),
                    bits(a * b % 256),
                    "{a} * {b}"
                );
            }
        }
    }

    #[test]
    fn multiply_by_zero_is_zero() {
        assert_eq!(binary_multiply("00000000", "00000000"), "00000000");
        assert_eq!(binary_multiply("11111111", "0"), "00000000");
    }

    #[test]
    fn multiply_shift_past_the_result_width_contributes_nothing() {
        // the multiplier's bit 8 shifts the multiplicand entirely out of range
        assert_eq!(binary_multiply("00000001", "100000000"), "00000000");
        assert_eq!(binary_multiply("00000011", "100000001"), "00000011");
    }
}
