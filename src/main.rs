//! Demonstration driver for fixed-width binary long multiplication.
//!
//! Multiplies two hard-coded operand pairs and prints each operand and the
//! product together with their decimal equivalents.
//!
//! Run with: cargo run --release

use longmul::{BitString, BitStringError};

fn demonstrate(a_bits: &str, b_bits: &str) -> Result<(), BitStringError> {
    let a = BitString::new_checked(a_bits)?;
    let b = BitString::new_checked(b_bits)?;
    let product = a.mul(&b);

    println!("A: {a} (decimal {})", a.to_decimal());
    println!("B: {b} (decimal {})", b.to_decimal());
    println!("Product: {product} (decimal {})", product.to_decimal());

    Ok(())
}

fn main() -> Result<(), BitStringError> {
    // 13 * 11 = 143 fits in eight bits.
    demonstrate("00001101", "00001011")?;
    // 205 * 235 = 48175 does not; the product wraps to 47.
    demonstrate("11001101", "11101011")?;
    Ok(())
}
