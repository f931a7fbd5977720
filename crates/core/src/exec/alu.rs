//! Arithmetic primitives for the step dispatcher.
//!
//! Pure functions for the operations whose Rust spelling is not a single
//! operator: arithmetic shifts, signed/unsigned compares, and the 64-bit
//! multiply/divide family feeding `HI`/`LO`. Everything here is total and
//! wrapping; no operation traps.

/// Shift right arithmetic: the sign bit fills vacated positions.
///
/// `amount` must already be masked to 0-31 by the caller.
#[inline]
pub fn sra(value: u32, amount: u32) -> u32 {
    ((value as i32) >> amount) as u32
}

/// Signed set-on-less-than: 1 if `a < b` as two's-complement values, else 0.
#[inline]
pub fn slt(a: u32, b: u32) -> u32 {
    u32::from((a as i32) < (b as i32))
}

/// Unsigned set-on-less-than: 1 if `a < b` as unsigned values, else 0.
#[inline]
pub fn sltu(a: u32, b: u32) -> u32 {
    u32::from(a < b)
}

/// Signed 32x32 to 64-bit multiply, split as `(hi, lo)`.
///
/// Operands are sign-extended through `i64` so negative values keep their
/// sign; `-1 * -1` yields `(0, 1)`.
pub fn mult(a: u32, b: u32) -> (u32, u32) {
    let product = i64::from(a as i32) * i64::from(b as i32);
    split(product as u64)
}

/// Unsigned 32x32 to 64-bit multiply, split as `(hi, lo)`.
pub fn multu(a: u32, b: u32) -> (u32, u32) {
    let product = u64::from(a) * u64::from(b);
    split(product)
}

/// Signed divide, truncating toward zero: `(remainder, quotient)` for HI/LO.
///
/// Returns `None` for a zero divisor; the dispatcher reports the fault and
/// leaves HI/LO carried forward. `i32::MIN / -1` wraps rather than trapping.
pub fn div(a: u32, b: u32) -> Option<(u32, u32)> {
    if b == 0 {
        return None;
    }
    let lhs = a as i32;
    let rhs = b as i32;
    Some((
        lhs.wrapping_rem(rhs) as u32,
        lhs.wrapping_div(rhs) as u32,
    ))
}

/// Unsigned divide: `(remainder, quotient)` for HI/LO.
///
/// Returns `None` for a zero divisor.
pub fn divu(a: u32, b: u32) -> Option<(u32, u32)> {
    if b == 0 {
        return None;
    }
    Some((a % b, a / b))
}

/// Splits a 64-bit product into `(hi, lo)` words.
#[inline]
fn split(product: u64) -> (u32, u32) {
    ((product >> 32) as u32, product as u32)
}
