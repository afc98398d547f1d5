//! Binary addition over byte units.

use octet_types::{Bit, ByteUnit, ByteUnitMut, Mutability};
use tracing::trace;

/// A one-bit full adder.
///
/// Returns the sum bit (the parity of the three inputs) and the carry out (their majority).
#[inline]
pub fn full_adder(a: Bit, b: Bit, carry_in: Bit) -> (Bit, Bit) {
    let sum = a ^ b ^ carry_in;
    let carry_out = (a & b) | (carry_in & (a ^ b));

    (sum, carry_out)
}

/// Adds two units one bit position at a time, from the least significant bit (index 7)
/// to the most significant bit (index 0).
///
/// Returns the 8-bit sum and the carry out of the most significant position.
pub fn ripple_carry_add<M, N>(lhs: &ByteUnit<M>, rhs: &ByteUnit<N>) -> (ByteUnitMut, Bit)
where
    M: Mutability,
    N: Mutability,
{
    let mut sum = ByteUnitMut::ZERO;
    let mut carry = Bit::FALSE;

    for i in 0..8 {
        let position = 7 - i;
        let last_carry = carry;

        let (bit, carry_out) = full_adder(lhs[position], rhs[position], last_carry);
        sum[position] = bit;
        carry = carry_out;
    }

    trace!(
        lhs = %lhs.to_mem(),
        rhs = %rhs.to_mem(),
        sum = %sum.to_mem(),
        carry = carry.get(),
        "ripple-carry add"
    );

    (sum, carry)
}
