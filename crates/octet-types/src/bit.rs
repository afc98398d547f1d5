//! Single bits.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{BitAnd, BitOr, BitXor},
};

use rand::distributions::{Distribution, Standard};

use crate::Error;

/// A two-valued logical unit.
///
/// Bits compare by value with `false < true`, and hash to `0` or `1`.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bit(bool);

impl Bit {
    /// The set bit.
    pub const TRUE: Bit = Bit(true);
    /// The cleared bit.
    pub const FALSE: Bit = Bit(false);

    /// Creates a new bit.
    #[inline]
    pub const fn new(value: bool) -> Self {
        Bit(value)
    }

    /// Creates a bit from the truthiness of a value.
    ///
    /// Containers are true when they are non-empty, numbers when they are non-zero.
    ///
    /// ```
    /// use octet_types::Bit;
    ///
    /// assert_eq!(Bit::of(""), Bit::FALSE);
    /// assert_eq!(Bit::of(&[1, 2, 3][..]), Bit::TRUE);
    /// assert_eq!(Bit::of(&0u8), Bit::FALSE);
    /// ```
    #[inline]
    pub fn of<T: Truthy + ?Sized>(value: &T) -> Self {
        Bit(value.truthy())
    }

    /// Returns the value of the bit.
    #[inline]
    pub const fn get(self) -> bool {
        self.0
    }
}

/// A value with a boolean interpretation.
pub trait Truthy {
    /// Returns the boolean interpretation of the value.
    fn truthy(&self) -> bool;
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for Bit {
    #[inline]
    fn truthy(&self) -> bool {
        self.0
    }
}

impl Truthy for str {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn truthy(&self) -> bool {
        N != 0
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Hash for Bit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.0 as u8);
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bit({})", self.0 as u8)
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Self {
        Bit(value)
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(value: Bit) -> Self {
        value.0
    }
}

/// Binary digits convert strictly: only `0` and `1` are bits.
macro_rules! impl_try_from_digit {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Bit {
                type Error = Error;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    match value {
                        0 => Ok(Bit::FALSE),
                        1 => Ok(Bit::TRUE),
                        _ => Err(Error::type_(format!(
                            "digits of a byte unit must be bits, not {}",
                            value
                        ))),
                    }
                }
            }
        )*
    };
}

impl_try_from_digit!(u8, i32);

impl TryFrom<char> for Bit {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Bit::FALSE),
            '1' => Ok(Bit::TRUE),
            _ => Err(Error::type_(format!(
                "digits of a byte unit must be bits, not {value:?}"
            ))),
        }
    }
}

impl PartialEq<bool> for Bit {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Bit> for bool {
    #[inline]
    fn eq(&self, other: &Bit) -> bool {
        *self == other.0
    }
}

impl PartialOrd<bool> for Bit {
    #[inline]
    fn partial_cmp(&self, other: &bool) -> Option<Ordering> {
        Some(self.0.cmp(other))
    }
}

impl PartialOrd<Bit> for bool {
    #[inline]
    fn partial_cmp(&self, other: &Bit) -> Option<Ordering> {
        Some(self.cmp(&other.0))
    }
}

/// Implements a boolean operator between bits and native booleans, in both operand orders.
macro_rules! impl_bit_op {
    ($(($trait:ident, $method:ident, $op:tt)),*) => {
        $(
            impl $trait<Bit> for Bit {
                type Output = Bit;

                #[inline]
                fn $method(self, rhs: Bit) -> Bit {
                    Bit(self.0 $op rhs.0)
                }
            }

            impl $trait<bool> for Bit {
                type Output = Bit;

                #[inline]
                fn $method(self, rhs: bool) -> Bit {
                    Bit(self.0 $op rhs)
                }
            }

            impl $trait<Bit> for bool {
                type Output = Bit;

                #[inline]
                fn $method(self, rhs: Bit) -> Bit {
                    Bit(self $op rhs.0)
                }
            }
        )*
    };
}

impl_bit_op!((BitAnd, bitand, &), (BitOr, bitor, |), (BitXor, bitxor, ^));

impl Distribution<Bit> for Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Bit {
        Bit(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use rstest::*;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(false, false)]
    #[case(false, true)]
    #[case(true, false)]
    #[case(true, true)]
    fn test_bit_algebra(#[case] a: bool, #[case] b: bool) {
        let (x, y) = (Bit::new(a), Bit::new(b));

        assert_eq!(x & y, a & b);
        assert_eq!(x | y, a | b);
        assert_eq!(x ^ y, a ^ b);

        assert_eq!(x & b, Bit::new(a & b));
        assert_eq!(a | y, Bit::new(a | b));
        assert_eq!(a ^ y, Bit::new(a ^ b));
    }

    #[rstest]
    #[case(false, false)]
    #[case(false, true)]
    #[case(true, false)]
    #[case(true, true)]
    fn test_bit_ordering_matches_bool(#[case] a: bool, #[case] b: bool) {
        let (x, y) = (Bit::new(a), Bit::new(b));

        assert_eq!(x.cmp(&y), a.cmp(&b));
        assert_eq!(x < b, a < b);
        assert_eq!(a >= y, a >= b);
        assert_eq!(x == b, a == b);
    }

    #[test]
    fn test_bit_hash() {
        assert_eq!(hash_of(&Bit::FALSE), hash_of(&0u8));
        assert_eq!(hash_of(&Bit::TRUE), hash_of(&1u8));
        assert_eq!(hash_of(&Bit::new(true)), hash_of(&Bit::TRUE));
    }

    #[test]
    fn test_bit_truthiness() {
        assert_eq!(Bit::default(), Bit::FALSE);
        assert_eq!(Bit::of(&true), Bit::TRUE);
        assert_eq!(Bit::of(&Vec::<u8>::new()), Bit::FALSE);
        assert_eq!(Bit::of(&vec![0u8]), Bit::TRUE);
        assert_eq!(Bit::of("x"), Bit::TRUE);
        assert_eq!(Bit::of(&None::<u8>), Bit::FALSE);
        assert_eq!(Bit::of(&-3i64), Bit::TRUE);
    }

    #[test]
    fn test_bit_strict_digits() {
        assert_eq!(Bit::try_from(1u8).unwrap(), Bit::TRUE);
        assert_eq!(Bit::try_from('0').unwrap(), Bit::FALSE);

        let err = Bit::try_from(2i32).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Type);

        let err = Bit::try_from('x').unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Type);
    }

    #[test]
    fn test_bit_display() {
        assert_eq!(Bit::TRUE.to_string(), "Bit(1)");
        assert_eq!(format!("{:?}", Bit::FALSE), "Bit(0)");
    }
}
