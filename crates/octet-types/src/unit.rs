//! Fixed-width byte units.

use core::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

use itybity::IntoBits;
use rand::distributions::{Distribution, Standard};
use tracing::instrument;

use crate::{
    mutability::{Immutable, Mutability, Mutable},
    Bit, Error, ErrorKind, Truthy,
};

/// A container with a structural width which never changes.
pub trait FixedWidth {
    /// Number of elements in the container.
    const WIDTH: usize;
    /// Human readable name used in error messages.
    const NAME: &'static str;

    /// Returns the number of elements, which is always [`WIDTH`](Self::WIDTH).
    #[inline]
    fn len(&self) -> usize {
        Self::WIDTH
    }

    /// Deleting an element would change the width, so this always fails with
    /// [`ErrorKind::FixedSize`](crate::ErrorKind::FixedSize).
    fn delete(&mut self, index: usize) -> Result<(), Error> {
        let _ = index;
        Err(Error::fixed_size(Self::NAME))
    }
}

/// An ordered sequence of exactly 8 bits, most significant first.
///
/// The integer value of a unit is `Σ bit[i] * 2^(7 - i)`, ranging over `0..=255`.
/// Ordering is lexicographic over the bits, which agrees with the integer ordering.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct ByteUnit<M = Immutable> {
    bits: [Bit; 8],
    #[cfg_attr(feature = "serde", serde(skip))]
    _mutability: PhantomData<M>,
}

/// A byte unit which allows in-place bit replacement.
pub type ByteUnitMut = ByteUnit<Mutable>;

impl<M: Mutability> ByteUnit<M> {
    /// The zero unit.
    pub const ZERO: Self = Self::new([Bit::FALSE; 8]);

    /// Creates a new unit from 8 bits, most significant first.
    #[inline]
    pub const fn new(bits: [Bit; 8]) -> Self {
        Self {
            bits,
            _mutability: PhantomData,
        }
    }

    /// Creates a new unit from an integer in `0..=255`.
    #[instrument(level = "trace", err)]
    pub fn try_from_int(value: i128) -> Result<Self, Error> {
        match u8::try_from(value) {
            Ok(value) => Ok(Self::from(value)),
            Err(_) => Err(Error::range(format!(
                "a byte unit only accepts integer from 0 to 255, not {value}"
            ))),
        }
    }

    /// Creates a new unit from a sequence of exactly 8 bit-convertible values.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Length`](crate::ErrorKind::Length) if the sequence does not
    /// have 8 elements, and [`ErrorKind::Type`](crate::ErrorKind::Type) if an element
    /// is not a bit.
    ///
    /// ```
    /// use octet_types::ByteUnit;
    ///
    /// let unit: ByteUnit = ByteUnit::try_from_bits("01010000".chars()).unwrap();
    /// assert_eq!(unit, 80);
    /// ```
    #[instrument(level = "trace", skip_all, err)]
    pub fn try_from_bits<I, T>(bits: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<Bit>,
        Error: From<T::Error>,
    {
        let elems: Vec<T> = bits.into_iter().collect();
        if elems.len() != 8 {
            return Err(Error::length(format!(
                "a byte unit must have exactly 8 digits, not {}",
                elems.len()
            )));
        }

        let mut result = [Bit::FALSE; 8];
        for (bit, elem) in result.iter_mut().zip(elems) {
            *bit = elem.try_into()?;
        }

        Ok(Self::new(result))
    }

    /// Returns the bits, most significant first.
    #[inline]
    pub fn bits(&self) -> &[Bit; 8] {
        &self.bits
    }

    /// Returns the bit at `index`, where index 0 is the most significant bit.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.bits.get(index).copied()
    }

    /// Returns an iterator over the bits, most significant first.
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, Bit>> {
        self.bits.iter().copied()
    }

    /// Returns the integer value of the unit.
    pub fn to_int(&self) -> u8 {
        self.bits
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, bit)| acc | ((bit.get() as u8) << (7 - i)))
    }

    /// Returns the character whose code point equals the integer value.
    #[inline]
    pub fn to_str(&self) -> char {
        char::from(self.to_int())
    }

    /// Returns the integer value as two lowercase hexadecimal digits.
    #[inline]
    pub fn to_mem(&self) -> String {
        format!("{:02x}", self.to_int())
    }

    /// Returns a mutable copy of the unit.
    #[inline]
    pub fn to_mutable(&self) -> ByteUnitMut {
        ByteUnit::new(self.bits)
    }

    /// Converts the unit into an immutable one.
    #[inline]
    pub fn freeze(self) -> ByteUnit {
        ByteUnit::new(self.bits)
    }
}

impl ByteUnit<Mutable> {
    /// Replaces the bit at `index`.
    pub fn set(&mut self, index: usize, value: impl Into<Bit>) -> Result<(), Error> {
        let len = self.bits.len();
        let bit = self
            .bits
            .get_mut(index)
            .ok_or_else(|| Error::index(index, len))?;
        *bit = value.into();

        Ok(())
    }

    /// Replaces a run of bits with an equal-length sequence.
    ///
    /// The unit is left untouched if the range is out of bounds or the lengths differ.
    #[instrument(level = "trace", skip_all, err)]
    pub fn set_slice<R>(&mut self, range: R, bits: &[Bit]) -> Result<(), Error>
    where
        R: SliceIndex<[Bit], Output = [Bit]>,
    {
        let dst = self.bits.get_mut(range).ok_or_else(|| {
            Error::new(ErrorKind::Index, "slice is out of range for a byte unit")
        })?;

        if dst.len() != bits.len() {
            return Err(Error::length(format!(
                "attempt to assign sequence of size {} to slice of size {}",
                bits.len(),
                dst.len()
            )));
        }

        dst.copy_from_slice(bits);

        Ok(())
    }
}

impl<M: Mutability> FixedWidth for ByteUnit<M> {
    const WIDTH: usize = 8;
    const NAME: &'static str = "byte unit";
}

impl<M: Mutability> Default for ByteUnit<M> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<M: Mutability, I> Index<I> for ByteUnit<M>
where
    I: SliceIndex<[Bit]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.bits[index]
    }
}

impl<I> IndexMut<I> for ByteUnit<Mutable>
where
    I: SliceIndex<[Bit]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.bits[index]
    }
}

impl<'a, M: Mutability> IntoIterator for &'a ByteUnit<M> {
    type Item = Bit;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Bit>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M: Mutability> Truthy for ByteUnit<M> {
    #[inline]
    fn truthy(&self) -> bool {
        self.bits.iter().any(|bit| bit.get())
    }
}

impl<M: Mutability> From<u8> for ByteUnit<M> {
    fn from(value: u8) -> Self {
        let mut bits = [Bit::FALSE; 8];
        for (bit, value) in bits.iter_mut().zip(value.into_iter_msb0()) {
            *bit = Bit::new(value);
        }

        Self::new(bits)
    }
}

impl<M: Mutability> From<[Bit; 8]> for ByteUnit<M> {
    #[inline]
    fn from(bits: [Bit; 8]) -> Self {
        Self::new(bits)
    }
}

impl<M: Mutability> From<ByteUnit<M>> for u8 {
    #[inline]
    fn from(unit: ByteUnit<M>) -> Self {
        unit.to_int()
    }
}

impl From<ByteUnitMut> for ByteUnit {
    #[inline]
    fn from(unit: ByteUnitMut) -> Self {
        unit.freeze()
    }
}

/// Implements range-checked construction from, and equality against, integer types.
macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl<M: Mutability> TryFrom<$ty> for ByteUnit<M> {
                type Error = Error;

                #[inline]
                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    Self::try_from_int(value as i128)
                }
            }

            impl<M: Mutability> PartialEq<$ty> for ByteUnit<M> {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    self.to_int() as i128 == *other as i128
                }
            }

            impl<M: Mutability> PartialEq<ByteUnit<M>> for $ty {
                #[inline]
                fn eq(&self, other: &ByteUnit<M>) -> bool {
                    other == self
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, i128, isize, u16, u32, u64, usize);

impl<M: Mutability> PartialEq<u8> for ByteUnit<M> {
    #[inline]
    fn eq(&self, other: &u8) -> bool {
        self.to_int() == *other
    }
}

impl<M: Mutability> PartialEq<ByteUnit<M>> for u8 {
    #[inline]
    fn eq(&self, other: &ByteUnit<M>) -> bool {
        *self == other.to_int()
    }
}

impl<M: Mutability> IntoBits for ByteUnit<M> {
    type IterLsb0 = core::iter::Rev<std::array::IntoIter<bool, 8>>;
    type IterMsb0 = std::array::IntoIter<bool, 8>;

    fn into_iter_lsb0(self) -> Self::IterLsb0 {
        self.into_iter_msb0().rev()
    }

    fn into_iter_msb0(self) -> Self::IterMsb0 {
        self.bits.map(Bit::get).into_iter()
    }
}

impl<M: Mutability> fmt::Display for ByteUnit<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteUnit({:?})", self.to_str())
    }
}

impl<M: Mutability> fmt::Debug for ByteUnit<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<M: Mutability> fmt::LowerHex for ByteUnit<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_mem())
    }
}

impl<M: Mutability> Distribution<ByteUnit<M>> for Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> ByteUnit<M> {
        ByteUnit::from(rng.gen::<u8>())
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::*;

    use super::*;

    fn bits(value: &str) -> [Bit; 8] {
        ByteUnit::<Immutable>::try_from_bits(value.chars())
            .unwrap()
            .bits
    }

    #[test]
    fn test_unit_int_round_trip() {
        for n in 0..=255u8 {
            let unit = ByteUnit::<Immutable>::from(n);

            assert_eq!(unit.to_int(), n);
            assert_eq!(unit.to_mem(), format!("{n:02x}"));
            assert_eq!(ByteUnit::<Immutable>::new(*unit.bits()), unit);
        }
    }

    #[test]
    fn test_unit_ordering_is_value_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: ByteUnit = rng.gen();
            let b: ByteUnit = rng.gen();

            assert_eq!(a.cmp(&b), a.to_int().cmp(&b.to_int()));
        }
    }

    #[test]
    fn test_unit_scenario() {
        let a = ByteUnit::<Immutable>::new(bits("01010000"));
        let b = ByteUnit::<Immutable>::try_from(80i32).unwrap();

        assert_eq!(a, b);
        assert_eq!(b.to_str(), 'P');
        assert_eq!(b.to_mem(), "50");
        assert_eq!(b.to_int(), 80);
        assert_eq!(b.to_string(), "ByteUnit('P')");
        assert_eq!(format!("{:x}", ByteUnit::<Immutable>::from(16u8)), "10");
    }

    #[rstest]
    #[case(256)]
    #[case(-1)]
    #[case(i64::MAX)]
    fn test_unit_out_of_range(#[case] value: i64) {
        let err = ByteUnit::<Immutable>::try_from(value).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_unit_equals_integers() {
        let unit = ByteUnit::<Immutable>::from(200u8);

        assert_eq!(unit, 200u8);
        assert_eq!(unit, 200i32);
        assert_eq!(200usize, unit);
        assert_ne!(unit, -56i8);
        assert_ne!(unit, 456u16);
    }

    #[rstest]
    #[case(vec![0, 1, 0, 1, 0, 0, 0], ErrorKind::Length)]
    #[case(vec![0, 1, 0, 1, 0, 0, 0, 0, 0], ErrorKind::Length)]
    #[case(vec![0, 1, 0, 1, 0, 0, 0, 2], ErrorKind::Type)]
    fn test_unit_from_bad_sequence(#[case] digits: Vec<i32>, #[case] kind: ErrorKind) {
        let err = ByteUnit::<Immutable>::try_from_bits(digits).unwrap_err();

        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_unit_from_bits_of_any_convertible_type() {
        let from_bools = ByteUnit::<Immutable>::try_from_bits([
            false, true, false, true, false, false, false, false,
        ])
        .unwrap();
        let from_bits =
            ByteUnit::<Immutable>::try_from_bits(from_bools.iter().collect::<Vec<_>>()).unwrap();

        assert_eq!(from_bools, 80);
        assert_eq!(from_bits, from_bools);
    }

    #[test]
    fn test_unit_indexing() {
        let unit = ByteUnit::<Immutable>::from(0b1000_0001u8);

        assert_eq!(unit[0], Bit::TRUE);
        assert_eq!(unit[1..7], [Bit::FALSE; 6]);
        assert_eq!(unit.get(7), Some(Bit::TRUE));
        assert_eq!(unit.get(8), None);
        assert_eq!(unit.len(), 8);
        assert_eq!(
            unit.iter().rev().map(Bit::get).collect::<Vec<_>>(),
            0b1000_0001u8.into_lsb0_vec()
        );
    }

    #[test]
    fn test_unit_mutation() {
        let mut unit = ByteUnit::<Immutable>::from(0u8).to_mutable();

        unit.set(7, true).unwrap();
        unit[6] = Bit::TRUE;
        assert_eq!(unit, 3);

        unit.set_slice(0..2, &[Bit::TRUE, Bit::TRUE]).unwrap();
        assert_eq!(unit, 0b1100_0011);

        let err = unit.set(8, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);

        let err = unit.set_slice(0..3, &[Bit::TRUE]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Length);
        assert_eq!(unit, 0b1100_0011);

        let err = unit.delete(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FixedSize);
        assert_eq!(unit.len(), 8);
    }

    #[test]
    fn test_unit_copy_is_deep() {
        let original = ByteUnit::<Mutable>::from(80u8);
        let mut copy = original;
        copy.set(0, true).unwrap();

        assert_eq!(original, 80);
        assert_eq!(copy, 208);
        assert_eq!(copy.freeze(), ByteUnit::<Immutable>::from(208u8));
    }

    #[test]
    fn test_unit_truthiness() {
        assert!(!ByteUnit::<Immutable>::ZERO.truthy());
        assert!(ByteUnit::<Immutable>::from(1u8).truthy());
        assert_eq!(ByteUnit::<Immutable>::default(), 0);
    }
}
