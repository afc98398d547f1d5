//! Single-byte integers.

use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Index, IndexMut},
    slice::SliceIndex,
};

use octet_types::{Bit, ByteUnit, ByteUnitMut, Error, FixedWidth, Mutability, Truthy};
use rand::distributions::{Distribution, Standard};
use tracing::instrument;

use crate::adder::ripple_carry_add;

mod sealed {
    /// Sealed trait.
    pub trait Sealed {}
}

/// The integer domain of a single-byte integer.
pub trait Domain:
    sealed::Sealed + fmt::Debug + Default + Copy + Eq + Hash + Send + Sync + 'static
{
    /// Native integer type the bit pattern decodes to.
    type Int: Copy + fmt::Debug + fmt::Display + Into<i16>;

    /// Name of the type, used when rendering values.
    const TYPE_NAME: &'static str;
    /// Human readable name used in error messages.
    const NAME: &'static str;
    /// Smallest representable value.
    const MIN: i16;
    /// Largest representable value.
    const MAX: i16;

    /// Decodes a raw 8-bit pattern.
    fn decode(raw: u8) -> Self::Int;
}

/// Signed values in `-128..=127`, stored as two's complement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signed;

impl sealed::Sealed for Signed {}
impl Domain for Signed {
    type Int = i8;

    const TYPE_NAME: &'static str = "Char";
    const NAME: &'static str = "signed character";
    const MIN: i16 = i8::MIN as i16;
    const MAX: i16 = i8::MAX as i16;

    #[inline]
    fn decode(raw: u8) -> i8 {
        raw as i8
    }
}

/// Unsigned values in `0..=255`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unsigned;

impl sealed::Sealed for Unsigned {}
impl Domain for Unsigned {
    type Int = u8;

    const TYPE_NAME: &'static str = "UnsignedChar";
    const NAME: &'static str = "unsigned character";
    const MIN: i16 = u8::MIN as i16;
    const MAX: i16 = u8::MAX as i16;

    #[inline]
    fn decode(raw: u8) -> u8 {
        raw
    }
}

/// A single-byte integer backed by exactly one mutable [`ByteUnit`].
///
/// Bit access is forwarded to the backing unit, so index 0 is the most significant bit.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct Integer8<D> {
    unit: ByteUnitMut,
    #[cfg_attr(feature = "serde", serde(skip))]
    _domain: PhantomData<D>,
}

/// A signed 8-bit integer.
pub type Char = Integer8<Signed>;

/// An unsigned 8-bit integer.
pub type UnsignedChar = Integer8<Unsigned>;

impl<D: Domain> Integer8<D> {
    /// The zero value.
    pub const ZERO: Self = Self::from_raw(0);

    #[inline]
    const fn from_unit(unit: ByteUnitMut) -> Self {
        Self {
            unit,
            _domain: PhantomData,
        }
    }

    #[inline]
    const fn from_raw(raw: u8) -> Self {
        let mut bits = [Bit::FALSE; 8];
        let mut i = 0;
        while i < 8 {
            bits[i] = Bit::new(raw & (0x80 >> i) != 0);
            i += 1;
        }

        Self::from_unit(ByteUnit::new(bits))
    }

    /// Creates a new integer, checking that `value` lies in the domain.
    #[instrument(level = "trace", err)]
    pub fn try_new(value: i64) -> Result<Self, Error> {
        if value < D::MIN as i64 || value > D::MAX as i64 {
            return Err(Error::range(format!(
                "a {} only accepts integer from {} to {}, not {}",
                D::NAME,
                D::MIN,
                D::MAX,
                value
            )));
        }

        // Truncation keeps the two's complement pattern of negative values.
        Ok(Self::from_raw(value as u8))
    }

    /// Creates a new integer holding a copy of the bit pattern of `unit`.
    #[inline]
    pub fn from_byte_unit<M: Mutability>(unit: &ByteUnit<M>) -> Self {
        Self::from_unit(unit.to_mutable())
    }

    /// Returns a copy of the backing unit.
    #[inline]
    pub fn to_byte_unit(&self) -> ByteUnit {
        self.unit.freeze()
    }

    /// Returns the decoded integer value.
    #[inline]
    pub fn to_int(&self) -> D::Int {
        D::decode(self.unit.to_int())
    }

    /// Returns the raw bit pattern as an unsigned value.
    #[inline]
    pub fn to_raw(&self) -> u8 {
        self.unit.to_int()
    }

    /// Returns the character whose code point equals the raw bit pattern.
    #[inline]
    pub fn to_str(&self) -> char {
        self.unit.to_str()
    }

    /// Returns the raw bit pattern as two lowercase hexadecimal digits.
    #[inline]
    pub fn to_mem(&self) -> String {
        self.unit.to_mem()
    }

    /// Returns the bit at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.unit.get(index)
    }

    /// Replaces the bit at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: impl Into<Bit>) -> Result<(), Error> {
        self.unit.set(index, value)
    }

    /// Replaces a run of bits with an equal-length sequence.
    #[inline]
    pub fn set_slice<R>(&mut self, range: R, bits: &[Bit]) -> Result<(), Error>
    where
        R: SliceIndex<[Bit], Output = [Bit]>,
    {
        self.unit.set_slice(range, bits)
    }

    /// Returns an iterator over the bits, most significant first.
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, Bit>> {
        self.unit.iter()
    }

    /// Adds `rhs` to `self`, returning the wrapped sum and whether a carry left the most
    /// significant bit.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let (sum, carry) = ripple_carry_add(&self.unit, &rhs.unit);

        (Self::from_unit(sum), carry.get())
    }
}

impl<D: Domain> FixedWidth for Integer8<D> {
    const WIDTH: usize = 8;
    const NAME: &'static str = D::NAME;
}

impl<D: Domain> Default for Integer8<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Domain> Hash for Integer8<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_raw().hash(state);
    }
}

impl<D: Domain> Truthy for Integer8<D> {
    #[inline]
    fn truthy(&self) -> bool {
        self.unit.truthy()
    }
}

impl<D: Domain, I> Index<I> for Integer8<D>
where
    I: SliceIndex<[Bit]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.unit[index]
    }
}

impl<D: Domain, I> IndexMut<I> for Integer8<D>
where
    I: SliceIndex<[Bit]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.unit[index]
    }
}

impl<'a, D: Domain> IntoIterator for &'a Integer8<D> {
    type Item = Bit;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Bit>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Wrapping addition: the carry out of the most significant bit is discarded.
impl<D: Domain> Add for Integer8<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.overflowing_add(&rhs).0
    }
}

impl<'a, D: Domain> Add<&'a Integer8<D>> for &'a Integer8<D> {
    type Output = Integer8<D>;

    #[inline]
    fn add(self, rhs: &'a Integer8<D>) -> Integer8<D> {
        self.overflowing_add(rhs).0
    }
}

impl<D: Domain> AddAssign for Integer8<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.unit = (*self + rhs).unit;
    }
}

impl From<i8> for Char {
    #[inline]
    fn from(value: i8) -> Self {
        Self::from_raw(value as u8)
    }
}

impl From<u8> for UnsignedChar {
    #[inline]
    fn from(value: u8) -> Self {
        Self::from_raw(value)
    }
}

impl From<Char> for i8 {
    #[inline]
    fn from(value: Char) -> Self {
        value.to_int()
    }
}

impl From<UnsignedChar> for u8 {
    #[inline]
    fn from(value: UnsignedChar) -> Self {
        value.to_int()
    }
}

/// Implements range-checked construction from wider integer types.
macro_rules! impl_try_from {
    ($($ty:ty),*) => {
        $(
            impl<D: Domain> TryFrom<$ty> for Integer8<D> {
                type Error = Error;

                #[inline]
                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    Self::try_new(value as i64)
                }
            }
        )*
    };
}

impl_try_from!(i16, i32, i64);

impl<D: Domain> fmt::Display for Integer8<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", D::TYPE_NAME, self.to_str())
    }
}

impl<D: Domain> fmt::Debug for Integer8<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<D: Domain> Distribution<Integer8<D>> for Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Integer8<D> {
        Integer8::from_raw(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use octet_types::{ErrorKind, Immutable};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(-129)]
    #[case(128)]
    #[case(1000)]
    fn test_char_out_of_range(#[case] value: i64) {
        let err = Char::try_new(value).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[rstest]
    #[case(-1)]
    #[case(256)]
    fn test_unsigned_char_out_of_range(#[case] value: i64) {
        let err = UnsignedChar::try_new(value).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_char_signed_round_trip() {
        for value in i8::MIN..=i8::MAX {
            let c = Char::try_new(value as i64).unwrap();

            assert_eq!(c.to_int(), value);
            assert_eq!(c.to_raw(), value as u8);
            assert_eq!(c, Char::from(value));
        }
    }

    #[test]
    fn test_unsigned_char_round_trip() {
        for value in 0..=255u8 {
            let c = UnsignedChar::try_new(value as i64).unwrap();

            assert_eq!(c.to_int(), value);
            assert_eq!(c.to_mem(), format!("{value:02x}"));
        }
    }

    #[test]
    fn test_char_negative_rendering() {
        let c = Char::try_from(-48).unwrap();

        assert_eq!(c.to_int(), -48);
        assert_eq!(c.to_mem(), "d0");
        assert_eq!(c.to_str(), '\u{d0}');
        assert_eq!(c[0], Bit::TRUE);
    }

    #[test]
    fn test_unsigned_char_rendering() {
        let c = UnsignedChar::from(80u8);

        assert_eq!(c.to_str(), 'P');
        assert_eq!(c.to_mem(), "50");
        assert_eq!(c.to_int(), 80);
        assert_eq!(c.to_string(), "UnsignedChar('P')");
        assert_eq!(Char::default().to_string(), "Char('\\0')");
    }

    #[test]
    fn test_add_wraps() {
        let sum = UnsignedChar::from(255u8) + UnsignedChar::from(1u8);
        assert_eq!(sum.to_int(), 0);
        assert_eq!(sum.to_byte_unit(), 0);

        let max = UnsignedChar::from(255u8);
        let (sum, overflow) = max.overflowing_add(&UnsignedChar::from(1u8));
        assert_eq!(sum, UnsignedChar::ZERO);
        assert!(overflow);

        let sum = Char::from(100i8) + Char::from(100i8);
        assert_eq!(sum.to_int(), -56);

        let sum = Char::from(-48i8) + Char::from(80i8);
        assert_eq!(sum.to_int(), 32);
    }

    #[test]
    fn test_add_matches_native_wrapping_add() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let (a, b): (u8, u8) = (rng.gen(), rng.gen());
            let sum = &UnsignedChar::from(a) + &UnsignedChar::from(b);
            assert_eq!(sum.to_int(), a.wrapping_add(b));

            let (a, b): (i8, i8) = (rng.gen(), rng.gen());
            let sum = Char::from(a) + Char::from(b);
            assert_eq!(sum.to_int(), a.wrapping_add(b));
        }
    }

    #[test]
    fn test_add_assign_replaces_value() {
        let mut c = UnsignedChar::from(200u8);
        let before = c;
        c += UnsignedChar::from(100u8);

        assert_eq!(c.to_int(), 44);
        assert_eq!(before.to_int(), 200);
    }

    #[test]
    fn test_bit_access_is_forwarded() {
        let mut c = UnsignedChar::default();

        c.set(7, true).unwrap();
        c[6] = Bit::TRUE;
        c.set_slice(0..1, &[Bit::TRUE]).unwrap();
        assert_eq!(c.to_int(), 0b1000_0011);
        assert_eq!(c.len(), 8);
        assert_eq!(c.iter().rev().next(), Some(Bit::TRUE));
        assert_eq!(c.get(8), None);

        let err = c.set(8, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);

        let err = c.delete(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FixedSize);
        assert!(err.to_string().contains("unsigned character memory size is fixed"));
    }

    #[test]
    fn test_copy_is_deep() {
        let unit = ByteUnit::<Immutable>::from(80u8);
        let mut c = Char::from_byte_unit(&unit);
        let copy = c;
        c.set(0, true).unwrap();

        assert_eq!(unit, 80);
        assert_eq!(copy.to_raw(), 80);
        assert_eq!(c.to_raw(), 208);
    }
}
