//! Variable-length sequences of byte units.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Bound, Index, IndexMut, Mul, Range, RangeBounds},
    slice::SliceIndex,
};

use itybity::IntoBits;
use rand::Rng;
use tracing::instrument;

use crate::{
    mutability::{Immutable, Mutability, Mutable},
    ByteUnit, Error, ErrorKind, Truthy,
};

/// An ordered, variable-length sequence of [`ByteUnit`]s.
///
/// Elements are always immutable units; with the [`Mutable`] capability the sequence
/// itself can grow, shrink and have units replaced.
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct Bytes<M = Immutable> {
    units: Vec<ByteUnit>,
    #[cfg_attr(feature = "serde", serde(skip))]
    _mutability: PhantomData<M>,
}

/// A byte sequence which can be modified in place.
pub type BytesMut = Bytes<Mutable>;

impl<M: Mutability> Bytes<M> {
    /// The empty sequence.
    pub const NULL: Self = Self::new();

    /// Creates a new empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            units: Vec::new(),
            _mutability: PhantomData,
        }
    }

    #[inline]
    fn from_units(units: Vec<ByteUnit>) -> Self {
        Self {
            units,
            _mutability: PhantomData,
        }
    }

    /// Creates a sequence of `len` zero-valued units.
    #[inline]
    pub fn zeroed(len: usize) -> Self {
        Self::from_units(vec![ByteUnit::ZERO; len])
    }

    /// Creates a sequence by coercing each item into a [`ByteUnit`].
    ///
    /// Any error raised by the coercion is returned and no sequence is built.
    ///
    /// ```
    /// use octet_types::Bytes;
    ///
    /// let name: Bytes = Bytes::try_from_iter([80, 101, 116, 101, 114]).unwrap();
    /// assert_eq!(name.to_str(), "Peter");
    ///
    /// assert!(Bytes::<octet_types::Immutable>::try_from_iter([80, 256]).is_err());
    /// ```
    #[instrument(level = "trace", skip_all, err)]
    pub fn try_from_iter<I, T>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<ByteUnit>,
        Error: From<T::Error>,
    {
        let units = iter
            .into_iter()
            .map(|item| item.try_into().map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_units(units))
    }

    /// Generates a random sequence.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self::from_units((0..len).map(|_| rng.gen()).collect())
    }

    /// Returns the number of units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the unit at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ByteUnit> {
        self.units.get(index)
    }

    /// Returns a new sequence holding a copy of the units in `range`.
    pub fn slice<R>(&self, range: R) -> Option<Self>
    where
        R: SliceIndex<[ByteUnit], Output = [ByteUnit]>,
    {
        self.units
            .get(range)
            .map(|units| Self::from_units(units.to_vec()))
    }

    /// Returns the units as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[ByteUnit] {
        &self.units
    }

    /// Returns an iterator over the units.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ByteUnit> {
        self.units.iter()
    }

    /// Returns `true` if `item` is in the sequence.
    ///
    /// Units and integers are looked up as elements, while byte sequences are
    /// looked up as contiguous runs.
    ///
    /// ```
    /// use octet_types::Bytes;
    ///
    /// let name: Bytes = Bytes::from("Peter");
    ///
    /// assert!(name.contains(&101));
    /// assert!(name.contains(&Bytes::<octet_types::Immutable>::from("Pet")));
    /// assert!(!name.contains(&b"ret"[..]));
    /// ```
    #[inline]
    pub fn contains<T: Member + ?Sized>(&self, item: &T) -> bool {
        item.is_member_of(&self.units)
    }

    /// Returns the number of units equal to `item`.
    pub fn count<T: UnitMatch + ?Sized>(&self, item: &T) -> usize {
        self.units.iter().filter(|unit| item.matches(unit)).count()
    }

    /// Returns the position of the first unit equal to `item`.
    pub fn index<T: UnitMatch + ?Sized>(&self, item: &T) -> Result<usize, Error> {
        self.units
            .iter()
            .position(|unit| item.matches(unit))
            .ok_or_else(|| Error::not_found("value is not in bytes"))
    }

    /// Returns a new sequence with the units of `other` appended.
    pub fn concat<N: Mutability>(&self, other: &Bytes<N>) -> Self {
        let mut units = Vec::with_capacity(self.len() + other.len());
        units.extend_from_slice(&self.units);
        units.extend_from_slice(&other.units);

        Self::from_units(units)
    }

    /// Returns a new sequence with the units repeated `count` times.
    #[inline]
    pub fn repeat(&self, count: usize) -> Self {
        Self::from_units(self.units.repeat(count))
    }

    /// Returns the concatenated character rendering of every unit.
    pub fn to_str(&self) -> String {
        self.units.iter().map(ByteUnit::to_str).collect()
    }

    /// Returns the hexadecimal rendering of every unit, separated by single spaces.
    pub fn to_mem(&self) -> String {
        self.units
            .iter()
            .map(ByteUnit::to_mem)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the integer values of the units.
    pub fn to_vec(&self) -> Vec<u8> {
        self.units.iter().map(ByteUnit::to_int).collect()
    }

    /// Returns a mutable copy of the sequence.
    #[inline]
    pub fn to_mutable(&self) -> BytesMut {
        Bytes::from_units(self.units.clone())
    }

    /// Converts the sequence into an immutable one.
    #[inline]
    pub fn freeze(self) -> Bytes {
        Bytes::from_units(self.units)
    }
}

impl Bytes<Mutable> {
    /// Appends a unit.
    #[inline]
    pub fn push(&mut self, unit: ByteUnit) {
        self.units.push(unit);
    }

    /// Replaces the unit at `index`.
    pub fn set(&mut self, index: usize, unit: ByteUnit) -> Result<(), Error> {
        let len = self.units.len();
        let slot = self
            .units
            .get_mut(index)
            .ok_or_else(|| Error::index(index, len))?;
        *slot = unit;

        Ok(())
    }

    /// Replaces the units in `range` with `replacement`, which may have any length.
    ///
    /// Every replacement item is coerced before the sequence is modified.
    #[instrument(level = "trace", skip_all, err)]
    pub fn splice<R, I, T>(&mut self, range: R, replacement: I) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
        T: TryInto<ByteUnit>,
        Error: From<T::Error>,
    {
        let range = resolve_range(&range, self.units.len())?;
        let replacement = Bytes::<Immutable>::try_from_iter(replacement)?;

        let _ = self.units.splice(range, replacement.units);

        Ok(())
    }

    /// Removes and returns the unit at `index`.
    pub fn remove(&mut self, index: usize) -> Result<ByteUnit, Error> {
        if index >= self.units.len() {
            return Err(Error::index(index, self.units.len()));
        }

        Ok(self.units.remove(index))
    }

    /// Removes the units in `range`.
    pub fn delete<R: RangeBounds<usize>>(&mut self, range: R) -> Result<(), Error> {
        let range = resolve_range(&range, self.units.len())?;
        self.units.drain(range);

        Ok(())
    }
}

fn resolve_range<R: RangeBounds<usize>>(range: &R, len: usize) -> Result<Range<usize>, Error> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end || end > len {
        return Err(Error::new(
            ErrorKind::Index,
            format!("range {start}..{end} is out of range for length {len}"),
        ));
    }

    Ok(start..end)
}

/// A value which can be compared against a single unit.
pub trait UnitMatch {
    /// Returns `true` if the value equals `unit`.
    fn matches(&self, unit: &ByteUnit) -> bool;
}

impl<M: Mutability> UnitMatch for ByteUnit<M> {
    #[inline]
    fn matches(&self, unit: &ByteUnit) -> bool {
        self.bits() == unit.bits()
    }
}

macro_rules! impl_unit_match_int {
    ($($ty:ty),*) => {
        $(
            impl UnitMatch for $ty {
                #[inline]
                fn matches(&self, unit: &ByteUnit) -> bool {
                    unit == self
                }
            }
        )*
    };
}

impl_unit_match_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A value which can be searched for in a byte sequence.
pub trait Member {
    /// Returns `true` if the value occurs in `units`.
    fn is_member_of(&self, units: &[ByteUnit]) -> bool;
}

impl<T: UnitMatch> Member for T {
    #[inline]
    fn is_member_of(&self, units: &[ByteUnit]) -> bool {
        units.iter().any(|unit| self.matches(unit))
    }
}

impl<M: Mutability> Member for Bytes<M> {
    #[inline]
    fn is_member_of(&self, units: &[ByteUnit]) -> bool {
        contains_run(units, &self.units)
    }
}

impl Member for [u8] {
    fn is_member_of(&self, units: &[ByteUnit]) -> bool {
        let needle: Vec<ByteUnit> = self.iter().copied().map(ByteUnit::from).collect();
        contains_run(units, &needle)
    }
}

/// Returns `true` if `needle` occurs as a contiguous run in `haystack`.
fn contains_run(haystack: &[ByteUnit], needle: &[ByteUnit]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }

    let len = needle.len();
    for start in 0..=haystack.len() - len {
        if haystack[start..start + len] == *needle {
            return true;
        }
    }

    false
}

impl<M: Mutability, N: Mutability> PartialEq<Bytes<N>> for Bytes<M> {
    #[inline]
    fn eq(&self, other: &Bytes<N>) -> bool {
        self.units == other.units
    }
}

impl<M: Mutability> Eq for Bytes<M> {}

impl<M: Mutability, N: Mutability> PartialOrd<Bytes<N>> for Bytes<M> {
    #[inline]
    fn partial_cmp(&self, other: &Bytes<N>) -> Option<Ordering> {
        Some(self.units.cmp(&other.units))
    }
}

impl<M: Mutability> Ord for Bytes<M> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.units.cmp(&other.units)
    }
}

impl<M: Mutability> Hash for Bytes<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.units.hash(state);
    }
}

impl<M: Mutability, I> Index<I> for Bytes<M>
where
    I: SliceIndex<[ByteUnit]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.units[index]
    }
}

impl<I> IndexMut<I> for Bytes<Mutable>
where
    I: SliceIndex<[ByteUnit]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.units[index]
    }
}

impl<M: Mutability> Truthy for Bytes<M> {
    #[inline]
    fn truthy(&self) -> bool {
        !self.units.is_empty()
    }
}

impl<'a, M: Mutability, N: Mutability> Add<&'a Bytes<N>> for &'a Bytes<M> {
    type Output = Bytes<M>;

    #[inline]
    fn add(self, rhs: &'a Bytes<N>) -> Bytes<M> {
        self.concat(rhs)
    }
}

impl<M: Mutability, N: Mutability> Add<Bytes<N>> for Bytes<M> {
    type Output = Bytes<M>;

    #[inline]
    fn add(mut self, rhs: Bytes<N>) -> Bytes<M> {
        self.units.extend(rhs.units);
        self
    }
}

impl<M: Mutability> Add<&[u8]> for Bytes<M> {
    type Output = Bytes<M>;

    #[inline]
    fn add(mut self, rhs: &[u8]) -> Bytes<M> {
        self.units.extend(rhs.iter().copied().map(ByteUnit::from));
        self
    }
}

impl<N: Mutability> AddAssign<&Bytes<N>> for Bytes<Mutable> {
    #[inline]
    fn add_assign(&mut self, rhs: &Bytes<N>) {
        self.units.extend_from_slice(&rhs.units);
    }
}

impl AddAssign<&[u8]> for Bytes<Mutable> {
    #[inline]
    fn add_assign(&mut self, rhs: &[u8]) {
        self.units.extend(rhs.iter().copied().map(ByteUnit::from));
    }
}

impl<M: Mutability> Mul<usize> for &Bytes<M> {
    type Output = Bytes<M>;

    #[inline]
    fn mul(self, rhs: usize) -> Bytes<M> {
        self.repeat(rhs)
    }
}

impl<M: Mutability> Mul<usize> for Bytes<M> {
    type Output = Bytes<M>;

    #[inline]
    fn mul(self, rhs: usize) -> Bytes<M> {
        self.repeat(rhs)
    }
}

impl<M: Mutability> Mul<&Bytes<M>> for usize {
    type Output = Bytes<M>;

    #[inline]
    fn mul(self, rhs: &Bytes<M>) -> Bytes<M> {
        rhs.repeat(self)
    }
}

impl<M: Mutability> Mul<Bytes<M>> for usize {
    type Output = Bytes<M>;

    #[inline]
    fn mul(self, rhs: Bytes<M>) -> Bytes<M> {
        rhs.repeat(self)
    }
}

impl<M: Mutability> From<&[u8]> for Bytes<M> {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self::from_units(value.iter().copied().map(ByteUnit::from).collect())
    }
}

impl<M: Mutability, const N: usize> From<[u8; N]> for Bytes<M> {
    #[inline]
    fn from(value: [u8; N]) -> Self {
        Self::from(&value[..])
    }
}

impl<M: Mutability> From<Vec<u8>> for Bytes<M> {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self::from(value.as_slice())
    }
}

impl<M: Mutability> From<&str> for Bytes<M> {
    #[inline]
    fn from(value: &str) -> Self {
        Self::from(value.as_bytes())
    }
}

impl<M: Mutability> From<Bytes<M>> for Vec<u8> {
    #[inline]
    fn from(value: Bytes<M>) -> Self {
        value.to_vec()
    }
}

impl From<BytesMut> for Bytes {
    #[inline]
    fn from(value: BytesMut) -> Self {
        value.freeze()
    }
}

impl<M: Mutability> FromIterator<ByteUnit> for Bytes<M> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = ByteUnit>>(iter: I) -> Self {
        Self::from_units(iter.into_iter().collect())
    }
}

impl Extend<ByteUnit> for Bytes<Mutable> {
    #[inline]
    fn extend<I: IntoIterator<Item = ByteUnit>>(&mut self, iter: I) {
        self.units.extend(iter);
    }
}

impl<M: Mutability> IntoIterator for Bytes<M> {
    type Item = ByteUnit;
    type IntoIter = std::vec::IntoIter<ByteUnit>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

impl<'a, M: Mutability> IntoIterator for &'a Bytes<M> {
    type Item = &'a ByteUnit;
    type IntoIter = core::slice::Iter<'a, ByteUnit>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl<M: Mutability> IntoBits for Bytes<M> {
    type IterLsb0 = std::vec::IntoIter<bool>;
    type IterMsb0 = std::vec::IntoIter<bool>;

    fn into_iter_lsb0(self) -> Self::IterLsb0 {
        self.units
            .into_iter()
            .flat_map(|unit| unit.into_iter_lsb0())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn into_iter_msb0(self) -> Self::IterMsb0 {
        self.units
            .into_iter()
            .flat_map(|unit| unit.into_iter_msb0())
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<M: Mutability> fmt::Display for Bytes<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes('{}')", self.to_str().escape_debug())
    }
}

impl<M: Mutability> fmt::Debug for Bytes<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
