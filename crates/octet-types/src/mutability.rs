//! Mutability capabilities.
//!
//! [`ByteUnit`](crate::ByteUnit) and [`Bytes`](crate::Bytes) are parameterized by a capability
//! marker. Mutating operations are only implemented for the [`Mutable`] capability, so an
//! [`Immutable`] value cannot change after construction.

use core::{fmt::Debug, hash::Hash};

mod sealed {
    /// Sealed trait.
    pub trait Sealed {}
}

/// Mutability capability.
pub trait Mutability:
    sealed::Sealed + Debug + Default + Copy + Ord + Hash + Send + Sync + 'static
{
}

/// Values which cannot change after construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Immutable;

impl Mutability for Immutable {}
impl sealed::Sealed for Immutable {}

/// Values owned by a single handle which may be mutated in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mutable;

impl Mutability for Mutable {}
impl sealed::Sealed for Mutable {}
