//! Bit-level value types.
//!
//! A [`Bit`] is a two-valued logical unit, a [`ByteUnit`] is exactly eight bits ordered most
//! significant first, and [`Bytes`] is a variable-length sequence of byte units. Every type
//! renders as text ([`ByteUnit::to_str`]) or as lowercase hexadecimal memory
//! ([`ByteUnit::to_mem`]).
//!
//! ```
//! use octet_types::{Bit, ByteUnit, Bytes};
//!
//! let a: ByteUnit = ByteUnit::new([
//!     Bit::FALSE, Bit::TRUE, Bit::FALSE, Bit::TRUE,
//!     Bit::FALSE, Bit::FALSE, Bit::FALSE, Bit::FALSE,
//! ]);
//! assert_eq!(a.to_str(), 'P');
//! assert_eq!(a.to_mem(), "50");
//!
//! let name: Bytes = Bytes::from("Peter");
//! assert!(name.contains(&a));
//! assert_eq!(name.to_mem(), "50 65 74 65 72");
//! ```

#![deny(missing_docs, unused_must_use)]

mod bit;
mod bytes;
mod error;
pub mod mutability;
mod unit;

pub use bit::{Bit, Truthy};
pub use bytes::{Bytes, BytesMut, Member, UnitMatch};
pub use error::{Error, ErrorKind};
pub use mutability::{Immutable, Mutability, Mutable};
pub use unit::{ByteUnit, ByteUnitMut, FixedWidth};
