//! Single-byte integers built on bit-level value types.
//!
//! [`Char`] and [`UnsignedChar`] each own one mutable byte unit and add by propagating a
//! carry bit through a chain of full adders. Sums wrap modulo 256.
//!
//! ```
//! use octet_int::{Char, UnsignedChar};
//!
//! let a = UnsignedChar::from(250u8);
//! let b = UnsignedChar::from(10u8);
//! assert_eq!((a + b).to_int(), 4);
//!
//! let c = Char::try_new(-48).unwrap();
//! assert_eq!(c.to_mem(), "d0");
//! ```

#![deny(missing_docs, unused_must_use)]

pub mod adder;
mod integer;
mod value;

pub use integer::{Char, Domain, Integer8, Signed, Unsigned, UnsignedChar};
pub use value::{Value, ValueConvertError, ValueType};

pub use octet_types::{Bit, ByteUnit, ByteUnitMut, Error, ErrorKind, FixedWidth};
