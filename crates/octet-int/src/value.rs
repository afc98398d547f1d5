//! Dynamically-typed single-byte integers.

use core::fmt;

use octet_types::Error;
use rand::Rng;

use crate::{Char, UnsignedChar};

/// The type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    /// A signed character.
    Char,
    /// An unsigned character.
    UnsignedChar,
}

impl ValueType {
    /// Generates a random value of this type.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match self {
            ValueType::Char => Value::Char(rng.gen()),
            ValueType::UnsignedChar => Value::UnsignedChar(rng.gen()),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Char => write!(f, "Char"),
            ValueType::UnsignedChar => write!(f, "UnsignedChar"),
        }
    }
}

/// A single-byte integer whose type is only known at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A signed character.
    Char(Char),
    /// An unsigned character.
    UnsignedChar(UnsignedChar),
}

impl Value {
    /// Returns the type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Char(_) => ValueType::Char,
            Value::UnsignedChar(_) => ValueType::UnsignedChar,
        }
    }

    /// Adds two values of the same type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Unsupported`](octet_types::ErrorKind::Unsupported) if the
    /// operands have different types, leaving the caller free to pick a fallback.
    pub fn try_add(&self, rhs: &Value) -> Result<Value, Error> {
        match (self, rhs) {
            (Value::Char(a), Value::Char(b)) => Ok(Value::Char(a + b)),
            (Value::UnsignedChar(a), Value::UnsignedChar(b)) => Ok(Value::UnsignedChar(a + b)),
            _ => Err(Error::unsupported(format!(
                "unsupported operand types for +: '{}' and '{}'",
                self.value_type(),
                rhs.value_type()
            ))),
        }
    }

    /// Returns the character whose code point equals the raw bit pattern.
    pub fn to_str(&self) -> char {
        match self {
            Value::Char(v) => v.to_str(),
            Value::UnsignedChar(v) => v.to_str(),
        }
    }

    /// Returns the raw bit pattern as two lowercase hexadecimal digits.
    pub fn to_mem(&self) -> String {
        match self {
            Value::Char(v) => v.to_mem(),
            Value::UnsignedChar(v) => v.to_mem(),
        }
    }

    /// Returns the decoded integer value.
    pub fn to_int(&self) -> i16 {
        match self {
            Value::Char(v) => v.to_int().into(),
            Value::UnsignedChar(v) => v.to_int().into(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Char(v) => fmt::Display::fmt(v, f),
            Value::UnsignedChar(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<Char> for Value {
    #[inline]
    fn from(value: Char) -> Self {
        Value::Char(value)
    }
}

impl From<UnsignedChar> for Value {
    #[inline]
    fn from(value: UnsignedChar) -> Self {
        Value::UnsignedChar(value)
    }
}

impl TryFrom<Value> for Char {
    type Error = ValueConvertError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Char(v) => Ok(v),
            _ => Err(ValueConvertError::new(ValueType::Char, value.value_type())),
        }
    }
}

impl TryFrom<Value> for UnsignedChar {
    type Error = ValueConvertError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::UnsignedChar(v) => Ok(v),
            _ => Err(ValueConvertError::new(
                ValueType::UnsignedChar,
                value.value_type(),
            )),
        }
    }
}

/// A value conversion error.
#[derive(Debug, thiserror::Error)]
#[error("attempted to convert a {actual} to a {expected}")]
pub struct ValueConvertError {
    expected: ValueType,
    actual: ValueType,
}

impl ValueConvertError {
    pub(crate) fn new(expected: ValueType, actual: ValueType) -> Self {
        Self { expected, actual }
    }

    /// Returns the expected value type.
    pub fn expected(&self) -> ValueType {
        self.expected
    }

    /// Returns the actual value type.
    pub fn actual(&self) -> ValueType {
        self.actual
    }
}

#[cfg(test)]
mod tests {
    use octet_types::ErrorKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_value_add_same_type() {
        let a = Value::from(UnsignedChar::from(250u8));
        let b = Value::from(UnsignedChar::from(10u8));

        let sum = a.try_add(&b).unwrap();

        assert_eq!(sum.value_type(), ValueType::UnsignedChar);
        assert_eq!(sum.to_int(), 4);
    }

    #[test]
    fn test_value_add_mixed_types_is_unsupported() {
        let e = Value::from(Char::from(-48i8));
        let f = Value::from(UnsignedChar::from(80u8));

        let err = e.try_add(&f).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert!(err
            .to_string()
            .contains("unsupported operand types for +: 'Char' and 'UnsignedChar'"));
    }

    #[test]
    fn test_value_convert() {
        let value = Value::from(Char::from(-1i8));

        assert_eq!(Char::try_from(value).unwrap().to_int(), -1);

        let err = UnsignedChar::try_from(value).unwrap_err();
        assert_eq!(err.expected(), ValueType::UnsignedChar);
        assert_eq!(err.actual(), ValueType::Char);
        assert_eq!(
            err.to_string(),
            "attempted to convert a Char to a UnsignedChar"
        );
    }

    #[test]
    fn test_value_random_has_requested_type() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        for ty in [ValueType::Char, ValueType::UnsignedChar] {
            assert_eq!(ty.random(&mut rng).value_type(), ty);
        }
    }
}
