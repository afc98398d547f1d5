use core::fmt;
use std::{convert::Infallible, error::Error as StdError};

/// An error raised by a value-type operation.
#[derive(Debug, thiserror::Error)]
pub struct Error {
    kind: ErrorKind,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// The class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An integer lies outside the domain of the target type.
    Range,
    /// A fixed-size container received the wrong number of elements.
    Length,
    /// An element is not convertible to the expected kind.
    Type,
    /// An operator was applied to operands of incompatible types.
    Unsupported,
    /// An attempt to shrink a fixed-size container.
    FixedSize,
    /// A position lies outside the container.
    Index,
    /// A searched-for element is absent.
    NotFound,
}

impl Error {
    pub(crate) fn new<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    /// Creates an error for an integer outside the domain of a type.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, msg.into())
    }

    pub(crate) fn length(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Length, msg.into())
    }

    pub(crate) fn type_(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Type, msg.into())
    }

    /// Creates an error for an operator applied to incompatible operands.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, msg.into())
    }

    /// Creates an error for an attempt to shrink a fixed-size container.
    pub fn fixed_size(what: &str) -> Self {
        Self::new(ErrorKind::FixedSize, format!("{what} memory size is fixed"))
    }

    pub(crate) fn index(index: usize, len: usize) -> Self {
        Self::new(
            ErrorKind::Index,
            format!("index {index} is out of range for length {len}"),
        )
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg.into())
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Range => f.write_str("range error"),
            ErrorKind::Length => f.write_str("length error"),
            ErrorKind::Type => f.write_str("type error"),
            ErrorKind::Unsupported => f.write_str("unsupported operation"),
            ErrorKind::FixedSize => f.write_str("fixed size error"),
            ErrorKind::Index => f.write_str("index error"),
            ErrorKind::NotFound => f.write_str("not found"),
        }?;

        if let Some(source) = self.source.as_ref() {
            write!(f, " caused by: {source}")?;
        }

        Ok(())
    }
}

impl From<Infallible> for Error {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_source() {
        let err = Error::range("a byte unit only accepts integer from 0 to 255, not 256");

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err.to_string(),
            "range error caused by: a byte unit only accepts integer from 0 to 255, not 256"
        );
    }

    #[test]
    fn test_fixed_size_error() {
        let err = Error::fixed_size("byte unit");

        assert_eq!(err.kind(), ErrorKind::FixedSize);
        assert!(err.to_string().ends_with("byte unit memory size is fixed"));
    }
}
