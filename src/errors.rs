use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors returned by the checked decoding functions.
///
/// The raw functions ([`decode_varint`](crate::decode_varint),
/// [`decode_tag`](crate::decode_tag)) report the same conditions via their
/// integer return values.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeError {
    kind: ErrorKind,
    offset: usize,
}

impl DecodeError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the number of input bytes that were examined before the error
    /// was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return true if decoding failed only because the input ended early.
    ///
    /// Callers reading from a stream can retry once more data is available.
    /// All other errors indicate malformed input.
    pub fn is_incomplete(&self) -> bool {
        self.kind == ErrorKind::Incomplete
    }

    /// Emit a trace event for this error and return it.
    pub(crate) fn traced(self, context: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(context, kind = %self.kind, offset = self.offset, "rejected input");
        #[cfg(not(feature = "tracing"))]
        let _ = context;
        self
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} after {} bytes", self.kind, self.offset)
    }
}

impl Error for DecodeError {}

/// Enum describing the kind of a [`DecodeError`].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input ended before a byte with the continuation bit clear.
    Incomplete,

    /// The varint has more than 64 bits of value data.
    ///
    /// This is reported if the 10th byte has the continuation bit set, or
    /// uses more than the single value bit left over after 9 full bytes.
    Overflow,

    /// A field tag has a field number of zero.
    InvalidFieldNumber,

    /// A field tag has a wire type that is not defined.
    ///
    /// Protocol Buffers defines 6 wire types, but uses 3 bits to encode them.
    /// Hence there are two unused values.
    InvalidWireType(u8),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Incomplete => write!(f, "incomplete varint"),
            ErrorKind::Overflow => write!(f, "varint overflows 64 bits"),
            ErrorKind::InvalidFieldNumber => write!(f, "invalid field number"),
            ErrorKind::InvalidWireType(wire_type) => write!(f, "invalid wire type {}", wire_type),
        }
    }
}
