//! Decode Protocol Buffers field tags.
//!
//! Each field in a message starts with a tag, which is a varint with the
//! value `(field_number << 3) | wire_type`. The wire type determines how the
//! field value which follows the tag is encoded.
//!
//! See <https://protobuf.dev/programming-guides/encoding/#structure>.

use std::fmt::{Display, Formatter};

use crate::errors::{DecodeError, ErrorKind};
use crate::varint::decode_varint;

/// Physical encoding of a field value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// Integer value encoded as a varint.
    Varint = 0,

    /// 64-bit fixed-width value.
    I64 = 1,

    /// A variable-length value with a size specified in bytes.
    Len = 2,

    /// Deprecated start-of-group type.
    SGroup = 3,

    /// Deprecated end-of-group type.
    EGroup = 4,

    /// 32-bit fixed-width value.
    I32 = 5,
}

impl WireType {
    /// Return true if this is one of the deprecated group markers.
    pub fn is_group(self) -> bool {
        matches!(self, Self::SGroup | Self::EGroup)
    }
}

impl TryFrom<u8> for WireType {
    type Error = ErrorKind;

    fn try_from(val: u8) -> Result<Self, ErrorKind> {
        let wire_type = match val {
            0 => Self::Varint,
            1 => Self::I64,
            2 => Self::Len,
            3 => Self::SGroup,
            4 => Self::EGroup,
            5 => Self::I32,
            _ => return Err(ErrorKind::InvalidWireType(val)),
        };
        Ok(wire_type)
    }
}

impl Display for WireType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Varint => "VARINT",
            Self::I64 => "I64",
            Self::Len => "LEN",
            Self::SGroup => "SGROUP",
            Self::EGroup => "EGROUP",
            Self::I32 => "I32",
        };
        write!(f, "{}", name)
    }
}

/// Field number and wire type of a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub field_number: u64,
    pub wire_type: WireType,
}

impl Tag {
    pub fn new(field_number: u64, wire_type: WireType) -> Self {
        Self {
            field_number,
            wire_type,
        }
    }

    /// Return the varint value which encodes this tag.
    ///
    /// Field numbers that do not fit in 61 bits are truncated.
    pub fn to_raw(self) -> u64 {
        (self.field_number << 3) | self.wire_type as u64
    }
}

/// Decode a field tag from the start of `buf`.
///
/// Returns a `(field_number, wire_type, consumed)` tuple, where `consumed` is
/// the length of the tag in bytes. All three values are zero if the tag could
/// not be decoded, either because `buf` ended early, the varint overflowed or
/// the tag has a zero field number or a wire type greater than 5.
///
/// Use [`try_decode_tag`] to distinguish between these cases.
#[inline]
pub fn decode_tag(buf: &[u8]) -> (i64, u8, i32) {
    let (tag, consumed) = decode_varint(buf);
    if consumed <= 0 {
        return (0, 0, 0);
    }

    let wire_type = (tag & 0x07) as u8;
    let field_number = (tag >> 3) as i64;
    if field_number <= 0 || wire_type > WireType::I32 as u8 {
        return (0, 0, 0);
    }

    (field_number, wire_type, consumed)
}

/// Decode a field tag from the start of `buf`, returning the tag and its
/// length in bytes.
///
/// This is a variant of [`decode_tag`] which reports the reason for a
/// failure. [`DecodeError::is_incomplete`] can be used to decide whether
/// decoding should be retried with more data.
pub fn try_decode_tag(buf: &[u8]) -> Result<(Tag, usize), DecodeError> {
    let (tag, consumed) = decode_varint(buf);
    let len = match consumed {
        0 => return Err(DecodeError::new(ErrorKind::Incomplete, buf.len()).traced("tag")),
        n if n < 0 => {
            return Err(DecodeError::new(ErrorKind::Overflow, (-n - 1) as usize).traced("tag"));
        }
        n => n as usize,
    };

    let field_number = tag >> 3;
    if field_number == 0 {
        return Err(DecodeError::new(ErrorKind::InvalidFieldNumber, len).traced("tag"));
    }
    let wire_type = WireType::try_from((tag & 0x07) as u8)
        .map_err(|kind| DecodeError::new(kind, len).traced("tag"))?;

    Ok((Tag::new(field_number, wire_type), len))
}

/// Encode a tag with the given field number and raw wire type.
#[cfg(test)]
pub fn encode_tag(field_number: u64, wire_type: u8) -> Vec<u8> {
    crate::varint::encode_varint((field_number << 3) | wire_type as u64)
}
