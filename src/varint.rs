//! Decode varints from byte slices.
//!
//! Variable length integers (_varints_) are the default encoding of integers
//! in Protocol Buffers messages, including field tags and numbers. Each byte
//! holds 7 value bits in its low bits, least significant group first, and a
//! continuation bit in its high bit. The last byte of a varint has the
//! continuation bit clear.
//!
//! See <https://protobuf.dev/programming-guides/encoding/#varints>.

use crate::errors::{DecodeError, ErrorKind};
use crate::hint::{likely, unlikely};
use crate::size::MAX_LEN_64;

/// Decode a varint value of up to 64 bits from the start of `buf`.
///
/// Returns a `(value, consumed)` tuple. At most [`MAX_LEN_64`] bytes are
/// read from `buf`. Any bytes after the end of the varint are ignored.
///
/// - If `consumed > 0`, decoding succeeded and `consumed` is the length of
///   the varint in bytes.
/// - If `consumed == 0`, `buf` ended before the varint was complete. The
///   value is zero.
/// - If `consumed < 0`, the varint does not fit in 64 bits. The value is
///   zero and `-consumed` is one more than the number of bytes examined.
#[inline]
pub fn decode_varint(buf: &[u8]) -> (u64, i32) {
    if let Some(&byte) = buf.first() {
        if likely(byte & 0x80 == 0) {
            return (byte as u64, 1);
        }
    }

    let mut value = 0;
    let len = buf.len().min(MAX_LEN_64);

    for i in 0..len {
        let byte = buf[i];
        let last_byte = i == MAX_LEN_64 - 1;

        if byte & 0x80 == 0 {
            // Only one value bit from the last byte may be used.
            if unlikely(last_byte && byte > 0x01) {
                return (0, -(i as i32 + 2));
            }
            value |= (byte as u64) << (7 * i);
            return (value, i as i32 + 1);
        }

        if unlikely(last_byte) {
            return (0, -(i as i32 + 2));
        }
        value |= ((byte & 0x7f) as u64) << (7 * i);
    }

    (0, 0)
}

/// Decode a varint value from the start of `buf`, returning the value and
/// its length in bytes.
///
/// This is a variant of [`decode_varint`] which reports failures as a
/// [`DecodeError`].
pub fn try_decode_varint(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    match decode_varint(buf) {
        (value, consumed) if consumed > 0 => Ok((value, consumed as usize)),
        (_, 0) => Err(DecodeError::new(ErrorKind::Incomplete, buf.len()).traced("varint")),
        (_, consumed) => Err(
            DecodeError::new(ErrorKind::Overflow, (-consumed - 1) as usize).traced("varint"),
        ),
    }
}

/// Encode `val` as a varint.
#[cfg(test)]
pub fn encode_varint(mut val: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(MAX_LEN_64);

    loop {
        let byte = (val & 0x7f) as u8;
        if val <= 0x7f {
            bytes.push(byte);
            break;
        }
        bytes.push(byte | 0x80);
        val >>= 7;
    }

    bytes
}
