//! This crate decodes the variable-length integers (_varints_) and field tags
//! used by the [Protocol Buffers][protobuf] wire format.
//!
//! # Usage
//!
//! The main functions operate on a byte slice and report failures through
//! their return values, without allocating or panicking:
//!
//! ```
//! use pbvarint::{decode_tag, decode_varint, varint_size};
//!
//! // Field 1 with wire type VARINT, followed by the value 150.
//! let buf = [0x08, 0x96, 0x01];
//!
//! let (field_number, wire_type, len) = decode_tag(&buf);
//! assert_eq!((field_number, wire_type, len), (1, 0, 1));
//!
//! let (value, len) = decode_varint(&buf[1..]);
//! assert_eq!((value, len), (150, 2));
//! assert_eq!(varint_size(value), len);
//! ```
//!
//! [`decode_varint`] returns a zero length if the slice ends before the end
//! of the varint and a negative length if the value does not fit in 64 bits.
//! [`decode_tag`] returns all zeros if the tag could not be decoded.
//!
//! The `try_` variants return a [`DecodeError`] instead, which distinguishes
//! these cases:
//!
//! ```
//! use pbvarint::{try_decode_tag, ErrorKind, Tag, WireType};
//!
//! assert_eq!(try_decode_tag(&[0x29]), Ok((Tag::new(5, WireType::I64), 1)));
//!
//! let err = try_decode_tag(&[0x82]).unwrap_err();
//! assert!(err.is_incomplete());
//!
//! let err = try_decode_tag(&[0x2e]).unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::InvalidWireType(6));
//! ```
//!
//! # Features
//!
//! - `tracing`: Emit a `trace` event via the [tracing] crate when one of the
//!   `try_` functions rejects its input.
//!
//! [protobuf]: https://protobuf.dev/programming-guides/encoding/
//! [tracing]: https://docs.rs/tracing

// This is a crate for parsing potentially untrusted data, so it is preferable
// to avoid unsafe code.
#![forbid(unsafe_code)]

mod errors;
mod hint;
mod size;
mod tag;
mod varint;

pub use errors::{DecodeError, ErrorKind};
pub use size::{
    varint_size, MAX_LEN_64, MAX_VAL_1, MAX_VAL_2, MAX_VAL_3, MAX_VAL_4, MAX_VAL_5, MAX_VAL_6,
    MAX_VAL_7, MAX_VAL_8, MAX_VAL_9,
};
pub use tag::{decode_tag, try_decode_tag, Tag, WireType};
pub use varint::{decode_varint, try_decode_varint};
