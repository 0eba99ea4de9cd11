//! Encode and decode fixed-schema messages with ASN.1 Octet Encoding Rules (OER).
//!
//! # Overview
//!
//! A binary codec for a closed set of message shapes, designed to:
//! - Serialize values into a caller-supplied byte buffer, without allocating
//! - Deserialize untrusted bytes, rejecting anything that does not match the schema exactly
//! - Report failures as small, stable error codes
//!
//! Every legal value has exactly one wire form.
//!
//! # Wire Format
//!
//! - Integers: big-endian, fixed width, no length prefix
//! - Floats: IEEE-754 bit pattern, big-endian
//! - Booleans: `0xFF` for true and `0x00` for false (any nonzero byte decodes to true)
//! - Fixed-size octet strings: raw bytes
//! - Bounded sequences: `0x01`, then the element count as one byte, then the elements
//! - Choices: a tag byte (`0x80` + ordinal of the alternative), then its payload
//! - Enumerations: the ordinal of the enumerant as one byte
//! - Composites: the concatenation of their fields, in declaration order
//!
//! # Example
//!
//! Every shape has a pair of entry points returning a signed byte count, negated on failure:
//!
//! ```
//! use oer_codec::{
//!     error::{EBADCHOICE, ENOMEM},
//!     schema::c_source::{b_decode, b_encode, B},
//! };
//!
//! let mut buf = [0u8; 8];
//! assert_eq!(b_encode(&mut buf, &B::A(7)), 2);
//! assert_eq!(&buf[..2], &[0x80, 0x07]);
//!
//! let mut decoded = B::default();
//! assert_eq!(b_decode(&mut decoded, &buf[..2]), 2);
//! assert_eq!(decoded, B::A(7));
//!
//! // Failures are reported by sign
//! assert_eq!(b_encode(&mut buf[..1], &B::A(7)), -ENOMEM);
//! assert_eq!(b_decode(&mut decoded, &[0x7F]), -EBADCHOICE);
//! ```
//!
//! The same shapes can be driven through the [`Encode`] and [`Decode`] traits, which return a
//! [`Result`] instead:
//!
//! ```
//! use oer_codec::{schema::c_source::G, Decode, Encode, EncodeSize, Error};
//!
//! let value = G { a: true, ..G::default() };
//! let mut buf = [0u8; 9];
//! assert_eq!(value.encode(&mut buf), Ok(value.encode_size()));
//! assert_eq!(G::decode(&buf), Ok((value, 9)));
//! assert_eq!(G::decode(&buf[..8]), Err(Error::OutOfData));
//! ```

pub mod codec;
pub mod cursor;
mod entry;
pub mod error;
pub mod schema;
pub mod types;

// Re-export main types and traits
pub use codec::{Decode, Encode, EncodeSize, FixedSize, Read, Write};
pub use cursor::{Decoder, Encoder};
pub use error::Error;
pub use types::{
    choice::Enumerated,
    sequence::{BoundedVec, FixedSeq},
};
