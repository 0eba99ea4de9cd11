//! Codec implementations for Rust primitive types.
//!
//! Every primitive has a fixed width on the wire and no length prefix:
//! - Integers are written big-endian. Signed integers share the two's-complement bit pattern of
//!   the unsigned integer of the same width.
//! - `f32` and `f64` are written as their IEEE-754 bit pattern, without NaN canonicalisation.
//! - `bool` is a single byte: `0xFF` for `true` and `0x00` for `false`. Any nonzero byte decodes
//!   to `true`.
//! - `[u8; N]` (an OCTET STRING of fixed size) is written verbatim.
//! - `()` (NULL) occupies no bytes.

use crate::{
    cursor::{Decoder, Encoder},
    Error, FixedSize, Read, Write,
};
use paste::paste;

// Numeric types implementation
macro_rules! impl_numeric {
    ($($type:ty),*) => {
        paste! {
            $(
                impl Write for $type {
                    #[inline]
                    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
                        encoder.[<put_ $type>](*self)
                    }
                }

                impl Read for $type {
                    #[inline]
                    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
                        decoder.[<get_ $type>]()
                    }
                }

                impl FixedSize for $type {
                    const SIZE: usize = std::mem::size_of::<$type>();
                }
            )*
        }
    };
}

impl_numeric!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        encoder.put_bool(*self)
    }
}

impl Read for bool {
    #[inline]
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        decoder.get_bool()
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

// Constant-size array implementation
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        encoder.put_slice(self)
    }
}

impl<const N: usize> Read for [u8; N] {
    #[inline]
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        let mut dst = [0; N];
        decoder.get_slice(&mut dst)?;
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}

// Null implementation
impl Write for () {
    #[inline]
    fn write(&self, _: &mut Encoder<'_>) -> Result<(), Error> {
        Ok(())
    }
}

impl Read for () {
    #[inline]
    fn read(_: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(())
    }
}

impl FixedSize for () {
    const SIZE: usize = 0;
}
