//! Core codec traits and implementations

use crate::{
    cursor::{Decoder, Encoder},
    error::Error,
};

/// Trait for types that can be written (encoded) to an [`Encoder`].
pub trait Write {
    /// Encodes this value by appending to the encoder.
    ///
    /// Returns the encoder's sticky error on failure; nothing is written past the failing
    /// operation.
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error>;
}

/// Trait for types that can be read (decoded) from a [`Decoder`].
pub trait Read: Sized {
    /// Reads a value from the decoder, consuming exactly the bytes of its encoding.
    ///
    /// Returns the decoder's sticky error on failure.
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error>;
}

/// Trait for types that know the exact length of their encoding.
pub trait EncodeSize {
    /// Returns the encoded length of this value.
    ///
    /// This method MUST return the exact number of bytes that will be written by `write()`.
    fn encode_size(&self) -> usize;
}

/// Trait for types with a known, fixed encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

// Automatically implement `EncodeSize` for types with a known size.
impl<T: FixedSize> EncodeSize for T {
    #[inline]
    fn encode_size(&self) -> usize {
        T::SIZE
    }
}

/// Trait for types that can be encoded into a caller-supplied buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes this value into `buf`, returning the number of bytes written.
    ///
    /// Fails with [`Error::CapacityExceeded`] if `buf` is shorter than
    /// [`EncodeSize::encode_size`]. On failure, the contents of `buf` must not be used.
    ///
    /// (Provided method).
    fn encode(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let mut encoder = Encoder::new(buf);
        self.write(&mut encoder)?;
        encoder.finish()
    }
}

// Automatically implement `Encode` for types that implement `Write` and `EncodeSize`.
impl<T: Write + EncodeSize> Encode for T {}

/// Trait for types that can be decoded from a byte slice.
pub trait Decode: Read {
    /// Decodes a value from the front of `buf`, returning it along with the number of bytes
    /// consumed. Trailing bytes are left unread.
    ///
    /// (Provided method).
    fn decode(buf: &[u8]) -> Result<(Self, usize), Error> {
        let mut decoder = Decoder::new(buf);
        let value = Self::read(&mut decoder)?;
        Ok((value, decoder.finish()?))
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}
