//! Write and read cursors over caller-supplied byte slices.
//!
//! A cursor only moves forward. Every typed operation is expressed in terms of a single bounds
//! check ([`Encoder::alloc`] or [`Decoder::consume`]), and the first failure is sticky: once a
//! cursor has failed, every later operation returns the same error and leaves the buffer
//! untouched.
//!
//! All multi-byte values are big-endian. Floats travel as their IEEE-754 bit pattern. Booleans
//! are written as `0xFF` or `0x00`, and any nonzero byte reads back as `true`.

use crate::Error;
use bytes::{Buf, BufMut};
use paste::paste;

/// Byte written for `true`.
pub const TRUE: u8 = 0xFF;

/// Byte written for `false`.
pub const FALSE: u8 = 0x00;

// Stamps a typed `put_*` method for each numeric type on top of `alloc`.
macro_rules! impl_put {
    ($($type:ty),*) => {
        paste! {
            $(
                #[doc = concat!("Appends a big-endian `", stringify!($type), "`.")]
                #[inline]
                pub fn [<put_ $type>](&mut self, value: $type) -> Result<(), Error> {
                    let mut dst = self.alloc(std::mem::size_of::<$type>())?;
                    dst.[<put_ $type>](value);
                    Ok(())
                }
            )*
        }
    };
}

// Stamps a typed `get_*` method for each numeric type on top of `consume`.
macro_rules! impl_get {
    ($($type:ty),*) => {
        paste! {
            $(
                #[doc = concat!("Reads a big-endian `", stringify!($type), "`.")]
                #[inline]
                pub fn [<get_ $type>](&mut self) -> Result<$type, Error> {
                    let mut src = self.consume(std::mem::size_of::<$type>())?;
                    Ok(src.[<get_ $type>]())
                }
            )*
        }
    };
}

/// Write-cursor over a mutable byte buffer.
#[derive(Debug)]
pub struct Encoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
    error: Option<Error>,
}

impl<'a> Encoder<'a> {
    /// Creates an encoder that writes into `buf`, starting at offset zero.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            error: None,
        }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes that can still be written.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The sticky error, if the encoder has failed.
    pub fn error(&self) -> Option<Error> {
        self.error
    }

    /// Moves the encoder into the error state and returns the error that is now sticky.
    ///
    /// If the encoder has already failed, the first error is kept.
    pub fn abort(&mut self, err: Error) -> Error {
        *self.error.get_or_insert(err)
    }

    /// Reserves the next `n` bytes of the buffer and returns them for writing.
    ///
    /// Fails with [`Error::CapacityExceeded`] if fewer than `n` bytes remain.
    pub fn alloc(&mut self, n: usize) -> Result<&mut [u8], Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if n > self.remaining() {
            return Err(self.abort(Error::CapacityExceeded));
        }
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.buf[start..self.pos])
    }

    /// Appends `src` verbatim.
    pub fn put_slice(&mut self, src: &[u8]) -> Result<(), Error> {
        self.alloc(src.len())?.copy_from_slice(src);
        Ok(())
    }

    /// Appends a boolean as a single `0xFF` or `0x00` byte.
    #[inline]
    pub fn put_bool(&mut self, value: bool) -> Result<(), Error> {
        self.put_u8(if value { TRUE } else { FALSE })
    }

    impl_put!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

    /// Consumes the encoder, returning the number of bytes written or the sticky error.
    pub fn finish(self) -> Result<usize, Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.pos),
        }
    }
}

/// Read-cursor over an immutable byte buffer.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    error: Option<Error>,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder that reads from `buf`, starting at offset zero.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            error: None,
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes that can still be read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The sticky error, if the decoder has failed.
    pub fn error(&self) -> Option<Error> {
        self.error
    }

    /// Moves the decoder into the error state and returns the error that is now sticky.
    ///
    /// If the decoder has already failed, the first error is kept.
    pub fn abort(&mut self, err: Error) -> Error {
        *self.error.get_or_insert(err)
    }

    /// Consumes the next `n` bytes of the buffer and returns them.
    ///
    /// Fails with [`Error::OutOfData`] if fewer than `n` bytes remain.
    pub fn consume(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if n > self.remaining() {
            return Err(self.abort(Error::OutOfData));
        }
        let buf = self.buf;
        let start = self.pos;
        self.pos += n;
        Ok(&buf[start..self.pos])
    }

    /// Copies the next `dst.len()` bytes into `dst`.
    ///
    /// On failure `dst` is zero-filled.
    pub fn get_slice(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        match self.consume(dst.len()) {
            Ok(src) => {
                dst.copy_from_slice(src);
                Ok(())
            }
            Err(err) => {
                dst.fill(0);
                Err(err)
            }
        }
    }

    /// Reads a single-byte boolean. Any nonzero byte is `true`.
    #[inline]
    pub fn get_bool(&mut self) -> Result<bool, Error> {
        Ok(self.get_u8()? != FALSE)
    }

    impl_get!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

    /// Consumes the decoder, returning the number of bytes read or the sticky error.
    pub fn finish(self) -> Result<usize, Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.pos),
        }
    }
}
