//! Per-shape entry points.
//!
//! Every shape gets an `<name>_encode` and an `<name>_decode` function. Both return a signed
//! byte count: non-negative on success (bytes produced or consumed) and the negated
//! [`Error::code`] on failure, so success is told apart from failure by sign alone.

use crate::{Decode, Encode, Error};
use tracing::{debug, trace};

/// Encodes `src` into `dst` on behalf of the entry point for `shape`.
pub(crate) fn encode<T: Encode>(shape: &'static str, dst: &mut [u8], src: &T) -> isize {
    settle(shape, "encode", src.encode(dst))
}

/// Decodes `src` into `dst` on behalf of the entry point for `shape`.
///
/// `dst` is only written if decoding succeeds.
pub(crate) fn decode<T: Decode>(shape: &'static str, dst: &mut T, src: &[u8]) -> isize {
    let result = T::decode(src).map(|(value, len)| {
        *dst = value;
        len
    });
    settle(shape, "decode", result)
}

fn settle(shape: &'static str, op: &'static str, result: Result<usize, Error>) -> isize {
    match result {
        Ok(len) => {
            trace!(shape, op, len, "codec call succeeded");

            // Slices never hold more than `isize::MAX` bytes.
            len as isize
        }
        Err(err) => {
            debug!(shape, op, code = err.code(), %err, "codec call failed");
            -err.code()
        }
    }
}

/// Generates the `<name>_encode` and `<name>_decode` entry points for each `name => Shape`.
macro_rules! entry_points {
    ($($name:ident => $shape:ty),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Encodes a [`", stringify!($shape), "`] into `dst`.")]
                #[doc = ""]
                #[doc = "Returns the number of bytes written, or the negated error code."]
                pub fn [<$name _encode>](dst: &mut [u8], src: &$shape) -> isize {
                    $crate::entry::encode(stringify!($name), dst, src)
                }

                #[doc = concat!("Decodes a [`", stringify!($shape), "`] from `src` into `dst`.")]
                #[doc = ""]
                #[doc = "Returns the number of bytes consumed, or the negated error code."]
                pub fn [<$name _decode>](dst: &mut $shape, src: &[u8]) -> isize {
                    $crate::entry::decode(stringify!($name), dst, src)
                }
            )*
        }
    };
}
pub(crate) use entry_points;
