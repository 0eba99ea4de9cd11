//! Tagged choices and enumerations.
//!
//! A choice is written as a one-byte tag followed by the payload of the selected alternative.
//! The tag of the alternative at ordinal `i` (in declaration order) is `0x80 + i`.
//!
//! An enumerated value is written as a single byte holding the ordinal of the enumerant in
//! declaration order.

/// Tag of the first alternative of a choice.
pub const TAG_BASE: u8 = 0x80;

/// Returns the tag of the alternative at `ordinal`.
pub const fn tag(ordinal: u8) -> u8 {
    TAG_BASE + ordinal
}

/// Returns the ordinal selected by `tag`, if `tag` is in the range of a choice with `count`
/// alternatives.
pub const fn ordinal(tag: u8, count: u8) -> Option<u8> {
    if tag >= TAG_BASE && tag - TAG_BASE < count {
        Some(tag - TAG_BASE)
    } else {
        None
    }
}

/// An enumeration encoded as the ordinal of its enumerant.
pub trait Enumerated: Sized + Copy {
    /// Number of enumerants.
    const COUNT: u8;

    /// Returns the ordinal of this enumerant.
    fn ordinal(self) -> u8;

    /// Returns the enumerant at `ordinal`, if any.
    fn from_ordinal(ordinal: u8) -> Option<Self>;
}

/// Declares a fieldless enum with consecutive ordinals and implements [`Enumerated`] and the
/// codec traits for it.
///
/// The first enumerant is the [`Default`]. An unknown ordinal fails to decode with
/// [`Error::BadChoice`](crate::Error::BadChoice).
macro_rules! enumerated {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])* $first:ident
            $(, $(#[$rest_meta:meta])* $rest:ident)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
        #[repr(u8)]
        $vis enum $name {
            $(#[$first_meta])* $first,
            $($(#[$rest_meta])* $rest,)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl $crate::types::choice::Enumerated for $name {
            const COUNT: u8 = [Self::$first $(, Self::$rest)*].len() as u8;

            #[inline]
            fn ordinal(self) -> u8 {
                self as u8
            }

            #[inline]
            fn from_ordinal(ordinal: u8) -> Option<Self> {
                [Self::$first $(, Self::$rest)*]
                    .into_iter()
                    .find(|value| *value as u8 == ordinal)
            }
        }

        impl $crate::Write for $name {
            #[inline]
            fn write(
                &self,
                encoder: &mut $crate::cursor::Encoder<'_>,
            ) -> Result<(), $crate::Error> {
                encoder.put_u8($crate::types::choice::Enumerated::ordinal(*self))
            }
        }

        impl $crate::Read for $name {
            #[inline]
            fn read(decoder: &mut $crate::cursor::Decoder<'_>) -> Result<Self, $crate::Error> {
                let ordinal = decoder.get_u8()?;
                <Self as $crate::types::choice::Enumerated>::from_ordinal(ordinal)
                    .ok_or_else(|| decoder.abort($crate::Error::BadChoice(ordinal)))
            }
        }

        impl $crate::FixedSize for $name {
            const SIZE: usize = 1;
        }
    };
}
pub(crate) use enumerated;
