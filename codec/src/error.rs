//! Error types for codec operations
//!
//! Every error maps to a stable, positive code. Entry points report failure by returning the
//! negated code, so callers that only keep the integer can still tell the error kinds apart.

use thiserror::Error;

/// Code reported when an encode would run past the end of the destination buffer.
pub const ENOMEM: isize = 12;

/// Code reported when a decode would run past the end of the source buffer.
pub const EOUTOFDATA: isize = 270;

/// Code reported for an unknown choice tag or enumerated ordinal.
pub const EBADCHOICE: isize = 280;

/// Code reported for a sequence length outside the schema bounds.
pub const EBADLENGTH: isize = 290;

/// Error type for codec operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("buffer capacity exceeded")]
    CapacityExceeded,
    #[error("unexpected end of buffer")]
    OutOfData,
    #[error("bad choice: {0:#04x}")]
    BadChoice(u8), // offending tag or ordinal
    #[error("bad length: {0}")]
    BadLength(usize), // offending length byte
}

impl Error {
    /// Returns the stable, positive code of this error.
    pub const fn code(&self) -> isize {
        match self {
            Self::CapacityExceeded => ENOMEM,
            Self::OutOfData => EOUTOFDATA,
            Self::BadChoice(_) => EBADCHOICE,
            Self::BadLength(_) => EBADLENGTH,
        }
    }

    /// Maps a code (as returned by [`Error::code`]) back to its error kind.
    ///
    /// Diagnostic payloads are not recoverable from the code and are zeroed.
    pub const fn from_code(code: isize) -> Option<Self> {
        match code {
            ENOMEM => Some(Self::CapacityExceeded),
            EOUTOFDATA => Some(Self::OutOfData),
            EBADCHOICE => Some(Self::BadChoice(0)),
            EBADLENGTH => Some(Self::BadLength(0)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Error::CapacityExceeded.code(), 12);
        assert_eq!(Error::OutOfData.code(), 270);
        assert_eq!(Error::BadChoice(0x7F).code(), 280);
        assert_eq!(Error::BadLength(3).code(), 290);
    }

    #[test]
    fn test_from_code() {
        for err in [
            Error::CapacityExceeded,
            Error::OutOfData,
            Error::BadChoice(0),
            Error::BadLength(0),
        ] {
            assert_eq!(Error::from_code(err.code()), Some(err));
        }
        assert_eq!(Error::from_code(0), None);
        assert_eq!(Error::from_code(-ENOMEM), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::BadChoice(0x7F).to_string(), "bad choice: 0x7f");
        assert_eq!(Error::BadLength(11).to_string(), "bad length: 11");
    }
}
