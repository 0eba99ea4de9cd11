//! Codec implementations for the building blocks of a schema: primitives, bounded sequences,
//! tagged choices and enumerations.

pub mod choice;
pub mod primitives;
pub mod sequence;
