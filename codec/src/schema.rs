//! Shapes of the compiled schema and their per-shape entry points.
//!
//! Each shape is a plain value type implementing [`Write`](crate::Write),
//! [`Read`](crate::Read) and [`EncodeSize`](crate::EncodeSize). Its module also exposes a
//! `<name>_encode` / `<name>_decode` pair returning a signed byte count.

pub mod c_source;
pub mod programming_types;
