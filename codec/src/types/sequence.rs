//! Bounded sequences (`SEQUENCE SIZE (..) OF T`).
//!
//! A sequence is written as a quantity-determinant prefix followed by its elements in order.
//! The prefix is two bytes: the length of the quantity field (always `0x01`) and then the
//! quantity itself. Elements are stored inline in a fixed-capacity array, so neither encoding
//! nor decoding allocates.

use crate::{
    cursor::{Decoder, Encoder},
    EncodeSize, Error, Read, Write,
};
use std::fmt;

/// Length of the quantity field, written before every quantity.
pub const QUANTITY_LEN: u8 = 0x01;

/// Size of the quantity-determinant prefix.
pub const PREFIX_SIZE: usize = 2;

/// Writes the quantity-determinant prefix for a sequence of `len` elements.
pub fn write_quantity(encoder: &mut Encoder<'_>, len: u8) -> Result<(), Error> {
    encoder.put_u8(QUANTITY_LEN)?;
    encoder.put_u8(len)
}

/// Reads a quantity-determinant prefix, failing with [`Error::BadLength`] if the quantity
/// exceeds `max` or the prefix is malformed.
pub fn read_quantity(decoder: &mut Decoder<'_>, max: usize) -> Result<usize, Error> {
    let quantity_len = decoder.get_u8()?;
    if quantity_len != QUANTITY_LEN {
        return Err(decoder.abort(Error::BadLength(quantity_len as usize)));
    }
    let len = decoder.get_u8()? as usize;
    if len > max {
        return Err(decoder.abort(Error::BadLength(len)));
    }
    Ok(len)
}

/// A sequence of at most `N` elements, stored inline.
///
/// Elements `[0, len)` are defined. Slots past `len` hold `T::default()` and are never
/// encoded or compared.
#[derive(Clone, Copy)]
pub struct BoundedVec<T, const N: usize> {
    len: u8,
    items: [T; N],
}

impl<T, const N: usize> BoundedVec<T, N> {
    // The quantity is a single byte on the wire.
    const CAPACITY_FITS: () = assert!(N <= u8::MAX as usize, "capacity exceeds 255");

    /// The maximum number of elements.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no more elements can be pushed.
    pub fn is_full(&self) -> bool {
        self.len() == N
    }

    /// The defined elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len()]
    }

    /// The defined elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        &mut self.items[..len]
    }

    /// Iterates over the defined elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Appends an element, handing it back if the sequence is full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items[self.len()] = item;
        self.len += 1;
        Ok(())
    }

    /// Removes all elements. Slots keep their previous values until overwritten.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Default, const N: usize> BoundedVec<T, N> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_FITS;
        Self {
            len: 0,
            items: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default + Clone, const N: usize> BoundedVec<T, N> {
    /// Creates a sequence holding a copy of `items`, or `None` if there are more than `N`.
    pub fn from_slice(items: &[T]) -> Option<Self> {
        if items.len() > N {
            return None;
        }
        let mut vec = Self::new();
        vec.items[..items.len()].clone_from_slice(items);
        vec.len = items.len() as u8;
        Some(vec)
    }
}

impl<T: Default, const N: usize> Default for BoundedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for BoundedVec<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Write, const N: usize> Write for BoundedVec<T, N> {
    #[inline]
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        write_quantity(encoder, self.len)?;
        for item in self {
            item.write(encoder)?;
        }
        Ok(())
    }
}

impl<T: EncodeSize, const N: usize> EncodeSize for BoundedVec<T, N> {
    #[inline]
    fn encode_size(&self) -> usize {
        PREFIX_SIZE + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<T: Read + Default, const N: usize> Read for BoundedVec<T, N> {
    #[inline]
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = read_quantity(decoder, N)?;
        let mut vec = Self::new();
        for slot in vec.items[..len].iter_mut() {
            *slot = T::read(decoder)?;
        }
        vec.len = len as u8;
        Ok(vec)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a, T, const N: usize> arbitrary::Arbitrary<'a> for BoundedVec<T, N>
where
    T: arbitrary::Arbitrary<'a> + Default,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=N)?;
        let mut vec = Self::new();
        for slot in vec.items[..len].iter_mut() {
            *slot = T::arbitrary(u)?;
        }
        vec.len = len as u8;
        Ok(vec)
    }
}

/// A sequence of exactly `N` elements.
///
/// Written with the same prefix as [`BoundedVec`]; any quantity other than `N` is rejected on
/// decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedSeq<T, const N: usize>(pub [T; N]);

impl<T: Default, const N: usize> Default for FixedSeq<T, N> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T: Write, const N: usize> Write for FixedSeq<T, N> {
    #[inline]
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        #[allow(clippy::let_unit_value)]
        let () = BoundedVec::<T, N>::CAPACITY_FITS;
        write_quantity(encoder, N as u8)?;
        for item in &self.0 {
            item.write(encoder)?;
        }
        Ok(())
    }
}

impl<T: EncodeSize, const N: usize> EncodeSize for FixedSeq<T, N> {
    #[inline]
    fn encode_size(&self) -> usize {
        PREFIX_SIZE + self.0.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<T: Read + Default, const N: usize> Read for FixedSeq<T, N> {
    #[inline]
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = read_quantity(decoder, N)?;
        if len != N {
            return Err(decoder.abort(Error::BadLength(len)));
        }
        let mut seq = Self::default();
        for slot in seq.0.iter_mut() {
            *slot = T::read(decoder)?;
        }
        Ok(seq)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a, T, const N: usize> arbitrary::Arbitrary<'a> for FixedSeq<T, N>
where
    T: arbitrary::Arbitrary<'a> + Default,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut seq = Self::default();
        for slot in seq.0.iter_mut() {
            *slot = T::arbitrary(u)?;
        }
        Ok(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_push_until_full() {
        let mut vec = BoundedVec::<u8, 2>::new();
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 2);
        assert_eq!(vec.push(1), Ok(()));
        assert_eq!(vec.push(2), Ok(()));
        assert!(vec.is_full());
        assert_eq!(vec.push(3), Err(3));
        assert_eq!(vec.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(BoundedVec::<u8, 2>::from_slice(&[1, 2, 3]), None);
        let vec = BoundedVec::<u8, 4>::from_slice(&[7, 8]).unwrap();
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.iter().copied().collect::<Vec<_>>(), vec![7, 8]);
    }

    #[test]
    fn test_eq_ignores_stale_slots() {
        let mut a = BoundedVec::<u8, 3>::from_slice(&[1, 2, 3]).unwrap();
        a.clear();
        a.push(1).unwrap();
        let b = BoundedVec::<u8, 3>::from_slice(&[1]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vec() {
        for items in [&[][..], &[1u16][..], &[1u16, 2, 3][..]] {
            let value = BoundedVec::<u16, 3>::from_slice(items).unwrap();
            let mut buf = [0u8; 8];
            let len = value.encode(&mut buf).unwrap();
            assert_eq!(len, 2 + 2 * items.len());
            assert_eq!(len, value.encode_size());
            assert_eq!(&buf[..2], &[0x01, items.len() as u8]);
            assert_eq!(BoundedVec::<u16, 3>::decode(&buf[..len]), Ok((value, len)));
        }
    }

    #[test]
    fn test_vec_over_capacity() {
        // Rejected before any element is read
        let buf = [0x01, 0x03];
        assert_eq!(
            BoundedVec::<u8, 2>::decode(&buf),
            Err(Error::BadLength(3))
        );
    }

    #[test]
    fn test_bad_quantity_len() {
        let buf = [0x02, 0x00, 0x01];
        assert_eq!(
            BoundedVec::<u8, 2>::decode(&buf),
            Err(Error::BadLength(2))
        );
    }

    #[test]
    fn test_vec_truncated() {
        assert_eq!(BoundedVec::<u8, 2>::decode(&[]), Err(Error::OutOfData));
        assert_eq!(BoundedVec::<u8, 2>::decode(&[0x01]), Err(Error::OutOfData));
        assert_eq!(
            BoundedVec::<u8, 2>::decode(&[0x01, 0x02, 0xAA]),
            Err(Error::OutOfData)
        );
    }

    #[test]
    fn test_vec_of_null() {
        let value = BoundedVec::<(), 4>::from_slice(&[(), (), ()]).unwrap();
        let mut buf = [0u8; 2];
        assert_eq!(value.encode(&mut buf), Ok(2));
        assert_eq!(buf, [0x01, 0x03]);
        assert_eq!(BoundedVec::<(), 4>::decode(&buf), Ok((value, 2)));
        assert_eq!(
            BoundedVec::<(), 4>::decode(&[0x01, 0x05]),
            Err(Error::BadLength(5))
        );
    }

    #[test]
    fn test_fixed_seq() {
        let value = FixedSeq([true]);
        let mut buf = [0u8; 3];
        assert_eq!(value.encode(&mut buf), Ok(3));
        assert_eq!(buf, [0x01, 0x01, 0xFF]);
        assert_eq!(value.encode_size(), 3);
        assert_eq!(FixedSeq::<bool, 1>::decode(&buf), Ok((value, 3)));

        // Quantity must be exactly one
        assert_eq!(
            FixedSeq::<bool, 1>::decode(&[0x01, 0x00]),
            Err(Error::BadLength(0))
        );
        assert_eq!(
            FixedSeq::<bool, 1>::decode(&[0x01, 0x02, 0xFF, 0xFF]),
            Err(Error::BadLength(2))
        );
    }
}
