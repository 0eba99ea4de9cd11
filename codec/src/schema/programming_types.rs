//! Single-field shapes of the `Programming-Types` module, one per primitive.

use crate::{
    cursor::{Decoder, Encoder},
    entry::entry_points,
    Error, FixedSize, Read, Write,
};

// Declares a wrapper holding one primitive `value` and implements the codec traits for it.
macro_rules! wrappers {
    ($($(#[$meta:meta])* $name:ident($type:ty)),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq)]
            #[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
            pub struct $name {
                pub value: $type,
            }

            impl From<$type> for $name {
                fn from(value: $type) -> Self {
                    Self { value }
                }
            }

            impl Write for $name {
                #[inline]
                fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
                    self.value.write(encoder)
                }
            }

            impl Read for $name {
                #[inline]
                fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
                    Ok(Self {
                        value: <$type>::read(decoder)?,
                    })
                }
            }

            impl FixedSize for $name {
                const SIZE: usize = <$type>::SIZE;
            }
        )*
    };
}

wrappers! {
    /// `BOOLEAN`
    Bool(bool),
    /// `REAL` as an IEEE-754 double
    Double(f64),
    /// `REAL` as an IEEE-754 single
    Float(f32),
    /// `INTEGER (-32768..32767)`
    Int16(i16),
    /// `INTEGER (-2147483648..2147483647)`
    Int32(i32),
    /// `INTEGER (-9223372036854775808..9223372036854775807)`
    Int64(i64),
    /// `INTEGER (-128..127)`
    Int8(i8),
    /// `INTEGER (0..65535)`
    Uint16(u16),
    /// `INTEGER (0..4294967295)`
    Uint32(u32),
    /// `INTEGER (0..18446744073709551615)`
    Uint64(u64),
    /// `INTEGER (0..255)`
    Uint8(u8),
}

entry_points! {
    bool => Bool,
    double => Double,
    float => Float,
    int16 => Int16,
    int32 => Int32,
    int64 => Int64,
    int8 => Int8,
    uint16 => Uint16,
    uint32 => Uint32,
    uint64 => Uint64,
    uint8 => Uint8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ENOMEM, EOUTOFDATA};
    use paste::paste;

    macro_rules! impl_wrapper_test {
        ($name:ident, $shape:ident, $type:ty) => {
            paste! {
                #[test]
                fn [<test_ $name>]() {
                    let values: [$type; 4] =
                        [0 as $type, 1 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values {
                        let size = std::mem::size_of::<$type>();
                        let mut buf = [0u8; 8];
                        assert_eq!([<$name _encode>](&mut buf, &$shape::from(value)), size as isize);
                        assert_eq!(&buf[..size], &value.to_be_bytes()[..]);
                        assert_eq!($shape::SIZE, size);

                        let mut decoded = $shape::default();
                        assert_eq!([<$name _decode>](&mut decoded, &buf[..size]), size as isize);
                        assert_eq!(decoded.value, value);

                        assert_eq!(
                            [<$name _encode>](&mut buf[..size - 1], &$shape::from(value)),
                            -ENOMEM
                        );
                        assert_eq!(
                            [<$name _decode>](&mut decoded, &buf[..size - 1]),
                            -EOUTOFDATA
                        );
                    }
                }
            }
        };
    }
    impl_wrapper_test!(double, Double, f64);
    impl_wrapper_test!(float, Float, f32);
    impl_wrapper_test!(int16, Int16, i16);
    impl_wrapper_test!(int32, Int32, i32);
    impl_wrapper_test!(int64, Int64, i64);
    impl_wrapper_test!(int8, Int8, i8);
    impl_wrapper_test!(uint16, Uint16, u16);
    impl_wrapper_test!(uint32, Uint32, u32);
    impl_wrapper_test!(uint64, Uint64, u64);
    impl_wrapper_test!(uint8, Uint8, u8);

    #[test]
    fn test_bool() {
        let mut buf = [0u8; 1];
        assert_eq!(bool_encode(&mut buf, &Bool::from(true)), 1);
        assert_eq!(buf, [0xFF]);
        assert_eq!(bool_encode(&mut buf, &Bool::from(false)), 1);
        assert_eq!(buf, [0x00]);

        let mut decoded = Bool::default();
        assert_eq!(bool_decode(&mut decoded, &[0x2A]), 1);
        assert!(decoded.value);
        assert_eq!(bool_decode(&mut decoded, &[]), -EOUTOFDATA);
        assert_eq!(bool_encode(&mut [], &Bool::from(true)), -ENOMEM);
    }
}
