//! Properties every shape upholds, checked over hand-picked values.

use oer_codec::{
    error::{EBADCHOICE, EBADLENGTH, ENOMEM, EOUTOFDATA},
    schema::{c_source::*, programming_types::*},
    BoundedVec, Decode, Encode, EncodeSize, FixedSeq,
};
use std::fmt::Debug;
use test_case::test_case;

type EncodeFn<T> = fn(&mut [u8], &T) -> isize;
type DecodeFn<T> = fn(&mut T, &[u8]) -> isize;

/// Checks round-trip, determinism, capacity and truncation behavior for one value.
fn check<T>(value: &T, encode: EncodeFn<T>, decode: DecodeFn<T>)
where
    T: Encode + Decode + PartialEq + Debug + Default,
{
    let mut buf = [0u8; 1024];
    let len = encode(&mut buf, value);
    assert!(len >= 0, "encode failed with {len} for {value:?}");
    let len = len as usize;
    assert_eq!(len, value.encode_size());

    // Same value, same bytes
    let mut again = [0xA5u8; 1024];
    assert_eq!(encode(&mut again, value), len as isize);
    assert_eq!(buf[..len], again[..len]);

    // Bytes past the encoding are never touched
    assert!(again[len..].iter().all(|b| *b == 0xA5));

    let mut decoded = T::default();
    assert_eq!(decode(&mut decoded, &buf[..len]), len as isize);
    assert_eq!(&decoded, value);
    assert_eq!(T::decode(&buf[..len]), Ok((decoded, len)));

    for capacity in 0..len {
        assert_eq!(encode(&mut buf[..capacity], value), -ENOMEM, "capacity {capacity}");
    }

    let mut encoded = [0u8; 1024];
    assert_eq!(encode(&mut encoded, value), len as isize);
    for prefix in 0..len {
        let mut out = T::default();
        assert_eq!(decode(&mut out, &encoded[..prefix]), -EOUTOFDATA, "prefix {prefix}");
        assert_eq!(out, T::default());
    }
}

fn sample_a(seed: i8) -> A {
    A {
        a: seed,
        b: i16::MIN,
        c: i32::MAX,
        d: -1,
        e: u8::MAX,
        f: 0x1234,
        g: 0,
        h: u64::MAX,
        i: -0.5,
        j: f64::INFINITY,
        k: seed % 2 == 0,
        l: *b"hello world",
    }
}

fn sample_d_element(seed: u8) -> DElement {
    DElement {
        a: DA {
            b: if seed % 2 == 0 {
                DAB::C(seed)
            } else {
                DAB::D(seed % 3 == 0)
            },
            e: BoundedVec::from_slice(&[(); D_A_E_CAPACITY][..seed as usize % 5]).unwrap(),
        },
        g: DG {
            h: [DGH::I, DGH::J, DGH::K][seed as usize % 3],
            l: [seed, !seed],
        },
        m: DM {
            n: seed % 4 == 0,
            o: seed as i8,
            p: DMP {
                q: [seed; D_M_P_Q_SIZE],
                r: seed % 5 == 0,
            },
        },
    }
}

#[test]
fn a_properties() {
    check(&A::default(), a_encode, a_decode);
    check(&sample_a(-7), a_encode, a_decode);
}

#[test]
fn b_properties() {
    check(&B::A(i8::MIN), b_encode, b_decode);
    check(&B::B(sample_a(3)), b_encode, b_decode);
    check(&B::C, b_encode, b_decode);
}

#[test]
fn c_properties() {
    check(&C::new(), c_encode, c_decode);
    check(&C::from_slice(&[B::C]).unwrap(), c_encode, c_decode);
    check(
        &C::from_slice(&[B::B(sample_a(1)), B::A(-1)]).unwrap(),
        c_encode,
        c_decode,
    );
}

#[test]
fn d_properties() {
    check(&D::new(), d_encode, d_decode);
    for count in 1..=D_CAPACITY {
        let elements: Vec<_> = (0..count as u8).map(sample_d_element).collect();
        check(&D::from_slice(&elements).unwrap(), d_encode, d_decode);
    }
}

#[test]
fn e_properties() {
    for value in [false, true] {
        check(
            &E {
                a: EA::B(EAB::C(value)),
            },
            e_encode,
            e_decode,
        );
    }
}

#[test]
fn f_properties() {
    check(&F::new(), f_encode, f_decode);
    check(&F::from_slice(&[FixedSeq([false])]).unwrap(), f_encode, f_decode);
    check(
        &F::from_slice(&[FixedSeq([true]), FixedSeq([false])]).unwrap(),
        f_encode,
        f_decode,
    );
}

#[test]
fn g_properties() {
    check(&G::default(), g_encode, g_decode);
    check(
        &G {
            b: true,
            h: true,
            ..G::default()
        },
        g_encode,
        g_decode,
    );
}

#[test]
fn wrapper_properties() {
    check(&Bool::from(true), bool_encode, bool_decode);
    check(&Double::from(-1.25), double_encode, double_decode);
    check(&Float::from(f32::MIN_POSITIVE), float_encode, float_decode);
    check(&Int8::from(i8::MIN), int8_encode, int8_decode);
    check(&Int16::from(-300), int16_encode, int16_decode);
    check(&Int32::from(1 << 20), int32_encode, int32_decode);
    check(&Int64::from(i64::MAX), int64_encode, int64_decode);
    check(&Uint8::from(0x7F), uint8_encode, uint8_decode);
    check(&Uint16::from(u16::MAX), uint16_encode, uint16_decode);
    check(&Uint32::from(0xDEADBEEF), uint32_encode, uint32_decode);
    check(&Uint64::from(1), uint64_encode, uint64_decode);
}

#[test]
fn nan_survives_bit_for_bit() {
    let nan = f64::from_bits(0x7FF8_0000_0000_0001);
    let mut buf = [0u8; 8];
    assert_eq!(double_encode(&mut buf, &Double::from(nan)), 8);
    let mut decoded = Double::default();
    assert_eq!(double_decode(&mut decoded, &buf), 8);
    assert_eq!(decoded.value.to_bits(), nan.to_bits());
}

#[test]
fn b_rejects_every_unknown_tag() {
    for byte in 0..=u8::MAX {
        let mut out = B::default();
        let result = b_decode(&mut out, &[byte, 0x00]);
        match byte {
            0x80 | 0x82 => assert!(result > 0),
            0x81 => assert_eq!(result, -EOUTOFDATA),
            _ => assert_eq!(result, -EBADCHOICE, "tag {byte:#04x}"),
        }
    }
}

#[test]
fn e_rejects_every_unknown_tag() {
    for byte in (0..=u8::MAX).filter(|b| *b != 0x80) {
        let mut out = E::default();
        assert_eq!(e_decode(&mut out, &[byte, 0x80, 0xFF]), -EBADCHOICE);
        assert_eq!(e_decode(&mut out, &[0x80, byte, 0xFF]), -EBADCHOICE);
    }
}

#[test_case("c", C_CAPACITY; "c")]
#[test_case("d", D_CAPACITY; "d")]
#[test_case("f", F_CAPACITY; "f")]
fn quantity_over_capacity_is_bad_length(shape: &str, capacity: usize) {
    for quantity in capacity + 1..=u8::MAX as usize {
        let src = [0x01, quantity as u8];
        let result = match shape {
            "c" => c_decode(&mut C::new(), &src),
            "d" => d_decode(&mut D::new(), &src),
            _ => f_decode(&mut F::new(), &src),
        };
        assert_eq!(result, -EBADLENGTH, "{shape} quantity {quantity}");
    }
}

#[test]
fn bool_decodes_any_nonzero_byte_as_true() {
    for byte in 1..=u8::MAX {
        let mut out = G::default();
        assert_eq!(g_decode(&mut out, &[byte; 9]), 9);
        assert!(out.a && out.e && out.i);

        // Re-encoding is canonical
        let mut buf = [0u8; 9];
        assert_eq!(g_encode(&mut buf, &out), 9);
        assert_eq!(buf, [0xFF; 9]);
    }
}
