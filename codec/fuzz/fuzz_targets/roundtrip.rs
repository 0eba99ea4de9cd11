#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oer_codec::{
    schema::{c_source, programming_types},
    Decode, Encode, EncodeSize, Error,
};

const MAX_SIZE: usize = 512;

fn roundtrip<T: Encode + Decode>(value: T) {
    let size = value.encode_size();
    let mut buf = [0u8; MAX_SIZE];
    let len = value
        .encode(&mut buf)
        .expect("Failed to encode a value that fits!");
    assert_eq!(len, size);

    // Every shorter buffer is rejected
    if len > 0 {
        assert_eq!(value.encode(&mut buf[..len - 1]), Err(Error::CapacityExceeded));
    }

    // Floats may be NaN, so compare the re-encoded bytes rather than the values
    let (decoded, read) = T::decode(&buf[..len]).expect("Failed to decode an encoded value!");
    assert_eq!(read, len);
    let mut again = [0u8; MAX_SIZE];
    assert_eq!(decoded.encode(&mut again), Ok(len));
    assert_eq!(buf[..len], again[..len]);

    // Every truncation runs out of data
    if len > 0 {
        assert_eq!(
            T::decode(&buf[..len - 1]).map(|(_, read)| read),
            Err(Error::OutOfData)
        );
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    A(c_source::A),
    B(c_source::B),
    C(c_source::C),
    D(c_source::D),
    E(c_source::E),
    F(c_source::F),
    G(c_source::G),

    Bool(programming_types::Bool),
    Double(programming_types::Double),
    Float(programming_types::Float),
    Int8(programming_types::Int8),
    Int16(programming_types::Int16),
    Int32(programming_types::Int32),
    Int64(programming_types::Int64),
    Uint8(programming_types::Uint8),
    Uint16(programming_types::Uint16),
    Uint32(programming_types::Uint32),
    Uint64(programming_types::Uint64),
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::A(it) => roundtrip(it),
        FuzzInput::B(it) => roundtrip(it),
        FuzzInput::C(it) => roundtrip(it),
        FuzzInput::D(it) => roundtrip(it),
        FuzzInput::E(it) => roundtrip(it),
        FuzzInput::F(it) => roundtrip(it),
        FuzzInput::G(it) => roundtrip(it),
        FuzzInput::Bool(it) => roundtrip(it),
        FuzzInput::Double(it) => roundtrip(it),
        FuzzInput::Float(it) => roundtrip(it),
        FuzzInput::Int8(it) => roundtrip(it),
        FuzzInput::Int16(it) => roundtrip(it),
        FuzzInput::Int32(it) => roundtrip(it),
        FuzzInput::Int64(it) => roundtrip(it),
        FuzzInput::Uint8(it) => roundtrip(it),
        FuzzInput::Uint16(it) => roundtrip(it),
        FuzzInput::Uint32(it) => roundtrip(it),
        FuzzInput::Uint64(it) => roundtrip(it),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
