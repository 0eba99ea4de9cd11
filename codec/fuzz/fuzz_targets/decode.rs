#![no_main]

use libfuzzer_sys::fuzz_target;
use oer_codec::{
    schema::{c_source, programming_types},
    Decode, Encode,
};

const MAX_SIZE: usize = 512;

// Decoding arbitrary bytes must never panic. Anything accepted re-encodes to a canonical form
// no longer than what was consumed, which decodes again to the same length.
fn decode<T: Encode + Decode>(data: &[u8]) {
    let Ok((value, read)) = T::decode(data) else {
        return;
    };
    assert!(read <= data.len());

    let mut buf = [0u8; MAX_SIZE];
    let len = value
        .encode(&mut buf)
        .expect("Failed to encode a decoded value!");
    assert_eq!(len, read);
    let (_, reread) = T::decode(&buf[..len]).expect("Failed to decode a canonical encoding!");
    assert_eq!(reread, len);
}

fuzz_target!(|data: &[u8]| {
    decode::<c_source::A>(data);
    decode::<c_source::B>(data);
    decode::<c_source::C>(data);
    decode::<c_source::D>(data);
    decode::<c_source::E>(data);
    decode::<c_source::F>(data);
    decode::<c_source::G>(data);
    decode::<programming_types::Bool>(data);
    decode::<programming_types::Double>(data);
    decode::<programming_types::Float>(data);
    decode::<programming_types::Int8>(data);
    decode::<programming_types::Int16>(data);
    decode::<programming_types::Int32>(data);
    decode::<programming_types::Int64>(data);
    decode::<programming_types::Uint8>(data);
    decode::<programming_types::Uint16>(data);
    decode::<programming_types::Uint32>(data);
    decode::<programming_types::Uint64>(data);
});
