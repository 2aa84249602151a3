#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unicodec::{Endianness, base64, utf8, utf16, utf32};

/// Which decoder to point the input at.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum Target {
    Utf8,
    Utf16(bool),
    Utf32(bool),
    Base64,
}

fn endianness(little: bool) -> Endianness {
    if little {
        Endianness::Little
    } else {
        Endianness::Big
    }
}

// Decoders must never panic, and anything they accept must be the exact
// encoding of what they produced. Base64 is looser: non-canonical trailing
// bits are accepted, so only the decoded value is stable under re-encoding.
fuzz_target!(|input: (Target, &[u8])| {
    let (target, data) = input;
    match target {
        Target::Utf8 => {
            if let Ok(units) = utf8::decode(data) {
                assert_eq!(utf8::encode(&units).unwrap(), data);
            }
        }
        Target::Utf16(little) => {
            let endianness = endianness(little);
            if let Ok(units) = utf16::decode(data, endianness) {
                assert_eq!(utf16::encode(&units, endianness).unwrap(), data);
            }
        }
        Target::Utf32(little) => {
            let endianness = endianness(little);
            if let Ok(units) = utf32::decode(data, endianness) {
                assert_eq!(utf32::encode(&units, endianness).unwrap(), data);
            }
        }
        Target::Base64 => {
            if let Ok(text) = core::str::from_utf8(data) {
                if let Ok(bytes) = base64::decode(text) {
                    assert_eq!(base64::decode(&base64::encode(&bytes)).unwrap(), bytes);
                }
            }
        }
    }
});
