//! UTF-8 transcoding.
//!
//! Encoding always produces the minimal byte form for each scalar value.
//! Decoding enforces full conformance: overlong forms, surrogate code
//! points, values above U+10FFFF, stray continuation bytes and truncated
//! sequences are all rejected.

#![expect(clippy::cast_possible_truncation)]

use alloc::{string::String, vec::Vec};

use crate::codepoint::{self, Scalars};
use crate::error::{SurrogateError, Utf8DecodeError};

/// Leading-byte payload mask, indexed by encoded length.
const PAYLOAD_MASK: [u8; 5] = [0, 0x7F, 0x1F, 0x0F, 0x07];

/// Smallest scalar value for each encoded length; anything below it in a
/// form of that length is overlong.
const MIN_SCALAR: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// Encodes a code-unit sequence as UTF-8.
///
/// Surrogate pairs are combined into supplementary-plane scalars; each
/// scalar is emitted in its minimal form, most significant bits first.
///
/// # Errors
///
/// Returns [`SurrogateError`] if the sequence contains an unpaired
/// surrogate.
pub fn encode(units: &[u16]) -> Result<Vec<u8>, SurrogateError> {
    let mut bytes = Vec::with_capacity(units.len() * 3);
    for scalar in Scalars::new(units) {
        let scalar = scalar?;
        match scalar {
            0x00..=0x7F => bytes.push(scalar as u8),
            0x80..=0x7FF => bytes.extend([
                0xC0 | (scalar >> 6) as u8,
                0x80 | (scalar & 0x3F) as u8,
            ]),
            0x800..=0xFFFF => bytes.extend([
                0xE0 | (scalar >> 12) as u8,
                0x80 | ((scalar >> 6) & 0x3F) as u8,
                0x80 | (scalar & 0x3F) as u8,
            ]),
            _ => bytes.extend([
                0xF0 | (scalar >> 18) as u8,
                0x80 | ((scalar >> 12) & 0x3F) as u8,
                0x80 | ((scalar >> 6) & 0x3F) as u8,
                0x80 | (scalar & 0x3F) as u8,
            ]),
        }
    }
    Ok(bytes)
}

/// Encodes a string as UTF-8 bytes.
///
/// Rust strings are already UTF-8, so this is a copy; it exists for
/// parity with the other codecs' string entry points.
#[must_use]
pub fn encode_str(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decodes UTF-8 bytes into a code-unit sequence.
///
/// Scalar values up to U+FFFF become a single unit; supplementary-plane
/// values become a surrogate pair.
///
/// # Errors
///
/// Returns [`Utf8DecodeError`] for malformed byte structure, overlong
/// forms, encoded surrogates and values above U+10FFFF.
pub fn decode(bytes: &[u8]) -> Result<Vec<u16>, Utf8DecodeError> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    while let Some(&leader) = bytes.get(offset) {
        let len = match leader {
            0x00..=0x7F => {
                units.push(u16::from(leader));
                offset += 1;
                continue;
            }
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            // continuation byte with no leader, or a 5+ byte form
            _ => return Err(Utf8DecodeError::Invalid { offset }),
        };
        let Some(tail) = bytes.get(offset + 1..offset + len) else {
            return Err(Utf8DecodeError::Invalid { offset });
        };
        let mut value = u32::from(leader & PAYLOAD_MASK[len]);
        for (i, &byte) in tail.iter().enumerate() {
            if byte & 0xC0 != 0x80 {
                return Err(Utf8DecodeError::Invalid {
                    offset: offset + 1 + i,
                });
            }
            value = (value << 6) | u32::from(byte & 0x3F);
        }
        if value < MIN_SCALAR[len] {
            return Err(Utf8DecodeError::Overlong { offset });
        }
        if codepoint::is_surrogate(value) {
            return Err(Utf8DecodeError::SurrogateCodepoint { value, offset });
        }
        if value > codepoint::MAX_SCALAR {
            return Err(Utf8DecodeError::OutOfRange { value, offset });
        }
        codepoint::push_units(value, &mut units);
        offset += len;
    }
    Ok(units)
}

/// Decodes UTF-8 bytes into an owned string.
///
/// # Errors
///
/// Same conditions as [`decode`].
pub fn decode_to_string(bytes: &[u8]) -> Result<String, Utf8DecodeError> {
    let units = decode(bytes)?;
    Ok(String::from_utf16(&units).expect("decoded units contain no unpaired surrogates"))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn empty_input_round_trips() {
        assert_eq!(encode(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(decode(&[]).unwrap(), Vec::<u16>::new());
    }

    #[test]
    fn ascii_passes_through() {
        let units: Vec<u16> = "Man".encode_utf16().collect();
        assert_eq!(encode(&units).unwrap(), b"Man");
        assert_eq!(decode(b"Man").unwrap(), units);
    }

    #[test]
    fn supplementary_plane_uses_four_bytes() {
        let bytes = encode(&[0xD834, 0xDF06]).unwrap();
        assert_eq!(bytes, [0xF0, 0x9D, 0x8C, 0x86]);
        assert_eq!(decode(&bytes).unwrap(), [0xD834, 0xDF06]);
    }

    #[test]
    fn encode_str_matches_unit_encoding() {
        let text = "déjà 𝌆";
        let units: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(encode_str(text), encode(&units).unwrap());
    }

    #[test]
    fn decode_to_string_reconstructs_text() {
        assert_eq!(decode_to_string("καὶ".as_bytes()).unwrap(), "καὶ");
    }

    #[test]
    fn truncated_sequence_reports_leader_offset() {
        assert_eq!(
            decode(&[0x41, 0xF0, 0x9D]),
            Err(Utf8DecodeError::Invalid { offset: 1 })
        );
    }

    #[test]
    fn bad_continuation_reports_its_offset() {
        assert_eq!(
            decode(&[0xE2, 0x28, 0xA1]),
            Err(Utf8DecodeError::Invalid { offset: 1 })
        );
    }
}
