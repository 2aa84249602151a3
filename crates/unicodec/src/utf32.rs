//! UTF-32 transcoding with explicit byte order.
//!
//! Each Unicode scalar value occupies one 32-bit unit; surrogate pairs in
//! the code-unit sequence are combined on encode and split back on decode.
//! The most significant byte of every unit must be zero, since all scalar
//! values fit in 21 bits, and decoding rejects units where it is not.

use alloc::vec::Vec;

use crate::codepoint::{self, Scalars};
use crate::endian::Endianness;
use crate::error::{SurrogateError, Utf32DecodeError};

/// Encodes a code-unit sequence as UTF-32 bytes in the given byte order.
///
/// # Errors
///
/// Returns [`SurrogateError`] if the sequence contains an unpaired
/// surrogate.
pub fn encode(units: &[u16], endianness: Endianness) -> Result<Vec<u8>, SurrogateError> {
    let mut bytes = Vec::with_capacity(units.len() * 4);
    for scalar in Scalars::new(units) {
        bytes.extend(endianness.u32_to_bytes(scalar?));
    }
    Ok(bytes)
}

/// Encodes a string as UTF-32 bytes in the given byte order.
#[must_use]
pub fn encode_str(text: &str, endianness: Endianness) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() * 4);
    for ch in text.chars() {
        bytes.extend(endianness.u32_to_bytes(u32::from(ch)));
    }
    bytes
}

/// Decodes UTF-32 bytes into a code-unit sequence.
///
/// Scalar values up to U+FFFF become a single unit; supplementary-plane
/// values become a surrogate pair.
///
/// # Errors
///
/// Returns [`Utf32DecodeError`] if the byte count is not a multiple of
/// four, a unit's most significant byte is non-zero, or a unit's value is
/// a surrogate or exceeds U+10FFFF.
pub fn decode(bytes: &[u8], endianness: Endianness) -> Result<Vec<u16>, Utf32DecodeError> {
    if bytes.len() % 4 != 0 {
        return Err(Utf32DecodeError::ByteCountNotMultipleOfFour { len: bytes.len() });
    }
    let mut units = Vec::with_capacity(bytes.len() / 4);
    for (group, quad) in bytes.chunks_exact(4).enumerate() {
        let offset = group * 4;
        let most_significant = match endianness {
            Endianness::Big => quad[0],
            Endianness::Little => quad[3],
        };
        if most_significant != 0 {
            return Err(Utf32DecodeError::Invalid { offset });
        }
        let value = endianness.u32_from_bytes([quad[0], quad[1], quad[2], quad[3]]);
        if codepoint::is_surrogate(value) {
            return Err(Utf32DecodeError::SurrogateCodepoint { value, offset });
        }
        if value > codepoint::MAX_SCALAR {
            return Err(Utf32DecodeError::OutOfRange { value, offset });
        }
        codepoint::push_units(value, &mut units);
    }
    Ok(units)
}
