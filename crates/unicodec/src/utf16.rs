//! UTF-16 transcoding with explicit byte order.
//!
//! Framing only: each 16-bit code unit maps to two bytes, and surrogate
//! pairs pass through as two units. Pairing is validated on the code-unit
//! sequence itself, before encoding and after decoding, since malformed
//! text can arrive from either side.

use alloc::vec::Vec;

use crate::codepoint;
use crate::endian::Endianness;
use crate::error::{SurrogateError, Utf16DecodeError};

/// Encodes a code-unit sequence as UTF-16 bytes in the given byte order.
///
/// # Errors
///
/// Returns [`SurrogateError`] if the sequence contains an unpaired
/// surrogate.
pub fn encode(units: &[u16], endianness: Endianness) -> Result<Vec<u8>, SurrogateError> {
    codepoint::validate_units(units)?;
    let mut bytes = Vec::with_capacity(units.len() * 2);
    for &unit in units {
        bytes.extend(endianness.u16_to_bytes(unit));
    }
    Ok(bytes)
}

/// Encodes a string as UTF-16 bytes in the given byte order.
#[must_use]
pub fn encode_str(text: &str, endianness: Endianness) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        bytes.extend(endianness.u16_to_bytes(unit));
    }
    bytes
}

/// Decodes UTF-16 bytes into a code-unit sequence.
///
/// # Errors
///
/// Returns [`Utf16DecodeError`] if the byte count is odd or the
/// reconstructed sequence contains an unpaired surrogate.
pub fn decode(bytes: &[u8], endianness: Endianness) -> Result<Vec<u16>, Utf16DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(Utf16DecodeError::OddByteCount { len: bytes.len() });
    }
    let mut units = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        units.push(endianness.u16_from_bytes([pair[0], pair[1]]));
    }
    codepoint::validate_units(&units)?;
    Ok(units)
}
