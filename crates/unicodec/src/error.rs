//! Error types for the transcoding operations.
//!
//! Each failure domain gets its own enum so a caller can match on exactly
//! the conditions the operation it invoked can produce. The surrogate
//! cases are shared between the encode paths and the UTF-16 decoder and
//! nest via `#[from]`. Every error carries the position at which it was
//! detected.

use thiserror::Error;

/// An unpaired surrogate in a code-unit sequence.
///
/// Produced when encoding any code-unit sequence, and when re-validating
/// the sequence reconstructed by a UTF-16 decode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurrogateError {
    /// A high surrogate not immediately followed by a low surrogate.
    #[error("high surrogate at index {index} not followed by a low surrogate")]
    UnpairedHigh {
        /// Position of the high surrogate in the code-unit sequence.
        index: usize,
    },
    /// A low surrogate not immediately preceded by a high surrogate.
    #[error("low surrogate at index {index} not preceded by a high surrogate")]
    UnpairedLow {
        /// Position of the low surrogate in the code-unit sequence.
        index: usize,
    },
}

/// Failure decoding a UTF-8 byte sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8DecodeError {
    /// Malformed byte structure: a continuation byte where a leading byte
    /// is expected, a leading byte outside the 1–4 byte forms, a
    /// continuation byte whose top two bits are not `10`, or a sequence
    /// cut short by the end of the input.
    #[error("invalid UTF-8 sequence at byte {offset}")]
    Invalid {
        /// Byte position at which the violation was detected.
        offset: usize,
    },
    /// A code point encoded with more bytes than the minimum its value
    /// requires.
    #[error("overlong UTF-8 encoding at byte {offset}")]
    Overlong {
        /// Byte position of the sequence's leading byte.
        offset: usize,
    },
    /// A well-formed sequence whose value lands in the surrogate band
    /// U+D800..=U+DFFF.
    #[error("surrogate code point U+{value:04X} encoded at byte {offset}")]
    SurrogateCodepoint {
        /// The decoded surrogate value.
        value: u32,
        /// Byte position of the sequence's leading byte.
        offset: usize,
    },
    /// A well-formed sequence whose value exceeds U+10FFFF.
    #[error("code point 0x{value:X} at byte {offset} exceeds U+10FFFF")]
    OutOfRange {
        /// The decoded out-of-range value.
        value: u32,
        /// Byte position of the sequence's leading byte.
        offset: usize,
    },
}

/// Failure decoding a UTF-16 byte sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16DecodeError {
    /// The input cannot frame into 16-bit units.
    #[error("byte count {len} is not a multiple of two")]
    OddByteCount {
        /// Length of the input in bytes.
        len: usize,
    },
    /// The reconstructed code-unit sequence contains an unpaired
    /// surrogate.
    #[error(transparent)]
    Surrogate(#[from] SurrogateError),
}

/// Failure decoding a UTF-32 byte sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf32DecodeError {
    /// The input cannot frame into 32-bit units.
    #[error("byte count {len} is not a multiple of four")]
    ByteCountNotMultipleOfFour {
        /// Length of the input in bytes.
        len: usize,
    },
    /// The byte that must be zero in every unit (the most significant
    /// byte) is non-zero.
    #[error("invalid UTF-32 unit at byte {offset}: most significant byte is not zero")]
    Invalid {
        /// Byte position of the unit's first byte.
        offset: usize,
    },
    /// A unit whose value lands in the surrogate band U+D800..=U+DFFF.
    #[error("surrogate code point U+{value:04X} encoded at byte {offset}")]
    SurrogateCodepoint {
        /// The decoded surrogate value.
        value: u32,
        /// Byte position of the unit's first byte.
        offset: usize,
    },
    /// A unit whose value exceeds U+10FFFF.
    #[error("code point 0x{value:X} at byte {offset} exceeds U+10FFFF")]
    OutOfRange {
        /// The decoded out-of-range value.
        value: u32,
        /// Byte position of the unit's first byte.
        offset: usize,
    },
}

/// Failure decoding Base64 text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64DecodeError {
    /// The input cannot frame into four-character groups.
    #[error("input length {len} is not a multiple of four")]
    InvalidLength {
        /// Length of the input in bytes.
        len: usize,
    },
    /// A character outside the alphabet and `=`.
    #[error("illegal character 0x{byte:02X} at offset {offset}")]
    IllegalCharacter {
        /// The offending input byte.
        byte: u8,
        /// Its position in the input.
        offset: usize,
    },
    /// `=` in the first or second position of a group, before further
    /// data, or anywhere outside the final group.
    #[error("misplaced padding at offset {offset}")]
    MisplacedPadding {
        /// Position of the violation in the input.
        offset: usize,
    },
}
