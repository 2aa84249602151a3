//! Conversions between UTF-16 code-unit text and its binary encodings.
//!
//! The native text representation here is a sequence of 16-bit code units,
//! the in-memory form used by UTF-16-based string types. This crate
//! converts such sequences to and from UTF-8, UTF-16 (big or little
//! endian) and UTF-32 (big or little endian) byte sequences, and converts
//! arbitrary byte sequences to and from Base64 text.
//!
//! Every operation is a pure, synchronous transformation of one in-memory
//! buffer into another; there is no streaming, no I/O and no shared state.
//! Decoding is strict: overlong UTF-8 forms, surrogate code points in
//! UTF-8/UTF-32 data, code points above U+10FFFF and structurally
//! impossible byte counts are all rejected with distinct error values.
//! Unpaired surrogates are rejected on both sides: when encoding a
//! code-unit sequence and when a decode reconstructs one.
//!
//! ```rust
//! use unicodec::{Endianness, utf8, utf16};
//!
//! let units: Vec<u16> = "𝌆".encode_utf16().collect();
//! assert_eq!(units, [0xD834, 0xDF06]);
//!
//! let bytes = utf8::encode(&units)?;
//! assert_eq!(bytes, [0xF0, 0x9D, 0x8C, 0x86]);
//! assert_eq!(utf8::decode(&bytes)?, units);
//!
//! let be = utf16::encode(&units, Endianness::Big)?;
//! assert_eq!(be, [0xD8, 0x34, 0xDF, 0x06]);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod base64;
pub mod codepoint;
mod endian;
mod error;
pub mod utf16;
pub mod utf32;
pub mod utf8;


pub use endian::Endianness;
pub use error::{
    Base64DecodeError, SurrogateError, Utf8DecodeError, Utf16DecodeError, Utf32DecodeError,
};
