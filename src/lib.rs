//! Lossless transcoding between UTF-8 byte sequences and wide (UTF-16 or
//! UTF-32) code-unit sequences.
//!
//! The wide unit width is picked per call through the [`WideUnit`] type
//! parameter: `u16` for UTF-16 (surrogate pairs above U+FFFF), `u32` for
//! UTF-32. Conversions are pure and fail fast on the first invalid unit or
//! byte, returning no partial output.
//!
//! ```
//! let utf8 = wideconv::wide_to_utf8(&[0xD801u16, 0xDC37]).unwrap();
//! assert_eq!(utf8, [0xF0, 0x90, 0x90, 0xB7]);
//!
//! let wide: Vec<u16> = wideconv::utf8_to_wide(&utf8).unwrap();
//! assert_eq!(wide, [0xD801, 0xDC37]);
//! ```

mod codepoint;
mod error;
mod transcode;
mod wide;

pub use error::{DecodeError, EncodeError};
pub use transcode::{utf8_to_wide, utf8_to_wide_strict, wide_to_utf8};
pub use wide::WideUnit;
