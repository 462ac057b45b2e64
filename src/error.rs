use thiserror::Error;

/// Failures while encoding a wide sequence as UTF-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unpaired low surrogate {unit:#06x} at index {index}")]
    UnpairedLowSurrogate { index: usize, unit: u32 },
    #[error("high surrogate {unit:#06x} at index {index} has no trailing low surrogate")]
    DanglingHighSurrogate { index: usize, unit: u32 },
    #[error("surrogate pair at index {index} combines to {codepoint:#x}, past U+10FFFF")]
    SurrogateOutOfRange { index: usize, codepoint: u32 },
    #[error("code unit {unit:#x} at index {index} is not a Unicode scalar value")]
    InvalidCodeUnit { index: usize, unit: u32 },
}

/// Failures while decoding a UTF-8 sequence into wide units.
///
/// Lenient decoding only ever reports [`InvalidLeadByte`] and
/// [`TruncatedSequence`]; the remaining variants come from
/// [`utf8_to_wide_strict`].
///
/// [`InvalidLeadByte`]: DecodeError::InvalidLeadByte
/// [`TruncatedSequence`]: DecodeError::TruncatedSequence
/// [`utf8_to_wide_strict`]: crate::utf8_to_wide_strict
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid UTF-8 lead byte {byte:#04x} at index {index}")]
    InvalidLeadByte { index: usize, byte: u8 },
    #[error("input ends inside a {expected}-byte sequence starting at index {index}")]
    TruncatedSequence { index: usize, expected: usize },
    #[error("invalid continuation byte {byte:#04x} at index {index}")]
    InvalidContinuationByte { index: usize, byte: u8 },
    #[error("overlong {length}-byte encoding of U+{codepoint:04X} at index {index}")]
    OverlongEncoding {
        index: usize,
        length: usize,
        codepoint: u32,
    },
    #[error("surrogate code point U+{codepoint:04X} encoded at index {index}")]
    SurrogateCodePoint { index: usize, codepoint: u32 },
    #[error("code point {codepoint:#x} at index {index} is past U+10FFFF")]
    CodePointOutOfRange { index: usize, codepoint: u32 },
}
