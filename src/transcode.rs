use crate::codepoint::{self, MAX_CODE_POINT};
use crate::error::{DecodeError, EncodeError};
use crate::wide::WideUnit;

/// Encodes a wide sequence as an owned UTF-8 byte sequence.
///
/// Fails on the first invalid surrogate construction (`u16` input) or on
/// the first unit that is not a Unicode scalar value (`u32` input). No
/// partial output is ever returned.
pub fn wide_to_utf8<W: WideUnit>(input: &[W]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(input.len() * 4);
    W::encode_utf8(input, &mut out)?;
    Ok(out)
}

/// Decodes a UTF-8 byte sequence into an owned wide sequence.
///
/// Fails on the first byte that does not match one of the four lead-byte
/// classes and on input ending inside a multi-byte run. Continuation-byte
/// patterns, overlong encodings, and encoded surrogates are NOT checked
/// here; use [`utf8_to_wide_strict`] to reject those as well.
pub fn utf8_to_wide<W: WideUnit>(input: &[u8]) -> Result<Vec<W>, DecodeError> {
    decode(input, false)
}

/// Decodes a UTF-8 byte sequence, rejecting everything [`utf8_to_wide`]
/// rejects plus malformed continuation bytes, overlong encodings, encoded
/// surrogate code points, and code points past U+10FFFF.
pub fn utf8_to_wide_strict<W: WideUnit>(input: &[u8]) -> Result<Vec<W>, DecodeError> {
    decode(input, true)
}

fn decode<W: WideUnit>(input: &[u8], strict: bool) -> Result<Vec<W>, DecodeError> {
    let mut out = Vec::with_capacity(input.len() / 2 + 1);
    let mut index = 0;
    while index < input.len() {
        let lead = input[index];
        let length = match lead.leading_ones() {
            0 => 1,
            n @ 2..=4 => n as usize,
            _ => return Err(DecodeError::InvalidLeadByte { index, byte: lead }),
        };
        if input.len() - index < length {
            return Err(DecodeError::TruncatedSequence {
                index,
                expected: length,
            });
        }
        let mut codepoint = match length {
            1 => lead as u32,
            2 => (lead ^ 0b1100_0000) as u32,
            3 => (lead ^ 0b1110_0000) as u32,
            _ => (lead ^ 0b1111_0000) as u32,
        };
        for (offset, &byte) in input[index + 1..index + length].iter().enumerate() {
            if strict && byte & 0b1100_0000 != 0b1000_0000 {
                return Err(DecodeError::InvalidContinuationByte {
                    index: index + 1 + offset,
                    byte,
                });
            }
            codepoint = (codepoint << 6) | (byte & 0b0011_1111) as u32;
        }
        if strict {
            if codepoint > MAX_CODE_POINT {
                return Err(DecodeError::CodePointOutOfRange { index, codepoint });
            }
            if codepoint::utf8_len(codepoint) != length {
                return Err(DecodeError::OverlongEncoding {
                    index,
                    length,
                    codepoint,
                });
            }
            if codepoint::is_surrogate(codepoint) {
                return Err(DecodeError::SurrogateCodePoint { index, codepoint });
            }
        }
        W::push_code_point(&mut out, codepoint);
        index += length;
    }
    Ok(out)
}
