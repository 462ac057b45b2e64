pub(crate) mod utf16;
pub(crate) mod utf32;

use crate::error::EncodeError;

/// A wide code unit, 16 or 32 bits.
///
/// `u16` gives UTF-16 semantics: code points above U+FFFF travel as a high
/// surrogate followed by a low surrogate. `u32` gives UTF-32 semantics:
/// every unit is a whole code point. The width is fixed per call site by
/// the chosen type; both widths share the same code-point core.
pub trait WideUnit: Copy + Eq + Sized {
    /// Appends the UTF-8 encoding of `input` to `out`.
    fn encode_utf8(input: &[Self], out: &mut Vec<u8>) -> Result<(), EncodeError>;

    /// Appends one code point to `out` in this unit width.
    fn push_code_point(out: &mut Vec<Self>, codepoint: u32);
}
