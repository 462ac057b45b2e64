use crate::codepoint::{self, MAX_CODE_POINT};
use crate::error::EncodeError;
use crate::wide::WideUnit;

impl WideUnit for u32 {
    fn encode_utf8(input: &[Self], out: &mut Vec<u8>) -> Result<(), EncodeError> {
        for (index, &unit) in input.iter().enumerate() {
            if codepoint::is_surrogate(unit) || unit > MAX_CODE_POINT {
                return Err(EncodeError::InvalidCodeUnit { index, unit });
            }
            codepoint::push_utf8(out, unit);
        }
        Ok(())
    }

    #[inline]
    fn push_code_point(out: &mut Vec<Self>, codepoint: u32) {
        out.push(codepoint);
    }
}
