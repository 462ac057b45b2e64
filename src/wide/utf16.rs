use crate::codepoint::{self, MAX_CODE_POINT, SURROGATE_OFFSET};
use crate::error::EncodeError;
use crate::wide::WideUnit;

impl WideUnit for u16 {
    fn encode_utf8(input: &[Self], out: &mut Vec<u8>) -> Result<(), EncodeError> {
        // Carry state: a high surrogate waiting for its low half, with the
        // index it appeared at.
        let mut pending: Option<(usize, u16)> = None;
        for (index, &unit) in input.iter().enumerate() {
            match pending.take() {
                Some((_, high)) if codepoint::is_low_surrogate(unit) => {
                    let combined = codepoint::from_surrogate_pair(high, unit);
                    if combined > MAX_CODE_POINT {
                        return Err(EncodeError::SurrogateOutOfRange {
                            index,
                            codepoint: combined,
                        });
                    }
                    codepoint::push_utf8(out, combined);
                }
                Some((start, high)) => {
                    return Err(EncodeError::DanglingHighSurrogate {
                        index: start,
                        unit: high as u32,
                    })
                }
                None if codepoint::is_high_surrogate(unit) => pending = Some((index, unit)),
                None if codepoint::is_low_surrogate(unit) => {
                    return Err(EncodeError::UnpairedLowSurrogate {
                        index,
                        unit: unit as u32,
                    })
                }
                None => codepoint::push_utf8(out, unit as u32),
            }
        }
        if let Some((start, high)) = pending {
            return Err(EncodeError::DanglingHighSurrogate {
                index: start,
                unit: high as u32,
            });
        }
        Ok(())
    }

    #[inline]
    fn push_code_point(out: &mut Vec<Self>, codepoint: u32) {
        if codepoint >= SURROGATE_OFFSET {
            let (high, low) = codepoint::to_surrogate_pair(codepoint);
            out.push(high);
            out.push(low);
        } else {
            out.push(codepoint as u16);
        }
    }
}
