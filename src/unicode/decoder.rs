use itertools::Itertools;

use crate::unicode::*;

/// Decodes a UTF-8 byte sequence into the code points it spells, consuming
/// the whole input or failing on the first malformed unit.
pub fn decode(bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
    let mut code_points = Vec::new();
    let mut idx = 0;
    while idx < bytes.len() {
        let lead = bytes[idx];
        let Some((position, class)) = LENGTH_CLASSES
            .iter()
            .find_position(|class| lead & class.mask == class.marker)
        else {
            return Err(DecodeError::InvalidLeadByte {
                byte: lead,
                offset: idx,
            });
        };
        let length = position + 1;
        if idx + length > bytes.len() {
            return Err(DecodeError::TruncatedSequence {
                needed: length,
                offset: idx,
            });
        }
        let mut code_point = (lead & !class.mask) as u32;
        for offset in idx + 1..idx + length {
            let byte = bytes[offset];
            if byte & CONTINUATION_MASK != CONTINUATION_MARKER {
                return Err(DecodeError::InvalidContinuationByte { byte, offset });
            }
            code_point = (code_point << CONTINUATION_BITS) | (byte & !CONTINUATION_MASK) as u32;
        }
        code_points.push(code_point);
        idx += length;
    }
    Ok(code_points)
}
