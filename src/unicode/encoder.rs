use itertools::Itertools;

use crate::unicode::*;

/// Encodes a sequence of code points into UTF-8 bytes, always picking the
/// smallest length class that fits each value.
pub fn encode(code_points: &[u32]) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    for (index, &code_point) in code_points.iter().enumerate() {
        let Some((position, class)) = LENGTH_CLASSES
            .iter()
            .find_position(|class| code_point <= class.max_code_point)
        else {
            return Err(EncodeError::CodePointOutOfRange {
                value: code_point,
                index,
            });
        };
        let length = position + 1;
        let mut remaining_bits = class.total_payload_bits - class.lead_payload_bits;
        bytes.push(
            class.marker | bit_range(code_point, remaining_bits, class.total_payload_bits - 1) as u8,
        );
        for _ in 1..length {
            let high = remaining_bits - 1;
            remaining_bits -= CONTINUATION_BITS;
            bytes.push(CONTINUATION_MARKER | bit_range(code_point, remaining_bits, high) as u8);
        }
    }
    Ok(bytes)
}
