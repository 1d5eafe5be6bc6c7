//! Packed-bit representation of a compressed sequence.
//!
//! The core codec keeps code words as strings of '0'/'1' characters. This
//! module is a documented extension that packs those bits into bytes and
//! decodes them back; it never replaces the string representation.
//!
//! Layout: the first byte holds the number of valid bits in the last byte
//! (0 when the last byte is fully used), followed by the code word bits
//! packed MSB-first.

use crate::code::CodeTable;
use crate::error::HuffmanError;

/// Pack the bits of `compressed` into bytes. An empty sequence packs to the
/// bare prefix byte.
pub fn pack(compressed: &[String]) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut current_byte = 0u8;
    let mut bit_count = 0;

    for code in compressed {
        for bit in code.chars() {
            if bit == '1' {
                current_byte |= 1 << (7 - bit_count);
            }
            bit_count += 1;

            if bit_count == 8 {
                bytes.push(current_byte);
                current_byte = 0;
                bit_count = 0;
            }
        }
    }

    if bit_count > 0 {
        bytes.push(current_byte);
    }

    let mut packed = vec![bit_count as u8];
    packed.extend(bytes);
    packed
}

/// Unpack `data` and decode it against `table` in one pass.
///
/// Bits accumulate into a candidate code word until it matches a table
/// entry; the prefix-free property guarantees the first match is the only
/// possible one. Fails with [`HuffmanError::UnknownCodeWord`] when the
/// stream ends mid code word, which is also where a corrupt stream that
/// never matches surfaces.
pub fn unpack(data: &[u8], table: &CodeTable) -> Result<String, HuffmanError> {
    if data.is_empty() {
        return Ok(String::new());
    }

    let last_byte_bits = data[0] as usize;
    let bytes = &data[1..];
    let total_bytes = bytes.len();

    let mut raw = String::new();
    let mut candidate = String::new();

    for (i, &byte) in bytes.iter().enumerate() {
        let bits_in_byte = if i == total_bytes - 1 && last_byte_bits > 0 {
            last_byte_bits
        } else {
            8
        };

        for bit_pos in 0..bits_in_byte {
            let bit = (byte >> (7 - bit_pos)) & 1;
            candidate.push(if bit == 1 { '1' } else { '0' });

            if let Some(&symbol) = table.decode.get(&candidate) {
                raw.push(symbol);
                candidate.clear();
            }
        }
    }

    if !candidate.is_empty() {
        return Err(HuffmanError::UnknownCodeWord(candidate));
    }

    Ok(raw)
}
