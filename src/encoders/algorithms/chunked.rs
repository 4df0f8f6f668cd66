//! RFC 4648 base64: the 6-bit encoding.

pub use super::errors::DecodeError;

const BITS_PER_CHAR: u32 = 6;
const GROUP_SIZE: usize = 4;
const PADDING: char = '=';

/// The standard base64 alphabet.
pub const BASE64_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const ENCODE_TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn decode_char(c: char) -> Option<u32> {
    match c {
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 26),
        '0'..='9' => Some(c as u32 - '0' as u32 + 52),
        '+' => Some(62),
        '/' => Some(63),
        _ => None,
    }
}

/// Encodes bytes as padded base64.
pub fn encode_base64(data: &[u8]) -> String {
    let output_chars = (data.len() * 8).div_ceil(BITS_PER_CHAR as usize);
    let mut result = String::with_capacity(output_chars.div_ceil(GROUP_SIZE) * GROUP_SIZE);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | byte as u32;
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_CHAR {
            bits_in_buffer -= BITS_PER_CHAR;
            let index = (bit_buffer >> bits_in_buffer) & 0x3F;
            bit_buffer &= (1 << bits_in_buffer) - 1;
            result.push(ENCODE_TABLE[index as usize] as char);
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        let index = (bit_buffer << (BITS_PER_CHAR - bits_in_buffer)) & 0x3F;
        result.push(ENCODE_TABLE[index as usize] as char);
    }

    while result.len() % GROUP_SIZE != 0 {
        result.push(PADDING);
    }

    result
}

/// Decodes padded base64.
///
/// The length must be a multiple of four and `=` may only appear as the last
/// one or two characters. Leftover bits in the final character are ignored.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let chars: Vec<char> = encoded.chars().collect();

    if chars.len() % GROUP_SIZE != 0 {
        return Err(DecodeError::invalid_length(
            chars.len(),
            "a multiple of 4",
            "add padding (=) or check for missing characters",
        ));
    }

    let pad_count = chars.iter().rev().take_while(|&&c| c == PADDING).count();
    if pad_count > 2 {
        return Err(DecodeError::InvalidPadding);
    }
    let data_chars = &chars[..chars.len() - pad_count];

    let mut result = Vec::with_capacity(data_chars.len() * 3 / 4);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;

    for (position, &c) in data_chars.iter().enumerate() {
        if c == PADDING {
            return Err(DecodeError::InvalidPadding);
        }

        let digit = decode_char(c).ok_or_else(|| {
            DecodeError::invalid_character(c, position, encoded, BASE64_CHARS)
        })?;

        bit_buffer = (bit_buffer << BITS_PER_CHAR) | digit;
        bits_in_buffer += BITS_PER_CHAR;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((bit_buffer >> bits_in_buffer) as u8);
            bit_buffer &= (1 << bits_in_buffer) - 1;
        }
    }

    Ok(result)
}
