//! Wide-alphabet codec: 15 bits per symbol.
//!
//! Bytes are packed MSB-first into 15-bit values, each written as one symbol
//! of the [`AlphabetTable`]. Values the table cannot address (32164 and up)
//! are written as [`ESCAPE`] followed by the symbol for `value - THRESHOLD`.
//! The last value carries a sentinel `1` bit right after the leftover data
//! bits, so the decoder can find the end of the payload without a length.

use crate::core::alphabet::{AlphabetTable, ESCAPE, THRESHOLD};

pub use super::errors::DecodeError;

const BITS_PER_SYMBOL: u32 = 15;

/// What to do with a symbol that is not in the wide alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSymbolPolicy {
    /// Fail with [`DecodeError::UnknownSymbol`].
    #[default]
    Reject,
    /// Decode the symbol as index 0. Corrupted text then decodes to
    /// fabricated bytes instead of failing.
    SubstituteZero,
}

/// Options for the wide-alphabet decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub unknown_symbols: UnknownSymbolPolicy,
}

impl DecodeOptions {
    /// Options that decode unknown symbols as zero.
    pub fn lenient() -> Self {
        Self {
            unknown_symbols: UnknownSymbolPolicy::SubstituteZero,
        }
    }
}

fn push_value(result: &mut String, table: &AlphabetTable, value: u32) {
    debug_assert!(value < 1 << BITS_PER_SYMBOL);
    let index = if value < THRESHOLD {
        value
    } else {
        result.push(ESCAPE);
        value - THRESHOLD
    };
    // index < THRESHOLD on both paths
    result.push(table.symbols()[index as usize]);
}

/// Encodes bytes with the wide alphabet.
///
/// Never fails. The output always has at least one symbol, even for empty
/// input.
pub fn encode_wide(data: &[u8]) -> String {
    let table = AlphabetTable::global();

    // Roughly 8/15 symbols per byte, plus the terminator
    let mut result = String::with_capacity((data.len() * 8 / 15 + 1) * 3);

    let mut acc = 0u32;
    let mut bits = 0u32;

    for &byte in data {
        acc = (acc << 8) | byte as u32;
        bits += 8;

        while bits >= BITS_PER_SYMBOL {
            bits -= BITS_PER_SYMBOL;
            let value = acc >> bits;
            acc &= (1 << bits) - 1;
            push_value(&mut result, table, value);
        }
    }

    // Sentinel bit after the leftover bits, zero-padded to 15 bits
    let value = ((acc << 1) | 1) << (BITS_PER_SYMBOL - 1 - bits);
    push_value(&mut result, table, value);

    result
}

/// Decodes wide-alphabet text, rejecting unknown symbols.
pub fn decode_wide(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode_wide_with(encoded, &DecodeOptions::default())
}

/// Decodes wide-alphabet text with explicit options.
///
/// The input must be exactly what [`encode_wide`] produced; whitespace is
/// not skipped here.
pub fn decode_wide_with(encoded: &str, options: &DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    let table = AlphabetTable::global();
    let symbols: Vec<char> = encoded.chars().collect();
    let n = symbols.len();

    let lookup = |c: char, position: usize| -> Result<u32, DecodeError> {
        match (table.index_of(c), options.unknown_symbols) {
            (Some(index), _) => Ok(index),
            (None, UnknownSymbolPolicy::SubstituteZero) => Ok(0),
            (None, UnknownSymbolPolicy::Reject) => {
                Err(DecodeError::UnknownSymbol { char: c, position })
            }
        }
    };

    let mut result = Vec::with_capacity(n * 15 / 8);
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut i = 0;

    while i < n {
        let c = symbols[i];
        i += 1;

        let value = if c == ESCAPE {
            let Some(&next) = symbols.get(i) else {
                return Err(DecodeError::DanglingEscape { position: i - 1 });
            };
            let offset = lookup(next, i)?;
            i += 1;
            let value = offset + THRESHOLD;
            if value >= 1 << BITS_PER_SYMBOL {
                return Err(DecodeError::EscapeOutOfRange {
                    char: next,
                    position: i - 1,
                });
            }
            value
        } else {
            lookup(c, i - 1)?
        };

        acc = (acc << BITS_PER_SYMBOL) | value;
        bits += BITS_PER_SYMBOL;

        // The last value holds the sentinel, keep it whole
        if i < n {
            while bits >= 8 {
                bits -= 8;
                result.push((acc >> bits) as u8);
                acc &= (1 << bits) - 1;
            }
        }
    }

    // Drop the zero padding, then the sentinel bit
    while bits > 0 && (acc & 1) == 0 {
        acc >>= 1;
        bits -= 1;
    }
    if bits > 0 {
        acc >>= 1;
        bits -= 1;
    }

    while bits >= 8 {
        bits -= 8;
        result.push((acc >> bits) as u8);
        acc &= (1 << bits) - 1;
    }

    Ok(result)
}
