//! Dense binary-to-text encoding.
//!
//! Two encodings are available: standard base64 and a wide alphabet that
//! stores 15 bits in every symbol by drawing on the Hangul syllable and CJK
//! ideograph blocks. [`decode`] tells them apart from the first character.
//!
//! ```
//! let encoded = base32k::encode(b"Hello, world!", false);
//! assert_eq!(encoded, "퀲絷맥摣巗氍檟");
//! assert_eq!(base32k::decode(&encoded).unwrap(), b"Hello, world!");
//!
//! let encoded = base32k::encode(b"Hello, world!", true);
//! assert_eq!(encoded, "SGVsbG8sIHdvcmxkIQ==");
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabet::{AlphabetTable, CJK, CodepointRange, ESCAPE, HANGUL, THRESHOLD};
pub use crate::core::config::{Config, ConfigError, Encoding, Settings};
pub use encoders::algorithms::errors::disable_color;
pub use encoders::algorithms::DecodeError;
pub use encoders::chunked::{BASE64_CHARS, decode_base64, encode_base64};
pub use encoders::wide::{
    DecodeOptions, UnknownSymbolPolicy, decode_wide, decode_wide_with, encode_wide,
};

/// Characters removed before decoding. Other whitespace is data.
const STRIPPED: [char; 3] = ['\r', '\n', ' '];

/// Encodes `data` as base64 when `use_6bit` is set, otherwise with the wide
/// alphabet.
///
/// Empty input gives an empty string for base64 and a single terminator
/// symbol for the wide alphabet.
pub fn encode(data: &[u8], use_6bit: bool) -> String {
    if use_6bit {
        encode_base64(data)
    } else {
        encode_wide(data)
    }
}

/// Encodes `data` with the given encoding.
pub fn encode_as(data: &[u8], encoding: Encoding) -> String {
    encode(data, encoding == Encoding::Base64)
}

/// Decodes text produced by [`encode`], whichever encoding it used.
///
/// Carriage returns, line feeds and spaces are ignored, and error positions
/// count characters after they are removed. Unknown wide symbols are an error;
/// see [`decode_with`] to change that.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    decode_with(text, &DecodeOptions::default())
}

/// Like [`decode`], with explicit options for the wide decoder.
pub fn decode_with(text: &str, options: &DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    let cleaned: String = text.chars().filter(|c| !STRIPPED.contains(c)).collect();

    match detect(&cleaned) {
        None => Ok(Vec::new()),
        Some(Encoding::Base64) => decode_base64(&cleaned),
        Some(Encoding::Wide) => decode_wide_with(&cleaned, options),
    }
}

/// Reports which encoding [`decode`] would use for `text`.
///
/// Returns `None` when nothing but stripped whitespace remains.
pub fn detect_encoding(text: &str) -> Option<Encoding> {
    text.chars().find(|c| !STRIPPED.contains(c)).map(detect_first)
}

fn detect(cleaned: &str) -> Option<Encoding> {
    cleaned.chars().next().map(detect_first)
}

fn detect_first(first: char) -> Encoding {
    // Wide output starts with ESCAPE or a symbol at or above U+4E00
    if (first as u32) < 128 && first != ESCAPE {
        Encoding::Base64
    } else {
        Encoding::Wide
    }
}

#[cfg(test)]
mod tests;
