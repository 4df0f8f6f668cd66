//! Convenient re-exports for common usage.
//!
//! ```
//! use base32k::prelude::*;
//!
//! let text = encode_as(b"Hello", Encoding::Wide);
//! assert_eq!(detect_encoding(&text), Some(Encoding::Wide));
//! assert_eq!(decode(&text).unwrap(), b"Hello");
//! ```

pub use crate::{
    // Config
    Config,
    // Errors
    DecodeError,
    DecodeOptions,
    Encoding,
    UnknownSymbolPolicy,
    // Core functions
    decode,
    decode_with,
    detect_encoding,
    encode,
    encode_as,
};
