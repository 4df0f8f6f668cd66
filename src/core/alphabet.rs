use std::collections::HashMap;
use std::sync::OnceLock;

/// Number of symbols in the wide alphabet.
///
/// 15-bit values at or above this need the two-symbol escape form.
pub const THRESHOLD: u32 = 32_164;

/// Reserved out-of-table character that prefixes an escaped value.
///
/// It sits below 128 so the dispatcher can tell wide output apart from
/// base64 by the first character alone, and it is not a base64 digit.
pub const ESCAPE: char = '.';

/// Hangul syllables, U+AC00..=U+D7A3.
pub const HANGUL: CodepointRange = CodepointRange::new(0xAC00, 11_172);

/// CJK unified ideographs, U+4E00..=U+9FFF.
pub const CJK: CodepointRange = CodepointRange::new(0x4E00, 20_992);

static TABLE: OnceLock<AlphabetTable> = OnceLock::new();

/// A run of sequential Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRange {
    start: u32,
    length: u32,
}

impl CodepointRange {
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn len(&self) -> usize {
        self.length as usize
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Expands the range into its characters.
    ///
    /// Fails if the range is empty, runs past U+10FFFF or crosses the
    /// surrogate gap.
    pub fn chars(&self) -> Result<Vec<char>, String> {
        const MAX_UNICODE: u32 = 0x10FFFF;
        const SURROGATE_START: u32 = 0xD800;
        const SURROGATE_END: u32 = 0xDFFF;

        if self.length == 0 {
            return Err("length must be greater than 0".to_string());
        }

        let end = self
            .start
            .checked_add(self.length - 1)
            .ok_or("range exceeds maximum Unicode codepoint")?;

        if end > MAX_UNICODE {
            return Err(format!(
                "range end U+{:X} exceeds maximum Unicode codepoint U+{:X}",
                end, MAX_UNICODE
            ));
        }

        if self.start <= SURROGATE_END && end >= SURROGATE_START {
            return Err(format!(
                "range U+{:X}..U+{:X} crosses surrogate gap (U+D800..U+DFFF)",
                self.start, end
            ));
        }

        (self.start..=end)
            .map(|cp| char::from_u32(cp).ok_or_else(|| format!("invalid codepoint U+{:X}", cp)))
            .collect()
    }
}

/// The 32,164-symbol wide alphabet and its inverse.
///
/// Symbols are the Hangul range followed by the CJK range, indexed in that
/// order. The table is built once and never changes; use
/// [`AlphabetTable::global`] rather than building your own.
#[derive(Debug)]
pub struct AlphabetTable {
    symbols: Vec<char>,
    index_of: HashMap<char, u32>,
}

impl AlphabetTable {
    /// Returns the process-wide table, building it on first use.
    pub fn global() -> &'static AlphabetTable {
        TABLE.get_or_init(|| {
            Self::from_ranges(&[HANGUL, CJK]).unwrap_or_else(|e| {
                // Both ranges are compile-time constants that validate.
                unreachable!("built-in alphabet ranges are invalid: {}", e)
            })
        })
    }

    /// Builds a table by concatenating the given ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if a range is invalid or two ranges overlap.
    pub fn from_ranges(ranges: &[CodepointRange]) -> Result<Self, String> {
        let capacity = ranges.iter().map(CodepointRange::len).sum();
        let mut symbols = Vec::with_capacity(capacity);
        for range in ranges {
            symbols.extend(range.chars()?);
        }

        let mut index_of = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if index_of.insert(c, i as u32).is_some() {
                return Err(format!("Duplicate character in alphabet: {}", c));
            }
        }

        Ok(Self { symbols, index_of })
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol for `index`, or `None` if out of range.
    pub fn symbol(&self, index: u32) -> Option<char> {
        self.symbols.get(index as usize).copied()
    }

    /// Returns the index of `c`, or `None` if it is not in the table.
    pub fn index_of(&self, c: char) -> Option<u32> {
        self.index_of.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of.contains_key(&c)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}
