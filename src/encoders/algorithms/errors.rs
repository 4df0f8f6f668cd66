use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during decoding.
///
/// Positions are character indices into the text the decoder saw. When going
/// through `decode`, that is the input with CR, LF and spaces removed.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The escape symbol is the last symbol of the input
    DanglingEscape { position: usize },
    /// A symbol that is neither the escape nor part of the wide alphabet
    UnknownSymbol { char: char, position: usize },
    /// An escaped symbol whose offset pushes the value past 15 bits
    EscapeOutOfRange { char: char, position: usize },
    /// The input contains a character not in the base64 alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The padding is malformed or incorrect
    InvalidPadding,
    /// Invalid length for the encoding format
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs on a char boundary
        let display_input = match input.char_indices().nth(60) {
            Some((end, _)) => format!("{}...", &input[..end]),
            None => input.to_string(),
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        DecodeError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }
}

fn header(f: &mut fmt::Formatter<'_>, use_color: bool, msg: fmt::Arguments<'_>) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", msg)
    } else {
        write!(f, "error: {}", msg)
    }
}

fn hint(f: &mut fmt::Formatter<'_>, use_color: bool, msg: fmt::Arguments<'_>) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", msg)
    } else {
        write!(f, "hint: {}", msg)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::DanglingEscape { position } => {
                header(
                    f,
                    use_color,
                    format_args!("dangling escape at position {}", position),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                hint(
                    f,
                    use_color,
                    format_args!("the input ends with '.' but no symbol follows it; it may be truncated"),
                )
            }
            DecodeError::UnknownSymbol { char: c, position } => {
                header(
                    f,
                    use_color,
                    format_args!("unknown symbol '{}' (U+{:04X}) at position {}", c, *c as u32, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                hint(
                    f,
                    use_color,
                    format_args!("valid symbols are U+AC00..U+D7A3 and U+4E00..U+9FFF; use --lenient to decode them as zero"),
                )
            }
            DecodeError::EscapeOutOfRange { char: c, position } => {
                header(
                    f,
                    use_color,
                    format_args!("escaped symbol '{}' at position {} is out of range", c, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                hint(
                    f,
                    use_color,
                    format_args!("only U+AC00..U+AE5B may follow the escape '.'"),
                )
            }
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                header(
                    f,
                    use_color,
                    format_args!("invalid character '{}' at position {}", c, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                // Caret under the offending character
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                hint(f, use_color, format_args!("valid characters: {}", valid_chars))
            }
            DecodeError::InvalidPadding => {
                header(f, use_color, format_args!("invalid padding"))?;
                writeln!(f)?;
                writeln!(f)?;
                hint(
                    f,
                    use_color,
                    format_args!("check for missing or incorrect '=' characters at end of input"),
                )
            }
            DecodeError::InvalidLength {
                actual,
                expected,
                hint: hint_text,
            } => {
                header(f, use_color, format_args!("invalid length for decode"))?;
                writeln!(f)?;
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected {}", actual, expected)?;
                writeln!(f)?;
                hint(f, use_color, format_args!("{}", hint_text))
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Turns off ANSI colours in error messages for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if COLOR_DISABLED.load(Ordering::Relaxed) {
        return false;
    }

    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
