use crate::cli::{args::CodecArgs, global::GlobalArgs, handlers::read_input};
use base32k::{Config, ESCAPE};
use std::fs;

pub fn handle(
    args: CodecArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_ref(), global)?;

    let encoding = args
        .requested_encoding()
        .unwrap_or_else(|| config.default_encoding());
    let width = args.wrap.unwrap_or_else(|| config.wrap());

    let encoded = wrap_symbols(&base32k::encode_as(&data, encoding), width);

    if let Some(output_path) = &args.output {
        fs::write(output_path, encoded.as_bytes())?;
    } else {
        println!("{}", encoded);
    }

    Ok(())
}

/// Breaks `text` into lines of at most `width` symbols. Zero disables wrapping.
///
/// An escape and the symbol after it count as one symbol and stay on the same
/// line.
fn wrap_symbols(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + text.len() / width + 1);
    let mut column = 0;
    let mut escaped = false;
    for c in text.chars() {
        if !escaped {
            if column == width {
                result.push('\n');
                column = 0;
            }
            column += 1;
        }
        escaped = !escaped && c == ESCAPE;
        result.push(c);
    }
    result
}
