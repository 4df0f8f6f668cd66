pub mod decode;
pub mod detect;
pub mod encode;

use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Reads the whole input from `file` or stdin, enforcing `--max-size`.
///
/// Files are checked before reading; stdin can only be checked afterwards.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        let size = fs::metadata(file_path)?.len() as usize;
        check_size(size, InputKind::File, global)?;
        Ok(fs::read(file_path)?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        check_size(buffer.len(), InputKind::Stdin, global)?;
        Ok(buffer)
    }
}

#[derive(Clone, Copy)]
enum InputKind {
    File,
    Stdin,
}

impl InputKind {
    fn noun(self) -> &'static str {
        match self {
            InputKind::File => "file",
            InputKind::Stdin => "input",
        }
    }

    fn label(self) -> &'static str {
        match self {
            InputKind::File => "File",
            InputKind::Stdin => "Input",
        }
    }
}

/// Fails when `size` exceeds `--max-size`, unless `--force` turns that into a
/// warning. A limit of zero disables the check.
fn check_size(
    size: usize,
    kind: InputKind,
    global: &GlobalArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 || size <= global.max_size {
        return Ok(());
    }

    if !global.force {
        return Err(format!(
            "{} size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
            kind.label(),
            size,
            global.max_size
        )
        .into());
    }

    if !global.quiet {
        eprintln!(
            "Warning: Processing large {} ({} bytes, limit: {} bytes)",
            kind.noun(),
            size,
            global.max_size
        );
    }
    Ok(())
}

/// Reads the input as text for decoding.
pub fn read_text(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = read_input(file, global)?;
    String::from_utf8(bytes).map_err(|_| "Input must be valid UTF-8 for decoding".into())
}
