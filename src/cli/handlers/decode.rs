use crate::cli::{args::CodecArgs, global::GlobalArgs, handlers::read_text};
use base32k::{Config, DecodeOptions};
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: CodecArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_text = read_text(args.file.as_ref(), global)?;

    let options = if args.lenient {
        DecodeOptions::lenient()
    } else {
        config.decode_options()
    };

    let data = base32k::decode_with(&input_text, &options)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &data)?;
    } else {
        io::stdout().write_all(&data)?;
    }

    Ok(())
}
