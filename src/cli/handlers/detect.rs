use crate::cli::{args::CodecArgs, global::GlobalArgs, handlers::read_text};

pub fn handle(args: CodecArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input_text = read_text(args.file.as_ref(), global)?;

    match base32k::detect_encoding(&input_text) {
        Some(encoding) => {
            println!("{}", encoding);
            Ok(())
        }
        None => Err("Could not detect encoding - input is empty".into()),
    }
}
