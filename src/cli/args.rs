use base32k::Encoding;
use clap::Args;
use std::path::PathBuf;

/// Arguments selecting what to do with the input
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Decode instead of encode (the encoding is detected)
    #[arg(short = 'd', long, conflicts_with = "detect")]
    pub decode: bool,

    /// Report which encoding the input uses
    #[arg(long)]
    pub detect: bool,

    /// Encoding to produce: wide or base64
    #[arg(short = 'e', long, value_name = "ENCODING", conflicts_with = "base64")]
    pub encoding: Option<Encoding>,

    /// Shorthand for --encoding base64
    #[arg(short = 'b', short_alias = '6', long)]
    pub base64: bool,

    /// Wrap encoded output every COLS symbols (0 = no wrapping)
    #[arg(short = 'w', long, value_name = "COLS")]
    pub wrap: Option<usize>,

    /// Decode unknown wide symbols as zero instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl CodecArgs {
    /// Encoding requested on the command line, if any
    pub fn requested_encoding(&self) -> Option<Encoding> {
        if self.base64 {
            Some(Encoding::Base64)
        } else {
            self.encoding
        }
    }
}
