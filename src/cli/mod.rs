mod args;
mod config;
mod global;
mod handlers;

use args::CodecArgs;
use clap::Parser;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base32k")]
#[command(version)]
#[command(about = "Encode binary data as dense Hangul/CJK text (15 bits per symbol) or base64", long_about = None)]
struct Cli {
    #[command(flatten)]
    codec: CodecArgs,

    #[command(flatten)]
    global: GlobalArgs,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        base32k::disable_color();
    }

    let config = config::load_config(&cli.global)?;

    if cli.codec.detect {
        handlers::detect::handle(cli.codec, &cli.global)
    } else if cli.codec.decode {
        handlers::decode::handle(cli.codec, &cli.global, &config)
    } else {
        handlers::encode::handle(cli.codec, &cli.global, &config)
    }
}
