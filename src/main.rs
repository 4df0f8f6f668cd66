mod cli;

use std::process::exit;

fn main() {
    if let Err(e) = cli::run() {
        // Decode errors carry their own "error:" header and hints
        if e.downcast_ref::<base32k::DecodeError>().is_some() {
            eprintln!("{}", e);
        } else {
            eprintln!("error: {}", e);
        }
        exit(1);
    }
}
