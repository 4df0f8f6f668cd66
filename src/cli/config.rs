use crate::cli::global::GlobalArgs;
use base32k::Config;
use std::path::Path;

/// Loads settings from the standard locations, then from `--config`.
///
/// An explicit `--config` file must exist and parse.
pub fn load_config(global: &GlobalArgs) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::load_with_overrides(global.quiet)?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        let explicit = Config::load_from_file(Path::new(expanded.as_ref()))?;
        config.merge(explicit);
    }

    Ok(config)
}
