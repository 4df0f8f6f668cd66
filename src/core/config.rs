use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::encoders::wide::{DecodeOptions, UnknownSymbolPolicy};

/// Text encoding used to render binary data.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// 15 bits per symbol over the Hangul + CJK alphabet.
    #[default]
    Wide,
    /// RFC 4648 base64, 6 bits per symbol.
    Base64,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Wide => "wide",
            Encoding::Base64 => "base64",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wide" | "base32k" => Ok(Encoding::Wide),
            "base64" | "b64" => Ok(Encoding::Base64),
            _ => Err(format!(
                "Unknown encoding: {}. Available: wide, base64",
                s
            )),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// The file is not valid TOML or has unexpected fields
    Parse { path: Option<PathBuf>, source: toml::de::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid config {}: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => {
                write!(f, "invalid built-in config: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

/// Codec settings. Unset fields fall through to the next layer.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Encoding used when the CLI is not told otherwise
    #[serde(default)]
    pub default_encoding: Option<Encoding>,
    /// Symbols per output line when encoding (0 = no wrapping)
    #[serde(default)]
    pub wrap: Option<usize>,
    /// Decode unknown wide symbols as zero instead of failing
    #[serde(default)]
    pub lenient: Option<bool>,
}

/// Configuration loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Parses configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration.
    pub fn load_default() -> Result<Self, ConfigError> {
        let content = include_str!("../../config.toml");
        Self::from_toml(content).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Path of the per-user configuration file, if the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("base32k").join("config.toml"))
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/base32k/config.toml` (user overrides)
    /// 3. `./base32k.toml` (project-local overrides)
    ///
    /// Later files override earlier ones field by field. Unreadable override
    /// files are reported on stderr unless `quiet` is set and then skipped.
    pub fn load_with_overrides(quiet: bool) -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => config.merge(user_config),
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to load user config: {}", e);
                        }
                    }
                }
            }
        }

        let local_config_path = Path::new("base32k.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => config.merge(local_config),
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: Failed to load local config: {}", e);
                    }
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Fields set in `other` override the ones in `self`.
    pub fn merge(&mut self, other: Config) {
        let Settings {
            default_encoding,
            wrap,
            lenient,
        } = other.settings;
        if default_encoding.is_some() {
            self.settings.default_encoding = default_encoding;
        }
        if wrap.is_some() {
            self.settings.wrap = wrap;
        }
        if lenient.is_some() {
            self.settings.lenient = lenient;
        }
    }

    pub fn default_encoding(&self) -> Encoding {
        self.settings.default_encoding.unwrap_or_default()
    }

    pub fn wrap(&self) -> usize {
        self.settings.wrap.unwrap_or(0)
    }

    pub fn lenient(&self) -> bool {
        self.settings.lenient.unwrap_or(false)
    }

    /// Decoder options implied by these settings.
    pub fn decode_options(&self) -> DecodeOptions {
        if self.lenient() {
            DecodeOptions::lenient()
        } else {
            DecodeOptions {
                unknown_symbols: UnknownSymbolPolicy::Reject,
            }
        }
    }
}
