use clap::Args;

/// Arguments shared by every mode
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress warnings
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, default_value = "104857600")]
    pub max_size: usize,

    /// Process files exceeding --max-size limit
    #[arg(long)]
    pub force: bool,

    /// Load settings from this TOML file on top of the standard locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,
}
