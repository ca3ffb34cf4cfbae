use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "moveprofile.toml")]
    pub config: PathBuf,

    /// Recorded moves JSON (overrides config)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Render to PNG instead of opening a window
    #[arg(long, default_value_t = false)]
    pub nogui: bool,

    /// PNG path used with --nogui
    #[arg(long, default_value = "availableMoves.png")]
    pub png: PathBuf,
}
