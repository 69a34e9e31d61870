pub use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dotkit")]
#[command(about = "Dotted-path lookups and structure transforms on JSON documents")]
pub struct Args {
    /// Path to the dotkit config directory (defaults to ~/.dotkit)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Log level for diagnostics on stderr (overrides the config file)
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    #[command(subcommand)]
    pub command: crate::Command,
}
