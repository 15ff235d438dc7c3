mod commands;

pub use commands::*;

use crate::types::OutputFormat;
use clap::Parser;

#[derive(Parser)]
#[command(name = "rolo")]
#[command(about = "Browse, search and locally curate a synthetic contact book", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: ROLO_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Skip the remote fetch; show locally added contacts only
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
