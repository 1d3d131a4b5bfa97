use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "helix")]
#[command(about = "Helix HR assistant demo")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
