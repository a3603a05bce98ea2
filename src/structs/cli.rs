use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "completion-inspect")]
#[clap(about = "Decode and check text-completion API responses", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
