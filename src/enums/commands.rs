use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        force: bool,
    },
    /// Decode a single payload file, or stdin when no path is given
    Decode {
        path: Option<PathBuf>,
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Decode several payload files and report which ones fail
    Check {
        #[clap(required = true)]
        paths: Vec<PathBuf>,
    },
}
