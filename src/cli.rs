use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[command(version, about = "Convert CSV data to a typed JSON array", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input CSV file to convert (UTF-8, first row is the header)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Destination JSON file, created or overwritten
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
}
