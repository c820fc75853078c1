use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bin2hexwords",
    version,
    about = "Converts a binary file into little-endian 32-bit hex words, one per line",
    override_usage = "bin2hexwords input.bin output.hex"
)]
pub struct Cli {
    /// Binary file to convert.
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,
    /// Text file to write; truncated if it already exists.
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
}
