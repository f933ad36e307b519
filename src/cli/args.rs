use clap::Parser;
use std::path::PathBuf;

use squarepad::ErrorPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "squarepad",
    version,
    about = "Pad every image in a directory to a square with transparent borders"
)]
pub struct CliArgs {
    /// Directory holding the images to square [default: ./public/content/maps]
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Where padded images are written; defaults to the source directory (in-place overwrite)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Case-sensitive file name suffix to process; repeat for several [default: .png .jpg]
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// What to do when a single file fails (continue or abort)
    #[arg(long, value_enum)]
    pub on_error: Option<ErrorPolicy>,

    /// Copy an existing output file to <name>.bak before overwriting it
    #[arg(long, default_value_t = false)]
    pub backup: bool,

    /// Load settings from a preset file; flags given on the command line win
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the effective settings to a preset file and exit
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
