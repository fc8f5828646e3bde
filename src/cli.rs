//! # Command-line interface
//!
//! Defines the command-line structure of the program with `clap`: the two
//! subcommands and their arguments. Every way a user interacts with the
//! program from a shell is declared here.

use clap::Parser;
use std::path::PathBuf;

/// An LSB (least-significant-bit) steganography tool that hides a payload
/// file inside a lossless image (PNG, BMP, ...) and recovers it again.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "An LSB (least-significant-bit) steganography tool that hides a payload file inside a lossless image (PNG, BMP, ...) and recovers it again."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands: hide and recover.
#[derive(Parser, Debug)]
pub enum Commands {
    /// Hide the contents of a file inside a lossless image (PNG, BMP, ...).
    Hide(HideArgs),

    /// Recover a hidden payload from a previously doctored image.
    Recover(RecoverArgs),
}

/// Arguments of the 'hide' command.
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// Path of the carrier image (PNG, BMP, ...).
    #[arg(short, long)]
    pub image: PathBuf,

    /// Path of the file whose contents are hidden.
    #[arg(short, long)]
    pub text: PathBuf,

    /// Output path of the doctored image. Defaults to
    /// `hidden_<image file name>` next to the carrier.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments of the 'recover' command.
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// Path of the image carrying the hidden payload.
    #[arg(short, long)]
    pub image: PathBuf,

    /// Output path of the recovered payload. Defaults to
    /// `recovered_<image stem>.txt` next to the image.
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}
