use std::path::PathBuf;

use clap::Parser;

/// An interactive shell over a virtual filesystem backed by a ZIP archive.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the ZIP archive that backs the virtual filesystem.
    #[arg(required = true)]
    pub archive: PathBuf,
}

/// Parses command-line arguments. This is the main entry point for the CLI
/// logic; `clap` reports usage errors and exits on its own.
pub fn run() -> Args {
    Args::parse()
}
