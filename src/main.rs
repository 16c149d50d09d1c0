//! zipprompt - Convert a zipped repository into text files for LLM prompts
//!
//! zipprompt:
//! - Unzips the archive into a scratch directory
//! - Collects the repository's UTF-8 source files
//! - Writes them as one delimited text file, or as size-bounded parts
//! - Reports an estimated token count

use anyhow::Result;
use clap::Parser;

use zipprompt::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
