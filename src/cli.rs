//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::error::PackError;
use crate::core::filter::ExtensionFilter;
use crate::core::render::{RenderConfig, ReportFormat};
use crate::core::util::MIB;
use crate::flows::pack::PackConfig;

/// zipprompt - flatten a zipped repository into prompt-ready text files.
#[derive(Parser, Debug)]
#[command(name = "zipprompt")]
#[command(
    author,
    version,
    about,
    long_about = r#"zipprompt unzips a repository archive, collects its source files, and writes
them as one delimited text file ready to paste into an LLM prompt.

Output format:
    ----
    <relative path>
    <file contents>
    ...
    --END--

The output lands in the output directory as <repo>.txt, or as <repo>_1.txt,
<repo>_2.txt, ... when --parts is given. The estimated token count
(bytes / 3.5, rounded up) is printed when done.

Examples:
    zipprompt project-main.zip
    zipprompt project-main.zip --parts --part-size 2
    zipprompt project-main.zip --all-files --format json
"#
)]
pub struct Cli {
    /// Path to the zip archive containing the repository.
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Split the output into numbered parts.
    #[arg(
        short,
        long,
        long_help = "Write the output as <repo>_1.txt, <repo>_2.txt, ... each at most\n\
--part-size MiB. Parts are cut at byte offsets, so a file or even a multi-byte\n\
character may span two parts."
    )]
    pub parts: bool,

    /// Size of each part in MiB (only used with --parts).
    #[arg(
        short = 's',
        long,
        default_value = "1",
        value_name = "MB",
        env = "ZIPPROMPT_PART_SIZE"
    )]
    pub part_size: usize,

    /// Exact size of each part in bytes (overrides --part-size).
    #[arg(long, value_name = "BYTES")]
    pub part_bytes: Option<usize>,

    /// Directory receiving the output files.
    #[arg(
        short,
        long,
        default_value = ".",
        value_name = "DIR",
        env = "ZIPPROMPT_OUTPUT_DIR"
    )]
    pub output_dir: PathBuf,

    /// Extensions to collect (comma-separated), replacing the defaults.
    #[arg(
        long,
        value_name = "EXTS",
        value_delimiter = ',',
        conflicts_with = "all_files",
        long_help = "Comma-separated list of file extensions to collect, replacing the\n\
built-in source list (go, js, ts, py, java, c, cpp, cs, php, rb, swift, html,\n\
css, json, xml). Matching is case-insensitive.\n\n\
Example: --ext rs,toml,md"
    )]
    pub ext: Vec<String>,

    /// Collect every UTF-8 text file regardless of extension.
    #[arg(long)]
    pub all_files: bool,

    /// Honor .gitignore and .ignore files inside the archive.
    #[arg(long)]
    pub respect_ignore: bool,

    /// Report format (text/json).
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the arguments into a pipeline configuration
    pub fn pack_config(&self) -> Result<PackConfig> {
        let max_part_size = match self.part_bytes {
            Some(bytes) => bytes,
            None => match self.part_size.checked_mul(MIB) {
                Some(bytes) => bytes,
                None => bail!("--part-size {} MiB is too large", self.part_size),
            },
        };

        let filter = if self.all_files {
            None
        } else if self.ext.is_empty() {
            Some(ExtensionFilter::source_defaults())
        } else {
            Some(ExtensionFilter::from_list(&self.ext))
        };

        Ok(PackConfig {
            split_into_parts: self.parts,
            max_part_size,
            output_dir: self.output_dir.clone(),
            filter,
            respect_ignore: self.respect_ignore,
            scratch_parent: None,
        })
    }

    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

/// Build the log filter: a non-empty, valid RUST_LOG wins over the CLI level
fn log_filter(rust_log: Option<&str>, level: Level) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

fn init_logging(level: Level) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(rust_log.as_deref(), level);
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level());

    let format: ReportFormat = cli
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let config = cli.pack_config()?;

    crate::flows::pack::run_pack(&cli.archive, &config, render_config).map_err(|err| {
        let code = err
            .downcast_ref::<PackError>()
            .map(|e| e.kind().as_str())
            .unwrap_or("ERROR");
        err.context(format!("[{}] failed to pack {}", code, cli.archive.display()))
    })
}
