//! doxml2adoc — generate AsciiDoc API references from Doxygen XML.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `doxml2adoc < xml/input_8h.xml > input.adoc`
//! - **file mode**: `doxml2adoc xml/index.xml xml/*_8h.xml`, writing each
//!   result next to its input with an `.adoc` extension

use anyhow::{Context, Result};
use clap::Parser;
use doxml2adoc::{ConvertOptions, LogDiagnostics};
use log::LevelFilter;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "doxml2adoc",
    about = "Convert Doxygen XML documentation into AsciiDoc",
    version
)]
struct Cli {
    /// Input XML files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Directory containing the compound files referenced by an index
    #[arg(short = 'b', long, default_value = ".")]
    base_dir: PathBuf,

    /// Also emit a Typedefs section
    #[arg(long)]
    typedefs: bool,

    /// Print progress while converting
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let options = ConvertOptions::new(&cli.base_dir).with_typedefs(cli.typedefs);

    if cli.files.is_empty() {
        return stdin_mode(&options);
    }

    file_mode(&cli.files, &options)
}

/// Warnings by default; `RUST_LOG` still overrides the flags.
fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// stdin mode: read XML from stdin, write AsciiDoc to stdout.
fn stdin_mode(options: &ConvertOptions) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let output = doxml2adoc::convert(&input, options, &mut LogDiagnostics)?;
    print!("{}", output);
    Ok(())
}

/// file mode: convert every input, stopping at the first failure.
fn file_mode(patterns: &[String], options: &ConvertOptions) -> Result<()> {
    let input_files = expand_globs(patterns)?;

    for path in &input_files {
        log::debug!("Converting {}", path.display());
        doxml2adoc::convert_file(path, options, &mut LogDiagnostics)
            .with_context(|| format!("failed to convert {}", path.display()))?;
        log::info!("Wrote {}", doxml2adoc::output_path(path).display());
    }

    Ok(())
}

/// File extension recognized when scanning directories.
const XML_EXTENSION: &str = "xml";

/// Expand glob patterns into a list of real file paths.
/// Bare directories contribute the XML files directly inside them.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, take its *.xml entries without recursing
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(XML_EXTENSION) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            log::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
