//! stringify-gen - kernel source embedding tool
//!
//! Scans a directory for kernel source files and prints a generated C
//! header with one string-literal constant per file, resolving simplified
//! `#include <.../name>` directives by inlining the referenced file.
//!
//! # Usage
//!
//! ```bash
//! # Tagged mode: substring filter and a tag appended to constant names
//! stringify-gen path/to/kernels .cl opencl > kernelcache/kernels_cl.h
//!
//! # Legacy mode: fixed .cl filter, cl_ constant prefix, no banner
//! stringify-gen path/to/kernels > cache/kernels.h
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stringify_gen::{generate_dir, GenConfig};

/// Generate C string-literal headers from kernel source files
#[derive(Parser)]
#[command(name = "stringify-gen")]
#[command(about = "Generate C string-literal headers from kernel source files")]
#[command(version)]
struct Cli {
    /// Directory containing kernel source files
    dir: PathBuf,

    /// Filename substring filter, e.g. ".cl" (legacy .cl mode when omitted)
    #[arg(requires = "type_tag")]
    ext: Option<String>,

    /// Tag appended to generated constant names
    #[arg(requires = "ext")]
    type_tag: Option<String>,

    /// Write the header to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sort directory entries by name for reproducible output
    #[arg(long)]
    sorted: bool,
}

fn main() -> Result<()> {
    // Initialize logging; stdout carries the generated header, so
    // diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match (cli.ext, cli.type_tag) {
        (Some(ext), Some(type_tag)) => GenConfig::tagged(ext, type_tag),
        _ => GenConfig::legacy(),
    };
    config.sorted = cli.sorted;

    let header = generate_dir(&cli.dir, &config)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &header)
                .with_context(|| format!("Failed to write header to {}", path.display()))?;
            tracing::info!("Generated header: {}", path.display());
        }
        None => print!("{header}"),
    }

    Ok(())
}
