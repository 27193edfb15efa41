//! stringify-gen library
//!
//! Converts a directory of kernel source files into C string-literal
//! constants for embedding in a generated header, so a build can ship
//! source text inside a compiled binary without runtime file access.
//! Simplified `#include <.../name>` directives are resolved by inlining
//! the referenced file at the point of the directive.

pub mod directive;
pub mod error;
pub mod escape;
pub mod expand;

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::{Context, Result};

pub use error::GenError;
use expand::Expander;

/// Banner emitted at the top of tagged-mode headers.
pub const GENERATED_BANNER: &str = "/* This is an auto-generated file. Do not edit manually*/";

/// Extension filter used by legacy single-argument invocations.
pub const LEGACY_EXT: &str = ".cl";

/// Naming scheme for generated constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantNaming {
    /// `g_<var>_<tag>` (three-argument invocation shape).
    Tagged(String),
    /// `cl_<var>` (single-argument legacy shape).
    Legacy,
}

impl ConstantNaming {
    /// Full array name for a source file's variable stem.
    pub fn constant_name(&self, var: &str) -> String {
        match self {
            ConstantNaming::Tagged(tag) => format!("g_{var}_{tag}"),
            ConstantNaming::Legacy => format!("cl_{var}"),
        }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Substring filter applied to directory entry names.
    pub ext: String,
    pub naming: ConstantNaming,
    /// Sort entries by name instead of keeping OS listing order.
    pub sorted: bool,
}

impl GenConfig {
    /// Tagged mode: caller-supplied filter and type tag, banner emitted.
    pub fn tagged(ext: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            ext: ext.into(),
            naming: ConstantNaming::Tagged(tag.into()),
            sorted: false,
        }
    }

    /// Legacy mode: fixed `.cl` filter, `cl_` constant prefix, no banner.
    pub fn legacy() -> Self {
        Self {
            ext: LEGACY_EXT.to_string(),
            naming: ConstantNaming::Legacy,
            sorted: false,
        }
    }
}

/// Generate a header with one constant per matching file in `dir`.
///
/// An entry qualifies when its name contains `config.ext` anywhere. Entries
/// are visited in whatever order the directory listing yields unless
/// `config.sorted` is set. Any unreadable entry aborts the whole run; the
/// returned header is complete or the run failed.
pub fn generate_dir(dir: &Path, config: &GenConfig) -> Result<String> {
    if !dir.is_dir() {
        return Err(GenError::DirectoryNotFound {
            path: dir.to_path_buf(),
        }
        .into());
    }

    let mut names = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to list directory {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    if config.sorted {
        names.sort();
    }

    let mut output = String::new();
    if matches!(config.naming, ConstantNaming::Tagged(_)) {
        writeln!(output, "{GENERATED_BANNER}")?;
        writeln!(output)?;
    }

    for name in names.iter().filter(|name| name.contains(&config.ext)) {
        let var = name.replace(&config.ext, "");
        let const_name = config.naming.constant_name(&var);
        tracing::debug!("Stringifying {} as {}", name, const_name);
        output.push_str(&stringify_file(dir, name, &const_name)?);
    }

    Ok(output)
}

/// Stringify a single source file into one named constant declaration.
///
/// Uses a fresh include expansion per call, so each top-level file gets its
/// own visited set.
pub fn stringify_file(dir: &Path, filename: &str, const_name: &str) -> Result<String> {
    let mut expander = Expander::new(dir);
    expander.stringify(filename, const_name)?;
    Ok(expander.into_output())
}
