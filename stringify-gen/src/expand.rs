//! Recursive include expansion into a C string-literal body.

use std::collections::HashSet;
use std::fmt::Write as FmtWrite;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::directive;
use crate::error::GenError;
use crate::escape;

/// Expands one top-level source file into an output buffer.
///
/// Owns both the in-progress output and the set of filenames already
/// inlined, so a repeated or circular include is emitted at most once per
/// top-level expansion.
pub struct Expander {
    dir: PathBuf,
    visited: HashSet<String>,
    out: String,
}

impl Expander {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            visited: HashSet::new(),
            out: String::new(),
        }
    }

    /// Emit the full constant declaration for `filename`.
    pub fn stringify(&mut self, filename: &str, const_name: &str) -> Result<()> {
        self.visited.clear();
        writeln!(self.out, "static const char {const_name}[]= \\")?;
        self.expand_file(filename)?;
        writeln!(self.out, ";")?;
        Ok(())
    }

    /// Consume the expander, returning everything emitted so far.
    pub fn into_output(self) -> String {
        self.out
    }

    /// Inline `filename`'s lines, recursing into unvisited include targets
    /// at the point of the directive. Include targets resolve against the
    /// scan directory, same as top-level files.
    fn expand_file(&mut self, filename: &str) -> Result<()> {
        let path = self.dir.join(filename);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(GenError::FileNotFound { path }.into());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        self.visited.insert(filename.to_string());

        for raw in content.lines() {
            // Only trailing CR/LF is stripped; interior whitespace stays.
            let line = raw.trim_end_matches(['\r', '\n']);
            match directive::include_target(line) {
                Some(target) if !self.visited.contains(target) => {
                    self.expand_file(target)?;
                }
                // Already-inlined target: drop the directive line entirely.
                Some(_) => {}
                None => {
                    self.out.push_str(&escape::string_literal(line));
                    self.out.push('\n');
                }
            }
        }

        Ok(())
    }
}
