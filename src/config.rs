//! Configuration for GeneSearch
//!
//! Centralized configuration with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GeneError, Result};

/// Main configuration for a GeneSearch run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Tab-delimited record table: `name\torganism\tformula` per line
    pub sequences_path: PathBuf,

    /// Command script: one `keyword\targ...` command per line
    pub commands_path: PathBuf,

    // -------------------------------------------------------------------------
    // Report Configuration
    // -------------------------------------------------------------------------
    /// Report file (truncated on open)
    pub output_path: PathBuf,

    /// First report header line
    pub author: String,

    /// Second report header line
    pub title: String,

    /// Mirror every report line to stdout
    pub echo_console: bool,

    // -------------------------------------------------------------------------
    // Error Handling
    // -------------------------------------------------------------------------
    /// What to do when a single command fails to decode or parse
    pub error_policy: ErrorPolicy,
}

/// Handling of per-command failures (bad pattern, missing arguments)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the run and return the error (lines already written are kept)
    #[default]
    Abort,

    /// Report an error line for the command and continue with the next one
    Skip,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequences_path: PathBuf::from("sequences.txt"),
            commands_path: PathBuf::from("commands.txt"),
            output_path: PathBuf::from("genedata.txt"),
            author: "Maksim Porva".to_string(),
            title: "Genetic Searching".to_string(),
            echo_console: true,
            error_policy: ErrorPolicy::Abort,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations that would clobber an input file
    ///
    /// The report file is truncated before the script is read. Paths are
    /// compared after resolving `..`, relative segments and symlinks.
    pub fn validate(&self) -> Result<()> {
        let output = resolve_path(&self.output_path);
        let clobbers = [&self.sequences_path, &self.commands_path]
            .into_iter()
            .any(|input| *input == self.output_path || resolve_path(input) == output);

        if clobbers {
            return Err(GeneError::Config(format!(
                "output path {} is also an input path",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}

/// Canonical form of `path`, or of its parent joined with the file name
/// when the file does not exist yet
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }

    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            fs::canonicalize(parent)
                .map(|dir| dir.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record table path
    pub fn sequences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.sequences_path = path.into();
        self
    }

    /// Set the command script path
    pub fn commands_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.commands_path = path.into();
        self
    }

    /// Set the report file path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Set the first header line
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.config.author = author.into();
        self
    }

    /// Set the second header line
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Enable or disable the console copy of the report
    pub fn echo_console(mut self, enabled: bool) -> Self {
        self.config.echo_console = enabled;
        self
    }

    /// Set the per-command error policy
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.error_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
