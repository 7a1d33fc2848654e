//! Run configuration.

use std::path::{Path, PathBuf};

/// Where the generator reads snippets from and writes documents to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Treat an unreadable input directory or a failed write as a failed run.
    pub strict: bool,
}

impl GeneratorConfig {
    /// Reads from and writes to the same directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            output_dir: dir.clone(),
            input_dir: dir,
            strict: false,
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
