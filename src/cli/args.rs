//! Defines the command-line arguments for the snippet-docs CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure. Every flag is
//! optional: with none, the tool documents the current directory in place.

use clap::Parser;
use std::path::PathBuf;

use crate::config::GeneratorConfig;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "snippet-docs",
    version,
    about = "Generate README.md and SNIPPETS.md for a directory of Xcode code snippets."
)]
pub struct SnippetDocsArgs {
    /// Directory containing the `.codesnippet` files.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory the documents are written to. Defaults to the input directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Exit with a failure status when the input directory cannot be read
    /// or a document cannot be written.
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl SnippetDocsArgs {
    pub fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::in_dir(&self.input_dir).strict(self.strict);
        match &self.output_dir {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        }
    }
}
