//! The snippet-docs Command-Line Interface.
//!
//! This module is the main entry point for the binary and wires argument
//! parsing, console output and the generation pipeline together.

use crate::cli::args::SnippetDocsArgs;
use crate::cli::output::ConsoleSink;
use crate::engine;
use clap::Parser;
use std::process;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = SnippetDocsArgs::parse();
    let config = args.config();

    let mut console = ConsoleSink::new(
        stream_colors(args.no_color, atty::Stream::Stdout),
        stream_colors(args.no_color, atty::Stream::Stderr),
    );
    console.banner();

    let report = engine::generate(&config, &mut console);

    let code = report.exit_code(config.strict);
    if code != 0 {
        process::exit(code);
    }
}

/// Colors only when allowed and the given stream is a terminal.
fn stream_colors(no_color: bool, stream: atty::Stream) -> bool {
    !no_color && atty::is(stream)
}
