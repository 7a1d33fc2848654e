//! Handles all operator-facing output for the CLI.
//!
//! The generator reports progress as a stream of [`RunEvent`]s. By routing
//! every message through an [`EventSink`], the console output stays in one
//! place and tests can capture the same stream without a terminal.

use std::io::Write;
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::discovery::{SkipReason, SkippedFile};
use crate::errors::{render_report, SnippetError};

// ============================================================================
// EVENTS
// ============================================================================

/// Something worth telling the operator about during a run.
#[derive(Debug)]
pub enum RunEvent<'a> {
    Discovered { count: usize },
    Skipped(&'a SkippedFile),
    Loaded { valid: usize },
    DirectoryUnavailable(&'a SnippetError),
    NothingToGenerate,
    Generating,
    Written { path: &'a Path },
    WriteFailed(&'a SnippetError),
    Finished { written: usize, failed: usize },
}

/// Receives run events as they happen.
pub trait EventSink {
    fn emit(&mut self, event: &RunEvent<'_>);
}

// ============================================================================
// OUTPUT SINKS: EventLog and ConsoleSink implementations
// ============================================================================

/// EventLog: records a one-line summary of each event for tests.
#[derive(Debug, Default)]
pub struct EventLog {
    lines: Vec<String>,
}

impl EventLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &RunEvent<'_>) {
        let line = match event {
            RunEvent::Discovered { count } => format!("discovered {count}"),
            RunEvent::Skipped(skipped) => format!("skipped {}", skipped.file_name),
            RunEvent::Loaded { valid } => format!("loaded {valid}"),
            RunEvent::DirectoryUnavailable(_) => "directory unavailable".to_string(),
            RunEvent::NothingToGenerate => "nothing to generate".to_string(),
            RunEvent::Generating => "generating".to_string(),
            RunEvent::Written { path } => format!("wrote {}", display_name(path)),
            RunEvent::WriteFailed(SnippetError::WriteFailed { target, .. }) => {
                format!("write failed {}", display_name(target))
            }
            RunEvent::WriteFailed(error) => format!("write failed {error}"),
            RunEvent::Finished { written, failed } => format!("finished {written}/{failed}"),
        };
        self.lines.push(line);
    }
}

/// ConsoleSink: writes progress to stdout and problems to stderr.
pub struct ConsoleSink {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl ConsoleSink {
    /// Colors are decided per stream so a redirected stream stays plain.
    pub fn new(stdout_colors: bool, stderr_colors: bool) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice(stdout_colors)),
            stderr: StandardStream::stderr(color_choice(stderr_colors)),
        }
    }

    /// Prints the start-of-run banner.
    pub fn banner(&mut self) {
        print_line(
            &mut self.stdout,
            Some(Color::Cyan),
            "🚀 Starting Xcode Snippet Documentation Generator\n",
        );
    }

    fn skipped(&mut self, skipped: &SkippedFile) {
        let headline = skip_headline(skipped);
        match &skipped.reason {
            SkipReason::Rejected(_) => {
                print_line(&mut self.stdout, Some(Color::Yellow), &headline)
            }
            SkipReason::Unreadable(error) | SkipReason::Malformed(error) => {
                print_line(&mut self.stderr, Some(Color::Yellow), &headline);
                print_line(&mut self.stderr, None, &render_report(error));
            }
        }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &RunEvent<'_>) {
        match event {
            RunEvent::Discovered { count } => print_line(
                &mut self.stdout,
                None,
                &format!("📂 Found {count} snippet files"),
            ),
            RunEvent::Skipped(skipped) => self.skipped(skipped),
            RunEvent::Loaded { valid } => print_line(
                &mut self.stdout,
                Some(Color::Green),
                &format!("✅ Successfully parsed {valid} valid snippets"),
            ),
            RunEvent::DirectoryUnavailable(error) => {
                print_line(&mut self.stderr, Some(Color::Red), "❌ Error reading directory");
                print_line(&mut self.stderr, None, &render_report(error));
            }
            RunEvent::NothingToGenerate => print_line(
                &mut self.stdout,
                Some(Color::Yellow),
                "⚠️  No valid snippets found. Make sure you're running this in the CodeSnippets directory.",
            ),
            RunEvent::Generating => {
                print_line(&mut self.stdout, None, "\n📝 Generating documentation...\n")
            }
            RunEvent::Written { path } => print_line(
                &mut self.stdout,
                Some(Color::Green),
                &format!("✅ Generated: {}", display_name(path)),
            ),
            RunEvent::WriteFailed(error) => {
                print_line(
                    &mut self.stderr,
                    Some(Color::Red),
                    &format!("❌ {error} ({} stage)", error.stage()),
                );
                print_line(&mut self.stderr, None, &render_report(error));
            }
            RunEvent::Finished { written, failed } => {
                let (color, headline) = if *failed == 0 {
                    (Color::Green, "🎉 Documentation generation complete!")
                } else {
                    (Color::Yellow, "⚠️  Documentation generation finished with errors")
                };
                print_line(&mut self.stdout, Some(color), &format!("\n{headline}"));
                print_line(
                    &mut self.stdout,
                    None,
                    &format!("📄 Files generated: {written}, failed: {failed}"),
                );
            }
        }
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn color_choice(enabled: bool) -> ColorChoice {
    if enabled {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

/// First console line for a skipped file.
fn skip_headline(skipped: &SkippedFile) -> String {
    let name = &skipped.file_name;
    match &skipped.reason {
        SkipReason::Rejected(rejection) => format!("⚠️  Skipped {name}: {rejection}"),
        SkipReason::Unreadable(error) => {
            format!("⚠️  Failed to read: {name} ({} stage)", error.stage())
        }
        SkipReason::Malformed(error) => {
            format!("⚠️  Failed to parse: {name} ({} stage)", error.stage())
        }
    }
}

fn print_line(stream: &mut StandardStream, color: Option<Color>, text: &str) {
    if let Some(color) = color {
        let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    }
    let _ = writeln!(stream, "{text}");
    let _ = stream.reset();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
