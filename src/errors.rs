//! Snippet-docs error handling.
//!
//! Every failure the generator can observe is a variant of [`SnippetError`].
//! Per-file errors are recovered by skipping the file; whole-run and
//! per-output errors are reported and folded into the generation report.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// The single error type of the crate.
#[derive(Error, Diagnostic, Debug)]
pub enum SnippetError {
    #[error("Read error: could not read '{file_name}'")]
    #[diagnostic(
        code(snippet_docs::load::read_failed),
        help("check that the file is readable; it was skipped")
    )]
    ReadFailed {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: '{file_name}' is not a well-formed snippet: {reason}")]
    #[diagnostic(
        code(snippet_docs::parse::malformed_source),
        help("the file was skipped; re-export the snippet from Xcode to repair it")
    )]
    MalformedSource {
        file_name: String,
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parsing stopped here")]
        span: SourceSpan,
    },

    #[error("Load error: directory '{}' cannot be listed", path.display())]
    #[diagnostic(
        code(snippet_docs::load::directory_unavailable),
        help("run the generator inside your CodeSnippets directory or pass --input-dir")
    )]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: could not write '{}'", target.display())]
    #[diagnostic(code(snippet_docs::write::write_failed))]
    WriteFailed {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnippetError {
    /// Builds a `MalformedSource` error pointing at `offset` inside `source`.
    pub fn malformed(
        file_name: impl Into<String>,
        source: &[u8],
        offset: usize,
        reason: impl Into<String>,
    ) -> Self {
        let file_name = file_name.into();
        let text = String::from_utf8_lossy(source).into_owned();
        let offset = offset.min(text.len());
        Self::MalformedSource {
            src: NamedSource::new(file_name.clone(), text),
            file_name,
            reason: reason.into(),
            span: SourceSpan::from(offset..offset),
        }
    }

    /// Short, stable name of the pipeline stage that failed.
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::ReadFailed { .. } | Self::DirectoryUnavailable { .. } => "load",
            Self::MalformedSource { .. } => "parse",
            Self::WriteFailed { .. } => "write",
        }
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Renders an error with full miette diagnostics.
pub fn render_report(error: &SnippetError) -> String {
    let handler = miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    if handler.render_report(&mut out, error).is_err() {
        return error.to_string();
    }
    out
}
