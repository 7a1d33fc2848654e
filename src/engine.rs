use std::path::PathBuf;

use crate::cli::output::{EventSink, RunEvent};
use crate::config::GeneratorConfig;
use crate::discovery::{SkippedFile, SnippetDiscoverer};
use crate::errors::SnippetError;
use crate::render::{DetailDocument, IndexDocument, DETAIL_FILE_NAME, INDEX_FILE_NAME};
use crate::snippet::sort_for_docs;
use crate::writer::write_atomic;

// ============================================================================
// GENERATION REPORT
// ============================================================================

/// What a generation run did.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// `.codesnippet` files found in the input directory.
    pub discovered: usize,
    /// Snippets that made it into the documentation.
    pub documented: usize,
    pub skipped: Vec<SkippedFile>,
    pub written: Vec<PathBuf>,
    pub write_failures: Vec<SnippetError>,
    /// Set when the input directory could not be listed.
    pub directory_error: Option<SnippetError>,
}

impl GenerationReport {
    /// True when nothing went wrong at the run or output level.
    ///
    /// Per-file skips never make a run unsuccessful.
    pub fn is_clean(&self) -> bool {
        self.directory_error.is_none() && self.write_failures.is_empty()
    }

    /// Process exit code under the given strictness.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && !self.is_clean() {
            1
        } else {
            0
        }
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Runs load, sort, render and write for one snippet directory.
///
/// Failures are recorded in the report rather than returned: a malformed
/// snippet is skipped, an unreadable directory means nothing is generated,
/// and a failed index write does not stop the detail document.
pub fn generate(config: &GeneratorConfig, sink: &mut dyn EventSink) -> GenerationReport {
    let mut report = GenerationReport::default();

    let catalog = match SnippetDiscoverer::load_catalog(config.input_dir(), sink) {
        Ok(catalog) => catalog,
        Err(error) => {
            sink.emit(&RunEvent::DirectoryUnavailable(&error));
            report.directory_error = Some(error);
            return report;
        }
    };

    report.discovered = catalog.discovered;
    report.skipped = catalog.skipped;
    let mut snippets = catalog.snippets;

    if snippets.is_empty() {
        sink.emit(&RunEvent::NothingToGenerate);
        return report;
    }

    sort_for_docs(&mut snippets);
    report.documented = snippets.len();
    sink.emit(&RunEvent::Generating);

    let index = IndexDocument::new(&snippets).to_string();
    write_document(config, INDEX_FILE_NAME, &index, &mut report, sink);

    let detail = DetailDocument::new(&snippets).to_string();
    write_document(config, DETAIL_FILE_NAME, &detail, &mut report, sink);

    sink.emit(&RunEvent::Finished {
        written: report.written.len(),
        failed: report.write_failures.len(),
    });
    report
}

fn write_document(
    config: &GeneratorConfig,
    file_name: &str,
    content: &str,
    report: &mut GenerationReport,
    sink: &mut dyn EventSink,
) {
    match write_atomic(config.output_dir(), file_name, content) {
        Ok(path) => {
            sink.emit(&RunEvent::Written { path: &path });
            report.written.push(path);
        }
        Err(error) => {
            sink.emit(&RunEvent::WriteFailed(&error));
            report.write_failures.push(error);
        }
    }
}
