use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::cli::output::{EventSink, RunEvent};
use crate::errors::SnippetError;
use crate::snippet::{Rejection, Snippet};
use crate::syntax::parser;

/// File extension Xcode uses for snippet definitions.
pub const SNIPPET_EXTENSION: &str = "codesnippet";

/// Why a discovered file did not make it into the catalog.
#[derive(Debug)]
pub enum SkipReason {
    Unreadable(SnippetError),
    Malformed(SnippetError),
    Rejected(Rejection),
}

/// A discovered file that was left out of the documentation.
#[derive(Debug)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

/// Everything the loader learned about one snippet directory.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Number of `.codesnippet` files found.
    pub discovered: usize,
    /// Parsed snippets that passed validation, in discovery order.
    pub snippets: Vec<Snippet>,
    pub skipped: Vec<SkippedFile>,
}

/// Loads snippet definitions from a directory.
///
/// The load follows this flow:
/// 1. List the directory (non-recursive, dot-entries excluded)
/// 2. Keep `.codesnippet` files
/// 3. Parse each file, skipping unreadable or malformed ones
/// 4. Drop snippets that fail validation
#[derive(Debug)]
pub struct SnippetDiscoverer;

impl SnippetDiscoverer {
    // =====================
    // Public API
    // =====================

    /// Lists the snippet files directly inside `dir`.
    ///
    /// The returned list is sorted so that processing order is deterministic.
    pub fn discover_snippet_files(dir: &Path) -> Result<Vec<PathBuf>, SnippetError> {
        let unavailable = |source: std::io::Error| SnippetError::DirectoryUnavailable {
            path: dir.to_path_buf(),
            source,
        };

        let metadata = std::fs::metadata(dir).map_err(unavailable)?;
        if !metadata.is_dir() {
            return Err(unavailable(std::io::Error::new(
                std::io::ErrorKind::Other,
                "not a directory",
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                // A dangling link inside the directory is not a listing failure.
                Err(e) if e.depth() > 0 => continue,
                Err(e) => {
                    let message = e.to_string();
                    return Err(unavailable(e.into_io_error().unwrap_or_else(|| {
                        std::io::Error::new(std::io::ErrorKind::Other, message)
                    })));
                }
            };

            if !entry.file_type().is_file() || Self::is_hidden(entry.path()) {
                continue;
            }
            if !Self::is_snippet_file(entry.path()) {
                continue;
            }
            files.push(entry.into_path());
        }
        files.sort();
        Ok(files)
    }

    /// Reads and parses a single snippet file.
    pub fn load_snippet_file(path: &Path) -> Result<Snippet, SnippetError> {
        let file_name = Self::file_name(path);
        let source = std::fs::read(path).map_err(|source| SnippetError::ReadFailed {
            file_name: file_name.clone(),
            source,
        })?;
        parser::parse(&source, &file_name)
    }

    /// Loads every valid snippet in `dir`, reporting progress to `sink`.
    pub fn load_catalog(dir: &Path, sink: &mut dyn EventSink) -> Result<Catalog, SnippetError> {
        let files = Self::discover_snippet_files(dir)?;
        sink.emit(&RunEvent::Discovered {
            count: files.len(),
        });

        let mut catalog = Catalog {
            discovered: files.len(),
            ..Catalog::default()
        };

        for path in &files {
            let file_name = Self::file_name(path);
            let reason = match Self::load_snippet_file(path) {
                Ok(snippet) => match snippet.validate() {
                    Ok(()) => {
                        catalog.snippets.push(snippet);
                        continue;
                    }
                    Err(rejection) => SkipReason::Rejected(rejection),
                },
                Err(e @ SnippetError::ReadFailed { .. }) => SkipReason::Unreadable(e),
                Err(e) => SkipReason::Malformed(e),
            };

            let skipped = SkippedFile { file_name, reason };
            sink.emit(&RunEvent::Skipped(&skipped));
            catalog.skipped.push(skipped);
        }

        sink.emit(&RunEvent::Loaded {
            valid: catalog.snippets.len(),
        });
        Ok(catalog)
    }

    // =====================
    // Internal - File System Utilities
    // =====================

    /// Returns true if the given path has a `.codesnippet` extension.
    fn is_snippet_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == SNIPPET_EXTENSION)
    }

    fn is_hidden(path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'))
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
