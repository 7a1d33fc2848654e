//! Overview document: installation notes and one table row per snippet.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{escape_cell, inline_code, DETAIL_FILE_NAME};
use crate::snippet::Snippet;

/// Shown in a table cell when the snippet has no value for that column.
const EMPTY_CELL: &str = "-";

const HEADER: &str = "\
# Xcode Code Snippets Collection

A collection of useful Xcode code snippets for Swift development.

## 📥 Installation

To use these snippets in Xcode:

1. Download the desired `.codesnippet` file
2. Place it in: `~/Library/Developer/Xcode/UserData/CodeSnippets/`
3. Restart Xcode
4. Type the completion prefix to use the snippet

## 📚 Available Snippets

| Title | Description | Shortcut | Language | File |
|-------|-------------|----------|----------|------|
";

/// The `README.md` overview table.
pub struct IndexDocument<'a> {
    snippets: &'a [Snippet],
}

impl<'a> IndexDocument<'a> {
    /// `snippets` must already be in documentation order.
    pub fn new(snippets: &'a [Snippet]) -> Self {
        Self { snippets }
    }
}

impl Display for IndexDocument<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(HEADER)?;
        for snippet in self.snippets {
            writeln!(f, "{}", TableRow(snippet))?;
        }
        write!(
            f,
            "\n\n## 📖 Detailed Documentation\n\n\
             For detailed documentation including the full code of each snippet, \
             see [{DETAIL_FILE_NAME}](./{DETAIL_FILE_NAME}).\n"
        )
    }
}

/// One `| Title | Description | Shortcut | Language | File |` row.
struct TableRow<'a>(&'a Snippet);

impl Display for TableRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let snippet = self.0;
        let shortcut = if snippet.shortcut().is_empty() {
            EMPTY_CELL.to_string()
        } else {
            inline_code(&escape_cell(snippet.shortcut()))
        };
        let summary = if snippet.summary().is_empty() {
            EMPTY_CELL.to_string()
        } else {
            escape_cell(snippet.summary())
        };

        write!(
            f,
            "| {} | {} | {} | {} | [Link](./{}) |",
            escape_cell(snippet.title()),
            summary,
            shortcut,
            escape_cell(snippet.language_short()),
            link_target(snippet.source_name()),
        )
    }
}

/// Relative link target for a file name; characters that end a Markdown link are encoded.
fn link_target(file_name: &str) -> String {
    let mut out = String::with_capacity(file_name.len());
    for c in file_name.chars() {
        match c {
            ' ' => out.push_str("%20"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '|' => out.push_str("%7C"),
            _ => out.push(c),
        }
    }
    out
}
