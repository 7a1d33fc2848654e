//! Per-snippet document with metadata and the full code of each entry.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{code_fence, inline_code};
use crate::snippet::Snippet;

const HEADER: &str = "\
# Detailed Snippet Documentation

This document contains the full code and details for each snippet.

---

";

/// The `SNIPPETS.md` document.
pub struct DetailDocument<'a> {
    snippets: &'a [Snippet],
}

impl<'a> DetailDocument<'a> {
    /// `snippets` must already be in documentation order.
    pub fn new(snippets: &'a [Snippet]) -> Self {
        Self { snippets }
    }
}

impl Display for DetailDocument<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(HEADER)?;
        for snippet in self.snippets {
            write!(f, "{}", Section(snippet))?;
        }
        Ok(())
    }
}

/// Heading, metadata block and code block for one snippet, closed by a rule.
struct Section<'a>(&'a Snippet);

impl Display for Section<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let snippet = self.0;
        // A heading cannot span lines.
        let title = snippet.title().replace(['\r', '\n'], " ");
        write!(f, "## {title}\n\n")?;

        // Two trailing spaces force a Markdown line break.
        write!(f, "**Language:** {}  \n", snippet.language_short())?;
        if !snippet.shortcut().is_empty() {
            write!(
                f,
                "**Completion Shortcut:** {}  \n",
                inline_code(snippet.shortcut())
            )?;
        }
        if !snippet.summary().is_empty() {
            write!(f, "**Description:** {}  \n", snippet.summary())?;
        }
        write!(f, "**File:** {}  \n\n", inline_code(snippet.source_name()))?;

        let fence = code_fence(snippet.contents());
        let language_id = snippet.language_short().to_lowercase();
        writeln!(f, "{fence}{language_id}")?;
        f.write_str(snippet.contents())?;
        write!(f, "\n{fence}\n\n---\n\n")
    }
}
