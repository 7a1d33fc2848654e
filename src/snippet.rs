//! The in-memory snippet model.
//!
//! A [`Snippet`] is built once by the parser through a [`SnippetBuilder`] and
//! is read-only afterwards.

use std::cmp::Ordering;
use std::fmt;

/// Title Xcode gives to a freshly created, unedited snippet.
pub const PLACEHOLDER_TITLE: &str = "My Code Snippet";

/// Separator between the components of a language tag.
const LANGUAGE_SEPARATOR: char = '.';

/// One parsed `.codesnippet` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    identifier: String,
    title: String,
    summary: String,
    shortcut: String,
    language: String,
    contents: String,
    source_name: String,
}

/// Why a parsed snippet was left out of the generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyTitle,
    PlaceholderTitle,
    EmptyContents,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptyTitle => write!(f, "snippet has no title"),
            Rejection::PlaceholderTitle => {
                write!(f, "snippet still uses the template title '{PLACEHOLDER_TITLE}'")
            }
            Rejection::EmptyContents => write!(f, "snippet has no code"),
        }
    }
}

impl Snippet {
    pub fn builder(source_name: impl Into<String>) -> SnippetBuilder {
        SnippetBuilder::new(source_name)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short description; empty when the snippet has none.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Completion prefix typed in Xcode to expand the snippet; empty when unset.
    pub fn shortcut(&self) -> &str {
        &self.shortcut
    }

    /// Full language tag, e.g. `Xcode.SourceCodeLanguage.Swift`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Last component of the language tag, or the whole tag if it has no separator.
    pub fn language_short(&self) -> &str {
        self.language
            .rsplit(LANGUAGE_SEPARATOR)
            .next()
            .unwrap_or(&self.language)
    }

    /// Code body exactly as stored in the source file.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// File name (not path) of the originating `.codesnippet` file.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Checks the title/placeholder/contents rules that gate documentation.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.title.is_empty() {
            return Err(Rejection::EmptyTitle);
        }
        if self.title == PLACEHOLDER_TITLE {
            return Err(Rejection::PlaceholderTitle);
        }
        if self.contents.trim().is_empty() {
            return Err(Rejection::EmptyContents);
        }
        Ok(())
    }

    /// Output order: title bytes first, then source name so ties stay deterministic.
    pub fn doc_order(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.source_name.cmp(&other.source_name))
    }
}

/// Sorts snippets into documentation order.
pub fn sort_for_docs(snippets: &mut [Snippet]) {
    snippets.sort_by(Snippet::doc_order);
}

// =====================
// Builder
// =====================

/// The six plist keys the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKey {
    Identifier,
    Title,
    Summary,
    CompletionPrefix,
    Language,
    Contents,
}

impl SnippetKey {
    /// Maps an `IDECodeSnippet*` plist key to its role.
    pub fn from_plist_key(key: &str) -> Option<Self> {
        match key {
            "IDECodeSnippetIdentifier" => Some(Self::Identifier),
            "IDECodeSnippetTitle" => Some(Self::Title),
            "IDECodeSnippetSummary" => Some(Self::Summary),
            "IDECodeSnippetCompletionPrefix" => Some(Self::CompletionPrefix),
            "IDECodeSnippetLanguage" => Some(Self::Language),
            "IDECodeSnippetContents" => Some(Self::Contents),
            _ => None,
        }
    }

    /// Whether the value keeps its surrounding whitespace.
    pub fn preserves_whitespace(self) -> bool {
        matches!(self, Self::Contents)
    }
}

/// Mutable staging area used while a source document is scanned.
#[derive(Debug, Default)]
pub struct SnippetBuilder {
    identifier: String,
    title: String,
    summary: String,
    shortcut: String,
    language: String,
    contents: String,
    source_name: String,
}

impl SnippetBuilder {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Self::default()
        }
    }

    /// Stores `value` for `key`; later values for the same key win.
    pub fn set(&mut self, key: SnippetKey, value: String) -> &mut Self {
        let slot = match key {
            SnippetKey::Identifier => &mut self.identifier,
            SnippetKey::Title => &mut self.title,
            SnippetKey::Summary => &mut self.summary,
            SnippetKey::CompletionPrefix => &mut self.shortcut,
            SnippetKey::Language => &mut self.language,
            SnippetKey::Contents => &mut self.contents,
        };
        *slot = value;
        self
    }

    pub fn identifier(mut self, value: impl Into<String>) -> Self {
        self.set(SnippetKey::Identifier, value.into());
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.set(SnippetKey::Title, value.into());
        self
    }

    pub fn summary(mut self, value: impl Into<String>) -> Self {
        self.set(SnippetKey::Summary, value.into());
        self
    }

    pub fn shortcut(mut self, value: impl Into<String>) -> Self {
        self.set(SnippetKey::CompletionPrefix, value.into());
        self
    }

    pub fn language(mut self, value: impl Into<String>) -> Self {
        self.set(SnippetKey::Language, value.into());
        self
    }

    pub fn contents(mut self, value: impl Into<String>) -> Self {
        self.set(SnippetKey::Contents, value.into());
        self
    }

    pub fn build(self) -> Snippet {
        Snippet {
            identifier: self.identifier,
            title: self.title,
            summary: self.summary,
            shortcut: self.shortcut,
            language: self.language,
            contents: self.contents,
            source_name: self.source_name,
        }
    }
}
