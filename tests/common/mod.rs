//! # Snippet fixtures
//!
//! Builders for `.codesnippet` files used by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Field values for one fixture snippet. Empty fields are left out of the plist.
#[derive(Debug, Clone, Default)]
pub struct SnippetFixture {
    pub identifier: String,
    pub title: String,
    pub summary: String,
    pub shortcut: String,
    pub language: String,
    pub contents: String,
}

impl SnippetFixture {
    pub fn new(title: &str, contents: &str) -> Self {
        Self {
            identifier: format!("ID-{}", title.replace(' ', "-")),
            title: title.to_string(),
            language: "Xcode.SourceCodeLanguage.Swift".to_string(),
            contents: contents.to_string(),
            ..Self::default()
        }
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.summary = summary.to_string();
        self
    }

    pub fn shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = shortcut.to_string();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Renders the fixture as an Xcode-style XML property list.
    pub fn to_plist(&self) -> String {
        let mut body = String::new();
        let fields = [
            ("IDECodeSnippetCompletionPrefix", &self.shortcut),
            ("IDECodeSnippetContents", &self.contents),
            ("IDECodeSnippetIdentifier", &self.identifier),
            ("IDECodeSnippetLanguage", &self.language),
            ("IDECodeSnippetSummary", &self.summary),
            ("IDECodeSnippetTitle", &self.title),
        ];
        for (key, value) in fields {
            if value.is_empty() {
                continue;
            }
            body.push_str(&format!(
                "\t<key>{key}</key>\n\t<string>{}</string>\n",
                escape_xml(value)
            ));
        }
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
             \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
             <plist version=\"1.0\">\n<dict>\n\
             \t<key>IDECodeSnippetCompletionScopes</key>\n\t<array>\n\t\t<string>All</string>\n\t</array>\n\
             {body}\
             \t<key>IDECodeSnippetUserSnippet</key>\n\t<true/>\n\
             \t<key>IDECodeSnippetVersion</key>\n\t<integer>2</integer>\n\
             </dict>\n</plist>\n"
        )
    }

    pub fn write_to(&self, dir: &Path, file_name: &str) {
        fs::write(dir.join(file_name), self.to_plist()).unwrap();
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
