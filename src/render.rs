//! Markdown renderers for the generated documentation.
//!
//! Both documents are `Display` types over a slice of snippets that is
//! already validated and sorted; rendering never reorders or filters.

pub mod detail;
pub mod index;

pub use detail::DetailDocument;
pub use index::IndexDocument;

/// File name of the overview document.
pub const INDEX_FILE_NAME: &str = "README.md";

/// File name of the per-snippet document.
pub const DETAIL_FILE_NAME: &str = "SNIPPETS.md";

/// Escapes text for use inside a Markdown table cell.
///
/// Pipes would end the cell and line breaks would end the row.
pub fn escape_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '|' => out.push_str("\\|"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("<br>");
            }
            '\n' => out.push_str("<br>"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `text` in an inline code span that survives embedded backticks.
pub fn inline_code(text: &str) -> String {
    let run = longest_backtick_run(text);
    if run == 0 {
        return format!("`{text}`");
    }
    let ticks = "`".repeat(run + 1);
    format!("{ticks} {text} {ticks}")
}

/// Opening/closing fence for a code block whose body is `contents`.
pub fn code_fence(contents: &str) -> String {
    "`".repeat(longest_backtick_run(contents).max(2) + 1)
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
