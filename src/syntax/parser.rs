//! Snippet plist parser.
//!
//! A single forward scan over quick-xml events. The scan remembers the most
//! recent `<key>` text and, whenever a `<string>` closes, hands the collected
//! character data to the snippet builder under that key's role.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::SnippetError;
use crate::snippet::{Snippet, SnippetBuilder, SnippetKey};

const KEY_ELEMENT: &str = "key";
const STRING_ELEMENT: &str = "string";

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses one `.codesnippet` document.
///
/// `file_name` becomes the snippet's source name and labels any diagnostic.
/// Documents that are not well-formed XML fail with
/// [`SnippetError::MalformedSource`]. Line endings are normalized to `\n`
/// before scanning, so diagnostic offsets refer to the normalized text.
pub fn parse(source: &[u8], file_name: &str) -> Result<Snippet, SnippetError> {
    let normalized = normalize_line_endings(source);
    let source: &[u8] = &normalized;
    let mut scan = PlistScan::new(file_name);
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();

    loop {
        let step = match reader.read_event_into(&mut buf) {
            Err(e) => Err(e.to_string()),
            Ok(Event::Eof) => break,
            Ok(Event::Start(tag)) => scan.open(tag.name().as_ref()),
            Ok(Event::End(tag)) => scan.close(tag.name().as_ref()),
            Ok(Event::Empty(tag)) => scan
                .open(tag.name().as_ref())
                .and_then(|()| scan.close(tag.name().as_ref())),
            Ok(Event::Text(text)) => match text.unescape() {
                Ok(text) => scan.characters(&text),
                Err(e) => Err(e.to_string()),
            },
            Ok(Event::CData(data)) => match std::str::from_utf8(&data) {
                Ok(text) => scan.characters(text),
                Err(e) => Err(format!("invalid UTF-8 in CDATA section: {e}")),
            },
            // Declarations, doctype, comments and processing instructions carry no data.
            Ok(_) => Ok(()),
        };

        if let Err(reason) = step {
            let offset = reader.buffer_position() as usize;
            return Err(SnippetError::malformed(file_name, source, offset, reason));
        }
        buf.clear();
    }

    let end = reader.buffer_position() as usize;
    scan.finish()
        .map_err(|reason| SnippetError::malformed(file_name, source, end, reason))
}

/// Rewrites `\r\n` and lone `\r` as `\n`, as XML processors must before parsing.
fn normalize_line_endings(source: &[u8]) -> Cow<'_, [u8]> {
    if !source.contains(&b'\r') {
        return Cow::Borrowed(source);
    }
    let mut out = Vec::with_capacity(source.len());
    let mut bytes = source.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == b'\r' {
            if bytes.peek() == Some(&b'\n') {
                bytes.next();
            }
            out.push(b'\n');
        } else {
            out.push(byte);
        }
    }
    Cow::Owned(out)
}

// ============================================================================
// SCAN STATE
// ============================================================================

/// Parser state carried between events.
struct PlistScan {
    builder: SnippetBuilder,
    /// Names of the currently open elements, innermost last.
    open: Vec<String>,
    /// Character data seen since the last element boundary.
    text: String,
    pending_key: String,
    saw_root: bool,
}

type ScanResult = Result<(), String>;

impl PlistScan {
    fn new(file_name: &str) -> Self {
        Self {
            builder: SnippetBuilder::new(file_name),
            open: Vec::new(),
            text: String::new(),
            pending_key: String::new(),
            saw_root: false,
        }
    }

    fn open(&mut self, name: &[u8]) -> ScanResult {
        if self.open.is_empty() {
            if self.saw_root {
                return Err("document has more than one root element".to_string());
            }
            self.saw_root = true;
        }
        self.open.push(String::from_utf8_lossy(name).into_owned());
        self.text.clear();
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> ScanResult {
        let name = String::from_utf8_lossy(name);
        match self.open.pop() {
            Some(open) if open == name => {}
            Some(open) => {
                return Err(format!("expected </{open}>, found </{name}>"));
            }
            None => return Err(format!("unexpected closing tag </{name}>")),
        }

        match name.as_ref() {
            KEY_ELEMENT => self.pending_key = self.text.trim().to_string(),
            STRING_ELEMENT => self.store_value(),
            _ => {}
        }
        self.text.clear();
        Ok(())
    }

    fn characters(&mut self, text: &str) -> ScanResult {
        if self.open.is_empty() {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err("text found outside the root element".to_string());
        }
        self.text.push_str(text);
        Ok(())
    }

    fn store_value(&mut self) {
        let Some(key) = SnippetKey::from_plist_key(&self.pending_key) else {
            return;
        };
        let value = if key.preserves_whitespace() {
            std::mem::take(&mut self.text)
        } else {
            self.text.trim().to_string()
        };
        self.builder.set(key, value);
    }

    fn finish(self) -> Result<Snippet, String> {
        if let Some(open) = self.open.last() {
            return Err(format!("unexpected end of document inside <{open}>"));
        }
        if !self.saw_root {
            return Err("document has no root element".to_string());
        }
        Ok(self.builder.build())
    }
}
