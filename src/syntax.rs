//! Source-format handling for `.codesnippet` documents.
//!
//! Xcode stores each snippet as an XML property list: a flat `<dict>` of
//! `<key>` elements, each followed by the value it names.

pub mod parser;

pub use parser::parse;
