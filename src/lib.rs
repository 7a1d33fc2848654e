pub use crate::config::GeneratorConfig;
pub use crate::engine::{generate, GenerationReport};
pub use crate::errors::SnippetError;
pub use crate::snippet::{Rejection, Snippet};

pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod errors;
pub mod render;
pub mod snippet;
pub mod syntax;
pub mod writer;
