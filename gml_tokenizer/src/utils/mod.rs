//! Shared utility types for the tokenizer

mod span;

pub use span::{Position, SourceMap, Span};
