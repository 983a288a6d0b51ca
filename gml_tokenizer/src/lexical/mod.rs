//! Lexical analysis: table-driven scanning of GML source

mod analyzer;

pub use analyzer::{tokenize, TokenizeError, Tokenizer, TokenizerMetrics};
