//! Lexical grammar of GML as an ordered rule catalogue

mod rules;

pub use rules::{pattern_table, Rule, RESERVED_WORDS};
