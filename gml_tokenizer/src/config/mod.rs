//! Compile-time configuration for the tokenizer

pub mod constants;
