// Internal modules
pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use file_processor::{FileProcessingResult, FileProcessorError};
pub use lexical::{tokenize, TokenizeError, Tokenizer};
pub use tokens::{Token, TokenKind, TokenStream};
