//! Token model and token stream types

mod token;
mod token_stream;

pub use token::{Token, TokenKind};
pub use token_stream::TokenStream;
