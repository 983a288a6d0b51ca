//! Navigation wrapper over a produced token sequence
//!
//! The scanner emits every token, layout and comments included, so that the
//! sequence reconstructs the source byte-for-byte. Downstream consumers that
//! only care about significant tokens navigate through this wrapper, which
//! keeps the full sequence intact for span-accurate reporting.

use crate::tokens::token::Token;

/// Token stream that filters layout and comments for navigation while
/// retaining the complete underlying sequence.
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens (including whitespace and comments) in source order
    all_tokens: Vec<Token>,
    /// Indices into all_tokens for significant tokens
    significant_indices: Vec<usize>,
    /// Current position in significant_indices
    position: usize,
}

impl TokenStream {
    /// Create a new token stream with automatic filtering
    pub fn new(tokens: Vec<Token>) -> Self {
        let significant_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_whitespace() && !t.is_comment())
            .map(|(i, _)| i)
            .collect();

        Self {
            all_tokens: tokens,
            significant_indices,
            position: 0,
        }
    }

    /// Get the current significant token
    pub fn current(&self) -> Option<&Token> {
        self.significant_indices
            .get(self.position)
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Peek at the next significant token without advancing
    pub fn peek(&self) -> Option<&Token> {
        self.peek_ahead(1)
    }

    /// Peek ahead by n positions in significant tokens
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.significant_indices
            .get(self.position + n)
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Advance to the next significant token
    pub fn advance(&mut self) -> Option<&Token> {
        if self.position < self.significant_indices.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Check if we're at the end of significant tokens
    pub fn is_at_end(&self) -> bool {
        self.position >= self.significant_indices.len()
    }

    /// Get the number of significant tokens
    pub fn len(&self) -> usize {
        self.significant_indices.len()
    }

    /// Check if the stream has no significant tokens
    pub fn is_empty(&self) -> bool {
        self.significant_indices.is_empty()
    }

    /// Get the complete token sequence, layout and comments included
    pub fn all_tokens(&self) -> &[Token] {
        &self.all_tokens
    }

    /// Total number of tokens, layout and comments included
    pub fn total_len(&self) -> usize {
        self.all_tokens.len()
    }

    /// Concatenate all token values in order.
    ///
    /// For any successfully scanned input this reproduces the source exactly.
    pub fn reconstruct_source(&self) -> String {
        self.all_tokens.iter().map(|t| t.value.as_str()).collect()
    }
}
