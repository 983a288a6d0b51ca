//! Anchored, fail-fast scanner over the ordered pattern table
//!
//! The scanner maintains a single byte cursor. At every step it walks the
//! pattern table in order and takes the first rule that matches at the cursor,
//! even when a later rule would match more text. Matches are contiguous: the
//! next token always starts exactly where the previous one ended, so the
//! produced sequence reconstructs the source byte-for-byte. The first position
//! where no rule matches aborts the whole scan; no partial token list escapes.

use crate::grammar::{pattern_table, Rule};
use crate::logging::codes::{self, Code};
use crate::tokens::Token;
use crate::utils::Position;
use crate::{log_debug, log_error, log_success};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tokenization failure.
///
/// Produced when the cursor reaches a position at which no rule in the
/// pattern table matches. The offset is a byte offset into the source; line
/// and column are 1-based and derived from the same position.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TokenizeError {
    #[error("no rule matches input at offset {offset} (line {line}, column {column})")]
    UnmatchedInput {
        offset: usize,
        line: u32,
        column: u32,
    },
}

impl TokenizeError {
    /// Get the diagnostic code for this error
    pub fn error_code(&self) -> Code {
        match self {
            TokenizeError::UnmatchedInput { .. } => codes::lexical::UNMATCHED_INPUT,
        }
    }

    /// Byte offset of the first unscannable position
    pub fn offset(&self) -> usize {
        match self {
            TokenizeError::UnmatchedInput { offset, .. } => *offset,
        }
    }
}

/// Counters accumulated over a single scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenizerMetrics {
    pub tokens_produced: usize,
    pub bytes_consumed: usize,
    pub significant_tokens: usize,
    pub layout_tokens: usize,
    pub comment_tokens: usize,
}

impl TokenizerMetrics {
    fn record_token(&mut self, token: &Token) {
        self.tokens_produced += 1;
        self.bytes_consumed += token.length;
        if token.is_whitespace() {
            self.layout_tokens += 1;
        } else if token.is_comment() {
            self.comment_tokens += 1;
        } else {
            self.significant_tokens += 1;
        }
    }
}

/// Table-driven tokenizer for GML source text
pub struct Tokenizer {
    table: &'static [Rule],
    metrics: TokenizerMetrics,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            table: pattern_table(),
            metrics: TokenizerMetrics::default(),
        }
    }

    /// Metrics from the most recent scan
    pub fn metrics(&self) -> &TokenizerMetrics {
        &self.metrics
    }

    /// Scan `source` into a complete token sequence.
    ///
    /// On success every byte of the source is covered by exactly one token,
    /// in order. On failure no tokens are returned at all; the error carries
    /// the exact byte offset where scanning stopped.
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<Token>, TokenizeError> {
        self.metrics = TokenizerMetrics::default();
        let mut tokens = Vec::new();
        let mut at = 0usize;

        log_debug!("Starting scan", "bytes" => source.len());

        while at < source.len() {
            let rest = &source[at..];
            let matched = self
                .table
                .iter()
                .find_map(|rule| rule.matches_at(rest).map(|text| (text, rule.kind())));

            match matched {
                Some((text, kind)) => {
                    let token = Token::new(text.to_string(), kind, at);
                    at = token.end_offset();
                    self.metrics.record_token(&token);
                    tokens.push(token);
                }
                None => {
                    let position = Position::locate(source, at);
                    log_error!(
                        codes::lexical::UNMATCHED_INPUT,
                        "No rule matches input",
                        "offset" => at,
                        "line" => position.line,
                        "column" => position.column,
                        "tokens_scanned" => tokens.len()
                    );
                    return Err(TokenizeError::UnmatchedInput {
                        offset: at,
                        line: position.line,
                        column: position.column,
                    });
                }
            }
        }

        log_success!(
            codes::success::TOKENIZATION_COMPLETE,
            "Tokenization completed",
            "tokens" => self.metrics.tokens_produced,
            "bytes" => self.metrics.bytes_consumed
        );

        Ok(tokens)
    }
}

/// Scan `source` with a fresh tokenizer.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    Tokenizer::new().tokenize(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;
    use assert_matches::assert_matches;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn values(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert_eq!(tokenize("").unwrap(), Vec::new());
    }

    #[test]
    fn test_round_trip_reconstruction() {
        let source = "var health = 100;\nif (health > 0) {\n    // alive\n    exit;\n}\n";
        let tokens = tokenize(source).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(rebuilt, source);

        // Contiguity: each token starts where the previous ended
        let mut at = 0;
        for token in &tokens {
            assert_eq!(token.offset, at);
            assert_eq!(token.length, token.value.len());
            at = token.end_offset();
        }
        assert_eq!(at, source.len());
    }

    #[test]
    fn test_deterministic() {
        let source = "for (var i = 0; i < 10; i += 1) repeat { exit }";
        assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
    }

    #[test]
    fn test_keyword_vs_name_boundary() {
        let tokens = tokenize("forever").unwrap();
        assert_eq!(kinds(&tokens), [TokenKind::Name]);
        assert_eq!(tokens[0].value, "forever");

        let tokens = tokenize("for ever").unwrap();
        assert_eq!(
            kinds(&tokens),
            [TokenKind::For, TokenKind::Whitespace, TokenKind::Name]
        );
    }

    #[test]
    fn test_four_slashes_is_one_documentation_token() {
        let tokens = tokenize("////").unwrap();
        assert_eq!(kinds(&tokens), [TokenKind::Documentation]);
        assert_eq!(tokens[0].value, "////");
    }

    #[test]
    fn test_comment_kinds() {
        let tokens = tokenize("// line\n/// doc\n/* block */").unwrap();
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::Comment,
                TokenKind::Newline,
                TokenKind::Documentation,
                TokenKind::Newline,
                TokenKind::Comment,
            ]
        );
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let tokens = tokenize("/* one\ntwo */x").unwrap();
        assert_eq!(kinds(&tokens), [TokenKind::Comment, TokenKind::Name]);
        assert_eq!(tokens[0].value, "/* one\ntwo */");
    }

    #[test]
    fn test_number_forms() {
        for (source, expected) in [("5", "5"), ("5.", "5."), ("5.5", "5.5"), (".5", ".5")] {
            let tokens = tokenize(source).unwrap();
            assert_eq!(kinds(&tokens), [TokenKind::Number], "source {:?}", source);
            assert_eq!(tokens[0].value, expected);
        }
    }

    #[test]
    fn test_adjacent_dotted_numbers() {
        // "5..5" splits as "5." then ".5": the integer branch of the number
        // rule wins first and stops before the second dot
        let tokens = tokenize("5..5").unwrap();
        assert_eq!(kinds(&tokens), [TokenKind::Number, TokenKind::Number]);
        assert_eq!(values(&tokens), ["5.", ".5"]);
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let tokens = tokenize(r#""say \"hi\"""#).unwrap();
        assert_eq!(kinds(&tokens), [TokenKind::String]);
        assert_eq!(tokens[0].value, r#""say \"hi\"""#);
    }

    #[test]
    fn test_verbatim_string_spans_lines() {
        let tokens = tokenize("@\"line one\nline two\"").unwrap();
        assert_eq!(kinds(&tokens), [TokenKind::String]);
        assert_eq!(tokens[0].value, "@\"line one\nline two\"");
    }

    #[test]
    fn test_unterminated_string_fails_at_quote() {
        // A plain string cannot cross a line break; with no closing quote the
        // quote itself is unscannable
        let result = tokenize("x \"open\ny");
        assert_matches!(
            result,
            Err(TokenizeError::UnmatchedInput {
                offset: 2,
                line: 1,
                column: 3,
            })
        );
    }

    #[test]
    fn test_unmatched_input_returns_no_tokens() {
        // U+00A7 has no rule; preceding valid tokens are discarded
        let result = Tokenizer::new().tokenize("var x §");
        assert_matches!(
            result,
            Err(TokenizeError::UnmatchedInput { offset: 6, .. })
        );
    }

    #[test]
    fn test_error_position_is_line_and_column_accurate() {
        let result = tokenize("ok;\nok; §");
        assert_matches!(
            result,
            Err(TokenizeError::UnmatchedInput {
                offset: 8,
                line: 2,
                column: 5,
            })
        );
    }

    #[test]
    fn test_newline_separates_names() {
        let tokens = tokenize("a\nb").unwrap();
        assert_eq!(
            kinds(&tokens),
            [TokenKind::Name, TokenKind::Newline, TokenKind::Name]
        );
    }

    #[test]
    fn test_crlf_is_one_newline_token() {
        let tokens = tokenize("a\r\nb").unwrap();
        assert_eq!(
            kinds(&tokens),
            [TokenKind::Name, TokenKind::Newline, TokenKind::Name]
        );
        assert_eq!(tokens[1].value, "\r\n");
    }

    #[test]
    fn test_whitespace_run_swallows_following_newline() {
        // The spacing run starts with a space, so the whitespace rule claims
        // the whole \s+ run including the line break inside it
        let tokens = tokenize("a \nb").unwrap();
        assert_eq!(
            kinds(&tokens),
            [TokenKind::Name, TokenKind::Whitespace, TokenKind::Name]
        );
        assert_eq!(tokens[1].value, " \n");
    }

    #[test]
    fn test_begin_end_produce_bracket_kinds() {
        let tokens = tokenize("begin exit end").unwrap();
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::BracketLeft,
                TokenKind::Whitespace,
                TokenKind::Exit,
                TokenKind::Whitespace,
                TokenKind::BracketRight,
            ]
        );
        // Same kinds as the parenthesis characters
        let parens = tokenize("()").unwrap();
        assert_eq!(parens[0].kind, TokenKind::BracketLeft);
        assert_eq!(parens[1].kind, TokenKind::BracketRight);
    }

    #[test]
    fn test_macro_marker() {
        let tokens = tokenize("#macro WIDTH 32").unwrap();
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::Macro,
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::Whitespace,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_macro_marker_requires_boundary() {
        // "#macros" is not the macro marker; the hash and the name scan
        // separately
        let tokens = tokenize("#macros").unwrap();
        assert_eq!(kinds(&tokens), [TokenKind::Hash, TokenKind::Name]);
        assert_eq!(values(&tokens), ["#", "macros"]);
    }

    #[test]
    fn test_reserved_word_kinds() {
        let tokens = tokenize("self noone other all").unwrap();
        let significant: Vec<TokenKind> = tokens
            .iter()
            .filter(|t| !t.is_whitespace())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            significant,
            [
                TokenKind::SelfRef,
                TokenKind::Noone,
                TokenKind::Other,
                TokenKind::All,
            ]
        );
    }

    #[test]
    fn test_delimiter_sequence() {
        let tokens = tokenize("x+=1;").unwrap();
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::Name,
                TokenKind::Plus,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_metrics_accumulate() {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("var x = 1; // set\n").unwrap();
        let metrics = tokenizer.metrics();
        assert_eq!(metrics.tokens_produced, tokens.len());
        assert_eq!(metrics.bytes_consumed, 18);
        assert_eq!(metrics.comment_tokens, 1);
        assert_eq!(metrics.layout_tokens, 5);
        assert_eq!(metrics.significant_tokens, 5);
    }

    #[test]
    fn test_error_code_mapping() {
        let err = TokenizeError::UnmatchedInput {
            offset: 0,
            line: 1,
            column: 1,
        };
        assert_eq!(err.error_code().as_str(), "E020");
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_realistic_script() {
        let source = concat!(
            "/// Compute remaining shield\n",
            "function shield_left(hp) {\n",
            "    var ratio = hp div 2;\n",
            "    if (ratio mod 2 == 0) return true;\n",
            "    return @\"multi\nline\";\n",
            "}\n"
        );
        let tokens = tokenize(source).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(rebuilt, source);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Documentation));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Div));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Mod));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::String));
    }
}
