//! Token model for GML source text
//!
//! A token is an immutable classified span: the exact matched substring, its
//! kind, and its byte position in the original source. Tokens are produced in
//! strictly increasing, contiguous order, so concatenating their values
//! reconstructs the source exactly.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed token classification, partitioned into four disjoint families:
/// reserved words, delimiters/operators, literals and comments, and layout.
///
/// `begin`/`end` have no kinds of their own; the pattern table remaps them to
/// `BracketLeft`/`BracketRight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === RESERVED WORDS ===
    All,
    Break,
    Case,
    Catch,
    Constructor,
    Continue,
    Default,
    Delete,
    Div,
    Do,
    Else,
    Enum,
    Exit,
    False,
    Finally,
    For,
    Function,
    Global,
    If,
    Mod,
    New,
    Noone,
    Other,
    Repeat,
    Return,
    /// The contextual instance reference `self`
    SelfRef,
    Static,
    Switch,
    Throw,
    True,
    Try,
    Until,
    Var,
    While,

    // === DELIMITERS / OPERATORS ===
    Underscore,
    Comma,
    Semicolon,
    Colon,
    Exclamation,
    At,
    Slash,
    Minus,
    Question,
    Dot,
    BracketLeft,
    BracketRight,
    BracketSquareLeft,
    BracketSquareRight,
    BracketCurlyLeft,
    BracketCurlyRight,
    Asterisk,
    Backslash,
    Caret,
    Plus,
    Pipe,
    Dollar,
    Ampersand,
    Hash,
    Percent,
    LessThan,
    Equals,
    GreaterThan,
    Tilde,

    // === LITERALS AND COMMENTS ===
    /// Identifier: letter-or-underscore start, alphanumeric continuation
    Name,
    /// Numeric literal (`5`, `5.`, `5.5`, `.5`); no exponent or sign forms
    Number,
    /// String literal, both the single-line and the `@"..."` verbatim form
    String,
    /// Line comment (`//...`) or block comment (`/* ... */`)
    Comment,
    /// Documentation comment (`///...`)
    Documentation,
    /// The `#macro` definition marker
    Macro,

    // === LAYOUT ===
    /// Spacing run that does not start with a line break
    Whitespace,
    /// Line break (`\n` or `\r\n`)
    Newline,
}

impl TokenKind {
    /// Short uppercase tag used in debug renderings
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Break => "BREAK",
            Self::Case => "CASE",
            Self::Catch => "CATCH",
            Self::Constructor => "CONSTRUCTOR",
            Self::Continue => "CONTINUE",
            Self::Default => "DEFAULT",
            Self::Delete => "DELETE",
            Self::Div => "DIV",
            Self::Do => "DO",
            Self::Else => "ELSE",
            Self::Enum => "ENUM",
            Self::Exit => "EXIT",
            Self::False => "FALSE",
            Self::Finally => "FINALLY",
            Self::For => "FOR",
            Self::Function => "FUNCTION",
            Self::Global => "GLOBAL",
            Self::If => "IF",
            Self::Mod => "MOD",
            Self::New => "NEW",
            Self::Noone => "NOONE",
            Self::Other => "OTHER",
            Self::Repeat => "REPEAT",
            Self::Return => "RETURN",
            Self::SelfRef => "SELF",
            Self::Static => "STATIC",
            Self::Switch => "SWITCH",
            Self::Throw => "THROW",
            Self::True => "TRUE",
            Self::Try => "TRY",
            Self::Until => "UNTIL",
            Self::Var => "VAR",
            Self::While => "WHILE",

            Self::Underscore => "UNDERSCORE",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::Exclamation => "EXCLAMATION",
            Self::At => "AT",
            Self::Slash => "SLASH",
            Self::Minus => "MINUS",
            Self::Question => "QUESTION",
            Self::Dot => "DOT",
            Self::BracketLeft => "BRACKET_LEFT",
            Self::BracketRight => "BRACKET_RIGHT",
            Self::BracketSquareLeft => "BRACKET_SQUARE_LEFT",
            Self::BracketSquareRight => "BRACKET_SQUARE_RIGHT",
            Self::BracketCurlyLeft => "BRACKET_CURLY_LEFT",
            Self::BracketCurlyRight => "BRACKET_CURLY_RIGHT",
            Self::Asterisk => "ASTERISK",
            Self::Backslash => "BACKSLASH",
            Self::Caret => "CARET",
            Self::Plus => "PLUS",
            Self::Pipe => "PIPE",
            Self::Dollar => "DOLLAR",
            Self::Ampersand => "AMPERSAND",
            Self::Hash => "HASH",
            Self::Percent => "PERCENT",
            Self::LessThan => "LESS_THAN",
            Self::Equals => "EQUALS",
            Self::GreaterThan => "GREATER_THAN",
            Self::Tilde => "TILDE",

            Self::Name => "NAME",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Comment => "COMMENT",
            Self::Documentation => "DOCUMENTATION",
            Self::Macro => "MACRO",

            Self::Whitespace => "WHITESPACE",
            Self::Newline => "NEWLINE",
        }
    }

    /// Check if this kind is a reserved word
    pub const fn is_reserved_word(self) -> bool {
        matches!(
            self,
            Self::All
                | Self::Break
                | Self::Case
                | Self::Catch
                | Self::Constructor
                | Self::Continue
                | Self::Default
                | Self::Delete
                | Self::Div
                | Self::Do
                | Self::Else
                | Self::Enum
                | Self::Exit
                | Self::False
                | Self::Finally
                | Self::For
                | Self::Function
                | Self::Global
                | Self::If
                | Self::Mod
                | Self::New
                | Self::Noone
                | Self::Other
                | Self::Repeat
                | Self::Return
                | Self::SelfRef
                | Self::Static
                | Self::Switch
                | Self::Throw
                | Self::True
                | Self::Try
                | Self::Until
                | Self::Var
                | Self::While
        )
    }

    /// Check if this kind is a single-character delimiter or operator
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            Self::Underscore
                | Self::Comma
                | Self::Semicolon
                | Self::Colon
                | Self::Exclamation
                | Self::At
                | Self::Slash
                | Self::Minus
                | Self::Question
                | Self::Dot
                | Self::BracketLeft
                | Self::BracketRight
                | Self::BracketSquareLeft
                | Self::BracketSquareRight
                | Self::BracketCurlyLeft
                | Self::BracketCurlyRight
                | Self::Asterisk
                | Self::Backslash
                | Self::Caret
                | Self::Plus
                | Self::Pipe
                | Self::Dollar
                | Self::Ampersand
                | Self::Hash
                | Self::Percent
                | Self::LessThan
                | Self::Equals
                | Self::GreaterThan
                | Self::Tilde
        )
    }

    /// Check if this kind is a layout (spacing) kind
    pub const fn is_layout(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline)
    }

    /// Check if this kind is a comment kind
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::Comment | Self::Documentation)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// A classified, contiguous span of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The exact matched substring
    pub value: String,
    /// Token classification
    pub kind: TokenKind,
    /// Byte offset of the match start in the source
    pub offset: usize,
    /// Byte length of the match; always equals `value.len()`
    pub length: usize,
}

impl Token {
    /// Create a token from a matched substring at a source offset
    pub fn new(value: String, kind: TokenKind, offset: usize) -> Self {
        let length = value.len();
        Self {
            value,
            kind,
            offset,
            length,
        }
    }

    /// Check if this token is whitespace (spacing or line break)
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_layout()
    }

    /// Check if this token is a comment (line, block, or documentation)
    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }

    /// Byte offset one past the end of this token
    pub fn end_offset(&self) -> usize {
        self.offset + self.length
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{:?}; {}; {}; {}>",
            self.value,
            self.kind.as_tag(),
            self.offset,
            self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_value() {
        let token = Token::new("while".to_string(), TokenKind::While, 10);
        assert_eq!(token.length, 5);
        assert_eq!(token.end_offset(), 15);
    }

    #[test]
    fn test_whitespace_predicate() {
        assert!(Token::new(" ".into(), TokenKind::Whitespace, 0).is_whitespace());
        assert!(Token::new("\n".into(), TokenKind::Newline, 0).is_whitespace());
        assert!(!Token::new("x".into(), TokenKind::Name, 0).is_whitespace());
    }

    #[test]
    fn test_comment_predicate() {
        assert!(Token::new("// hi".into(), TokenKind::Comment, 0).is_comment());
        assert!(Token::new("/// doc".into(), TokenKind::Documentation, 0).is_comment());
        assert!(!Token::new("#macro".into(), TokenKind::Macro, 0).is_comment());
    }

    #[test]
    fn test_family_partitions_are_disjoint() {
        use TokenKind::*;
        for kind in [For, Comma, Name, Whitespace, Newline, Comment, Macro] {
            let families = [
                kind.is_reserved_word(),
                kind.is_delimiter(),
                kind.is_layout(),
                kind.is_comment(),
            ];
            assert!(
                families.iter().filter(|&&f| f).count() <= 1,
                "{:?} belongs to multiple families",
                kind
            );
        }
    }

    #[test]
    fn test_display_rendering() {
        let token = Token::new("for".to_string(), TokenKind::For, 4);
        assert_eq!(token.to_string(), "<\"for\"; FOR; 4; 3>");
    }
}
