//! The ordered rule catalogue defining the GML lexical grammar
//!
//! The table is the grammar: at every cursor position the scanner tries these
//! rules in order and the first anchored match wins, regardless of whether a
//! later rule would match a longer span. Ordering therefore carries meaning
//! and must not be rearranged casually:
//!
//! 1. Reserved words, boundary-anchored so `forever` stays one NAME.
//!    `begin`/`end` sit in this group but remap to the parenthesis kinds.
//! 2. Macro marker, documentation comment, block comment, line comment -
//!    before NAME/NUMBER/STRING so comment syntax is never swallowed.
//! 3. Identifier, number, verbatim string, string, newline, whitespace.
//! 4. The single-character delimiters, tried last.

use crate::tokens::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// A single (recognizer, kind) rule. The recognizer is anchored: it can only
/// match starting exactly at the cursor position it is applied to.
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    kind: TokenKind,
}

impl Rule {
    fn new(pattern: &str, kind: TokenKind) -> Self {
        let anchored = format!(r"\A(?:{})", pattern);
        // Table patterns are fixed literals; compilation is exercised by the
        // table tests, so a failure here is unreachable in practice.
        let pattern = Regex::new(&anchored).expect("rule pattern must compile");
        Self { pattern, kind }
    }

    /// The kind produced when this rule matches
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Try to match this rule at the start of `rest`.
    ///
    /// Returns the matched text. Every rule requires at least one character,
    /// so a successful match is never empty.
    pub fn matches_at<'a>(&self, rest: &'a str) -> Option<&'a str> {
        self.pattern.find(rest).map(|m| {
            debug_assert_eq!(m.start(), 0, "rule matches must be anchored");
            m.as_str()
        })
    }
}

/// Reserved words in table order, with the kind each one produces.
///
/// `begin` and `end` are the block markers with keyword spelling; they map to
/// the same kinds as `(` and `)`.
pub const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    ("all", TokenKind::All),
    ("begin", TokenKind::BracketLeft),
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("constructor", TokenKind::Constructor),
    ("continue", TokenKind::Continue),
    ("default", TokenKind::Default),
    ("delete", TokenKind::Delete),
    ("div", TokenKind::Div),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("end", TokenKind::BracketRight),
    ("enum", TokenKind::Enum),
    ("exit", TokenKind::Exit),
    ("false", TokenKind::False),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("global", TokenKind::Global),
    ("if", TokenKind::If),
    ("mod", TokenKind::Mod),
    ("new", TokenKind::New),
    ("noone", TokenKind::Noone),
    ("other", TokenKind::Other),
    ("repeat", TokenKind::Repeat),
    ("return", TokenKind::Return),
    ("self", TokenKind::SelfRef),
    ("static", TokenKind::Static),
    ("switch", TokenKind::Switch),
    ("throw", TokenKind::Throw),
    ("true", TokenKind::True),
    ("try", TokenKind::Try),
    ("until", TokenKind::Until),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Single-character delimiters in table order, pattern-escaped where the
/// character is a regex metacharacter.
const DELIMITERS: &[(&str, TokenKind)] = &[
    ("_", TokenKind::Underscore),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (":", TokenKind::Colon),
    ("!", TokenKind::Exclamation),
    ("@", TokenKind::At),
    ("/", TokenKind::Slash),
    ("-", TokenKind::Minus),
    (r"\?", TokenKind::Question),
    (r"\.", TokenKind::Dot),
    (r"\(", TokenKind::BracketLeft),
    (r"\)", TokenKind::BracketRight),
    (r"\[", TokenKind::BracketSquareLeft),
    (r"\]", TokenKind::BracketSquareRight),
    (r"\{", TokenKind::BracketCurlyLeft),
    (r"\}", TokenKind::BracketCurlyRight),
    (r"\*", TokenKind::Asterisk),
    (r"\\", TokenKind::Backslash),
    (r"\^", TokenKind::Caret),
    (r"\+", TokenKind::Plus),
    (r"\|", TokenKind::Pipe),
    (r"\$", TokenKind::Dollar),
    ("&", TokenKind::Ampersand),
    ("#", TokenKind::Hash),
    ("%", TokenKind::Percent),
    ("<", TokenKind::LessThan),
    ("=", TokenKind::Equals),
    (">", TokenKind::GreaterThan),
    ("~", TokenKind::Tilde),
];

fn build_table() -> Vec<Rule> {
    let mut rules = Vec::new();

    // Reserved words, each ending at a token boundary
    for &(word, kind) in RESERVED_WORDS {
        rules.push(Rule::new(&format!(r"{}\b", word), kind));
    }

    // Language-specific markers, before the generic literal rules
    rules.push(Rule::new(r"#macro\b", TokenKind::Macro));
    rules.push(Rule::new(r"/{3}[^\n]*", TokenKind::Documentation));
    rules.push(Rule::new(r"/\*(?:\*[^/]|[^*])*\*/", TokenKind::Comment));
    rules.push(Rule::new(r"//+[^\n]*", TokenKind::Comment));

    // Literals
    rules.push(Rule::new(r"[A-Za-z_][A-Za-z0-9_]*\b", TokenKind::Name));
    rules.push(Rule::new(r"\d+\.?\d*|\.\d+", TokenKind::Number));
    rules.push(Rule::new(r#"@"(?:\\"|[^"])*""#, TokenKind::String));
    rules.push(Rule::new(r#""(?:\\"|[^"\n])*""#, TokenKind::String));

    // Layout; newline must precede the general whitespace rule so that a
    // token starting with a line break is always NEWLINE
    rules.push(Rule::new(r"\r?\n", TokenKind::Newline));
    rules.push(Rule::new(r"\s+", TokenKind::Whitespace));

    // Single-character delimiters, tried last
    for &(pattern, kind) in DELIMITERS {
        rules.push(Rule::new(pattern, kind));
    }

    rules
}

/// The complete ordered pattern table, built once and shared process-wide.
pub fn pattern_table() -> &'static [Rule] {
    static TABLE: OnceLock<Vec<Rule>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}
