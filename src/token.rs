/// Words classified as keywords, matched case-insensitively.
pub const KEYWORDS: [&str; 11] = [
    "select", "insert", "update", "delete", "create", "table", "begin", "end", "declare", "do",
    "values",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    /// Unsigned integer literal
    Literal,
    /// Single-character arithmetic, comparison or logical punctuation
    Operator,
    /// Any other single punctuation character
    Symbol,
    /// String contents with the delimiting quotes stripped
    StringLiteral,
    /// End marker, always the last token of a sequence
    Eof,
}

/// Lexical token stamped with the line it was completed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// True for a single-character punctuation token with the given text.
    pub fn is_punct(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Symbol | TokenKind::Operator) && self.text == text
    }

    /// Tokens whose text is captured as a call argument.
    pub fn is_argument(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Literal | TokenKind::Identifier | TokenKind::StringLiteral
        )
    }
}

/// Classify an identifier-shaped word, preserving its original casing.
pub fn classify_word(word: &str) -> TokenKind {
    let lower = word.to_ascii_lowercase();
    if KEYWORDS.contains(&lower.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}
