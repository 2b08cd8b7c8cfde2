//! Pieces shared by both passes over the token sequence: the call-site
//! predicate, a cursor, and the argument-list scanner.

use crate::token::{Token, TokenKind};

/// An identifier immediately followed by an opening parenthesis.
pub fn is_call_site(current: &Token, next: Option<&Token>) -> bool {
    current.kind == TokenKind::Identifier && next.is_some_and(|t| t.is_punct("("))
}

/// Arguments captured from one call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList {
    pub arguments: Vec<String>,
    /// False when the end marker was reached before `)`
    pub closed: bool,
}

/// Forward-only position in a token sequence. Each pass owns its own.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos + 1)
    }

    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// True once the end marker (or the end of the slice) is reached
    pub fn is_eof(&self) -> bool {
        self.peek().is_none_or(Token::is_eof)
    }

    pub fn at_call_site(&self) -> bool {
        self.peek()
            .is_some_and(|token| is_call_site(token, self.peek_next()))
    }

    /// Consume `(` and everything up to and including the matching `)`.
    ///
    /// Literal, identifier and string tokens are captured; commas and any
    /// other tokens are skipped. Nested parentheses are not tracked, so the
    /// first `)` closes the list.
    pub fn take_arguments(&mut self) -> ArgumentList {
        if self.peek().is_some_and(|t| t.is_punct("(")) {
            self.advance();
        }

        let mut arguments = Vec::new();
        loop {
            let Some(token) = self.peek() else {
                return ArgumentList {
                    arguments,
                    closed: false,
                };
            };
            if token.is_eof() {
                return ArgumentList {
                    arguments,
                    closed: false,
                };
            }

            self.advance();
            if token.is_punct(")") {
                return ArgumentList {
                    arguments,
                    closed: true,
                };
            }
            if token.is_argument() {
                arguments.push(token.text.clone());
            }
        }
    }
}
