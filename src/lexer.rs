use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use tracing::trace;

use crate::error::Result;
use crate::token::{Token, TokenKind, classify_word};

#[derive(Parser)]
#[grammar = "src/script.pest"]
pub struct ScriptLexer;

impl ScriptLexer {
    /// Tokenize preprocessed text into a sequence terminated by an `Eof` token.
    ///
    /// Each token carries the line counter as it stands once the token has
    /// been consumed, so a string literal spanning newlines is stamped with
    /// the line it ends on.
    pub fn tokenize(input: &str) -> Result<Vec<Token>> {
        let mut pairs = ScriptLexer::parse(Rule::file, input)?;
        let Some(file) = pairs.next() else {
            return Ok(vec![Token::eof(1)]);
        };

        let mut tokens = Vec::new();
        let mut line = 1;
        let mut scanned = 0;

        for pair in file.into_inner() {
            let end = pair.as_span().end();
            line += newlines(&input[scanned..end]);
            scanned = end;

            if let Some(token) = Self::parse_token(pair, line) {
                tokens.push(token);
            }
        }

        line += newlines(&input[scanned..]);
        tokens.push(Token::eof(line));
        Ok(tokens)
    }

    fn parse_token(pair: Pair<Rule>, line: usize) -> Option<Token> {
        match pair.as_rule() {
            Rule::word => {
                let word = pair.as_str();
                Some(Token::new(classify_word(word), word, line))
            }
            Rule::number => Some(Token::new(TokenKind::Literal, pair.as_str(), line)),
            Rule::string => {
                let body = pair
                    .into_inner()
                    .find(|p| p.as_rule() == Rule::string_body)
                    .map(|p| p.as_str())
                    .unwrap_or_default();
                Some(Token::new(TokenKind::StringLiteral, body, line))
            }
            Rule::operator => Some(Token::new(TokenKind::Operator, pair.as_str(), line)),
            Rule::symbol => Some(Token::new(TokenKind::Symbol, pair.as_str(), line)),
            Rule::stray => {
                trace!(line, text = pair.as_str(), "dropping unrecognised character");
                None
            }
            _ => None,
        }
    }
}

fn newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
