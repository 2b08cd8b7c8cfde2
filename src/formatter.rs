use tracing::debug;

use crate::call::Cursor;
use crate::diagnostic::Diagnostic;
use crate::table::FunctionTable;
use crate::token::{Token, TokenKind};

const INDENT: &str = "    ";

/// Result of the second pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatted {
    /// One statement per line, with diagnostics inlined as comments
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Second pass: renders statements and checks call sites against a table
/// built beforehand from the same tokens.
pub struct Formatter<'t> {
    table: &'t FunctionTable,
    /// Nesting depth for indentation. Statements are flat, so this stays 0.
    indent_level: usize,
    output: Formatted,
}

impl<'t> Formatter<'t> {
    pub fn new(table: &'t FunctionTable) -> Self {
        Self {
            table,
            indent_level: 0,
            output: Formatted::default(),
        }
    }

    pub fn format(mut self, tokens: &[Token]) -> Formatted {
        let mut cursor = Cursor::new(tokens);
        while !cursor.is_eof() {
            self.statement(&mut cursor);
        }

        debug!(
            diagnostics = self.output.diagnostics.len(),
            "formatted token stream"
        );
        self.output
    }

    fn statement(&mut self, cursor: &mut Cursor<'_>) {
        if cursor.at_call_site() {
            self.call(cursor);
            return;
        }

        let Some(token) = cursor.advance() else {
            return;
        };
        match token.kind {
            TokenKind::Keyword => self.write_line(&token.text),
            _ => self.write_line(&format!("{};", token.text)),
        }
    }

    fn call(&mut self, cursor: &mut Cursor<'_>) {
        let Some(name) = cursor.advance() else {
            return;
        };
        self.write_line(&format!("{} (", name.text));

        let args = cursor.take_arguments();
        if !args.closed {
            self.report(Diagnostic::MissingParen {
                name: name.text.clone(),
                line: name.line,
            });
        }

        let table = self.table;
        match table.get(&name.text) {
            Some(signature) if signature.arity() != args.arguments.len() => {
                self.report(Diagnostic::ArityMismatch {
                    name: name.text.clone(),
                    defined_at: signature.line,
                    expected: signature.arity(),
                    actual: args.arguments.len(),
                });
            }
            Some(_) => {}
            None => self.report(Diagnostic::UnknownFunction {
                name: name.text.clone(),
                line: name.line,
            }),
        }

        self.write_line(");");
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.write_line(&diagnostic.to_comment());
        self.output.diagnostics.push(diagnostic);
    }

    fn write_line(&mut self, line: &str) {
        for _ in 0..self.indent_level {
            self.output.text.push_str(INDENT);
        }
        self.output.text.push_str(line);
        self.output.text.push('\n');
    }
}
