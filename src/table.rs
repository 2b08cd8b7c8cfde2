use std::collections::HashMap;

use tracing::debug;

use crate::call::Cursor;
use crate::token::Token;

/// First sighting of a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub arguments: Vec<String>,
    /// Line of the call that introduced the signature
    pub line: usize,
}

impl FunctionSignature {
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

/// Signatures discovered by the first pass.
///
/// Every call site in the file contributes, regardless of position, and only
/// the first call to a given name is kept. Later calls with a different
/// argument count are reported against that first one.
#[derive(Debug, Default, Clone)]
pub struct FunctionTable(HashMap<String, FunctionSignature>);

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the whole token sequence once and record each call site.
    pub fn build(tokens: &[Token]) -> Self {
        let mut table = Self::new();
        let mut cursor = Cursor::new(tokens);

        while !cursor.is_eof() {
            if !cursor.at_call_site() {
                cursor.advance();
                continue;
            }

            let Some(name) = cursor.advance() else {
                break;
            };
            let args = cursor.take_arguments();
            table.record(FunctionSignature {
                name: name.text.clone(),
                arguments: args.arguments,
                line: name.line,
            });
        }

        debug!(functions = table.len(), "built function table");
        table
    }

    /// Insert a signature unless the name is already known.
    pub fn record(&mut self, signature: FunctionSignature) -> bool {
        if self.0.contains_key(&signature.name) {
            return false;
        }
        self.0.insert(signature.name.clone(), signature);
        true
    }

    pub fn get(&self, name: &str) -> Option<&FunctionSignature> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
