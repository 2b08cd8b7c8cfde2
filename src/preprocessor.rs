use std::collections::BTreeMap;

use tracing::{debug, warn};

/// Prefix marking a macro definition line.
pub const DEFINE_MARKER: &str = "#define";

/// Macro definitions seen so far, keyed by macro name.
///
/// Keys are kept sorted so substitution order is stable across runs.
#[derive(Debug, Default, Clone)]
pub struct MacroTable(BTreeMap<String, String>);

impl MacroTable {
    /// Register a definition, replacing any earlier value for the key
    pub fn define(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply every definition to a single line
    pub fn expand_line(&self, line: &str) -> String {
        self.0
            .iter()
            .fold(line.to_owned(), |acc, (key, value)| substitute(&acc, key, value))
    }
}

/// Line-oriented macro preprocessor for a single input.
///
/// A definition only affects lines after it, so the table is built up while
/// the input is walked top to bottom. `process` consumes the preprocessor,
/// so definitions never leak from one input into the next.
#[derive(Debug, Default)]
pub struct Preprocessor {
    macros: MacroTable,
}

impl Preprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand the input, dropping definition lines and keeping every other
    /// line's terminator as it was. Returns the expanded text together with
    /// the definitions in force at the end of the input.
    pub fn process(mut self, input: &str) -> (String, MacroTable) {
        let mut output = String::with_capacity(input.len());

        for raw in input.split_inclusive('\n') {
            let (line, terminator) = split_terminator(raw);

            if line.starts_with(DEFINE_MARKER) {
                self.define_from(line);
                continue;
            }

            if self.macros.is_empty() {
                output.push_str(raw);
            } else {
                output.push_str(&self.macros.expand_line(line));
                output.push_str(terminator);
            }
        }

        (output, self.macros)
    }

    fn define_from(&mut self, line: &str) {
        let Some((key, value)) = parse_definition(line) else {
            warn!(line, "ignoring macro definition without a name");
            return;
        };
        debug!(key, value, "defining macro");
        self.macros.define(key, value);
    }
}

/// Split a definition line into its key and trimmed value.
///
/// The first whitespace-separated word is the directive itself, the second
/// the key, and whatever follows is the value.
pub fn parse_definition(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start();
    let rest = rest.trim_start_matches(|c: char| !c.is_whitespace());
    let rest = rest.trim_start();
    let key_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    if key_len == 0 {
        return None;
    }
    let (key, value) = rest.split_at(key_len);
    Some((key, value.trim()))
}

/// Replace every occurrence of `key` in `line` with `value`.
///
/// The search resumes right after each inserted value, so a value containing
/// its own key is inserted once rather than expanded again.
pub fn substitute(line: &str, key: &str, value: &str) -> String {
    if key.is_empty() {
        return line.to_owned();
    }

    let mut result = line.to_owned();
    let mut pos = 0;
    while let Some(found) = result[pos..].find(key) {
        let start = pos + found;
        result.replace_range(start..start + key.len(), value);
        pos = start + value.len();
    }
    result
}

fn split_terminator(raw: &str) -> (&str, &str) {
    match raw.strip_suffix('\n') {
        Some(line) => (line, &raw[line.len()..]),
        None => (raw, ""),
    }
}
