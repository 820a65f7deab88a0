//! Tab completion for the line editor
//!
//! Completes function, constant, command and unit names.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::convert::units;
use crate::engine::lexer::{Constant, Function};

const COMMANDS: [&str; 6] = ["help", "history", "clear", "convert", "exit", "quit"];

/// rustyline helper for the calculator prompt
pub struct CalcHelper {
    words: Vec<(String, String)>,
}

impl Default for CalcHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcHelper {
    pub fn new() -> Self {
        let mut words = Vec::new();
        for function in Function::ALL {
            words.push((format!("{}(", function.name()), format!("fn {}", function.name())));
        }
        for constant in Constant::ALL {
            words.push((constant.name().to_string(), format!("{} = {}", constant.name(), constant.value())));
        }
        for command in COMMANDS {
            words.push((command.to_string(), command.to_string()));
        }
        words.push(("ans".to_string(), "ans".to_string()));
        for unit in units() {
            words.push((unit.to_string(), format!("unit {}", unit)));
        }
        Self { words }
    }

    /// Start of the word ending at `pos`, and the candidates for it
    pub fn candidates(
        &self,
        line: &str,
        pos: usize,
    ) -> (usize, Vec<Pair>) {
        let start = line[..pos]
            .rfind(|c: char| !c.is_ascii_alphabetic())
            .map_or(0, |i| i + 1);
        let word = line[start..pos].to_lowercase();
        if word.is_empty() {
            return (start, Vec::new());
        }

        let mut candidates: Vec<Pair> = self
            .words
            .iter()
            .filter(|(replacement, _)| replacement.starts_with(&word))
            .map(|(replacement, display)| Pair {
                display: display.clone(),
                replacement: replacement.clone(),
            })
            .collect();
        candidates.sort_by(|a, b| a.replacement.cmp(&b.replacement));
        candidates.dedup_by(|a, b| a.replacement == b.replacement);
        (start, candidates)
    }
}

impl Completer for CalcHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CalcHelper {
    type Hint = String;
}

impl Highlighter for CalcHelper {}

impl Validator for CalcHelper {}

impl Helper for CalcHelper {}
