//! REPL session state
//!
//! A [`Session`] owns everything that outlives a single expression: the
//! previous result behind `ans` and the history sink. The engine itself only
//! ever sees the substituted text.

use tracing::debug;

use super::commands::{help_text, Command, ConvertArgs, CONVERT_USAGE};
use crate::convert::{convert, ConversionError};
use crate::engine::{evaluate_expression, normalize};
use crate::history::{HistorySink, NoHistory};

/// Placeholder replaced by the previous result
pub const ANS: &str = "ans";

/// Result of handling one input line
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Leave the REPL
    Exit,
    /// Clear the terminal
    Clear,
    /// Nothing to print
    Nothing,
    /// Print to the user
    Output(String),
    /// Print as an error; the session goes on
    Error(String),
}

/// Interactive calculator state
#[derive(Debug)]
pub struct Session<H: HistorySink = NoHistory> {
    last_result: f64,
    history: H,
    history_limit: usize,
}

impl Default for Session<NoHistory> {
    fn default() -> Self {
        Self::new(NoHistory)
    }
}

impl<H: HistorySink> Session<H> {
    pub fn new(history: H) -> Self {
        Self {
            last_result: 0.0,
            history,
            history_limit: 10,
        }
    }

    /// Entries shown by the `history` command
    pub fn with_history_limit(
        mut self,
        limit: usize,
    ) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Handle one input line
    pub fn handle(
        &mut self,
        line: &str,
    ) -> Outcome {
        match Command::parse(line) {
            Command::Empty => Outcome::Nothing,
            Command::Exit => Outcome::Exit,
            Command::Help => Outcome::Output(help_text()),
            Command::Clear => Outcome::Clear,
            Command::History => self.show_history(),
            Command::ConvertUsage => Outcome::Output(CONVERT_USAGE.to_string()),
            Command::Convert(args) => self.convert(&args),
            Command::Evaluate(expression) => self.evaluate(&expression),
        }
    }

    fn show_history(&self) -> Outcome {
        let entries = self.history.recent(self.history_limit);
        if entries.is_empty() {
            return Outcome::Output("No history found.".to_string());
        }
        let mut text = String::from("Calculation History:");
        for entry in entries {
            text.push('\n');
            text.push_str(entry.trim_end());
        }
        Outcome::Output(text)
    }

    fn convert(
        &mut self,
        args: &ConvertArgs,
    ) -> Outcome {
        let value = match args.value.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                let err = ConversionError::InvalidValue(args.value.clone());
                return Outcome::Error(err.to_string());
            }
        };

        match convert(value, &args.from, &args.to) {
            Ok(result) => {
                self.last_result = result;
                self.history.record(
                    &format!("convert {} {} to {}", value, args.from, args.to),
                    result,
                );
                Outcome::Output(format!("{} {} = {} {}", value, args.from, result, args.to))
            }
            Err(err) => Outcome::Error(err.to_string()),
        }
    }

    fn evaluate(
        &mut self,
        input: &str,
    ) -> Outcome {
        let normalized = normalize(input);
        if normalized.contains(ANS) && !self.last_result.is_finite() {
            return Outcome::Error(format!(
                "Cannot use ans: previous result is {}",
                self.last_result
            ));
        }
        let expression = substitute_ans(&normalized, self.last_result);
        debug!(%expression, "expression after substitution");

        match evaluate_expression(&expression) {
            Ok(result) => {
                self.last_result = result;
                self.history.record(input, result);
                Outcome::Output(format_result(result))
            }
            Err(err) => Outcome::Error(err.to_string()),
        }
    }
}

/// Replace every `ans` with the literal text of `last`
///
/// Negative values are parenthesized so `ans ^ 2` squares the whole value.
pub fn substitute_ans(
    expression: &str,
    last: f64,
) -> String {
    if !expression.contains(ANS) {
        return expression.to_string();
    }
    let literal = if last.is_sign_negative() && last != 0.0 {
        format!("({})", last)
    } else {
        format!("{}", last)
    };
    expression.replace(ANS, &literal)
}

/// Display form of a result; integral values print without a fraction
pub fn format_result(value: f64) -> String {
    format!("{}", value)
}
