//! REPL command parsing
//!
//! Input lines are lowercased and matched on their first word. Anything that
//! is not a command is an expression.

/// Parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `exit` or `quit`
    Exit,
    Help,
    History,
    Clear,
    /// `convert VALUE FROM to TO`
    Convert(ConvertArgs),
    /// `convert` with the wrong shape
    ConvertUsage,
    Evaluate(String),
    Empty,
}

/// Arguments of a well-formed convert command; the value is still text
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertArgs {
    pub value: String,
    pub from: String,
    pub to: String,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let lowered = line.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        match words.as_slice() {
            [] => Command::Empty,
            ["exit"] | ["quit"] => Command::Exit,
            ["help"] => Command::Help,
            ["history"] => Command::History,
            ["clear"] => Command::Clear,
            ["convert", value, from, "to", to] => Command::Convert(ConvertArgs {
                value: value.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            }),
            ["convert", ..] => Command::ConvertUsage,
            _ => Command::Evaluate(line.to_string()),
        }
    }
}

pub const CONVERT_USAGE: &str = "Usage: convert VALUE FROM_UNIT to TO_UNIT\nExample: convert 32 f to c";

/// Help text for the `help` command
pub fn help_text() -> String {
    let mut text = String::new();
    text.push_str("termcalc\n");
    text.push_str("Commands:\n");
    text.push_str("  exit, quit - Exit the calculator\n");
    text.push_str("  help       - Display this help message\n");
    text.push_str("  history    - Show calculation history\n");
    text.push_str("  clear      - Clear the screen\n");
    text.push_str("  ans        - Use the previous result\n");
    text.push_str("  convert    - Convert units (e.g., convert 32 f to c)\n");
    text.push('\n');
    text.push_str("Basic Operations:\n");
    text.push_str("  + Addition        Example: 5 + 3\n");
    text.push_str("  - Subtraction     Example: 7 - 2\n");
    text.push_str("  * Multiplication  Example: 4 * 6\n");
    text.push_str("  / Division        Example: 9 / 3\n");
    text.push_str("  ^ Exponentiation  Example: 2 ^ 3 (left to right: 2 ^ 3 ^ 2 = 64)\n");
    text.push_str("  % Modulo          Example: 10 % 3\n");
    text.push_str("  () Parentheses    Example: (2 + 3) * 4\n");
    text.push('\n');
    text.push_str("Functions:\n");
    text.push_str("  sin(x)  - Sine of x (in radians)\n");
    text.push_str("  cos(x)  - Cosine of x (in radians)\n");
    text.push_str("  tan(x)  - Tangent of x (in radians)\n");
    text.push_str("  sqrt(x) - Square root of x\n");
    text.push_str("  log(x)  - Base-10 logarithm of x\n");
    text.push_str("  ln(x)   - Natural logarithm of x\n");
    text.push_str("  abs(x)  - Absolute value of x\n");
    text.push('\n');
    text.push_str("Constants:\n");
    text.push_str("  pi - The value of π (3.14159...)\n");
    text.push_str("  e  - The value of e (2.71828...)\n");
    text.push('\n');
    text.push_str("Units: ");
    text.push_str(&crate::convert::units().join(" "));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(Command::parse("EXIT"), Command::Exit);
        assert_eq!(Command::parse("  Quit "), Command::Exit);
        assert_eq!(Command::parse("Help"), Command::Help);
        assert_eq!(Command::parse("history"), Command::History);
        assert_eq!(Command::parse("clear"), Command::Clear);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   "), Command::Empty);
    }

    #[test]
    fn test_convert_shape() {
        assert_eq!(
            Command::parse("convert 32 F to C"),
            Command::Convert(ConvertArgs {
                value: "32".to_string(),
                from: "f".to_string(),
                to: "c".to_string(),
            })
        );
        assert_eq!(Command::parse("convert 32 f c"), Command::ConvertUsage);
        assert_eq!(Command::parse("convert"), Command::ConvertUsage);
    }

    #[test]
    fn test_expression_keeps_raw_text() {
        assert_eq!(
            Command::parse(" 2 + PI "),
            Command::Evaluate("2 + PI".to_string())
        );
    }

    #[test]
    fn test_help_lists_units() {
        assert!(help_text().contains("Units: c cm"));
    }
}
