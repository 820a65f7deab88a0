//! Lexer module
//! Turns normalized expression text into a flat token sequence

pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use tokens::{Constant, Function, LexError, Operator, Token};
pub use tokenizer::Lexer;

/// Tokenize expression text
///
/// All whitespace is removed before scanning, so `"1 2"` lexes as `12`.
/// Keywords are matched in lowercase; callers normalize case first.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let compact: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    tracing::debug!(len = compact.len(), "lexing expression");

    let mut lexer = Lexer::new(&compact);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token() {
        log_token(&token);
        tokens.push(token);
    }

    if let Some(err) = lexer.error {
        tracing::debug!(%err, "lexing failed");
        Err(err)
    } else {
        tracing::debug!(count = tokens.len(), "lexing complete");
        Ok(tokens)
    }
}

/// Log a token for debugging
fn log_token(token: &Token) {
    let kind = match token {
        Token::Number(_) => "number",
        Token::Operator(_) => "operator",
        Token::Function(_) => "function",
        Token::Constant(_) => "constant",
        Token::OpenParen | Token::CloseParen => "paren",
    };
    tracing::debug!("token {}: {}", kind, token);
}
