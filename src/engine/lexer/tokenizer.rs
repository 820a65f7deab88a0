//! Tokenizer implementation
//! Main lexer structure and token generation logic

use crate::engine::lexer::tokens::*;

/// Keyword candidates, tried in order at each position.
/// Longer names come first so a shorter keyword never shadows a longer one.
const KEYWORDS: [(&str, Token); 9] = [
    ("sqrt", Token::Function(Function::Sqrt)),
    ("sin", Token::Function(Function::Sin)),
    ("cos", Token::Function(Function::Cos)),
    ("tan", Token::Function(Function::Tan)),
    ("log", Token::Function(Function::Log)),
    ("abs", Token::Function(Function::Abs)),
    ("ln", Token::Function(Function::Ln)),
    ("pi", Token::Constant(Constant::Pi)),
    ("e", Token::Constant(Constant::E)),
];

/// Main lexer structure
///
/// Works on whitespace-free text; offsets are char offsets into that text.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte position of the next unread char
    pos: usize,
    /// Char offset of the next unread char
    offset: usize,
    pub error: Option<LexError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            offset: 0,
            error: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Advance over `len` bytes of ASCII input
    fn bump(
        &mut self,
        len: usize,
    ) {
        self.pos += len;
        self.offset += len;
    }

    /// Generate next token
    ///
    /// Returns `None` at end of input or once an error has been recorded.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.error.is_some() || self.pos >= self.source.len() {
            return None;
        }

        if let Some(token) = self.match_token() {
            return Some(token);
        }

        let start = self.offset;
        let text = self.unrecognized_run();
        self.error = Some(LexError::UnrecognizedSubstring {
            text,
            offset: start,
        });
        None
    }

    /// Try every candidate at the current position, consuming on success
    fn match_token(&mut self) -> Option<Token> {
        let rest = self.rest();

        let numeral_len = scan_numeral(rest);
        if numeral_len > 0 {
            let text = &rest[..numeral_len];
            // A numeral made only of digits and one point always parses.
            let value = text.parse::<f64>().ok()?;
            self.bump(numeral_len);
            return Some(Token::Number(value));
        }

        let c = rest.chars().next()?;
        if let Some(token) = symbol_token(c) {
            self.bump(1);
            return Some(token);
        }

        for (keyword, token) in KEYWORDS {
            if rest.starts_with(keyword) {
                self.bump(keyword.len());
                return Some(token);
            }
        }

        None
    }

    /// Consume chars until some candidate would match again
    fn unrecognized_run(&mut self) -> String {
        let mut text = String::new();
        let mut chars = self.rest().chars();
        while let Some(c) = chars.next() {
            text.push(c);
            self.pos += c.len_utf8();
            self.offset += 1;
            if can_start_token(chars.as_str()) {
                break;
            }
        }
        text
    }
}

fn symbol_token(c: char) -> Option<Token> {
    match c {
        '(' => Some(Token::OpenParen),
        ')' => Some(Token::CloseParen),
        c => Operator::from_char(c).map(Token::Operator),
    }
}

fn can_start_token(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => {
            scan_numeral(rest) > 0
                || symbol_token(c).is_some()
                || KEYWORDS.iter().any(|(keyword, _)| rest.starts_with(keyword))
        }
    }
}

/// Length in bytes of the numeral at the start of `text`, or 0.
///
/// Accepts `digits`, `digits.`, `digits.digits` and `.digits`.
pub fn scan_numeral(text: &str) -> usize {
    let bytes = text.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if bytes.get(int_len) != Some(&b'.') {
        return int_len;
    }
    let frac_len = bytes[int_len + 1..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if int_len == 0 && frac_len == 0 {
        0
    } else {
        int_len + 1 + frac_len
    }
}
