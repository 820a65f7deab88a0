//! Property tests over token sequences and arbitrary input

use proptest::prelude::*;
use termcalc::engine::{
    evaluate_expression, tokenize, Constant, EngineError, Function, Operator, Token,
};

fn number_strategy() -> impl Strategy<Value = Token> {
    "[0-9]{1,6}(\\.[0-9]{1,4})?".prop_map(|text| Token::Number(text.parse().unwrap()))
}

fn symbol_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        prop::sample::select(vec![
            Operator::Plus,
            Operator::Minus,
            Operator::Star,
            Operator::Slash,
            Operator::Caret,
            Operator::Percent,
        ])
        .prop_map(Token::Operator),
        prop::sample::select(Function::ALL.to_vec()).prop_map(Token::Function),
        prop::sample::select(Constant::ALL.to_vec()).prop_map(Token::Constant),
        Just(Token::OpenParen),
        Just(Token::CloseParen),
    ]
}

/// Token sequences where no two numbers are adjacent
fn tokens_strategy() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec((prop::option::of(number_strategy()), symbol_strategy()), 0..12)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .flat_map(|(number, symbol)| number.into_iter().chain(std::iter::once(symbol)))
                .collect()
        })
}

proptest! {
    #[test]
    fn test_display_round_trip(tokens in tokens_strategy()) {
        let text: String = tokens.iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(tokenize(&text).unwrap(), tokens);
    }

    #[test]
    fn test_spacing_does_not_matter(tokens in tokens_strategy()) {
        let tight: String = tokens.iter().map(|t| t.to_string()).collect();
        let spaced: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(tokenize(&tight), tokenize(&spaced.join("  ")));
    }

    #[test]
    fn test_arbitrary_input_never_panics(text in "[ -~]{0,40}") {
        let _ = evaluate_expression(&text);
    }

    #[test]
    fn test_sum_of_integers(a in 0u32..100_000, b in 0u32..100_000) {
        let result = evaluate_expression(&format!("{} + {}", a, b));
        prop_assert_eq!(result, Ok::<f64, EngineError>(a as f64 + b as f64));
    }
}
