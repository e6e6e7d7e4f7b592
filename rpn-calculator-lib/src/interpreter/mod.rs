pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::lexer::Scanner;
use crate::interpreter::parser::to_postfix;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::io::Read;
use string_builder::Builder;

pub use crate::interpreter::operator::BinaryOperator;

/// Evaluates the arithmetic expression read from the given character stream.
///
/// The stream is consumed lazily: the scanner, the infix converter and the evaluator
/// each pull one token at a time from the stage before them.
///
/// # Arguments
///
/// * `input`: A readable stream containing a single infix expression.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let value = evaluate("8 / 2 * (2 + 2)".as_bytes())?;
/// assert_eq!(value, 16.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate<R: Read>(input: R) -> Result<f64> {
    let tokens = Scanner::new(input);
    let postfix_tokens = to_postfix(tokens);
    evaluate_postfix(postfix_tokens).context("Failed to evaluate expression")
}

/// Evaluates the given in-memory expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluate_str;
///
/// assert_eq!(evaluate_str("10 - 2 - 3").unwrap(), 5.0);
/// ```
pub fn evaluate_str(expression: &str) -> Result<f64> {
    evaluate(expression.as_bytes())
}

/// Formats a result with exactly four decimal places.
pub fn format_result(value: f64) -> String {
    format!("{:.4}", value)
}

/// Joins the source text of the given tokens without any whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to join.
///
/// returns: The tokens as they would have appeared in a compact expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("( 1 + 2.5 ) * 3")?;
/// assert_eq!(tokens_to_string(&tokens)?, "(1+2.5)*3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}

/// Renders postfix tokens separated by single spaces, e.g. `2 3 4 * +`.
pub fn tokens_to_postfix_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::{EvaluationError, Parenthesis};
    use crate::interpreter::lexer::tokenize;
    use crate::interpreter::parser::infix_to_postfix;
    use parameterized_macro::parameterized;

    #[parameterized(
        expression = {
            "2+3",
            "2/3",
            "2+3+4",
            "2+3*4",
            "2+3*4-5",
            "2+3*(4-5)",
            "8 / 2 * (2 + 2)",
            "10-2-3",
            "100/10/5",
            "(((7)))",
            " 1.5 * 4 ",
            ".5+.25",
        },
        expected = {
            5.0,
            2.0 / 3.0,
            9.0,
            14.0,
            9.0,
            -1.0,
            16.0,
            5.0,
            2.0,
            7.0,
            6.0,
            0.75,
        }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected: f64) {
        assert_eq!(evaluate_str(expression).unwrap(), expected);
    }

    #[parameterized(
        expression = { "1/0", "(0-1)/0", "0/0" },
        expected = { "inf", "-inf", "NaN" }
    )]
    fn division_by_zero_follows_floating_point_semantics(expression: &str, expected: &str) {
        let value = evaluate_str(expression).unwrap();
        assert_eq!(format_result(value), expected);
    }

    #[test]
    fn division_by_zero_is_positive_infinity() {
        assert_eq!(evaluate_str("1/0").unwrap(), f64::INFINITY);
    }

    #[test]
    fn regenerated_tokens_reproduce_compact_expression() {
        let expressions = ["(2+3.4-5)*6/7", "1+2*3", "((1))", "10.25/.5-3"];

        for expression in expressions {
            let tokens = tokenize(expression).unwrap();
            assert_eq!(tokens_to_string(&tokens).unwrap(), expression);
        }
    }

    #[test]
    fn regenerated_tokens_ignore_whitespace() {
        let tokens = tokenize(" ( 2 + 3.4 - 5 ) * 6 / 7 ").unwrap();
        assert_eq!(tokens_to_string(&tokens).unwrap(), "(2+3.4-5)*6/7");
    }

    #[test]
    fn postfix_string_of_parenthesised_expression() {
        let tokens = tokenize("2+3*(4+5)").unwrap();
        let postfix = infix_to_postfix(tokens).unwrap();
        assert_eq!(tokens_to_postfix_string(&postfix), "2 3 4 5 + * +");
    }

    #[test]
    fn repeated_evaluation_returns_same_value() {
        let expression = "38034 - 172.432 * 16864 / 45030 - 162 / (663.45532 * 535)";

        let first = evaluate_str(expression).unwrap();
        let second = evaluate_str(expression).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn result_is_formatted_with_four_decimals() {
        assert_eq!(format_result(16.0), "16.0000");
        assert_eq!(format_result(2.0 / 3.0), "0.6667");
        assert_eq!(format_result(-1.0), "-1.0000");
    }

    #[test]
    fn unmatched_closing_parenthesis_returns_err() {
        let error = evaluate_str("2+3)").unwrap_err();

        assert_eq!(
            error.downcast_ref::<EvaluationError>(),
            Some(&EvaluationError::UnmatchedParenthesis(Parenthesis::Close))
        );
    }

    #[test]
    fn unmatched_opening_parenthesis_returns_err() {
        let error = evaluate_str("(2+3").unwrap_err();

        assert_eq!(
            error.downcast_ref::<EvaluationError>(),
            Some(&EvaluationError::UnmatchedParenthesis(Parenthesis::Open))
        );
    }

    #[parameterized(expression = { "", "2+", "*3", "1 2", "2.3.", "abc", "2 * (3 +" })]
    fn malformed_expression_returns_err(expression: &str) {
        evaluate_str(expression).expect_err("Should return Err");
    }

    #[test]
    fn error_message_mentions_evaluation_and_cause() {
        let error = evaluate_str("2 $ 3").unwrap_err();
        let message = format!("{:#}", error);

        assert!(message.starts_with("Failed to evaluate expression"));
        assert!(message.contains("'$'"));
    }
}
