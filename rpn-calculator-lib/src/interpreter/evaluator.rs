use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use log::debug;

/// Reduces a sequence of postfix tokens to a single number using an operand stack.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format. Usually an infix converter.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluator::evaluate_postfix;
/// use rpn_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = vec![Token::new_number("10"), Token::new_number("4"), Token::Dash];
/// let value = evaluate_postfix(postfix_tokens.into_iter().map(Ok))?;
/// assert_eq!(value, 6.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix<I>(postfix_tokens: I) -> Result<f64>
where
    I: IntoIterator<Item = Result<Token>>,
{
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token? {
            Token::Number(literal) => {
                let value = parse_number(literal)?;
                operands.push(value);
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                bail!(EvaluationError::UnexpectedParenthesis)
            }
            operator_token => {
                let operator = match operator_token.as_binary_operator() {
                    Some(operator) => operator,
                    None => bail!("Token {} is not an operator", operator_token),
                };
                let underflow = || EvaluationError::StackUnderflow { operator };
                let right_operand = operands.pop().ok_or_else(underflow)?;
                let left_operand = operands.pop().ok_or_else(underflow)?;
                operands.push(operator.evaluate(left_operand, right_operand));
            }
        }
    }

    match operands.as_slice() {
        [result] => {
            debug!("evaluated to {}", result);
            Ok(*result)
        }
        remaining => bail!(EvaluationError::MalformedExpression {
            remaining: remaining.len()
        }),
    }
}

fn parse_number(literal: String) -> Result<f64> {
    match literal.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(source) => bail!(EvaluationError::InvalidNumber { literal, source }),
    }
}
