use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::num::ParseFloatError;

/// Which side of a parenthesis pair could not be matched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parenthesis {
    Open,
    Close,
}

/// Every way an expression can fail to evaluate.
///
/// None of these are recoverable; the first one encountered aborts the whole pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// A character outside of whitespace, digits, `.` and `+-*/()`.
    UnexpectedCharacter { character: char },
    /// A parenthesis without a partner.
    UnmatchedParenthesis(Parenthesis),
    /// A parenthesis reached the evaluator, which only understands postfix order.
    UnexpectedParenthesis,
    /// A number literal that is not a valid floating-point number, e.g. `3.4.5`.
    InvalidNumber {
        literal: String,
        source: ParseFloatError,
    },
    /// An operator was applied without enough operands on the stack.
    StackUnderflow { operator: BinaryOperator },
    /// The operand stack did not hold exactly one value once all tokens were consumed.
    MalformedExpression { remaining: usize },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::UnexpectedCharacter { character } => {
                write!(f, "Unexpected input character {:?}", character)
            }
            EvaluationError::UnmatchedParenthesis(Parenthesis::Open) => {
                write!(f, "Mismatched parenthesis: missing )")
            }
            EvaluationError::UnmatchedParenthesis(Parenthesis::Close) => {
                write!(f, "Mismatched parenthesis: missing (")
            }
            EvaluationError::UnexpectedParenthesis => {
                write!(f, "Found parenthesis in postfix expression")
            }
            EvaluationError::InvalidNumber { literal, .. } => {
                write!(f, "Invalid number {:?}", literal)
            }
            EvaluationError::StackUnderflow { operator } => {
                write!(f, "Stack underflow: missing operand for {}", operator)
            }
            EvaluationError::MalformedExpression { remaining } => write!(
                f,
                "Malformed expression: expected exactly one result but found {}",
                remaining
            ),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluationError::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}
