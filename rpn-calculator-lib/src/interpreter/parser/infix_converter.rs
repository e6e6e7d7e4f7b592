use crate::interpreter::error::{EvaluationError, Parenthesis};
use crate::interpreter::token::Token;
use anyhow::{bail, Context, Result};
use log::trace;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm,
/// pulling from the underlying tokens only when its output queue is empty.
pub struct InfixConverter<I>
where
    I: Iterator<Item = Result<Token>>,
{
    tokens: I,
    operators: Vec<Token>,
    output: VecDeque<Token>,
    finished: bool,
}

impl<I> InfixConverter<I>
where
    I: Iterator<Item = Result<Token>>,
{
    pub fn new(tokens: I) -> InfixConverter<I> {
        InfixConverter {
            tokens,
            operators: Vec::new(),
            output: VecDeque::new(),
            finished: false,
        }
    }

    /// Keeps consuming infix tokens until at least one postfix token can be emitted,
    /// or the input is exhausted.
    fn resolve_next(&mut self) -> Result<Option<Token>> {
        loop {
            if let Some(token) = self.output.pop_front() {
                return Ok(Some(token));
            }

            let token = match self.tokens.next() {
                None if self.operators.is_empty() => return Ok(None),
                None => {
                    transfer_leftover_operators(&mut self.operators, &mut self.output)?;
                    continue;
                }
                Some(token) => token?,
            };

            match token {
                Token::Number(_) => return Ok(Some(token)),
                Token::OpenParenthesis => self.operators.push(token),
                Token::CloseParenthesis => {
                    parse_closing_parenthesis_token(&mut self.operators, &mut self.output)?
                }
                operator => parse_operator_token(&mut self.operators, &mut self.output, operator)?,
            }
        }
    }
}

impl<I> Iterator for InfixConverter<I>
where
    I: Iterator<Item = Result<Token>>,
{
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.resolve_next() {
            Ok(Some(token)) => {
                trace!("emitted {}", token);
                Some(Ok(token))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<I> FusedIterator for InfixConverter<I> where I: Iterator<Item = Result<Token>> {}

/// Eagerly converts a complete infix token sequence into postfix order.
pub fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    InfixConverter::new(infix_tokens.into_iter().map(Ok)).collect()
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut VecDeque<Token>,
) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::OpenParenthesis => {
                bail!(EvaluationError::UnmatchedParenthesis(Parenthesis::Open));
            }
            operator => output.push_back(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut VecDeque<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => bail!(EvaluationError::UnmatchedParenthesis(Parenthesis::Close)),
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push_back(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut VecDeque<Token>,
    token: Token,
) -> Result<()> {
    let operator = token
        .as_binary_operator()
        .with_context(|| format!("Token {} is not an operator", token))?;

    while let Some(top_of_operator_stack) = operators.last() {
        // An open parenthesis has no precedence and acts as a barrier.
        let other_operator = match top_of_operator_stack.as_binary_operator() {
            Some(other_operator) => other_operator,
            None => break,
        };
        if !other_operator.yields_to(&operator) {
            break;
        }

        let other_operator_token = operators.pop().context("No operators left.")?;
        output.push_back(other_operator_token);
    }

    operators.push(token);
    Ok(())
}
