mod infix_converter;

pub use crate::interpreter::parser::infix_converter::{infix_to_postfix, InfixConverter};
use crate::interpreter::token::Token;
use anyhow::Result;

/// Lazily reorders the given infix tokens into postfix (reverse Polish) order.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to reorder, in infix format. Usually a scanner.
///
/// returns: An iterator over the same tokens in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::lexer::Scanner;
/// use rpn_calculator::interpreter::parser::to_postfix;
/// use rpn_calculator::interpreter::tokens_to_postfix_string;
///
/// let postfix = to_postfix(Scanner::new("1 + 2 * 3".as_bytes())).collect::<Result<Vec<_>>>()?;
/// assert_eq!(tokens_to_postfix_string(&postfix), "1 2 3 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix<I>(infix_tokens: I) -> InfixConverter<I::IntoIter>
where
    I: IntoIterator<Item = Result<Token>>,
{
    InfixConverter::new(infix_tokens.into_iter())
}
