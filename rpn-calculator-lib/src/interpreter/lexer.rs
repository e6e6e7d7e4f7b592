use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::trace;
use std::io::{BufReader, Bytes, Read};
use std::iter::FusedIterator;

/// Lazily splits a character stream into tokens.
///
/// The stream is read exactly once, left to right, with a single character of look-ahead.
/// Numbers are only classified by their characters (`0-9` and `.`), so `3.4.5` is a single
/// number token that fails later, during evaluation.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::lexer::Scanner;
/// use rpn_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = Scanner::new("2 * 3".as_bytes()).collect::<Result<Vec<_>>>()?;
/// assert_eq!(tokens, vec![Token::new_number("2"), Token::Asterisk, Token::new_number("3")]);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub struct Scanner<R: Read> {
    bytes: Bytes<BufReader<R>>,
    peeked: Option<char>,
    // A read failure held back until the number in front of it has been returned.
    failure: Option<anyhow::Error>,
    finished: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Scanner<R> {
        Scanner {
            bytes: BufReader::new(reader).bytes(),
            peeked: None,
            failure: None,
            finished: false,
        }
    }

    fn scan(&mut self) -> Result<Option<Token>> {
        if let Some(failure) = self.failure.take() {
            return Err(failure);
        }

        let mut number = String::new();
        loop {
            let character = match self.peek() {
                Ok(None) if number.is_empty() => return Ok(None),
                Ok(None) => return Ok(Some(Token::Number(number))),
                Ok(Some(character)) => character,
                Err(failure) if number.is_empty() => return Err(failure),
                Err(failure) => {
                    self.failure = Some(failure);
                    return Ok(Some(Token::Number(number)));
                }
            };

            if is_number_character(character) {
                number.push(character);
                self.consume();
                continue;
            }

            // The terminating character stays peeked for the next call.
            if !number.is_empty() {
                return Ok(Some(Token::Number(number)));
            }

            if character.is_whitespace() {
                self.consume();
                continue;
            }

            let token = Token::from_symbol(character)
                .ok_or(EvaluationError::UnexpectedCharacter { character })?;
            self.consume();
            return Ok(Some(token));
        }
    }

    fn peek(&mut self) -> Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.read_char()?;
        }
        Ok(self.peeked)
    }

    fn consume(&mut self) {
        self.peeked = None;
    }

    fn read_char(&mut self) -> Result<Option<char>> {
        let first = match self.read_byte()? {
            None => return Ok(None),
            Some(byte) => byte,
        };
        let width = utf8_width(first)
            .with_context(|| format!("Invalid UTF-8 start byte {:#04x} in input", first))?;

        let mut encoded = [first, 0, 0, 0];
        for slot in encoded.iter_mut().take(width).skip(1) {
            *slot = self
                .read_byte()?
                .context("Input ended inside a UTF-8 sequence")?;
        }
        let decoded = std::str::from_utf8(&encoded[..width]).context("Invalid UTF-8 in input")?;
        Ok(decoded.chars().next())
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        self.bytes
            .next()
            .transpose()
            .context("Failed to read expression input")
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scan() {
            Ok(Some(token)) => {
                trace!("scanned {}", token);
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

impl<R: Read> FusedIterator for Scanner<R> {}

/// Splits an in-memory expression into all of its tokens.
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    Scanner::new(expression.as_bytes()).collect()
}

fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn utf8_width(first_byte: u8) -> Option<usize> {
    match first_byte {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
