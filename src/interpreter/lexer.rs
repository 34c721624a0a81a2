use log::trace;
use logos::Logos;

use crate::{
    interpreter::token::{Operator, Token},
    util::num::parse_numeral,
};

/// A raw lexeme as produced by the `logos` scanner.
///
/// Numerals come out in fragments: anything that is neither a digit, a `.`
/// nor an operator is skipped without ending the current numeral, so
/// `1 2` yields two fragments that [`tokenize`] joins into `12`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme<'source> {
    /// A run of digits and decimal points, such as `3`, `.5` or `1.2.3`.
    #[regex(r"[0-9.]+", |lex| lex.slice())]
    Numeral(&'source str),
    /// One of the four arithmetic operators.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// Whitespace, letters and any other character.
    #[regex(r"[^0-9.+\-*/]", logos::skip)]
    Ignored,
}

/// Converts an expression string into an ordered token sequence.
///
/// Digits and `.` accumulate into a pending numeral. An operator flushes the
/// pending numeral, if there is one, and is then emitted itself. An operator
/// with nothing pending emits no number, so `3*-2` produces two adjacent
/// operators and `-3` starts with one. Such sequences are rejected later by
/// the reduction passes; tokenizing itself never fails.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("1 2 + 3");
/// assert_eq!(tokens,
///            vec![Token::Number(12.0), Token::Operator(Operator::Add), Token::Number(3.0)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut numeral = String::new();

    for lexeme in Lexeme::lexer(source).filter_map(Result::ok) {
        match lexeme {
            Lexeme::Numeral(fragment) => numeral.push_str(fragment),
            Lexeme::Operator(op) => {
                flush_numeral(&mut numeral, &mut tokens);
                tokens.push(Token::Operator(op));
            },
            // Dropped by `logos::skip`; listed for exhaustiveness only.
            Lexeme::Ignored => {},
        }
    }
    flush_numeral(&mut numeral, &mut tokens);

    trace!("tokenized {source:?} into {} tokens", tokens.len());
    tokens
}

fn flush_numeral(numeral: &mut String, tokens: &mut Vec<Token>) {
    if numeral.is_empty() {
        return;
    }
    tokens.push(Token::Number(parse_numeral(numeral)));
    numeral.clear();
}
