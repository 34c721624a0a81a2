use log::debug;

use crate::{
    error::EvalError,
    interpreter::{reducer::{high::reduce_high, low::reduce_low}, token::Token},
};

/// Result type used by the reduction passes.
///
/// All reduction functions return either a value of type `T` or an
/// `EvalError` describing the malformed sequence.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces a token sequence to a single number.
///
/// Runs the high precedence pass followed by the low precedence pass. The
/// first failure is returned as is; no partial result is produced.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     reducer::core::reduce,
///     token::{Operator, Token},
/// };
///
/// let tokens = [Token::Number(2.0),
///               Token::Operator(Operator::Add),
///               Token::Number(3.0),
///               Token::Operator(Operator::Mul),
///               Token::Number(4.0)];
/// assert_eq!(reduce(&tokens).unwrap(), 14.0);
/// ```
pub fn reduce(tokens: &[Token]) -> EvalResult<f64> {
    let flattened = reduce_high(tokens)?;
    debug!("high precedence pass left {} of {} tokens", flattened.len(), tokens.len());

    let result = reduce_low(&flattened)?;
    debug!("low precedence pass produced {result}");
    Ok(result)
}
