use log::trace;

use crate::{
    error::EvalError,
    interpreter::{
        reducer::core::EvalResult,
        token::{Operator, Token},
    },
};

/// Folds a sequence of numbers, `+` and `-` into a single number.
///
/// The running result starts at the first token, which must be a number.
/// The rest is read in pairs of an operator slot followed by an operand
/// slot. `+` adds the operand and `-` subtracts it. Any other token in the
/// operator slot is skipped together with its operand, without error. This
/// mirrors the long-standing behavior of the calculator and is kept as is.
///
/// # Parameters
/// - `tokens`: The sequence left by the high precedence pass.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `ExpectedNumber` if the first token is an operator.
/// - `MissingRightOperand` if a `+` or `-` is not followed by a number.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     reducer::low::reduce_low,
///     token::{Operator, Token},
/// };
///
/// let tokens = [Token::Number(2.0), Token::Operator(Operator::Sub), Token::Number(3.0)];
/// assert_eq!(reduce_low(&tokens).unwrap(), -1.0);
/// ```
pub fn reduce_low(tokens: &[Token]) -> EvalResult<f64> {
    let (first, rest) = tokens.split_first().ok_or(EvalError::EmptyExpression)?;

    let mut result = match *first {
        Token::Number(value) => value,
        Token::Operator(found) => return Err(EvalError::ExpectedNumber { found, position: 0 }),
    };

    for (index, pair) in rest.chunks(2).enumerate() {
        let position = 1 + index * 2;

        let Token::Operator(operator @ (Operator::Add | Operator::Sub)) = pair[0] else {
            trace!("skipping {} at token {position}", pair[0]);
            continue;
        };
        let Some(&Token::Number(right)) = pair.get(1) else {
            return Err(EvalError::MissingRightOperand { operator, position });
        };

        result = operator.apply(result, right);
        trace!("applied {operator} {right}, running result {result}");
    }

    Ok(result)
}
