use log::trace;

use crate::{
    error::EvalError,
    interpreter::{reducer::core::EvalResult, token::Token},
};

/// Evaluates every multiplication and division in a token sequence.
///
/// The sequence is walked with a cursor while the output is kept on an
/// explicit stack. On `*` or `/` the top of the stack is popped as the left
/// operand and the next input token is taken as the right operand; the
/// result is pushed back and the cursor skips the consumed operand. Every
/// other token is pushed unchanged. Chains therefore fold strictly left to
/// right: `8 / 4 * 2` is `(8 / 4) * 2`.
///
/// # Parameters
/// - `tokens`: The sequence produced by the tokenizer.
///
/// # Returns
/// A new sequence holding only numbers, `+` and `-`.
///
/// # Errors
/// - `MissingLeftOperand` if the stack is empty or its top is an operator.
/// - `MissingRightOperand` if the operator is last or followed by another
///   operator.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     reducer::high::reduce_high,
///     token::{Operator, Token},
/// };
///
/// let tokens = [Token::Number(12.0),
///               Token::Operator(Operator::Sub),
///               Token::Number(4.0),
///               Token::Operator(Operator::Div),
///               Token::Number(2.0)];
/// assert_eq!(reduce_high(&tokens).unwrap(),
///            vec![Token::Number(12.0), Token::Operator(Operator::Sub), Token::Number(2.0)]);
/// ```
pub fn reduce_high(tokens: &[Token]) -> EvalResult<Vec<Token>> {
    let mut stack: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut cursor = 0;

    while let Some(&token) = tokens.get(cursor) {
        match token {
            Token::Operator(operator) if operator.is_high_precedence() => {
                let Some(Token::Number(left)) = stack.pop() else {
                    return Err(EvalError::MissingLeftOperand { operator,
                                                               position: cursor });
                };
                let Some(&Token::Number(right)) = tokens.get(cursor + 1) else {
                    return Err(EvalError::MissingRightOperand { operator,
                                                                position: cursor });
                };

                let value = operator.apply(left, right);
                trace!("folded {left} {operator} {right} = {value}");

                stack.push(Token::Number(value));
                cursor += 2;
            },
            _ => {
                stack.push(token);
                cursor += 1;
            },
        }
    }

    Ok(stack)
}
