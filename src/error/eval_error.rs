use thiserror::Error;

use crate::interpreter::token::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents all errors that can occur while reducing a token sequence.
///
/// Every positioned variant carries the index of the offending token in the
/// sequence handed to the failing reduction pass.
pub enum EvalError {
    /// A `*` or `/` had no number directly before it.
    #[error("Error at token {position}: '{operator}' has no left operand.")]
    MissingLeftOperand {
        /// The operator being applied.
        operator: Operator,
        /// Index of the operator token.
        position: usize,
    },
    /// An operator was not followed by a number.
    #[error("Error at token {position}: '{operator}' has no right operand.")]
    MissingRightOperand {
        /// The operator being applied.
        operator: Operator,
        /// Index of the operator token.
        position: usize,
    },
    /// The sequence started with an operator instead of a number.
    #[error("Error at token {position}: Expected a number but found '{found}'.")]
    ExpectedNumber {
        /// The operator found in place of a number.
        found:    Operator,
        /// Index of the unexpected token.
        position: usize,
    },
    /// The expression contained no tokens at all.
    #[error("Expression is empty.")]
    EmptyExpression,
}
