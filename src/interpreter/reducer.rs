/// Shared result type and the reduction pipeline.
///
/// Chains the two passes over an already tokenized sequence.
pub mod core;

/// Multiplication and division.
///
/// Folds every `*` and `/` left to right, leaving numbers and low
/// precedence operators in their original relative order.
pub mod high;

/// Addition and subtraction.
///
/// Folds the sequence left by [`high`] into a single number.
pub mod low;
