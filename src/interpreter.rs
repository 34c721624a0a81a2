/// The lexer module tokenizes expressions for the reduction passes.
///
/// The lexer reads raw expression text and produces a flat, ordered
/// sequence of numbers and operators. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Accumulates digits and decimal points into numerals.
/// - Emits `+`, `-`, `*` and `/` as operator tokens.
/// - Silently ignores every other character.
pub mod lexer;
/// The reducer module collapses a token sequence into a number.
///
/// Evaluation happens in two left-to-right passes, one per precedence tier.
/// There is no syntax tree and no recursion; each pass builds a new flat
/// sequence from the previous one.
///
/// # Responsibilities
/// - Folds multiplication and division first, then addition and
///   subtraction.
/// - Reports malformed sequences such as dangling operators.
/// - Preserves IEEE-754 results like `inf` and `NaN` untouched.
pub mod reducer;
/// The token module defines the values passed between stages.
pub mod token;
