//! # reckon
//!
//! reckon is a small arithmetic expression evaluator written in Rust,
//! bundled with a focus/break countdown timer.
//!
//! Expressions are evaluated in two flat, left-to-right passes: first every
//! multiplication and division, then every addition and subtraction. There
//! are no parentheses, no unary operators and no variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::tokenize, reducer::core::{EvalResult, reduce}};

/// Provides unified error types for evaluation and timer settings.
///
/// This module defines every error raised by the crate. Evaluation errors
/// describe malformed token sequences and carry the position of the
/// offending token. Settings errors describe invalid or unreadable timer
/// configuration.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (evaluation, settings).
/// - Attaches token positions and file locations for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together tokenizing and the two reduction passes, and
/// defines the token type shared between them.
///
/// # Responsibilities
/// - Coordinates the lexer and both reducers.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The focus/break countdown timer.
///
/// A pure state machine for the timer, its persisted settings, and a
/// session driver that routes side effects (rendering, sound, notifications)
/// through an injected collaborator.
pub mod pomodoro;
/// The interactive prompt loop.
pub mod repl;
/// General utilities for numeral parsing and number formatting.
///
/// # Responsibilities
/// - Parse accumulated numerals with leading-prefix semantics.
/// - Format results, including infinities and `NaN`, for display.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// The source is tokenized, then every `*` and `/` is folded left to right,
/// then every `+` and `-`. Characters other than digits, `.` and the four
/// operators are ignored. Division by zero is not an error: it yields an
/// infinity or `NaN`. Evaluation keeps no state between calls.
///
/// # Errors
/// Returns an error if the token sequence is malformed, for instance when an
/// operator lacks an operand (`3*-2`, `-3`, `2+`) or the expression is
/// empty.
///
/// # Examples
/// ```
/// use reckon::evaluate;
///
/// assert_eq!(evaluate("12+7*3-4/2").unwrap(), 31.0);
/// assert_eq!(evaluate("8/4*2").unwrap(), 4.0);
/// assert_eq!(evaluate("1/0").unwrap(), f64::INFINITY);
///
/// // Unary minus is not supported.
/// assert!(evaluate("3*-2").is_err());
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    let tokens = tokenize(source);
    reduce(&tokens)
}
