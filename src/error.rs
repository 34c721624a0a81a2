/// Evaluation errors.
///
/// Defines the errors raised while reducing a token sequence. These cover
/// malformed sequences only: an operator without a usable operand or an
/// expression with nothing in it. Numeric edge cases such as division by
/// zero are never errors and surface as `inf` or `NaN` results instead.
pub mod eval_error;
/// Settings errors.
///
/// Contains the errors raised while validating, loading or persisting the
/// countdown timer's settings blob.
pub mod settings_error;

pub use eval_error::EvalError;
pub use settings_error::SettingsError;
