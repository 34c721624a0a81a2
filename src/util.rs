/// Numeral parsing and number formatting helpers.
///
/// This module converts the numeral text collected by the tokenizer into
/// `f64` values and renders evaluation results for display. Both directions
/// keep IEEE-754 edge cases intact: malformed numerals become `NaN` rather
/// than errors, and infinities print by name.
pub mod num;
