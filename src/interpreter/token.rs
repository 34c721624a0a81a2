/// An arithmetic operator recognized by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns `true` for `*` and `/`, which are folded by the first pass.
    #[must_use]
    pub const fn is_high_precedence(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Applies the operator with plain IEEE-754 arithmetic.
    ///
    /// Division by zero is not checked: `1 / 0` is `inf` and `0 / 0` is
    /// `NaN`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::Mul.apply(7.0, 3.0), 21.0);
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub const fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A single element of a token sequence.
///
/// Tokens are plain values. Reduction passes never mutate a sequence in
/// place; each pass builds a new one from the previous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// One of `+`, `-`, `*` or `/`.
    Operator(Operator),
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(value: Operator) -> Self {
        Self::Operator(value)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", crate::util::num::format_number(*value)),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}
