//! The expression parser interface.

/// Result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Evaluated value as text. Holds the input unchanged when invalid.
    pub value: String,
    /// Whether the expression evaluated successfully.
    pub is_valid: bool,
}

impl Evaluation {
    /// A successful evaluation.
    pub fn valid(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_valid: true,
        }
    }

    /// A failed evaluation of `expression`.
    pub fn invalid(expression: impl Into<String>) -> Self {
        Self {
            value: expression.into(),
            is_valid: false,
        }
    }
}

/// Evaluates expressions and reports the numeric base they are written in.
pub trait ExpressionParser {
    /// Evaluates `expression`.
    fn parse_expression(&self, expression: &str) -> Evaluation;

    /// Returns the base (2, 8, 10 or 16) the expression's result should be
    /// displayed in.
    fn base_for_expression(&self, expression: &str) -> u32;
}
