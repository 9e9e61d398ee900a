//! Rendering of raw expressions for display.

use crate::finder::ParameterFinder;
use crate::parser::ExpressionParser;
use crate::value_formatter::{RadixFormatter, ValueFormatter};

/// Text shown for an expression that does not evaluate.
pub const NOT_AVAILABLE: &str = "n/a";

/// A display-ready rendering of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedValue {
    /// Display text; [`NOT_AVAILABLE`] when the expression is invalid.
    pub text: String,
    /// Whether the expression evaluated.
    pub is_valid: bool,
}

/// Formats expressions using parameter display names.
pub struct ExpressionFormatter<'a> {
    finder: &'a dyn ParameterFinder,
    value_formatter: &'a dyn ValueFormatter,
}

impl<'a> ExpressionFormatter<'a> {
    /// Creates a formatter that renders values with [`RadixFormatter`].
    pub fn new(finder: &'a dyn ParameterFinder) -> Self {
        Self {
            finder,
            value_formatter: &RadixFormatter,
        }
    }

    /// Creates a formatter with a custom value formatter.
    pub fn with_value_formatter(
        finder: &'a dyn ParameterFinder,
        value_formatter: &'a dyn ValueFormatter,
    ) -> Self {
        Self {
            finder,
            value_formatter,
        }
    }

    /// Evaluates `expression` and renders the result in the base the
    /// expression was written in.
    pub fn format(&self, expression: &str, parser: &dyn ExpressionParser) -> FormattedValue {
        let evaluation = parser.parse_expression(expression);
        if !evaluation.is_valid {
            return FormattedValue {
                text: NOT_AVAILABLE.to_string(),
                is_valid: false,
            };
        }
        let base = parser.base_for_expression(expression);
        FormattedValue {
            text: self.value_formatter.format(&evaluation.value, base),
            is_valid: true,
        }
    }

    /// Replaces every parameter value id in `expression` with the
    /// parameter's display name, without evaluating anything.
    ///
    /// Tokens are the maximal runs of `[A-Za-z0-9:_.]`. Each token the
    /// finder knows is replaced at every textual occurrence in the
    /// progressively rewritten expression, including occurrences inside
    /// longer tokens.
    pub fn format_referring_expression(&self, expression: &str) -> String {
        let mut formatted = expression.to_string();
        let tokens = expression
            .split(|c: char| !is_reference_char(c))
            .filter(|token| !token.is_empty());
        for token in tokens {
            if let Some(name) = self.finder.name_for_id(token) {
                formatted = formatted.replace(token, name);
            }
        }
        formatted
    }
}

fn is_reference_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '.')
}
