//! Expression evaluation and display formatting for parameter expressions.
//!
//! Parameter values, port bounds, and remap values are raw expressions that
//! refer to parameters by their stable value ids. This crate resolves those
//! ids through a [`ParameterFinder`], evaluates expressions with an
//! [`ExpressionParser`], and renders the results for display with an
//! [`ExpressionFormatter`].

#![warn(missing_docs)]

pub mod finder;
pub mod formatter;
pub mod parser;
pub mod sv_parser;
pub mod value;
pub mod value_formatter;

pub use finder::{
    ComponentParameterFinder, ListParameterFinder, MultipleParameterFinder, ParameterFinder,
};
pub use formatter::{ExpressionFormatter, FormattedValue};
pub use parser::{Evaluation, ExpressionParser};
pub use sv_parser::SystemVerilogExpressionParser;
pub use value::Value;
pub use value_formatter::{RadixFormatter, ValueFormatter};

#[cfg(test)]
mod tests {
    use super::*;
    use ipmeta_model::Parameter;

    #[test]
    fn evaluate_and_format_through_finder() {
        let params = vec![
            Parameter::new("WIDTH", "uuid_w", "8"),
            Parameter::new("MASK", "uuid_m", "'hF0"),
        ];
        let finder = ListParameterFinder::new(&params);
        let parser = SystemVerilogExpressionParser::new(&finder);
        let formatter = ExpressionFormatter::new(&finder);

        assert_eq!(formatter.format("uuid_w*2", &parser).text, "16");
        assert_eq!(formatter.format("uuid_m", &parser).text, "'hF0");
        assert_eq!(formatter.format_referring_expression("uuid_w-1"), "WIDTH-1");
    }
}
