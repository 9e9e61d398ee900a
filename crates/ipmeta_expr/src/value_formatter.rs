//! Display formatting of evaluated values.

/// Renders an evaluated value in a given base.
pub trait ValueFormatter {
    /// Formats `value` for display in `base`.
    fn format(&self, value: &str, base: u32) -> String;
}

/// Formats non-negative integers as SystemVerilog based literals.
///
/// Bases 2, 8 and 16 become `'b`, `'o` and `'h` literals with upper-case
/// hex digits. Any other base, negative numbers, and non-integer values
/// are returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixFormatter;

impl ValueFormatter for RadixFormatter {
    fn format(&self, value: &str, base: u32) -> String {
        let Ok(n) = value.trim().parse::<i64>() else {
            return value.to_string();
        };
        if n < 0 {
            return value.to_string();
        }
        match base {
            2 => format!("'b{n:b}"),
            8 => format!("'o{n:o}"),
            16 => format!("'h{n:X}"),
            _ => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn based_output() {
        let f = RadixFormatter;
        assert_eq!(f.format("10", 2), "'b1010");
        assert_eq!(f.format("8", 8), "'o10");
        assert_eq!(f.format("255", 16), "'hFF");
        assert_eq!(f.format("255", 10), "255");
    }

    #[test]
    fn passthrough() {
        let f = RadixFormatter;
        assert_eq!(f.format("-1", 16), "-1");
        assert_eq!(f.format("1.5", 16), "1.5");
        assert_eq!(f.format("\"txt\"", 2), "\"txt\"");
    }
}
