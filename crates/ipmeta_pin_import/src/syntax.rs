//! Pin definition lines of a Quartus pin report.
//!
//! A definition line starts with three colon-terminated fields:
//!
//! ```text
//!  LED[0]   : PIN_AA1  : output : 3.3-V LVTTL : : 2 : Y
//! ```
//!
//! The first field is the pin usage (no whitespace), the second the pin
//! location, which becomes the port name, and the third the direction
//! keyword. Location and direction are single words. Header and comment
//! lines fail these rules and are skipped.

use ipmeta_model::Direction;

/// A field of a matched line and its byte offset within the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capture<'a> {
    /// Byte offset of the trimmed text within the line.
    pub offset: usize,
    /// Field text without surrounding whitespace.
    pub text: &'a str,
}

/// The captures of a pin definition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDefinition<'a> {
    /// Pin usage, used as the port description.
    pub usage: Capture<'a>,
    /// Pin location, used as the port name.
    pub location: Capture<'a>,
    /// Direction keyword.
    pub direction: Capture<'a>,
}

fn is_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Matches `line` against the pin definition pattern.
pub fn match_pin_definition(line: &str) -> Option<PinDefinition<'_>> {
    let mut fields = [Capture::default(); 3];
    let mut start = 0;
    let mut found = 0;
    for (slot, (colon, _)) in fields.iter_mut().zip(line.match_indices(':')) {
        let raw = &line[start..colon];
        let leading = raw.len() - raw.trim_start().len();
        *slot = Capture {
            offset: start + leading,
            text: raw.trim(),
        };
        start = colon + 1;
        found += 1;
    }
    if found < fields.len() {
        return None;
    }

    let [usage, location, direction] = fields;
    let usage_ok = !usage.text.is_empty() && !usage.text.contains(char::is_whitespace);
    if !usage_ok || !is_word(location.text) || !is_word(direction.text) {
        return None;
    }
    Some(PinDefinition {
        usage,
        location,
        direction,
    })
}

/// Maps a direction keyword to a port direction, case-insensitively.
///
/// Keywords containing `input` map to in, `output` to out, and `bidir`,
/// `power` or `gnd` to inout. Returns `None` for anything else.
pub fn parse_direction(keyword: &str) -> Option<Direction> {
    let keyword = keyword.to_ascii_lowercase();
    if keyword.contains("input") {
        Some(Direction::In)
    } else if keyword.contains("output") {
        Some(Direction::Out)
    } else if ["bidir", "power", "gnd"].iter().any(|k| keyword.contains(k)) {
        Some(Direction::InOut)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_definition_line() {
        let line = " LED[0]   : PIN_AA1  : output : 3.3-V LVTTL : : 2 : Y";
        let def = match_pin_definition(line).unwrap();
        assert_eq!(def.usage.text, "LED[0]");
        assert_eq!(def.location.text, "PIN_AA1");
        assert_eq!(def.direction.text, "output");
        assert_eq!(&line[def.location.offset..][..7], "PIN_AA1");
        assert_eq!(&line[def.direction.offset..][..6], "output");
    }

    #[test]
    fn rejects_header_and_noise() {
        assert!(match_pin_definition("Pin Name/Usage : Location : Dir. : I/O Standard").is_none());
        assert!(match_pin_definition("-- Copyright (C) 2017 Intel Corporation").is_none());
        assert!(match_pin_definition("CHIP  \"top\"  ASSIGNED TO AN: EP4CE22F17C6").is_none());
        assert!(match_pin_definition("").is_none());
        assert!(match_pin_definition("a : b").is_none());
        assert!(match_pin_definition(" : PIN_A1 : input :").is_none());
    }

    #[test]
    fn power_pins_match() {
        let def = match_pin_definition("GND : A1 : gnd : : : :").unwrap();
        assert_eq!(def.usage.text, "GND");
        assert_eq!(def.location.text, "A1");
    }

    #[test]
    fn directions() {
        assert_eq!(parse_direction("input"), Some(Direction::In));
        assert_eq!(parse_direction("Output"), Some(Direction::Out));
        assert_eq!(parse_direction("BIDIR"), Some(Direction::InOut));
        assert_eq!(parse_direction("power"), Some(Direction::InOut));
        assert_eq!(parse_direction("gnd"), Some(Direction::InOut));
        assert_eq!(parse_direction("reserved"), None);
    }
}
