//! Phone number display formatting.

use quickcode_core::config::PhoneStyle;

/// Renders a phone number for display.
pub trait PhoneFormatter: Send + Sync {
    fn format(&self, number: &str) -> String;
}

/// Returns numbers unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughFormatter;

impl PhoneFormatter for PassThroughFormatter {
    fn format(&self, number: &str) -> String {
        number.to_string()
    }
}

/// North American Numbering Plan grouping.
///
/// Only 7, 10 and 11 digit numbers (the latter with a leading `1`) made of
/// digits and common separators are regrouped. Anything else passes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct NanpFormatter;

impl PhoneFormatter for NanpFormatter {
    fn format(&self, number: &str) -> String {
        let trimmed = number.trim();
        let international = trimmed.starts_with('+');
        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

        if !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'))
        {
            return number.to_string();
        }

        let digits: String = body.chars().filter(char::is_ascii_digit).collect();

        match (international, digits.len()) {
            (false, 7) => format!("{}-{}", &digits[..3], &digits[3..]),
            (false, 10) => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
            (false, 11) if digits.starts_with('1') => {
                format!("1-{}-{}-{}", &digits[1..4], &digits[4..7], &digits[7..])
            }
            (true, 11) if digits.starts_with('1') => {
                format!("+1 {}-{}-{}", &digits[1..4], &digits[4..7], &digits[7..])
            }
            _ => number.to_string(),
        }
    }
}

/// Formatter for a configured style.
#[must_use]
pub fn formatter_for(style: PhoneStyle) -> Box<dyn PhoneFormatter> {
    match style {
        PhoneStyle::Nanp => Box::new(NanpFormatter),
        PhoneStyle::PassThrough => Box::new(PassThroughFormatter),
    }
}
