//! MECARD parser.

use quickcode_core::constants::MECARD_PREFIX;

use crate::error::{RfcError, RfcResult};

/// Fields read from a MECARD record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeCard {
    pub name: Option<String>,
    pub addresses: Vec<String>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub url: Option<String>,
    pub note: Option<String>,
}

/// Parses a MECARD record.
///
/// Unknown fields are ignored. `N` values written as `Family,Given` are
/// reordered to `Given Family`.
///
/// ## Errors
/// Returns `MeCardError` if the input does not start with `MECARD:`.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> RfcResult<MeCard> {
    let input = input.trim();
    let body = input
        .get(..MECARD_PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(MECARD_PREFIX))
        .map(|_| &input[MECARD_PREFIX.len()..])
        .ok_or_else(|| RfcError::MeCardError("missing MECARD: prefix".to_string()))?;

    let mut card = MeCard::default();

    for field in split_unescaped(body, ';') {
        let Some((key, value)) = split_field(field) else {
            continue;
        };
        let value = unescape(value);
        if value.trim().is_empty() {
            continue;
        }

        match key.to_ascii_uppercase().as_str() {
            "N" if card.name.is_none() => card.name = Some(reorder_name(&value)),
            "ADR" => card.addresses.push(value),
            "TEL" => card.phones.push(value),
            "EMAIL" => card.emails.push(value),
            "URL" if card.url.is_none() => card.url = Some(value),
            "NOTE" if card.note.is_none() => card.note = Some(value),
            other => tracing::trace!(field = other, "Ignoring MECARD field"),
        }
    }

    tracing::debug!(
        phones = card.phones.len(),
        emails = card.emails.len(),
        "Parsed MECARD"
    );

    Ok(card)
}

/// Splits on `sep` where it is not preceded by a backslash escape.
fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == sep {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

fn split_field(field: &str) -> Option<(&str, &str)> {
    let mut parts = split_unescaped(field, ':').into_iter();
    let key = parts.next()?;
    if key.is_empty() || key.len() == field.len() {
        return None;
    }
    Some((key, &field[key.len() + 1..]))
}

fn unescape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                result.push(next);
            }
        } else {
            result.push(c);
        }
    }

    result
}

fn reorder_name(value: &str) -> String {
    match value.split_once(',') {
        Some((family, given)) => format!("{} {}", given.trim(), family.trim())
            .trim()
            .to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_record() {
        let card = parse(
            "MECARD:N:Doe,John;ADR:1 Main St;TEL:555-1234;TEL:555-9876;EMAIL:j@x.com;URL:http://x.com;NOTE:hi;;",
        )
        .unwrap();

        assert_eq!(card.name.as_deref(), Some("John Doe"));
        assert_eq!(card.addresses, vec!["1 Main St"]);
        assert_eq!(card.phones, vec!["555-1234", "555-9876"]);
        assert_eq!(card.emails, vec!["j@x.com"]);
        assert_eq!(card.url.as_deref(), Some("http://x.com"));
        assert_eq!(card.note.as_deref(), Some("hi"));
    }

    #[test]
    fn escaped_separators_are_unescaped() {
        let card = parse(r"MECARD:N:J. Doe;NOTE:a\:b\;c;URL:http\://x.com;;").unwrap();
        assert_eq!(card.note.as_deref(), Some("a:b;c"));
        assert_eq!(card.url.as_deref(), Some("http://x.com"));
    }

    #[test]
    fn prefix_is_case_insensitive() {
        let card = parse("mecard:N:Jane;;").unwrap();
        assert_eq!(card.name.as_deref(), Some("Jane"));
    }

    #[test]
    fn missing_prefix_is_error() {
        assert!(matches!(parse("N:Jane;;"), Err(RfcError::MeCardError(_))));
    }

    #[test]
    fn blank_and_unknown_fields_are_skipped() {
        let card = parse("MECARD:N: ;SOUND:dou;BDAY:19700101;TEL:1;;").unwrap();
        assert!(card.name.is_none());
        assert_eq!(card.phones, vec!["1"]);
    }
}
