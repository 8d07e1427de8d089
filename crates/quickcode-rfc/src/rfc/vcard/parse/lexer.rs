//! vCard lexer for line unfolding and content line parsing.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// Transfer encodings that vCard 2.1 allows as bare parameters.
const BARE_ENCODINGS: [&str; 4] = ["QUOTED-PRINTABLE", "BASE64", "8BIT", "7BIT"];

/// Unfolds a vCard document by removing line continuations.
///
/// Line continuations are CRLF followed by a single space or tab.
/// Also handles bare LF for lenient parsing.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
                // Check for continuation (space or tab)
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next(); // Skip the whitespace, continue line
                } else {
                    result.push('\n'); // End of logical line
                }
            } else {
                result.push(c);
            }
        } else if c == '\n' {
            // Bare LF (lenient)
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            } else {
                result.push('\n');
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits unfolded input into non-empty logical lines.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

impl ContentLine {
    /// Returns whether the value uses quoted-printable transfer encoding.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.params
            .iter()
            .any(|p| p.name == "ENCODING" && p.has_value("QUOTED-PRINTABLE"))
    }
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// ## Errors
/// Returns an error if the line is malformed or missing the colon separator.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    // Find the colon separating name/params from value
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..]; // Skip the colon

    let (group, name_params) = parse_group(name_params);

    // Split name from parameters
    let (name, params_str) = if let Some(semi_pos) = name_params.find(';') {
        (&name_params[..semi_pos], Some(&name_params[semi_pos + 1..]))
    } else {
        (name_params, None)
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = params_str.map(parse_parameters).unwrap_or_default();

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Must handle quoted parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some(dot_pos) = s.find('.') {
        let potential_group = &s[..dot_pos];
        // Group must be alphanumeric + hyphen
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Parses parameter string into parameters.
fn parse_parameters(s: &str) -> Vec<VCardParameter> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining);
        if let Some(param) = param {
            params.push(param);
        }
        remaining = rest;
    }

    params
}

/// Parses a single parameter and returns remaining string.
///
/// vCard 2.1 allows bare parameters (`TEL;HOME;VOICE:`); those become `TYPE`
/// values, or `ENCODING` when they name a transfer encoding.
fn parse_single_parameter(s: &str) -> (Option<VCardParameter>, &str) {
    let eq_pos = s.find('=');
    let semi_pos = s.find(';');

    match (eq_pos, semi_pos) {
        (Some(eq), semi) if semi.is_none_or(|semi| eq < semi) => {
            let name = &s[..eq];
            let (values, remaining) = parse_param_values(&s[eq + 1..]);
            (Some(VCardParameter::multi(name, values)), remaining)
        }
        (_, semi) => {
            let (bare, remaining) = match semi {
                Some(semi) => (&s[..semi], &s[semi + 1..]),
                None => (s, ""),
            };
            if bare.is_empty() {
                return (None, remaining);
            }
            let name = if BARE_ENCODINGS
                .iter()
                .any(|enc| bare.eq_ignore_ascii_case(enc))
            {
                "ENCODING"
            } else {
                "TYPE"
            };
            (Some(VCardParameter::new(name, bare)), remaining)
        }
    }
}

/// Parses parameter values (comma-separated, possibly quoted).
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut chars = s.chars().peekable();
    let mut current_value = String::new();
    let mut in_quotes = false;
    let mut consumed = 0;

    while let Some(&c) = chars.peek() {
        consumed += c.len_utf8();

        match c {
            '"' => {
                chars.next();
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                chars.next();
                values.push(std::mem::take(&mut current_value));
            }
            ';' if !in_quotes => {
                // Next parameter
                if !current_value.is_empty() || !values.is_empty() {
                    values.push(current_value);
                }
                return (values, &s[consumed..]);
            }
            '^' if !in_quotes => {
                // RFC 6868 caret encoding
                chars.next();
                if let Some(&next) = chars.peek() {
                    consumed += next.len_utf8();
                    chars.next();
                    match next {
                        'n' => current_value.push('\n'),
                        '\'' => current_value.push('"'),
                        '^' => current_value.push('^'),
                        _ => {
                            current_value.push('^');
                            current_value.push(next);
                        }
                    }
                } else {
                    current_value.push('^');
                }
            }
            _ => {
                chars.next();
                current_value.push(c);
            }
        }
    }

    if !current_value.is_empty() || !values.is_empty() {
        values.push(current_value);
    }

    (values, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_crlf() {
        let input = "FN:John\r\n Doe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn unfold_bare_lf() {
        let input = "FN:John\n Doe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn unfold_tab() {
        let input = "FN:John\r\n\tDoe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn split_lines_filters_empty() {
        let input = "LINE1\n\nLINE2\n";
        let lines = split_lines(input);
        assert_eq!(lines, vec!["LINE1", "LINE2"]);
    }

    #[test]
    fn parse_simple_line() {
        let line = parse_content_line("FN:John Doe", 1).unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "John Doe");
    }

    #[test]
    fn parse_grouped_line() {
        let line = parse_content_line("item1.TEL:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.group, Some("item1".to_string()));
        assert_eq!(line.name, "TEL");
    }

    #[test]
    fn parse_with_parameters() {
        let line = parse_content_line("TEL;TYPE=home,voice;PREF=1:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.name, "TEL");
        assert_eq!(line.params.len(), 2);

        let type_param = &line.params[0];
        assert_eq!(type_param.name, "TYPE");
        assert_eq!(type_param.values, vec!["home", "voice"]);

        let pref_param = &line.params[1];
        assert_eq!(pref_param.name, "PREF");
        assert_eq!(pref_param.value(), Some("1"));
    }

    #[test]
    fn parse_bare_v21_parameters() {
        let line = parse_content_line("TEL;HOME;VOICE:555-1234", 1).unwrap();
        assert_eq!(line.params.len(), 2);
        assert!(line.params.iter().all(|p| p.name == "TYPE"));
        assert!(line.params[0].has_value("home"));
    }

    #[test]
    fn parse_bare_encoding_parameter() {
        let line = parse_content_line("NOTE;QUOTED-PRINTABLE:caf=C3=A9", 1).unwrap();
        assert!(line.is_quoted_printable());
    }

    #[test]
    fn parse_quoted_param() {
        let line =
            parse_content_line("ADR;LABEL=\"123 Main St\\nAnytown\":;;123 Main St", 1).unwrap();
        assert_eq!(line.params.len(), 1);
        assert_eq!(line.value, ";;123 Main St");
    }

    #[test]
    fn parse_colon_in_value() {
        let line = parse_content_line("URL:https://example.com:8080/path", 1).unwrap();
        assert_eq!(line.value, "https://example.com:8080/path");
    }

    #[test]
    fn reject_missing_colon() {
        let err = parse_content_line("FN John Doe", 3).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
        assert_eq!(err.line, 3);
    }
}
