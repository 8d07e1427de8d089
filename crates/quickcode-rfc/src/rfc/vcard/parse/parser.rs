//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use super::values::{
    decode_quoted_printable, parse_address, parse_structured_name, split_component,
    unescape_text,
};
use crate::rfc::vcard::core::{VCard, VCardProperty, VCardValue, VCardVersion};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard document and returns all vCards found.
///
/// ## Errors
/// Returns a parse error if the document is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let result = parser.parse_document()?;

    tracing::debug!(count = result.len(), "Parsed vCards");

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for documents where only the first vCard matters.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

struct Parser {
    lines: Vec<String>,
    pos: usize,
}

impl Parser {
    fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while self.pos < self.lines.len() {
            let is_begin = self.lines[self.pos].trim().eq_ignore_ascii_case("BEGIN:VCARD");
            self.pos += 1;

            // Unknown content at top level is skipped
            if is_begin {
                cards.push(self.parse_vcard()?);
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self) -> ParseResult<VCard> {
        let mut version = VCardVersion::default();
        let mut properties = Vec::new();
        let start_line = self.current_line();

        while self.pos < self.lines.len() {
            let line_num = self.current_line();
            let line = self.lines[self.pos].clone();
            self.pos += 1;

            if line.trim().eq_ignore_ascii_case("END:VCARD") {
                return Ok(VCard {
                    version,
                    properties,
                });
            }

            let mut content_line = parse_content_line(&line, line_num)?;

            if content_line.is_quoted_printable() {
                self.join_soft_breaks(&mut content_line);
            }

            if content_line.name == "VERSION" {
                version = VCardVersion::parse(&content_line.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported vCard version: {}", content_line.value),
                    )
                })?;
            } else {
                properties.push(convert_to_property(content_line));
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            start_line,
            "vCard not closed with END:VCARD",
        ))
    }

    /// Quoted-printable values continue onto the next physical line when the
    /// current one ends with `=`.
    fn join_soft_breaks(&mut self, content_line: &mut ContentLine) {
        while content_line.value.ends_with('=') && self.pos < self.lines.len() {
            content_line.value.pop();
            content_line.value.push_str(&self.lines[self.pos]);
            self.pos += 1;
        }
    }
}

fn convert_to_property(line: ContentLine) -> VCardProperty {
    let raw_value = if line.is_quoted_printable() {
        decode_quoted_printable(&line.value)
    } else {
        line.value
    };

    let value_type = line
        .params
        .iter()
        .find(|p| p.name == "VALUE")
        .and_then(|p| p.value());

    let value = parse_property_value(&line.name, &raw_value, value_type);

    VCardProperty {
        group: line.group,
        name: line.name,
        params: line.params,
        value,
        raw_value,
    }
}

fn parse_property_value(name: &str, raw_value: &str, value_type: Option<&str>) -> VCardValue {
    if let Some(vt) = value_type {
        if vt.eq_ignore_ascii_case("uri") || vt.eq_ignore_ascii_case("url") {
            return VCardValue::Uri(raw_value.to_string());
        }
        if vt.eq_ignore_ascii_case("text") {
            return VCardValue::Text(unescape_text(raw_value));
        }
    }

    match name {
        "N" => VCardValue::StructuredName(parse_structured_name(raw_value)),
        "ADR" => VCardValue::Address(parse_address(raw_value)),
        "URL" | "PHOTO" | "LOGO" | "SOUND" | "KEY" | "SOURCE" | "IMPP" => {
            VCardValue::Uri(raw_value.to_string())
        }
        "NICKNAME" | "CATEGORIES" => VCardValue::TextList(split_component(raw_value)),
        _ => VCardValue::Text(unescape_text(raw_value)),
    }
}
