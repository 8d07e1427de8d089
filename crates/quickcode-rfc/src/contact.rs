//! Address-book records read from shared content.
//!
//! ## Summary
//! Turns raw bytes (a vCard or a MECARD) into a [`ParsedContact`]: plain
//! string collections for names, addresses, phone numbers and emails plus an
//! optional URL and note. Anything that is not a contact record is reported as
//! [`RfcError::NotAContact`].

use quickcode_core::constants::MECARD_PREFIX;

use crate::error::{RfcError, RfcResult};
use crate::rfc::mecard::{self, MeCard};
use crate::rfc::vcard::{self, VCard};

/// Record formats the contact parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormat {
    VCard,
    MeCard,
}

impl ContactFormat {
    /// Maps a declared media type (or format name) to a record format.
    ///
    /// Parameters such as `; charset=utf-8` are ignored.
    #[must_use]
    pub fn from_declared(declared: &str) -> Option<Self> {
        let media_type = declared.split(';').next().unwrap_or_default().trim();
        if ["text/vcard", "text/x-vcard", "text/directory"]
            .iter()
            .any(|t| media_type.eq_ignore_ascii_case(t))
        {
            Some(Self::VCard)
        } else if media_type.eq_ignore_ascii_case("mecard") {
            Some(Self::MeCard)
        } else {
            None
        }
    }

    /// Guesses the record format from the content itself.
    #[must_use]
    pub fn sniff(text: &str) -> Option<Self> {
        let text = text.trim_start_matches('\u{FEFF}').trim_start();
        if text
            .get(..MECARD_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(MECARD_PREFIX))
        {
            Some(Self::MeCard)
        } else if text
            .lines()
            .any(|line| line.trim().eq_ignore_ascii_case("BEGIN:VCARD"))
        {
            Some(Self::VCard)
        } else {
            None
        }
    }
}

/// A contact record reduced to the fields a MECARD payload can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContact {
    pub names: Vec<String>,
    pub addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub emails: Vec<String>,
    pub url: Option<String>,
    pub note: Option<String>,
}

impl From<&VCard> for ParsedContact {
    fn from(card: &VCard) -> Self {
        let names = card
            .formatted_name()
            .map(str::to_string)
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                card.name()
                    .filter(|n| !n.is_empty())
                    .map(vcard::StructuredName::display_name)
            })
            .into_iter()
            .collect();

        let mut addresses: Vec<String> = card
            .addresses()
            .into_iter()
            .map(vcard::Address::multi_line)
            .filter(|a| !a.is_empty())
            .collect();
        if addresses.is_empty() {
            addresses = card.labels().into_iter().map(str::to_string).collect();
        }

        Self {
            names,
            addresses,
            phone_numbers: card.telephones().into_iter().map(str::to_string).collect(),
            emails: card.emails().into_iter().map(str::to_string).collect(),
            url: card.url().map(str::to_string),
            note: card.note().map(str::to_string),
        }
    }
}

impl From<MeCard> for ParsedContact {
    fn from(card: MeCard) -> Self {
        Self {
            names: card.name.into_iter().collect(),
            addresses: card.addresses,
            phone_numbers: card.phones,
            emails: card.emails,
            url: card.url,
            note: card.note,
        }
    }
}

/// Parses raw record bytes into a contact.
///
/// The bytes are decoded as UTF-8, replacing malformed sequences. A declared
/// format that is recognized wins; otherwise the content is sniffed.
///
/// ## Errors
/// Returns `NotAContact` when no contact format applies, or the underlying
/// parse error when the record is malformed.
#[tracing::instrument(skip(raw), fields(raw_len = raw.len(), declared = ?declared))]
pub fn parse_contact(raw: &[u8], declared: Option<&str>) -> RfcResult<ParsedContact> {
    let text = String::from_utf8_lossy(raw);

    let format = declared
        .and_then(ContactFormat::from_declared)
        .or_else(|| ContactFormat::sniff(&text))
        .ok_or(RfcError::NotAContact)?;

    tracing::debug!(?format, "Parsing contact record");

    match format {
        ContactFormat::VCard => {
            let card = vcard::parse_single(&text)?;
            Ok(ParsedContact::from(&card))
        }
        ContactFormat::MeCard => Ok(mecard::parse(&text)?.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANDROID_VCARD: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Doe;Jane;;;\r\n\
FN:Jane Doe\r\n\
TEL;CELL:555-1234\r\n\
TEL;HOME:555-1234\r\n\
EMAIL;HOME:jane@example.com\r\n\
ADR;HOME:;;1 Main St;Springfield;;;\r\n\
URL:http://example.com\r\n\
NOTE:Met at the conference\\, booth 4\r\n\
END:VCARD\r\n";

    #[test_log::test]
    fn vcard_is_mapped_to_contact() {
        let contact = parse_contact(ANDROID_VCARD.as_bytes(), Some("text/x-vcard")).unwrap();

        assert_eq!(contact.names, vec!["Jane Doe"]);
        assert_eq!(contact.addresses, vec!["1 Main St\nSpringfield"]);
        // Duplicates survive parsing; deduplication happens at assembly
        assert_eq!(contact.phone_numbers, vec!["555-1234", "555-1234"]);
        assert_eq!(contact.emails, vec!["jane@example.com"]);
        assert_eq!(contact.url.as_deref(), Some("http://example.com"));
        assert_eq!(contact.note.as_deref(), Some("Met at the conference, booth 4"));
    }

    #[test]
    fn structured_name_is_fallback() {
        let input = "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Doe;John;;;\r\nEND:VCARD\r\n";
        let contact = parse_contact(input.as_bytes(), None).unwrap();
        assert_eq!(contact.names, vec!["John Doe"]);
    }

    #[test]
    fn label_is_address_fallback() {
        let input = "BEGIN:VCARD\r\nVERSION:3.0\r\nLABEL:PO Box 7\r\nEND:VCARD\r\n";
        let contact = parse_contact(input.as_bytes(), None).unwrap();
        assert_eq!(contact.addresses, vec!["PO Box 7"]);
    }

    #[test]
    fn mecard_is_sniffed() {
        let contact = parse_contact(b"MECARD:N:Doe,Jane;TEL:555;;", None).unwrap();
        assert_eq!(contact.names, vec!["Jane Doe"]);
        assert_eq!(contact.phone_numbers, vec!["555"]);
        assert_eq!(contact.note, None);
    }

    #[test]
    fn mecard_note_is_kept() {
        let contact =
            parse_contact(br"MECARD:N:Doe;NOTE:call\: after 5;;", Some("MECARD")).unwrap();
        assert_eq!(contact.note.as_deref(), Some("call: after 5"));
    }

    #[test]
    fn unknown_declared_format_falls_back_to_sniffing() {
        let contact = parse_contact(ANDROID_VCARD.as_bytes(), Some("text/plain")).unwrap();
        assert_eq!(contact.names, vec!["Jane Doe"]);
    }

    #[test]
    fn plain_text_is_not_a_contact() {
        let err = parse_contact(b"just some words", None).unwrap_err();
        assert!(matches!(err, RfcError::NotAContact));
    }

    #[test]
    fn declared_vcard_with_garbage_is_parse_error() {
        let err = parse_contact(b"BEGIN:VCARD\r\nFN:x\r\n", Some("text/vcard")).unwrap_err();
        assert!(matches!(err, RfcError::VCardError(_)));
    }

    #[test]
    fn declared_format_names() {
        assert_eq!(
            ContactFormat::from_declared("text/vcard; charset=utf-8"),
            Some(ContactFormat::VCard)
        );
        assert_eq!(ContactFormat::from_declared("MECARD"), Some(ContactFormat::MeCard));
        assert_eq!(ContactFormat::from_declared("image/png"), None);
    }
}
