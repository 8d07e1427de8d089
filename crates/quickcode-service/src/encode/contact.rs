//! MECARD assembly shared by both contact shapes.

use quickcode_core::constants::{MECARD_PREFIX, contact_keys};
use quickcode_rfc::contact::ParsedContact;
use quickcode_rfc::rfc::mecard::escape;

use super::phone::PhoneFormatter;
use super::request::ContactFields;
use super::sanitize::{dedupe, trim_opt};

/// Read access to the parts of a contact that end up in a MECARD.
///
/// Values are returned raw; the assembler trims and deduplicates them.
pub trait ContactSource {
    fn name(&self) -> Option<&str>;
    fn addresses(&self) -> Vec<&str>;
    fn phones(&self) -> Vec<&str>;
    fn emails(&self) -> Vec<&str>;
    fn url(&self) -> Option<&str>;
    fn note(&self) -> Option<&str>;
}

impl ContactSource for ContactFields {
    fn name(&self) -> Option<&str> {
        self.get(contact_keys::NAME)
    }

    fn addresses(&self) -> Vec<&str> {
        self.get(contact_keys::POSTAL).into_iter().collect()
    }

    fn phones(&self) -> Vec<&str> {
        contact_keys::PHONE_KEYS
            .iter()
            .filter_map(|key| self.get(key))
            .collect()
    }

    fn emails(&self) -> Vec<&str> {
        contact_keys::EMAIL_KEYS
            .iter()
            .filter_map(|key| self.get(key))
            .collect()
    }

    fn url(&self) -> Option<&str> {
        self.get(contact_keys::URL)
    }

    fn note(&self) -> Option<&str> {
        self.get(contact_keys::NOTE)
    }
}

/// Parsed records contribute their first name only.
impl ContactSource for ParsedContact {
    fn name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    fn addresses(&self) -> Vec<&str> {
        self.addresses.iter().map(String::as_str).collect()
    }

    fn phones(&self) -> Vec<&str> {
        self.phone_numbers.iter().map(String::as_str).collect()
    }

    fn emails(&self) -> Vec<&str> {
        self.emails.iter().map(String::as_str).collect()
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// Builds a MECARD payload and its display text.
///
/// ## Summary
/// Fields are emitted in the order name, addresses, phones, emails, URL,
/// note. Every value is escaped except the URL, which is written verbatim so
/// scheme separators survive. Display lines after the first field are each
/// preceded by a newline.
///
/// Returns `None` when no field was emitted.
pub(super) fn assemble_contact(
    source: &dyn ContactSource,
    phone: &dyn PhoneFormatter,
) -> Option<(String, String)> {
    let mut payload = String::from(MECARD_PREFIX);
    let mut display = String::new();

    if let Some(name) = trim_opt(source.name()) {
        push_field(&mut payload, "N", &escape(name));
        display.push_str(name);
    }

    for address in dedupe(&source.addresses()) {
        push_field(&mut payload, "ADR", &escape(address));
        push_line(&mut display, address);
    }

    for number in dedupe(&source.phones()) {
        push_field(&mut payload, "TEL", &escape(number));
        push_line(&mut display, &phone.format(number));
    }

    for email in dedupe(&source.emails()) {
        push_field(&mut payload, "EMAIL", &escape(email));
        push_line(&mut display, email);
    }

    if let Some(url) = trim_opt(source.url()) {
        push_field(&mut payload, "URL", url);
        push_line(&mut display, url);
    }

    if let Some(note) = trim_opt(source.note()) {
        push_field(&mut payload, "NOTE", &escape(note));
        push_line(&mut display, note);
    }

    if display.is_empty() {
        return None;
    }

    payload.push(';');
    Some((payload, display))
}

fn push_field(payload: &mut String, tag: &str, value: &str) {
    payload.push_str(tag);
    payload.push(':');
    payload.push_str(value);
    payload.push(';');
}

fn push_line(display: &mut String, line: &str) {
    display.push('\n');
    display.push_str(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::phone::{NanpFormatter, PassThroughFormatter};

    #[test]
    fn name_and_phone() {
        let fields: ContactFields = [("name", "J. Doe"), ("phone", "555-1234")]
            .into_iter()
            .collect();

        let (payload, display) = assemble_contact(&fields, &PassThroughFormatter).unwrap();

        assert_eq!(payload, "MECARD:N:J. Doe;TEL:555-1234;;");
        assert_eq!(display, "J. Doe\n555-1234");
    }

    #[test]
    fn url_is_not_escaped() {
        let fields: ContactFields = [("URL_KEY", "http://x.com")].into_iter().collect();

        let (payload, display) = assemble_contact(&fields, &PassThroughFormatter).unwrap();

        assert!(payload.contains("URL:http://x.com;"));
        assert!(!payload.contains(r"http\://"));
        assert_eq!(display, "\nhttp://x.com");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let fields: ContactFields = [("name", "Doe; Jane"), ("NOTE_KEY", "call: later")]
            .into_iter()
            .collect();

        let (payload, _) = assemble_contact(&fields, &PassThroughFormatter).unwrap();

        assert_eq!(payload, r"MECARD:N:Doe\; Jane;NOTE:call\: later;;");
    }

    #[test]
    fn repeated_phones_and_emails_collapse() {
        let fields: ContactFields = [
            ("phone", "5551234"),
            ("secondary_phone", " 5551234 "),
            ("tertiary_phone", "5559876"),
            ("email", "a@x.com"),
            ("secondary_email", "a@x.com"),
            ("tertiary_email", " a@x.com "),
        ]
        .into_iter()
        .collect();

        let (payload, display) = assemble_contact(&fields, &NanpFormatter).unwrap();

        assert_eq!(
            payload,
            "MECARD:TEL:5551234;TEL:5559876;EMAIL:a@x.com;;"
        );
        assert_eq!(display, "\n555-1234\n555-9876\na@x.com");
    }

    #[test]
    fn blank_fields_assemble_nothing() {
        let fields: ContactFields = [("name", "  "), ("postal", "")].into_iter().collect();
        assert!(assemble_contact(&fields, &PassThroughFormatter).is_none());
        assert!(assemble_contact(&ContactFields::default(), &PassThroughFormatter).is_none());
    }

    #[test]
    fn parsed_contact_uses_first_name() {
        let contact = ParsedContact {
            names: vec!["Jane Doe".into(), "J. Doe".into()],
            addresses: vec!["1 Main St".into(), "1 Main St".into()],
            phone_numbers: vec!["555-1234".into()],
            emails: vec![],
            url: Some("http://example.com".into()),
            note: None,
        };

        let (payload, display) = assemble_contact(&contact, &PassThroughFormatter).unwrap();

        assert_eq!(
            payload,
            "MECARD:N:Jane Doe;ADR:1 Main St;TEL:555-1234;URL:http://example.com;;"
        );
        assert_eq!(display, "Jane Doe\n1 Main St\n555-1234\nhttp://example.com");
    }

    #[test]
    fn both_shapes_assemble_identically() {
        let fields: ContactFields = [
            ("name", "Jane"),
            ("postal", "1 Main St"),
            ("phone", "555"),
            ("email", "j@x.com"),
            ("URL_KEY", "http://x.com"),
            ("NOTE_KEY", "VIP; call first"),
        ]
        .into_iter()
        .collect();
        let parsed = ParsedContact {
            names: vec!["Jane".into()],
            addresses: vec!["1 Main St".into()],
            phone_numbers: vec!["555".into()],
            emails: vec!["j@x.com".into()],
            url: Some("http://x.com".into()),
            note: Some("VIP; call first".into()),
        };

        assert_eq!(
            assemble_contact(&fields, &PassThroughFormatter),
            assemble_contact(&parsed, &PassThroughFormatter)
        );
    }
}
