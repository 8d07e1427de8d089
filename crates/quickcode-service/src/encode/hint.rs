//! Character set selection for finished payloads.

use crate::barcode::CharacterSet;

/// Picks the character set a writer must declare for `payload`.
///
/// Any code point above `0xFF` selects UTF-8; otherwise `None` leaves the
/// writer on its single-byte default.
#[must_use]
pub fn select_encoding(payload: &str) -> Option<CharacterSet> {
    payload
        .chars()
        .any(|c| u32::from(c) > 0xFF)
        .then_some(CharacterSet::Utf8)
}
