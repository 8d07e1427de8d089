//! MECARD value escaping.

use std::borrow::Cow;

/// Escapes a single MECARD field value.
///
/// Each `:` or `;` is preceded by a backslash, in one left-to-right pass.
/// Values without either character are returned unchanged. Escaping is not
/// idempotent: an already escaped value gains a second round of escapes, so
/// apply it exactly once per field at assembly time.
#[must_use]
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains([':', ';']) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c == ':' || c == ';' {
            result.push('\\');
        }
        result.push(c);
    }

    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_is_borrowed() {
        let escaped = escape("J. Doe");
        assert!(matches!(escaped, Cow::Borrowed("J. Doe")));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(escape("a:b;c"), r"a\:b\;c");
    }

    #[test]
    fn backslash_alone_is_untouched() {
        assert_eq!(escape(r"a\b"), r"a\b");
    }

    #[test]
    fn escaping_twice_double_escapes() {
        let once = escape("x;y").into_owned();
        assert_eq!(once, r"x\;y");
        assert_eq!(escape(&once), r"x\\;y");
    }

    #[test]
    fn non_ascii_is_preserved() {
        assert_eq!(escape("Zoë;Ünal"), r"Zoë\;Ünal");
    }
}
