//! Field sanitizing.

/// Trims a field, reporting a blank result as absent.
#[must_use]
pub fn trim(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// [`trim`] over an optional field.
#[must_use]
pub fn trim_opt(value: Option<&str>) -> Option<&str> {
    value.and_then(trim)
}

/// Trims each value and drops blanks and repeats.
///
/// Values compare after trimming. Survivors keep the order in which they
/// were first seen.
#[must_use]
pub fn dedupe<'a, I, S>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let mut unique: Vec<&'a str> = Vec::new();
    for value in values {
        if let Some(value) = trim(value.as_ref())
            && !unique.contains(&value)
        {
            unique.push(value);
        }
    }
    unique
}
