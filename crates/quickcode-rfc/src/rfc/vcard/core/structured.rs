//! Structured property values (`N`, `ADR`).

/// Structured name (N property).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Returns whether every component is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ]
        .iter()
        .all(|part| part.iter().all(|s| s.trim().is_empty()))
    }

    /// Formats as a display name (given + family).
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        for component in [&self.given, &self.family] {
            let joined = join_non_empty(component, " ");
            if !joined.is_empty() {
                parts.push(joined);
            }
        }
        parts.join(" ")
    }
}

/// Address (ADR property).
///
/// All components are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box.
    pub po_box: Vec<String>,
    /// Extended address (e.g., apartment or suite number).
    pub extended: Vec<String>,
    /// Street address.
    pub street: Vec<String>,
    /// Locality (city).
    pub locality: Vec<String>,
    /// Region (state or province).
    pub region: Vec<String>,
    /// Postal code.
    pub postal_code: Vec<String>,
    /// Country name.
    pub country: Vec<String>,
}

impl Address {
    /// Returns the non-blank components in their field order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .map(|component| join_non_empty(component, " "))
        .filter(|line| !line.is_empty())
        .collect()
    }

    /// Formats the address with one component per line.
    #[must_use]
    pub fn multi_line(&self) -> String {
        self.lines().join("\n")
    }
}

fn join_non_empty(values: &[String], sep: &str) -> String {
    values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}
