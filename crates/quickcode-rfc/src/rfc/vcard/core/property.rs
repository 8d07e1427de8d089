//! vCard property and value types.

use super::parameter::VCardParameter;
use super::structured::{Address, StructuredName};

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Unescaped text.
    Text(String),
    /// Comma-separated text list (NICKNAME, CATEGORIES).
    TextList(Vec<String>),
    /// URI, kept verbatim.
    Uri(String),
    /// Structured name (N).
    StructuredName(StructuredName),
    /// Address (ADR).
    Address(Address),
}

/// A vCard property (content line after value interpretation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Typed value.
    pub value: VCardValue,
    /// Raw value as it appeared after unfolding and transfer decoding.
    pub raw_value: String,
}

impl VCardProperty {
    /// Returns the value as plain text, if the value is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            VCardValue::Text(s) | VCardValue::Uri(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the parameter with the given name (case-insensitive).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
