//! vCard wrapper type.

use super::property::{VCardProperty, VCardValue};
use super::structured::{Address, StructuredName};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (versit), still emitted by many phone address books.
    V21,
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V21),
            "3.0" => Some(Self::V3),
            "4.0" => Some(Self::V4),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

/// A complete vCard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    /// vCard version.
    pub version: VCardVersion,
    /// All properties in order of appearance.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Returns all properties with the given name.
    pub fn get_properties<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a VCardProperty> + use<'a, 'n> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.get_properties(name).next()
    }

    /// Returns the formatted name (FN).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get_property("FN").and_then(VCardProperty::as_text)
    }

    /// Returns the structured name (N).
    #[must_use]
    pub fn name(&self) -> Option<&StructuredName> {
        self.get_property("N").and_then(|p| match &p.value {
            VCardValue::StructuredName(n) => Some(n),
            _ => None,
        })
    }

    /// Returns every address (ADR).
    #[must_use]
    pub fn addresses(&self) -> Vec<&Address> {
        self.get_properties("ADR")
            .filter_map(|p| match &p.value {
                VCardValue::Address(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    /// Returns every delivery label (LABEL, vCard 2.1/3.0).
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.get_properties("LABEL")
            .filter_map(VCardProperty::as_text)
            .collect()
    }

    /// Returns every telephone number (TEL).
    #[must_use]
    pub fn telephones(&self) -> Vec<&str> {
        self.get_properties("TEL")
            .filter_map(VCardProperty::as_text)
            .map(|tel| tel.strip_prefix("tel:").unwrap_or(tel))
            .collect()
    }

    /// Returns every email address (EMAIL).
    #[must_use]
    pub fn emails(&self) -> Vec<&str> {
        self.get_properties("EMAIL")
            .filter_map(VCardProperty::as_text)
            .collect()
    }

    /// Returns the first URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.get_property("URL").and_then(VCardProperty::as_text)
    }

    /// Returns the first note (NOTE).
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.get_property("NOTE").and_then(VCardProperty::as_text)
    }
}
