//! Normalized request and result types.

use std::collections::HashMap;

use quickcode_core::constants::content_type;
use quickcode_rfc::contact::ParsedContact;

/// Content categories a request can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    Email,
    Phone,
    Sms,
    Contact,
    Location,
}

impl ContentType {
    /// Resolves a content type tag.
    ///
    /// Accepts the `*_TYPE` tags and the lower-case category names.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            content_type::TEXT | "text" => Some(Self::Text),
            content_type::EMAIL | "email" => Some(Self::Email),
            content_type::PHONE | "phone" => Some(Self::Phone),
            content_type::SMS | "sms" => Some(Self::Sms),
            content_type::CONTACT | "contact" => Some(Self::Contact),
            content_type::LOCATION | "location" => Some(Self::Location),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => content_type::TEXT,
            Self::Email => content_type::EMAIL,
            Self::Phone => content_type::PHONE,
            Self::Sms => content_type::SMS,
            Self::Contact => content_type::CONTACT,
            Self::Location => content_type::LOCATION,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named contact fields, keyed as in [`quickcode_core::constants::contact_keys`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields(HashMap<String, String>);

impl ContactFields {
    #[must_use]
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContactFields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The two shapes a contact can arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRecord {
    Fields(ContactFields),
    Parsed(ParsedContact),
}

/// Latitude and longitude. [`Coordinates::UNSET`] marks a missing value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f32,
    pub longitude: f32,
}

impl Coordinates {
    pub const UNSET: f32 = f32::MAX;

    #[must_use]
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds coordinates from optional parts, substituting the sentinel.
    #[must_use]
    pub fn from_parts(latitude: Option<f32>, longitude: Option<f32>) -> Self {
        Self::new(
            latitude.unwrap_or(Self::UNSET),
            longitude.unwrap_or(Self::UNSET),
        )
    }

    /// Both values present. The sentinel is matched bit for bit.
    #[must_use]
    pub fn is_set(&self) -> bool {
        let unset = Self::UNSET.to_bits();
        self.latitude.to_bits() != unset && self.longitude.to_bits() != unset
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::new(Self::UNSET, Self::UNSET)
    }
}

/// A request with exactly the data its content type needs.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeRequest {
    /// Free text. `label` replaces the text in the display string.
    Text {
        data: Option<String>,
        label: Option<String>,
    },
    Email(Option<String>),
    Phone(Option<String>),
    Sms(Option<String>),
    Contact(Option<ContactRecord>),
    Location(Coordinates),
}

impl EncodeRequest {
    /// Plain text without a display label.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text {
            data: Some(data.into()),
            label: None,
        }
    }

    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        match self {
            Self::Text { .. } => ContentType::Text,
            Self::Email(_) => ContentType::Email,
            Self::Phone(_) => ContentType::Phone,
            Self::Sms(_) => ContentType::Sms,
            Self::Contact(_) => ContentType::Contact,
            Self::Location(_) => ContentType::Location,
        }
    }
}

/// The assembled output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeResult {
    /// Content written into the barcode.
    pub payload: String,
    /// Human-facing rendering; never empty.
    pub display_text: String,
    /// Category label.
    pub title: String,
}
