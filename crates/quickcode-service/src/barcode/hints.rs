//! Hints passed to a barcode writer.

use quickcode_core::config::ErrorCorrection;
use quickcode_core::constants::UTF8_CHARSET;

/// Character set declared for a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSet {
    Utf8,
}

impl CharacterSet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => UTF8_CHARSET,
        }
    }
}

impl std::fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output size cap used when no configured limit is given.
pub const DEFAULT_MAX_DIMENSION: u32 = 4096;

/// Writer options. `character_set: None` leaves the writer on its default
/// (ISO-8859-1 for QR codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeHints {
    pub character_set: Option<CharacterSet>,
    pub error_correction: ErrorCorrection,
    /// Quiet zone, in modules.
    pub margin: u32,
    /// Largest output width or height the writer will allocate.
    pub max_dimension: u32,
}

impl Default for EncodeHints {
    fn default() -> Self {
        Self {
            character_set: None,
            error_correction: ErrorCorrection::L,
            margin: 4,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}
