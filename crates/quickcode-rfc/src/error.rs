use thiserror::Error;

use crate::rfc::vcard::ParseError;

/// Contact record parsing errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("vCard parse error: {0}")]
    VCardError(#[from] ParseError),

    #[error("MECARD parse error: {0}")]
    MeCardError(String),

    #[error("Content is not a contact record")]
    NotAContact,
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
