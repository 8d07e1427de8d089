use thiserror::Error;

use crate::barcode::BarcodeFormat;

/// Reasons a request produced no result.
///
/// Every variant is the same "no result" outcome to callers; the variants
/// exist for diagnostics.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Unrecognized content type, or required data absent or blank.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A contact was supplied but every field was absent.
    #[error("No fields to encode")]
    EmptyAssembly,

    /// The attached resource could not be read in full.
    #[error("Resource failure: {0}")]
    ResourceFailure(String),

    /// The attached resource is not a contact record.
    #[error("Not a contact record: {0}")]
    ParseMismatch(#[from] quickcode_rfc::error::RfcError),
}

impl EncodeError {
    /// Always true: all variants mean there is nothing to encode.
    #[must_use]
    pub const fn is_no_result(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_)
                | Self::EmptyAssembly
                | Self::ResourceFailure(_)
                | Self::ParseMismatch(_)
        )
    }
}

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    EncodeError(#[from] EncodeError),

    #[error("Unsupported barcode format: {0}")]
    UnsupportedFormat(BarcodeFormat),

    #[error("Found empty contents")]
    EmptyContents,

    #[error("Barcode writer error: {0}")]
    WriterError(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
