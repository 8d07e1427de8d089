//! Request-to-matrix facade.

use quickcode_core::config::EncoderConfig;

use crate::barcode::{BarcodeFormat, BarcodeWriter, BitMatrix, CharacterSet, EncodeHints};
use crate::encode::resource::ResourceReader;
use crate::encode::{
    Assembler, EncodeResult, FieldRequest, Normalized, ShareRequest, hint, normalize_fields,
    normalize_share,
};
use crate::error::{EncodeError, ServiceResult};

/// An assembled request, ready to be written as a barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCodeEncoder {
    format: BarcodeFormat,
    result: EncodeResult,
}

impl QrCodeEncoder {
    /// ## Errors
    /// Returns the assembler's "no result" error.
    pub fn new(normalized: &Normalized, assembler: &Assembler<'_>) -> Result<Self, EncodeError> {
        let result = assembler.assemble(&normalized.request)?;
        Ok(Self {
            format: normalized.format,
            result,
        })
    }

    /// ## Errors
    /// Returns a "no result" error from normalization or assembly.
    pub fn from_fields(
        request: &FieldRequest,
        assembler: &Assembler<'_>,
    ) -> Result<Self, EncodeError> {
        Self::new(&normalize_fields(request)?, assembler)
    }

    /// ## Errors
    /// Returns a "no result" error from normalization or assembly.
    pub fn from_share<R: ResourceReader>(
        request: &ShareRequest,
        reader: &R,
        assembler: &Assembler<'_>,
    ) -> Result<Self, EncodeError> {
        Self::new(&normalize_share(request, reader)?, assembler)
    }

    #[must_use]
    pub const fn format(&self) -> BarcodeFormat {
        self.format
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.result.payload
    }

    #[must_use]
    pub fn display_contents(&self) -> &str {
        &self.result.display_text
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.result.title
    }

    #[must_use]
    pub const fn result(&self) -> &EncodeResult {
        &self.result
    }

    /// Character set the writer has to declare for the payload.
    #[must_use]
    pub fn character_set(&self) -> Option<CharacterSet> {
        hint::select_encoding(&self.result.payload)
    }

    /// ## Summary
    /// Writes the payload with `writer`, scaled to at least `width` x `height`.
    ///
    /// ## Errors
    /// Propagates writer failures such as an unsupported format, a payload
    /// that does not fit, or an output larger than `config.max_dimension`.
    #[tracing::instrument(skip(self, writer, config), fields(format = %self.format))]
    pub fn encode_as_matrix(
        &self,
        writer: &dyn BarcodeWriter,
        width: u32,
        height: u32,
        config: &EncoderConfig,
    ) -> ServiceResult<BitMatrix> {
        let hints = EncodeHints {
            character_set: self.character_set(),
            error_correction: config.error_correction,
            margin: config.margin,
            max_dimension: config.max_dimension,
        };

        writer.encode(&self.result.payload, self.format, width, height, &hints)
    }
}
