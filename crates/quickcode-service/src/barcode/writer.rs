//! Barcode writers.

use qrcodegen::{QrCode, QrCodeEcc, QrSegment};
use quickcode_core::config::ErrorCorrection;

use super::{BarcodeFormat, BitMatrix, CharacterSet, EncodeHints};
use crate::error::{ServiceError, ServiceResult};

/// ECI assignment number for UTF-8.
const ECI_UTF8: u32 = 26;

/// Builds a symbol for a payload.
pub trait BarcodeWriter: Send + Sync {
    /// Encodes `contents` as `format`, scaled into at least `width` x `height`.
    ///
    /// ## Errors
    /// Fails when the format is not supported or the payload does not fit.
    fn encode(
        &self,
        contents: &str,
        format: BarcodeFormat,
        width: u32,
        height: u32,
        hints: &EncodeHints,
    ) -> ServiceResult<BitMatrix>;
}

/// QR code writer backed by `qrcodegen`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeWriter;

impl BarcodeWriter for QrCodeWriter {
    #[tracing::instrument(skip(self, contents), fields(contents_len = contents.len()))]
    fn encode(
        &self,
        contents: &str,
        format: BarcodeFormat,
        width: u32,
        height: u32,
        hints: &EncodeHints,
    ) -> ServiceResult<BitMatrix> {
        if contents.is_empty() {
            return Err(ServiceError::EmptyContents);
        }
        if format != BarcodeFormat::QrCode {
            return Err(ServiceError::UnsupportedFormat(format));
        }

        let segments = segments(contents, hints.character_set)?;
        let code = QrCode::encode_segments(&segments, ecc(hints.error_correction))
            .map_err(|e| ServiceError::WriterError(e.to_string()))?;

        tracing::debug!(size = code.size(), "Built QR symbol");

        render(&code, width, height, hints)
    }
}

fn ecc(level: ErrorCorrection) -> QrCodeEcc {
    match level {
        ErrorCorrection::L => QrCodeEcc::Low,
        ErrorCorrection::M => QrCodeEcc::Medium,
        ErrorCorrection::Q => QrCodeEcc::Quartile,
        ErrorCorrection::H => QrCodeEcc::High,
    }
}

/// Byte-mode segments. Without a declared character set the payload must fit
/// ISO-8859-1, the QR default; UTF-8 is announced with an ECI segment.
fn segments(contents: &str, charset: Option<CharacterSet>) -> ServiceResult<Vec<QrSegment>> {
    match charset {
        Some(CharacterSet::Utf8) => Ok(vec![
            QrSegment::make_eci(ECI_UTF8),
            QrSegment::make_bytes(contents.as_bytes()),
        ]),
        None => {
            let latin1 = contents
                .chars()
                .map(|c| u8::try_from(u32::from(c)))
                .collect::<Result<Vec<u8>, _>>()
                .map_err(|_err| {
                    ServiceError::WriterError(
                        "contents not representable in ISO-8859-1".to_string(),
                    )
                })?;
            Ok(vec![QrSegment::make_bytes(&latin1)])
        }
    }
}

/// Scales the symbol into the requested size and centres it.
///
/// The output is never smaller than the symbol plus its quiet zone; each
/// module becomes a square of the largest whole multiple that fits. Outputs
/// wider or taller than `hints.max_dimension` are refused before allocating.
fn render(
    code: &QrCode,
    width: u32,
    height: u32,
    hints: &EncodeHints,
) -> ServiceResult<BitMatrix> {
    let input_size = usize::try_from(code.size()).unwrap_or_default();
    let quiet = (hints.margin as usize).saturating_mul(2);
    let symbol_width = input_size.saturating_add(quiet);
    let symbol_height = symbol_width;

    let output_width = (width as usize).max(symbol_width);
    let output_height = (height as usize).max(symbol_height);

    let limit = hints.max_dimension as usize;
    if output_width > limit || output_height > limit {
        tracing::warn!(
            output_width,
            output_height,
            limit,
            "Refusing oversized barcode output"
        );
        return Err(ServiceError::WriterError(format!(
            "output {output_width}x{output_height} exceeds the {limit} pixel limit"
        )));
    }

    let multiple = (output_width / symbol_width).min(output_height / symbol_height);
    let left_padding = (output_width - input_size * multiple) / 2;
    let top_padding = (output_height - input_size * multiple) / 2;

    let mut output = BitMatrix::new(output_width, output_height);

    for (input_y, y) in (0..code.size()).zip((top_padding..).step_by(multiple)) {
        for (input_x, x) in (0..code.size()).zip((left_padding..).step_by(multiple)) {
            if code.get_module(input_x, input_y) {
                output.set_region(x, y, multiple, multiple);
            }
        }
    }

    Ok(output)
}
