//! Adapters from the two inbound request shapes to [`EncodeRequest`].

use std::io::Read;

use quickcode_core::constants::location_keys;
use quickcode_rfc::contact::parse_contact;

use super::request::{ContactFields, ContactRecord, ContentType, Coordinates, EncodeRequest};
use super::resource::{ResourceReader, ResourceStream};
use super::sanitize::{trim, trim_opt};
use crate::barcode::BarcodeFormat;
use crate::error::EncodeError;

/// A request whose content type and fields arrive pre-separated.
#[derive(Debug, Clone, Default)]
pub struct FieldRequest {
    /// Content type tag such as `TEXT_TYPE` or `contact`.
    pub content_type: Option<String>,
    /// Barcode format name; absent or unrecognized means QR code.
    pub format: Option<String>,
    /// Single value for text, email, phone and SMS requests.
    pub data: Option<String>,
    /// Named fields for contact requests.
    pub fields: Option<ContactFields>,
    pub latitude: Option<f32>,
    pub longitude: Option<f32>,
}

/// Shared content: free text, or an attached contact record.
#[derive(Debug, Clone, Default)]
pub struct ShareRequest {
    pub text: Option<String>,
    pub subject: Option<String>,
    pub title: Option<String>,
    /// Handle of the attached resource.
    pub stream: Option<String>,
    /// Declared media type of the attached resource.
    pub stream_type: Option<String>,
}

/// A request ready for assembly, with the format it will be written in.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub format: BarcodeFormat,
    pub request: EncodeRequest,
}

/// ## Summary
/// Copies a field request into an [`EncodeRequest`].
///
/// A recognized non-QR format skips content types entirely and encodes the
/// data as text.
///
/// ## Errors
/// Returns `InvalidRequest` when a QR request has no recognized content type.
#[tracing::instrument(skip(request), fields(content_type = ?request.content_type, format = ?request.format))]
pub fn normalize_fields(request: &FieldRequest) -> Result<Normalized, EncodeError> {
    let format = trim_opt(request.format.as_deref())
        .and_then(BarcodeFormat::parse)
        .unwrap_or_default();

    if format != BarcodeFormat::QrCode {
        tracing::debug!(%format, "Encoding data as text for non-QR format");
        return Ok(Normalized {
            format,
            request: EncodeRequest::Text {
                data: request.data.clone(),
                label: None,
            },
        });
    }

    let tag = trim_opt(request.content_type.as_deref())
        .ok_or_else(|| EncodeError::InvalidRequest("missing content type".to_string()))?;
    let content_type = ContentType::from_tag(tag)
        .ok_or_else(|| EncodeError::InvalidRequest(format!("unknown content type {tag}")))?;

    let data = request.data.clone();
    let request = match content_type {
        ContentType::Text => EncodeRequest::Text { data, label: None },
        ContentType::Email => EncodeRequest::Email(data),
        ContentType::Phone => EncodeRequest::Phone(data),
        ContentType::Sms => EncodeRequest::Sms(data),
        ContentType::Contact => {
            EncodeRequest::Contact(request.fields.clone().map(ContactRecord::Fields))
        }
        ContentType::Location => EncodeRequest::Location(coordinates(request)),
    };

    Ok(Normalized { format, request })
}

/// Explicit coordinates win; otherwise the `LAT` and `LONG` fields are parsed.
fn coordinates(request: &FieldRequest) -> Coordinates {
    let field = |key: &str| {
        request
            .fields
            .as_ref()
            .and_then(|fields| trim_opt(fields.get(key)))
            .and_then(|value| value.parse::<f32>().ok())
    };

    Coordinates::from_parts(
        request
            .latitude
            .or_else(|| field(location_keys::LATITUDE)),
        request
            .longitude
            .or_else(|| field(location_keys::LONGITUDE)),
    )
}

/// ## Summary
/// Normalizes shared content.
///
/// Text wins when present; its label is the subject, then the title, then
/// the text itself. Otherwise the attached resource is read in full and
/// parsed as a contact record. Shared content is always a QR code.
///
/// ## Errors
/// - `InvalidRequest` for blank text or when nothing was shared.
/// - `ResourceFailure` when the resource cannot be opened, is empty, or is
///   shorter than it claimed.
/// - `ParseMismatch` when the resource is not a contact record.
#[tracing::instrument(skip(request, reader), fields(has_text = request.text.is_some(), stream_type = ?request.stream_type))]
pub fn normalize_share<R: ResourceReader>(
    request: &ShareRequest,
    reader: &R,
) -> Result<Normalized, EncodeError> {
    let request = if let Some(text) = request.text.as_deref() {
        let data = trim(text)
            .ok_or_else(|| EncodeError::InvalidRequest("shared text is empty".to_string()))?;
        let label = trim_opt(request.subject.as_deref())
            .or_else(|| trim_opt(request.title.as_deref()))
            .unwrap_or(data);
        EncodeRequest::Text {
            data: Some(data.to_string()),
            label: Some(label.to_string()),
        }
    } else {
        let handle = request
            .stream
            .as_deref()
            .ok_or_else(|| EncodeError::InvalidRequest("nothing was shared".to_string()))?;
        let bytes = read_resource(reader, handle)?;
        let contact = parse_contact(&bytes, request.stream_type.as_deref()).map_err(|e| {
            tracing::warn!(error = %e, "Shared resource is not a contact");
            EncodeError::ParseMismatch(e)
        })?;
        EncodeRequest::Contact(Some(ContactRecord::Parsed(contact)))
    };

    Ok(Normalized {
        format: BarcodeFormat::QrCode,
        request,
    })
}

fn read_resource<R: ResourceReader>(reader: &R, handle: &str) -> Result<Vec<u8>, EncodeError> {
    let failure = |e: std::io::Error| {
        tracing::warn!(error = %e, handle, "Could not read shared resource");
        EncodeError::ResourceFailure(e.to_string())
    };

    let mut stream = reader.open_stream(handle).map_err(failure)?;
    let length = stream.available().map_err(failure)?;
    if length == 0 {
        tracing::warn!(handle, "Shared resource is empty");
        return Err(EncodeError::ResourceFailure(
            "shared resource is empty".to_string(),
        ));
    }

    let mut bytes = vec![0; length];
    stream.read_exact(&mut bytes).map_err(failure)?;

    tracing::debug!(length, "Read shared resource");
    Ok(bytes)
}
