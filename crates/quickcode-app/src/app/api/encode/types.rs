//! Wire types of the encoder endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use quickcode_service::barcode::{BitMatrix, CharacterSet};
use quickcode_service::encode::{ContactFields, FieldRequest};
use quickcode_service::encoder::QrCodeEncoder;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Explicit field request payload
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EncodeRequestBody {
    #[serde(alias = "type")]
    pub content_type: Option<String>,
    pub format: Option<String>,
    pub data: Option<String>,
    pub fields: Option<HashMap<String, String>>,
    pub latitude: Option<f32>,
    pub longitude: Option<f32>,
}

impl From<EncodeRequestBody> for FieldRequest {
    fn from(body: EncodeRequestBody) -> Self {
        Self {
            content_type: body.content_type,
            format: body.format,
            data: body.data,
            fields: body.fields.map(ContactFields::new),
            latitude: body.latitude,
            longitude: body.longitude,
        }
    }
}

/// ## Summary
/// Shared content payload. `stream` holds the attached record as base64.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShareRequestBody {
    pub text: Option<String>,
    pub subject: Option<String>,
    pub title: Option<String>,
    pub stream: Option<String>,
    pub stream_type: Option<String>,
}

/// ## Summary
/// Field request plus the requested symbol size
#[derive(Debug, Deserialize)]
pub struct MatrixRequestBody {
    #[serde(flatten)]
    pub request: EncodeRequestBody,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// ## Summary
/// Assembled payload response
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub payload: String,
    pub display_text: String,
    pub title: String,
    pub format: &'static str,
    pub character_set: Option<&'static str>,
}

impl From<&QrCodeEncoder> for EncodeResponse {
    fn from(encoder: &QrCodeEncoder) -> Self {
        Self {
            payload: encoder.contents().to_string(),
            display_text: encoder.display_contents().to_string(),
            title: encoder.title().to_string(),
            format: encoder.format().as_str(),
            character_set: encoder.character_set().map(CharacterSet::as_str),
        }
    }
}

/// ## Summary
/// Rendered symbol response. Each row is a string of `1` (dark) and `0`.
#[derive(Debug, Serialize)]
pub struct MatrixResponse {
    #[serde(flatten)]
    pub encoded: EncodeResponse,
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
}

impl MatrixResponse {
    #[must_use]
    pub fn new(encoder: &QrCodeEncoder, matrix: &BitMatrix) -> Self {
        Self {
            encoded: EncodeResponse::from(encoder),
            width: matrix.width(),
            height: matrix.height(),
            rows: matrix.rows(),
        }
    }
}
