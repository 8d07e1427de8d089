use base64::{Engine as _, engine::general_purpose::STANDARD};
use salvo::{Depot, Request, Response, handler, writing::Json};

use quickcode_core::error::CoreError;
use quickcode_service::encode::resource::MemoryResourceReader;
use quickcode_service::encode::{Assembler, ShareRequest};
use quickcode_service::encoder::QrCodeEncoder;

use super::types::{EncodeResponse, ShareRequestBody};
use super::{phone_formatter, render_bad_body, render_error};
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};

/// Handle under which the decoded attachment is registered.
const SHARED_STREAM: &str = "shared-stream";

/// ## Summary
/// Decodes the base64 attachment, if any, into an in-memory resource.
///
/// ## Errors
/// Returns `InvalidInput` if the attachment is not valid base64.
fn share_request(body: ShareRequestBody) -> AppResult<(ShareRequest, MemoryResourceReader)> {
    let mut reader = MemoryResourceReader::new();

    let stream = match body.stream {
        Some(encoded) => {
            let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
                CoreError::InvalidInput(format!("stream is not valid base64: {e}"))
            })?;
            reader.insert(SHARED_STREAM, bytes);
            Some(SHARED_STREAM.to_string())
        }
        None => None,
    };

    let request = ShareRequest {
        text: body.text,
        subject: body.subject,
        title: body.title,
        stream,
        stream_type: body.stream_type,
    };

    Ok((request, reader))
}

/// ## Summary
/// POST /api/encode/share - Assembles shared text or an attached contact record.
///
/// ## Errors
/// Returns HTTP 400 if the body or its attachment is malformed
/// Returns HTTP 422 if the shared content produced no result
/// Returns HTTP 500 if the configuration is missing
#[handler]
pub async fn encode_share(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: ShareRequestBody = match req.parse_json().await {
        Ok(body) => body,
        Err(e) => return render_bad_body(res, &e),
    };

    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => return render_error(res, &e),
    };

    let (request, reader) = match share_request(body) {
        Ok(parts) => parts,
        Err(e) => return render_error(res, &e),
    };

    let phone = phone_formatter(&settings);
    let assembler = Assembler::new(phone.as_ref(), &settings.titles);

    match QrCodeEncoder::from_share(&request, &reader, &assembler) {
        Ok(encoder) => {
            tracing::debug!(title = %encoder.title(), "Encoded shared content");
            res.render(Json(EncodeResponse::from(&encoder)));
        }
        Err(e) => render_error(res, &AppError::from(e)),
    }
}
