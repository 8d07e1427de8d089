use salvo::{Depot, Request, Response, handler, writing::Json};

use quickcode_core::error::CoreError;
use quickcode_service::barcode::QrCodeWriter;
use quickcode_service::encode::{Assembler, FieldRequest};
use quickcode_service::encoder::QrCodeEncoder;

use super::types::{MatrixRequestBody, MatrixResponse};
use super::{phone_formatter, render_bad_body, render_error};
use crate::config::{EncoderConfig, get_config_from_depot};
use crate::error::{AppError, AppResult};

/// ## Summary
/// Resolves the requested symbol size, defaulting to `encoder.dimension`.
///
/// ## Errors
/// Returns `InvalidInput` if either side exceeds `encoder.max_dimension`.
fn requested_size(body: &MatrixRequestBody, config: &EncoderConfig) -> AppResult<(u32, u32)> {
    let width = body.width.unwrap_or(config.dimension);
    let height = body.height.unwrap_or(config.dimension);

    if width > config.max_dimension || height > config.max_dimension {
        return Err(CoreError::InvalidInput(format!(
            "requested size {width}x{height} exceeds the {} pixel limit",
            config.max_dimension
        ))
        .into());
    }

    Ok((width, height))
}

/// ## Summary
/// POST /api/encode/matrix - Assembles a field request and renders its symbol.
///
/// Width and height default to `encoder.dimension` and may not exceed
/// `encoder.max_dimension`.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed, asks for an oversized symbol,
/// or names a format the writer cannot produce
/// Returns HTTP 422 if the request produced no result or does not fit
/// Returns HTTP 500 if the configuration is missing
#[handler]
pub async fn encode_matrix(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: MatrixRequestBody = match req.parse_json().await {
        Ok(body) => body,
        Err(e) => return render_bad_body(res, &e),
    };

    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => return render_error(res, &e),
    };

    let (width, height) = match requested_size(&body, &settings.encoder) {
        Ok(size) => size,
        Err(e) => return render_error(res, &e),
    };

    let phone = phone_formatter(&settings);
    let assembler = Assembler::new(phone.as_ref(), &settings.titles);

    let encoder = match QrCodeEncoder::from_fields(&FieldRequest::from(body.request), &assembler) {
        Ok(encoder) => encoder,
        Err(e) => return render_error(res, &AppError::from(e)),
    };

    match encoder.encode_as_matrix(&QrCodeWriter, width, height, &settings.encoder) {
        Ok(matrix) => {
            tracing::debug!(
                width = matrix.width(),
                height = matrix.height(),
                "Rendered symbol"
            );
            res.render(Json(MatrixResponse::new(&encoder, &matrix)));
        }
        Err(e) => render_error(res, &AppError::from(e)),
    }
}
