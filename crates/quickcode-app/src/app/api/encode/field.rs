use salvo::{Depot, Request, Response, handler, writing::Json};

use quickcode_service::encode::{Assembler, FieldRequest};
use quickcode_service::encoder::QrCodeEncoder;

use super::types::{EncodeRequestBody, EncodeResponse};
use super::{phone_formatter, render_bad_body, render_error};
use crate::config::get_config_from_depot;
use crate::error::AppError;

/// ## Summary
/// POST /api/encode - Assembles an explicit field request.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid request
/// Returns HTTP 422 if the request produced no result
/// Returns HTTP 500 if the configuration is missing
#[handler]
pub async fn encode(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: EncodeRequestBody = match req.parse_json().await {
        Ok(body) => body,
        Err(e) => return render_bad_body(res, &e),
    };

    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => return render_error(res, &e),
    };

    let phone = phone_formatter(&settings);
    let assembler = Assembler::new(phone.as_ref(), &settings.titles);

    match QrCodeEncoder::from_fields(&FieldRequest::from(body), &assembler) {
        Ok(encoder) => {
            tracing::debug!(title = %encoder.title(), "Encoded field request");
            res.render(Json(EncodeResponse::from(&encoder)));
        }
        Err(e) => render_error(res, &AppError::from(e)),
    }
}
