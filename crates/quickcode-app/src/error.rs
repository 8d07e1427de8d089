use salvo::http::StatusCode;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] quickcode_service::error::ServiceError),

    #[error(transparent)]
    EncodeError(#[from] quickcode_service::error::EncodeError),

    #[error(transparent)]
    RfcError(#[from] quickcode_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] quickcode_core::error::CoreError),
}

impl AppError {
    /// ## Summary
    /// Maps the error to the HTTP status reported to clients.
    ///
    /// Every "no result" outcome is `422 Unprocessable Entity`; malformed
    /// input is `400`; anything else is a server fault.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        use quickcode_core::error::CoreError;
        use quickcode_service::error::ServiceError;

        match self {
            Self::EncodeError(e) | Self::ServiceError(ServiceError::EncodeError(e))
                if e.is_no_result() =>
            {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::ServiceError(
                ServiceError::EmptyContents | ServiceError::WriterError(_),
            )
            | Self::RfcError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ServiceError(ServiceError::UnsupportedFormat(_))
            | Self::CoreError(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use quickcode_core::error::CoreError;
    use quickcode_service::barcode::BarcodeFormat;
    use quickcode_service::error::{EncodeError, ServiceError};

    use super::*;

    #[test]
    fn no_result_is_unprocessable() {
        let err = AppError::from(EncodeError::EmptyAssembly);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = AppError::from(ServiceError::from(EncodeError::ResourceFailure(
            "short read".into(),
        )));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn bad_input_is_bad_request() {
        let err = AppError::from(ServiceError::UnsupportedFormat(BarcodeFormat::Aztec));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::from(CoreError::InvalidInput("stream".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_state_is_server_fault() {
        let err = AppError::from(CoreError::InvariantViolation("no settings"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
