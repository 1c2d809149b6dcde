//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Extractor failures (malformed JSON bodies, non-numeric path
//! segments) are routed through the same envelope.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER, ValidationErrors};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = %self.message(), trace_id = ?self.trace_id(), "request failed");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(err.to_string())
    }
}

/// Client writes report every unexpected failure as a bad request.
///
/// Not-found and validation outcomes keep their own codes.
pub(crate) fn as_client_write_error(error: Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(message = %error.message(), "client write failed");
        error.with_code(ErrorCode::InvalidRequest)
    } else {
        error
    }
}

/// Render malformed or missing JSON bodies with the error envelope.
///
/// Well-formed JSON whose members have the wrong type is reported as an
/// invalid model, like any other broken field rule.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    body_error(&err).into()
}

fn body_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Deserialize(inner) if inner.is_data() => {
            let mut errors = ValidationErrors::new();
            errors.push("body", inner.to_string());
            Error::from(errors)
        }
        _ => Error::invalid_request(format!("Invalid request body: {err}"))
            .with_details(json!({ "code": "invalid_body" })),
    }
}

/// Render unparseable path identities with the error envelope.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected path parameter");
    Error::invalid_request(format!("Invalid ID: {err}"))
        .with_details(json!({ "code": "invalid_path" }))
        .into()
}
