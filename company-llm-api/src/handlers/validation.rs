use crate::models::{ValidationErrorDetail, ValidationErrorResponse};
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::warn;

/// Extractor config that turns rejected JSON bodies into 422 responses with field detail.
/// A body without a content type is parsed as JSON; a non-JSON content type is rejected.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let detail = validation_details(&err);
    warn!(path = %req.path(), error = %err, "Rejected request body");

    let response = HttpResponse::UnprocessableEntity().json(ValidationErrorResponse { detail });
    InternalError::from_response(err, response).into()
}

fn validation_details(err: &JsonPayloadError) -> Vec<ValidationErrorDetail> {
    match err {
        JsonPayloadError::Deserialize(e) => {
            let msg = e.to_string();
            let fields = missing_fields(&msg);
            if fields.is_empty() {
                vec![body_error(msg, "json_invalid")]
            } else {
                fields
                    .into_iter()
                    .map(|field| ValidationErrorDetail {
                        loc: vec!["body".to_string(), field.to_string()],
                        msg: "Field required".to_string(),
                        error_type: "missing".to_string(),
                    })
                    .collect()
            }
        }
        JsonPayloadError::ContentType => {
            vec![body_error("Expected a JSON request body".to_string(), "content_type")]
        }
        other => vec![body_error(other.to_string(), "json_invalid")],
    }
}

fn body_error(msg: String, error_type: &str) -> ValidationErrorDetail {
    ValidationErrorDetail {
        loc: vec!["body".to_string()],
        msg,
        error_type: error_type.to_string(),
    }
}

// "missing field `query` at line 1 column 20" or "missing fields `company_name`, `query` ..."
fn missing_fields(msg: &str) -> Vec<&str> {
    let Some(rest) = msg
        .strip_prefix("missing fields ")
        .or_else(|| msg.strip_prefix("missing field "))
    else {
        return Vec::new();
    };

    rest.split('`')
        .skip(1)
        .step_by(2)
        .filter(|field| !field.is_empty())
        .collect()
}
