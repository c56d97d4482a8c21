use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    /// Body for requests rejected before reaching a use case
    /// (malformed JSON, missing fields, unparsable path parameters).
    pub fn validation(err: &poem::Error) -> Json<Self> {
        Json(Self {
            name: "ValidationError".to_string(),
            message: err.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
