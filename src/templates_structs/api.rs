use serde::Serialize;

use crate::gateway::{GenerationError, GenerationErrorKind};

/// Error body returned by the JSON API.
#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<GenerationErrorKind>,
}

impl ApiErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), kind: None }
    }
}

impl From<GenerationError> for ApiErrorResponse {
    fn from(e: GenerationError) -> Self {
        ApiErrorResponse {
            error: e.to_string(),
            kind: Some(e.kind()),
        }
    }
}
