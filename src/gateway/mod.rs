//! Generation gateway: turns raw text into a validated `GenerationResult`
//! through an injectable backend.

pub mod gemini;
pub mod prompt;
pub mod validate;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::models::slide::GenerationResult;

/// Request handed to a backend: the instruction plus the output schema.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub schema: Value,
}

/// Failure of the backend call itself (network, auth, quota, blocked prompt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError(pub String);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for BackendError {}

/// The external generation capability. Returns the raw structured-data text.
#[async_trait]
pub trait SlideBackend: Send + Sync {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, BackendError>;
}

#[async_trait]
impl SlideBackend for Arc<dyn SlideBackend> {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, BackendError> {
        (**self).complete(request).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationErrorKind {
    BackendFailure,
    MalformedResponse,
    InvalidShape,
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationErrorKind::BackendFailure => write!(f, "backend failure"),
            GenerationErrorKind::MalformedResponse => write!(f, "malformed response"),
            GenerationErrorKind::InvalidShape => write!(f, "invalid shape"),
        }
    }
}

/// Classified gateway failure; callers only display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    message: String,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn kind(&self) -> GenerationErrorKind {
        self.kind
    }

    /// The underlying cause, without the generic prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to generate slides: {}", self.message)
    }
}

impl std::error::Error for GenerationError {}

impl From<BackendError> for GenerationError {
    fn from(e: BackendError) -> Self {
        GenerationError::new(GenerationErrorKind::BackendFailure, e.0)
    }
}

/// Gateway over a backend `B`. One attempt per call, no caching.
pub struct GenerationGateway<B> {
    backend: B,
    language: String,
}

/// Gateway type shared through actix app data.
pub type SharedGateway = GenerationGateway<Arc<dyn SlideBackend>>;

impl<B: SlideBackend> GenerationGateway<B> {
    pub fn new(backend: B, language: impl Into<String>) -> Self {
        Self { backend, language: language.into() }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn request_for(&self, raw_text: &str) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt::build_prompt(raw_text, &self.language),
            schema: prompt::response_schema(),
        }
    }

    /// Generate three slide variants for `raw_text`.
    ///
    /// Callers reject blank input before getting here.
    pub async fn generate(&self, raw_text: &str) -> Result<GenerationResult, GenerationError> {
        log::info!(
            "Generating slides for {} chars of input (language: {})",
            raw_text.chars().count(),
            self.language
        );

        let request = self.request_for(raw_text);
        let outcome = match self.backend.complete(&request).await {
            Ok(raw) => validate::parse_payload(&raw),
            Err(e) => Err(e.into()),
        };

        match &outcome {
            Ok(result) => {
                let counts: Vec<usize> = result.variants().iter().map(Vec::len).collect();
                log::debug!("Generated slide versions with point counts {counts:?}");
            }
            Err(e) => log::error!("Slide generation failed ({}): {}", e.kind(), e.message()),
        }
        outcome
    }
}
