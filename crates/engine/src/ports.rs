//! Outbound port for model-backed game generation.
//!
//! The engine talks to the model through [`GenerationPort`] so the Gemini
//! adapter, the retry wrapper, and test fakes are interchangeable.

use async_trait::async_trait;
use thiserror::Error;

use mentorplay_domain::GameKind;

/// The source material attached to one generation call.
#[derive(Debug, Clone)]
pub enum SourcePayload {
    /// Plain text, embedded in the prompt.
    Text(String),
    /// Base64-encoded file bytes, sent as an inline-data part.
    Binary { data: String, media_type: String },
}

/// Request to generate one structured game.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub kind: GameKind,
    pub system_instruction: String,
    pub prompt: String,
    pub source: SourcePayload,
    pub response_schema: serde_json::Value,
}

impl GenerationRequest {
    pub fn new(
        kind: GameKind,
        system_instruction: impl Into<String>,
        prompt: impl Into<String>,
        source: SourcePayload,
        response_schema: serde_json::Value,
    ) -> Self {
        Self {
            kind,
            system_instruction: system_instruction.into(),
            prompt: prompt.into(),
            source,
            response_schema,
        }
    }
}

/// Errors a generation call can produce.
///
/// Variants are assigned structurally by the adapter (HTTP status codes and
/// typed error bodies); callers branch on the variant, never on message text.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// No API key was found in any configured credential source
    #[error("No API key found in any configured credential source")]
    NoCredential,

    /// The API was reached but rejected the key
    #[error("The API key was rejected: {0}")]
    InvalidCredential(String),

    /// The model answered with no candidate text
    #[error("The model returned an empty response")]
    EmptyResponse,

    /// The model answered, but the payload is unusable
    #[error("The model response could not be used: {0}")]
    InvalidResponse(String),

    /// Transport-level failure (connection, timeout, server error)
    #[error("Generation request failed: {0}")]
    RequestFailed(String),
}

impl GenerationError {
    /// Transient transport failures are the only retryable class.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::RequestFailed(_))
    }
}

/// Port for the model call.
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Issue one generation call and return the raw response text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
