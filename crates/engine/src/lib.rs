//! MentorPlay Engine - request shaping and the Gemini connector.
//!
//! The domain crate owns game rules and puzzle layout; this crate owns the
//! async side: credential resolution, the HTTP adapter, retry, and the
//! generation service the binary drives.

pub mod credentials;
pub mod gemini;
pub mod generation;
pub mod ports;
pub mod resilient;

pub use credentials::{default_sources, resolve_credential, CredentialSource};
pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use generation::GenerationService;
pub use ports::{GenerationError, GenerationPort, GenerationRequest, SourcePayload};
pub use resilient::{ResilientGenerationClient, RetryConfig};
