//! Ordered credential resolution.
//!
//! The API key is looked up through an explicit source list instead of
//! scattered ambient reads, so the precedence is visible in one place and
//! tests can resolve against literal values.

use std::path::PathBuf;

use crate::ports::GenerationError;

/// One place an API key may come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// An environment variable, by name.
    Env(String),
    /// A file whose trimmed contents are the key.
    KeyFile(PathBuf),
    /// A fixed value, used as-is.
    Literal(String),
}

/// The sources the engine consults, in order.
///
/// The explicit `GEMINI_API_KEY` wins over the legacy `API_KEY`; a key
/// file joins the list only when `MENTORPLAY_KEY_FILE` names one.
pub fn default_sources() -> Vec<CredentialSource> {
    let mut sources = vec![
        CredentialSource::Env("GEMINI_API_KEY".to_string()),
        CredentialSource::Env("API_KEY".to_string()),
    ];
    if let Ok(path) = std::env::var("MENTORPLAY_KEY_FILE") {
        if !path.trim().is_empty() {
            sources.push(CredentialSource::KeyFile(PathBuf::from(path)));
        }
    }
    sources
}

/// Resolve the first present, non-blank credential.
pub fn resolve_credential(sources: &[CredentialSource]) -> Result<String, GenerationError> {
    sources
        .iter()
        .find_map(read_source)
        .ok_or(GenerationError::NoCredential)
}

fn read_source(source: &CredentialSource) -> Option<String> {
    let raw = match source {
        CredentialSource::Env(name) => std::env::var(name).ok()?,
        CredentialSource::KeyFile(path) => std::fs::read_to_string(path).ok()?,
        CredentialSource::Literal(value) => value.clone(),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
