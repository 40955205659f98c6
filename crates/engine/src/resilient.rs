//! Resilient generation wrapper with retry logic
//!
//! Wraps any [`GenerationPort`] with a fixed-bound, fixed-delay retry. Only
//! transport-class failures are retried; credential and content failures
//! surface immediately so the caller can react instead of waiting out a
//! pointless backoff.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{GenerationError, GenerationPort, GenerationRequest};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, the first call included
    pub max_attempts: u32,
    /// Fixed delay between attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 1000,
        }
    }
}

/// Wrapper that adds retry behavior to any generation port
pub struct ResilientGenerationClient {
    inner: Arc<dyn GenerationPort>,
    config: RetryConfig,
}

impl ResilientGenerationClient {
    pub fn new(inner: Arc<dyn GenerationPort>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    async fn execute_with_retry<F, Fut>(
        &self,
        operation_name: &str,
        operation: F,
    ) -> Result<String, GenerationError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<String, GenerationError>>,
    {
        let mut last_error = None;

        for attempt in 1..=self.config.max_attempts.max(1) {
            match operation().await {
                Ok(response) => {
                    if attempt > 1 {
                        tracing::info!(
                            operation = operation_name,
                            attempt,
                            "generation succeeded after retry"
                        );
                    }
                    return Ok(response);
                }
                Err(error) => {
                    if !error.is_retryable() {
                        tracing::error!(
                            operation = operation_name,
                            error = %error,
                            "non-retryable generation error"
                        );
                        return Err(error);
                    }
                    if attempt < self.config.max_attempts {
                        tracing::warn!(
                            operation = operation_name,
                            attempt,
                            max_attempts = self.config.max_attempts,
                            delay_ms = self.config.delay_ms,
                            error = %error,
                            "generation attempt failed, retrying"
                        );
                        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
                    }
                    last_error = Some(error);
                }
            }
        }

        let error = last_error
            .unwrap_or_else(|| GenerationError::RequestFailed("no attempts were made".to_string()));
        tracing::error!(
            operation = operation_name,
            attempts = self.config.max_attempts,
            error = %error,
            "generation failed after all retry attempts"
        );
        Err(error)
    }
}

#[async_trait]
impl GenerationPort for ResilientGenerationClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.execute_with_retry("generate", || self.inner.generate(request.clone()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use mentorplay_domain::GameKind;

    use super::*;
    use crate::ports::SourcePayload;

    /// Mock that fails a configurable number of times before succeeding
    struct FailingMockGeneration {
        failures_remaining: AtomicU32,
        error: GenerationError,
    }

    impl FailingMockGeneration {
        fn new(failures: u32, error: GenerationError) -> Self {
            Self {
                failures_remaining: AtomicU32::new(failures),
                error,
            }
        }
    }

    #[async_trait]
    impl GenerationPort for FailingMockGeneration {
        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> Result<String, GenerationError> {
            let remaining = self.failures_remaining.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures_remaining.fetch_sub(1, Ordering::SeqCst);
                Err(self.error.clone())
            } else {
                Ok(r#"{"title": "ok"}"#.to_string())
            }
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            GameKind::Quiz,
            "system",
            "prompt",
            SourcePayload::Text("Source content:\na story".to_string()),
            serde_json::json!({}),
        )
    }

    fn fast_config() -> RetryConfig {
        RetryConfig {
            max_attempts: 3,
            delay_ms: 1,
        }
    }

    #[tokio::test]
    async fn test_succeeds_without_retry() {
        let mock = Arc::new(FailingMockGeneration::new(
            0,
            GenerationError::RequestFailed("unused".to_string()),
        ));
        let resilient = ResilientGenerationClient::new(mock, fast_config());

        let result = resilient.generate(request()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let mock = Arc::new(FailingMockGeneration::new(
            2,
            GenerationError::RequestFailed("connection reset".to_string()),
        ));
        let resilient = ResilientGenerationClient::new(mock.clone(), fast_config());

        let result = resilient.generate(request()).await;
        assert!(result.is_ok());
        assert_eq!(mock.failures_remaining.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let mock = Arc::new(FailingMockGeneration::new(
            10,
            GenerationError::RequestFailed("connection reset".to_string()),
        ));
        let resilient = ResilientGenerationClient::new(mock.clone(), fast_config());

        let result = resilient.generate(request()).await;
        assert!(matches!(result, Err(GenerationError::RequestFailed(_))));
        // Three attempts consumed, no more.
        assert_eq!(mock.failures_remaining.load(Ordering::SeqCst), 7);
    }

    #[tokio::test]
    async fn test_credential_failure_is_not_retried() {
        let mock = Arc::new(FailingMockGeneration::new(
            10,
            GenerationError::InvalidCredential("HTTP 401".to_string()),
        ));
        let resilient = ResilientGenerationClient::new(mock.clone(), fast_config());

        let result = resilient.generate(request()).await;
        assert!(matches!(result, Err(GenerationError::InvalidCredential(_))));
        assert_eq!(mock.failures_remaining.load(Ordering::SeqCst), 9);
    }

    #[tokio::test]
    async fn test_empty_response_is_not_retried() {
        let mock = Arc::new(FailingMockGeneration::new(10, GenerationError::EmptyResponse));
        let resilient = ResilientGenerationClient::new(mock.clone(), fast_config());

        let result = resilient.generate(request()).await;
        assert!(matches!(result, Err(GenerationError::EmptyResponse)));
        assert_eq!(mock.failures_remaining.load(Ordering::SeqCst), 9);
    }
}
