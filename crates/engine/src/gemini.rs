//! Gemini REST adapter (generateContent API)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::ports::{GenerationError, GenerationPort, GenerationRequest, SourcePayload};

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generation model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Client for the Gemini generateContent endpoint
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        // Generation calls are slow; 120 second timeout
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create client with custom timeout (for testing)
    pub fn with_timeout(base_url: &str, model: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create client from environment variables.
    ///
    /// Uses `GEMINI_BASE_URL` and `GEMINI_MODEL`, falling back to the
    /// defaults when unset. The key is resolved separately so credential
    /// lookup stays an explicit, ordered step.
    pub fn from_env(api_key: &str) -> Self {
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        Self::new(&base_url, &model, api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerationPort for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let api_request = build_api_request(&request);

        tracing::debug!(model = %self.model, kind = %request.kind, "sending generation request");

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        extract_text(api_response)
    }
}

/// Map a non-success response onto the structured error kinds.
///
/// 401/403 always mean the key was rejected. A 400 means the key is bad
/// only when the typed error body says so; any other failure is treated
/// as transport-class and left to the retry layer.
fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return GenerationError::InvalidCredential(format!("HTTP {status}"));
    }
    if status == StatusCode::BAD_REQUEST {
        if let Some(message) = invalid_key_message(body) {
            return GenerationError::InvalidCredential(message);
        }
    }
    GenerationError::RequestFailed(format!("HTTP {status}: {body}"))
}

/// The error detail reason Gemini reports for a malformed or revoked key.
const API_KEY_INVALID_REASON: &str = "API_KEY_INVALID";

fn invalid_key_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .error
        .details
        .iter()
        .any(|detail| detail.reason == API_KEY_INVALID_REASON)
        .then_some(parsed.error.message)
}

fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().find_map(|p| p.text))
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(text)
}

fn build_api_request(request: &GenerationRequest) -> GenerateContentRequest {
    let mut parts = vec![Part::text(&request.prompt)];
    match &request.source {
        SourcePayload::Text(text) => parts.push(Part::text(text)),
        SourcePayload::Binary { data, media_type } => parts.push(Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: media_type.clone(),
                data: data.clone(),
            }),
        }),
    }

    GenerateContentRequest {
        contents: vec![Content { parts }],
        system_instruction: Content {
            parts: vec![Part::text(&request.system_instruction)],
        },
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: request.response_schema.clone(),
        },
    }
}

// ============================================================================
// Gemini API types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(value: &str) -> Self {
        Self {
            text: Some(value.to_string()),
            inline_data: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentorplay_domain::GameKind;

    fn sample_request(source: SourcePayload) -> GenerationRequest {
        GenerationRequest::new(
            GameKind::Quiz,
            "You are a creative educator.",
            "Make a quiz.",
            source,
            serde_json::json!({"type": "OBJECT"}),
        )
    }

    #[test]
    fn test_text_source_becomes_second_text_part() {
        let request = sample_request(SourcePayload::Text("Source content:\nA story.".to_string()));
        let body = serde_json::to_value(build_api_request(&request)).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Make a quiz.");
        assert_eq!(
            body["contents"][0]["parts"][1]["text"],
            "Source content:\nA story."
        );
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a creative educator."
        );
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_binary_source_becomes_inline_data_part() {
        let request = sample_request(SourcePayload::Binary {
            data: "aGVsbG8=".to_string(),
            media_type: "application/pdf".to_string(),
        });
        let body = serde_json::to_value(build_api_request(&request)).unwrap();

        let part = &body["contents"][0]["parts"][1];
        assert_eq!(part["inlineData"]["mimeType"], "application/pdf");
        assert_eq!(part["inlineData"]["data"], "aGVsbG8=");
        assert!(part.get("text").is_none());
    }

    #[test]
    fn test_unauthorized_status_is_an_invalid_credential() {
        let err = classify_failure(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(err, GenerationError::InvalidCredential(_)));
        let err = classify_failure(StatusCode::FORBIDDEN, "denied");
        assert!(matches!(err, GenerationError::InvalidCredential(_)));
    }

    #[test]
    fn test_bad_request_with_key_reason_is_an_invalid_credential() {
        let body = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{"reason": "API_KEY_INVALID"}]
            }
        }"#;
        let err = classify_failure(StatusCode::BAD_REQUEST, body);
        match err {
            GenerationError::InvalidCredential(message) => {
                assert!(message.contains("API key not valid"));
            }
            other => panic!("expected InvalidCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_other_bad_request_is_a_request_failure() {
        let body = r#"{"error": {"code": 400, "message": "Unknown field.", "status": "INVALID_ARGUMENT"}}"#;
        assert!(matches!(
            classify_failure(StatusCode::BAD_REQUEST, body),
            GenerationError::RequestFailed(_)
        ));
        assert!(matches!(
            classify_failure(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            GenerationError::RequestFailed(_)
        ));
    }

    #[test]
    fn test_extract_text_takes_the_first_candidate_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"title\":\"x\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "{\"title\":\"x\"}");
    }

    #[test]
    fn test_missing_or_blank_candidate_text_is_empty_response() {
        let no_candidates: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            extract_text(no_candidates),
            Err(GenerationError::EmptyResponse)
        ));

        let blank: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "  \n"}]}}]}"#,
        )
        .unwrap();
        assert!(matches!(
            extract_text(blank),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let client = GeminiClient::new("http://localhost:8080/", "test-model", "key");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
