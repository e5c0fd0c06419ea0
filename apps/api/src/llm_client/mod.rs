/// LLM Client: the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the chat-completions API directly.
/// All generation goes through the `GenerationClient` trait so handlers and tests
/// can swap the backend.
///
/// Model: gpt-4o-mini, temperature 0.7 (hardcoded, not configurable).
/// No automatic retries: a failed call fails exactly the action that made it.
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for every generation call.
pub const MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Output shape requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Text,
    /// Structured-output mode: the model must return one JSON object.
    JsonObject,
}

/// The external generation collaborator: (system, user) in, text out.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        mode: ResponseMode,
    ) -> Result<String, LlmError>;
}

/// Calls the collaborator in JSON mode and deserializes the reply.
pub async fn complete_json<T: DeserializeOwned>(
    client: &dyn GenerationClient,
    system: &str,
    user: &str,
) -> Result<T, LlmError> {
    let text = client.complete(system, user, ResponseMode::JsonObject).await?;
    serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Trimmed text of the first choice, if it has any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completions client. Constructed even without an API key so the service
/// starts; every call then fails with `LlmError::MissingApiKey`.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, api_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes one call and returns the full response object.
    pub async fn call(
        &self,
        system: &str,
        user: &str,
        mode: ResponseMode,
    ) -> Result<ChatResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            response_format: match mode {
                ResponseMode::Text => None,
                ResponseMode::JsonObject => Some(ResponseFormat {
                    kind: "json_object",
                }),
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl GenerationClient for LlmClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        mode: ResponseMode,
    ) -> Result<String, LlmError> {
        let response = self.call(system, user, mode).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(&'static str);

    #[async_trait]
    impl GenerationClient for Canned {
        async fn complete(&self, _: &str, _: &str, mode: ResponseMode) -> Result<String, LlmError> {
            assert_eq!(mode, ResponseMode::JsonObject);
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage { role: "system", content: "s" },
                ChatMessage { role: "user", content: "u" },
            ],
            temperature: TEMPERATURE,
            response_format: Some(ResponseFormat { kind: "json_object" }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "u");
        assert_eq!(json["response_format"]["type"], "json_object");

        let text_body = ChatRequest {
            response_format: None,
            ..body
        };
        let json = serde_json::to_value(&text_body).unwrap();
        assert!(json.get("response_format").is_none());
    }

    #[test]
    fn test_response_text_trims_and_rejects_blank() {
        let r: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"  Title here \n"}}],"usage":null}"#,
        )
        .unwrap();
        assert_eq!(r.text(), Some("Title here"));

        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap();
        assert_eq!(blank.text(), None);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let client = LlmClient::new(None, None);
        let err = client
            .complete("system", "user", ResponseMode::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_complete_json_strips_fences() {
        #[derive(Deserialize)]
        struct Out {
            ok: bool,
        }
        let out: Out = complete_json(&Canned("```json\n{\"ok\": true}\n```"), "s", "u")
            .await
            .unwrap();
        assert!(out.ok);
    }

    #[tokio::test]
    async fn test_complete_json_reports_parse_errors() {
        let err = complete_json::<serde_json::Value>(&Canned("not json"), "s", "u")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }
}
