use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::{
    error::LlmError,
    openai::types::{
        OpenAIChatCompletionRequest, OpenAIChatCompletionResponse, OpenAIErrorResponse,
        OpenAIMessage, OpenAIRole,
    },
    types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage},
};

/// OpenAI LLM client
pub struct OpenAIClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl OpenAIClient {
    /// Create a new OpenAI client with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: "https://api.openai.com".to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a chat completion using the OpenAI Chat Completions API
    pub async fn create_chat_completion(
        &self,
        request: OpenAIChatCompletionRequest,
    ) -> Result<OpenAIChatCompletionResponse, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if status.is_success() {
            let openai_response: OpenAIChatCompletionResponse = response
                .json()
                .await
                .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;
            tracing::debug!(response = ?openai_response, "OpenAI chat completion response");
            return Ok(openai_response);
        }

        // Extract retry-after header before consuming the response
        let retry_after = if status == StatusCode::TOO_MANY_REQUESTS {
            response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
        } else {
            None
        };

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = match serde_json::from_str::<OpenAIErrorResponse>(&error_text) {
            Ok(error_response) => error_response.error.message,
            // Fallback for non-standard error responses
            Err(_) => error_text,
        };

        Err(error_for_status(status, message, retry_after))
    }
}

fn error_for_status(status: StatusCode, message: String, retry_after: Option<u64>) -> LlmError {
    match status {
        StatusCode::BAD_REQUEST => LlmError::invalid_request(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::authentication(message),
        StatusCode::PAYLOAD_TOO_LARGE => LlmError::invalid_request("Request too large"),
        StatusCode::TOO_MANY_REQUESTS => LlmError::rate_limit(message, retry_after),
        _ => LlmError::api_error(status.as_u16(), message),
    }
}

#[async_trait]
impl crate::client::LlmClient for OpenAIClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let messages = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => OpenAIRole::User,
                    Role::Assistant => OpenAIRole::Assistant,
                    Role::System => OpenAIRole::System,
                };
                OpenAIMessage::new(role, msg.text_content())
            })
            .collect();

        let openai_request = OpenAIChatCompletionRequest {
            model: request.model,
            messages,
            max_completion_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: request.top_p,
            stop: request.stop_sequences,
        };

        let openai_response = self.create_chat_completion(openai_request).await?;

        let choice = openai_response
            .choices
            .first()
            .ok_or_else(|| LlmError::internal("No completion choices returned"))?;

        let content = choice
            .message
            .content
            .clone()
            .map(|text| vec![ContentBlock::Text { text }])
            .unwrap_or_default();

        let usage = openai_response
            .usage
            .as_ref()
            .map(|usage| Usage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
            })
            .unwrap_or(Usage {
                input_tokens: 0,
                output_tokens: 0,
            });

        Ok(CompletionResponse {
            content,
            role: match choice.message.role {
                OpenAIRole::User => Role::User,
                OpenAIRole::System => Role::System,
                OpenAIRole::Assistant | OpenAIRole::Tool => Role::Assistant,
            },
            usage,
            stop_reason: choice.finish_reason.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        crate::providers::OPENAI
    }

    fn model_name(&self) -> &str {
        crate::models::openai::GPT_4O_MINI_ID
    }
}
