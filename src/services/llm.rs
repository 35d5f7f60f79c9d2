use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

/// Single-shot chat-completion abstraction
///
/// The classifier and the recommendation generator each make exactly one
/// call per turn, so the seam is two methods: free text, and output
/// constrained to a JSON object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Free-text completion for a single user prompt
    async fn complete(&self, prompt: &str) -> AppResult<String>;

    /// Completion with the response constrained to a JSON object
    async fn complete_json(&self, prompt: &str) -> AppResult<String>;
}

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format: &'static str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ChatResponseMessage {
    content: String,
}

/// Groq chat completions client (OpenAI-compatible wire format)
#[derive(Clone)]
pub struct GroqClient {
    http_client: HttpClient,
    api_url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
            model,
        }
    }

    async fn chat(&self, prompt: &str, json_mode: bool) -> AppResult<String> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: json_mode.then_some(ResponseFormat {
                format: "json_object",
            }),
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LanguageModel(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default();

        tracing::debug!(model = %self.model, json_mode, "Chat completion received");

        Ok(content)
    }
}

#[async_trait]
impl LanguageModel for GroqClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.chat(prompt, false).await
    }

    async fn complete_json(&self, prompt: &str) -> AppResult<String> {
        self.chat(prompt, true).await
    }
}
