use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{
    ai::{ports::CompletionClient, value_objects::CompletionRequest},
    common::{AiConfig, entities::app_errors::CoreError},
};

/// OpenAI-compatible chat completions endpoint of the AI gateway.
#[derive(Debug, Clone)]
pub struct GatewayCompletionClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
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
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Non-success statuses in the way callers are told about them.
fn classify_status(status: StatusCode) -> CoreError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => CoreError::AiRateLimited,
        StatusCode::PAYMENT_REQUIRED => CoreError::AiInsufficientCredits,
        other => CoreError::AiUpstream(other.as_u16()),
    }
}

fn reply_content(response: ChatResponse) -> Result<String, CoreError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| CoreError::InvalidAiResponse("empty reply from AI gateway".to_string()))
}

impl GatewayCompletionClient {
    pub fn new(config: &AiConfig) -> Self {
        Self {
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            client: Client::new(),
        }
    }
}

impl CompletionClient for GatewayCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("AI gateway API key is not configured");
            return Err(CoreError::AiNotConfigured);
        };

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("Calling AI gateway model {}", self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("AI gateway request failed: {}", e);
                CoreError::ExternalServiceError(format!("AI gateway error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("AI gateway error: {} - {}", status, error_text);
            return Err(classify_status(status));
        }

        let reply: ChatResponse = response.json().await.map_err(|e| {
            error!("Failed to parse AI gateway response: {}", e);
            CoreError::InvalidAiResponse(format!("unreadable gateway response: {}", e))
        })?;

        reply_content(reply)
    }
}
