//! SiliconFlow chat-completion adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::BriefingModel;
use crate::domain::briefing::BriefingPrompt;
use crate::domain::credential::Credential;
use crate::domain::failure::{classify, ClassifiedError};

use crate::domain::transcription::Transcript;

/// Chat model identifier
const DEFAULT_MODEL: &str = "deepseek-ai/DeepSeek-V3";

/// SiliconFlow API base URL
const API_BASE_URL: &str = "https://api.siliconflow.cn/v1";

/// Sampling temperature for every request
const TEMPERATURE: f32 = 0.7;

/// Output-length ceiling for every request
const MAX_TOKENS: u32 = 2000;

/// Per-request timeout; generation is slower than transcription
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

// Request types for the chat-completion endpoint

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

// Response types for the chat-completion endpoint

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// SiliconFlow briefing generation adapter
pub struct SiliconFlowGenerator {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl SiliconFlowGenerator {
    /// Create an adapter against the production endpoint
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create an adapter against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the chat-completion endpoint URL
    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Build the request body: instruction as system turn, transcript as
    /// user turn.
    fn build_request(
        &self,
        prompt: &BriefingPrompt,
        transcript: &Transcript,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.content().to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: transcript.as_str().to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

impl Default for SiliconFlowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BriefingModel for SiliconFlowGenerator {
    async fn generate(
        &self,
        prompt: &BriefingPrompt,
        transcript: &Transcript,
        credential: &Credential,
    ) -> Result<String, ClassifiedError> {
        let body = self.build_request(prompt, transcript);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(credential.as_str())
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(classify(format!("HTTP {status}: {error_text}")));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(classify)?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| classify("completion response contained no choices"))?;

        Ok(choice.message.content)
    }
}
