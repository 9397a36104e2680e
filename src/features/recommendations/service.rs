use std::collections::HashMap;
use std::time::Duration;

use minijinja::Value;
use serde::{Deserialize, Serialize};

use crate::core::config::AiConfig;
use crate::core::error::{AppError, Result};
use crate::features::recommendations::dtos::{RecommendationDto, RecommendationRequestDto};
use crate::shared::constants::SERVICE_TYPES;
use crate::shared::llm::{parse_with_fallback, LlmResponse};
use crate::shared::prompts::render_template;

const PROMPT_TEMPLATE: &str = "recommendations/suggestion.jinja";

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Generates recommendation copy for the marketing pages through an
/// OpenAI-compatible chat endpoint.
pub struct RecommendationService {
    config: AiConfig,
    client: reqwest::Client,
}

impl RecommendationService {
    pub fn new(config: AiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Render the prompt, make one model call, and parse the reply into a
    /// typed recommendation. A single attempt; failures surface to the
    /// caller as external-service errors.
    pub async fn suggest(&self, request: RecommendationRequestDto) -> Result<RecommendationDto> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::ExternalServiceError("Recommendation service is not configured".to_string())
        })?;

        let mut ctx: HashMap<&str, Value> = HashMap::new();
        ctx.insert("occasion", Value::from(request.occasion.as_str()));
        ctx.insert(
            "preferences",
            Value::from(request.preferences.as_deref().unwrap_or("")),
        );
        ctx.insert("service_types", Value::from(SERVICE_TYPES.join(", ")));
        ctx.insert(
            "schema",
            Value::from(RecommendationDto::json_schema_string()),
        );

        let prompt = render_template(PROMPT_TEMPLATE, &ctx)
            .map_err(|e| AppError::Internal(format!("Failed to render prompt: {}", e)))?;

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Model request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Model endpoint returned {}: {}",
                status, detail
            )));
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Invalid model response: {}", e))
        })?;

        let content = chat
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| {
                AppError::ExternalServiceError("Model returned no content".to_string())
            })?;

        let recommendation = parse_with_fallback::<RecommendationDto>(content);
        if !recommendation.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Model reply could not be parsed: {}",
                recommendation
                    .llm_error_message
                    .as_deref()
                    .unwrap_or("unknown error")
            )));
        }

        tracing::info!(
            "Recommendation generated for occasion '{}' (service: {:?})",
            request.occasion,
            recommendation.suggested_service
        );

        Ok(recommendation)
    }
}
