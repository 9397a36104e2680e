use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::llm::LlmResponse;

/// Request DTO for a style recommendation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestDto {
    /// The occasion to suggest for (e.g. "wedding", "Diwali")
    #[validate(length(min = 1, max = 255, message = "Occasion must be 1-255 characters"))]
    pub occasion: String,

    /// Free-text style preferences
    #[validate(length(max = 1000, message = "Preferences must not exceed 1000 characters"))]
    pub preferences: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Model output for a style recommendation.
///
/// The bookkeeping fields are skipped in the schema shown to the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    /// Recommendation copy shown to the visitor
    pub recommendation: String,

    /// Which of the studio's services fits best
    #[serde(default)]
    pub suggested_service: Option<String>,

    #[serde(default = "default_true")]
    #[schemars(skip)]
    #[schema(ignore)]
    pub is_llm_success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    #[schema(ignore)]
    pub llm_error_message: Option<String>,
}

impl LlmResponse for RecommendationDto {
    fn mark_as_fallback(&mut self, error_message: String) {
        self.is_llm_success = false;
        self.llm_error_message = Some(error_message);
    }

    fn is_success(&self) -> bool {
        self.is_llm_success
    }
}
