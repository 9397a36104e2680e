use lazy_static::lazy_static;
use regex::Regex;

use super::LlmResponse;

lazy_static! {
    /// Regex for trailing commas before } or ]
    static ref TRAILING_COMMA_RE: Regex = Regex::new(r",(\s*[}\]])").unwrap();

    /// Regex for JavaScript string concatenation ("str1" + "str2")
    static ref JS_STRING_CONCAT_RE: Regex = Regex::new(r#""\s*\+\s*""#).unwrap();
}

/// Extract JSON string from text (handles multiple formats)
///
/// Tries in order:
/// 1. JSON in markdown code block: ```json ... ```
/// 2. Generic markdown code block: ``` ... ```
/// 3. Plain JSON starting with {
/// 4. JSON embedded anywhere in text (find { to })
fn extract_json_string(text: &str) -> Result<String, String> {
    if text.contains("```json") {
        return text
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| "Failed to extract JSON from markdown code block".to_string());
    }

    if text.contains("```") {
        if let Some(start) = text.find("```") {
            let block_start = start + 3;
            // Skip optional language identifier on the same line
            if let Some(newline_offset) = text[block_start..].find('\n') {
                let json_start = block_start + newline_offset + 1;
                if let Some(end_offset) = text[json_start..].find("```") {
                    return Ok(text[json_start..json_start + end_offset].trim().to_string());
                }
            }
        }
    }

    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed.to_string());
    }

    let start = text
        .find('{')
        .ok_or_else(|| "No JSON object found in response".to_string())?;

    let end = text
        .rfind('}')
        .ok_or_else(|| "Incomplete JSON object in response".to_string())?;

    if start < end {
        Ok(text[start..=end].to_string())
    } else {
        Err("Invalid JSON boundaries in response".to_string())
    }
}

/// Apply quick fixes for common LLM JSON mistakes: trailing commas and
/// JavaScript-style string concatenation.
fn apply_quick_fixes(json_str: &str) -> String {
    let fixed = JS_STRING_CONCAT_RE.replace_all(json_str, "").to_string();
    TRAILING_COMMA_RE.replace_all(&fixed, "$1").to_string()
}

/// Attempt to repair JSON using the llm_json crate
fn repair_json(json_str: &str) -> Option<String> {
    let options = llm_json::RepairOptions::default();
    match llm_json::repair_json(json_str, &options) {
        Ok(repaired) => Some(repaired),
        Err(e) => {
            tracing::debug!("JSON repair failed: {:?}", e);
            None
        }
    }
}

/// Try to parse text as the target type using multiple strategies
///
/// Parsing pipeline:
/// 1. Extract JSON string (markdown/plain/embedded)
/// 2. Try direct parse (fast path)
/// 3. Apply quick fixes and try again
/// 4. Apply llm_json::repair_json() and try a final parse
fn try_parse<T>(text: &str) -> Result<T, String>
where
    T: LlmResponse,
{
    let json_str = extract_json_string(text)?;

    if let Ok(parsed) = serde_json::from_str::<T>(&json_str) {
        return Ok(parsed);
    }

    let fixed_json = apply_quick_fixes(&json_str);
    if let Ok(parsed) = serde_json::from_str::<T>(&fixed_json) {
        tracing::debug!("JSON parsed successfully after quick fixes");
        return Ok(parsed);
    }

    if let Some(repaired) = repair_json(&json_str) {
        if let Ok(parsed) = serde_json::from_str::<T>(&repaired) {
            tracing::debug!("JSON parsed successfully after llm_json repair");
            return Ok(parsed);
        }
    }

    Err(format!(
        "Failed to parse JSON after all repair attempts. Original: {}",
        json_str.chars().take(200).collect::<String>()
    ))
}

/// Parse LLM response text with graceful fallback
///
/// Attempts to parse the text into the target type; if every strategy
/// fails, returns `T::default()` marked as a fallback with the error
/// message attached.
pub fn parse_with_fallback<T>(text: &str) -> T
where
    T: LlmResponse,
{
    match try_parse::<T>(text) {
        Ok(parsed) => parsed,
        Err(error_msg) => {
            tracing::warn!("LLM response parsing failed, using fallback: {}", error_msg);
            let mut fallback = T::default();
            fallback.mark_as_fallback(error_msg);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    fn default_true() -> bool {
        true
    }

    #[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
    struct SuggestionResponse {
        pub recommendation: String,
        pub style: Option<String>,

        #[serde(default = "default_true")]
        #[schemars(skip)]
        pub is_llm_success: bool,

        #[serde(skip_serializing_if = "Option::is_none")]
        #[schemars(skip)]
        pub llm_error_message: Option<String>,
    }

    impl LlmResponse for SuggestionResponse {
        fn mark_as_fallback(&mut self, error_message: String) {
            self.is_llm_success = false;
            self.llm_error_message = Some(error_message);
        }

        fn is_success(&self) -> bool {
            self.is_llm_success
        }
    }

    #[test]
    fn parses_plain_json() {
        let text = r#"{"recommendation": "Try a floral mehndi set", "style": "floral"}"#;
        let parsed = parse_with_fallback::<SuggestionResponse>(text);
        assert!(parsed.is_success());
        assert_eq!(parsed.recommendation, "Try a floral mehndi set");
    }

    #[test]
    fn parses_markdown_fenced_json() {
        let text = "Here you go:\n```json\n{\"recommendation\": \"Peacock rangoli\"}\n```";
        let parsed = parse_with_fallback::<SuggestionResponse>(text);
        assert!(parsed.is_success());
        assert_eq!(parsed.recommendation, "Peacock rangoli");
    }

    #[test]
    fn repairs_trailing_comma() {
        let text = r#"{"recommendation": "Minimal nail art", "style": "minimal",}"#;
        let parsed = parse_with_fallback::<SuggestionResponse>(text);
        assert!(parsed.is_success());
        assert_eq!(parsed.style.as_deref(), Some("minimal"));
    }

    #[test]
    fn parses_json_embedded_in_prose() {
        let text = "Sure! {\"recommendation\": \"Kundan jewelry\"} hope that helps";
        let parsed = parse_with_fallback::<SuggestionResponse>(text);
        assert!(parsed.is_success());
        assert_eq!(parsed.recommendation, "Kundan jewelry");
    }

    #[test]
    fn falls_back_on_garbage() {
        let parsed = parse_with_fallback::<SuggestionResponse>("no json here at all");
        assert!(!parsed.is_success());
        assert!(parsed.llm_error_message.is_some());
    }

    #[test]
    fn schema_string_lists_fields() {
        let schema = SuggestionResponse::json_schema_string();
        assert!(schema.contains("recommendation"));
        // Internal bookkeeping fields stay out of the prompt schema
        assert!(!schema.contains("is_llm_success"));
    }
}
