use crate::core::error::{AppError, Result};
use crate::features::auth::model::AdminContext;

/// Validates bearer credentials on the admin write surface against the
/// single configured API token.
pub struct ApiTokenValidator {
    admin_api_token: String,
}

impl ApiTokenValidator {
    pub fn new(admin_api_token: String) -> Self {
        Self { admin_api_token }
    }

    pub fn validate_token(&self, token: &str) -> Result<AdminContext> {
        if token.is_empty() || token != self.admin_api_token {
            return Err(AppError::Unauthorized("Invalid API token".to_string()));
        }

        Ok(AdminContext {
            token_fingerprint: fingerprint(token),
        })
    }
}

/// Last four characters of the token, for logging without leaking it.
fn fingerprint(token: &str) -> String {
    let tail: String = token
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_configured_token() {
        let validator = ApiTokenValidator::new("henna-2024".to_string());
        let admin = validator.validate_token("henna-2024").unwrap();
        assert_eq!(admin.token_fingerprint, "...2024");
    }

    #[test]
    fn rejects_other_tokens() {
        let validator = ApiTokenValidator::new("henna-2024".to_string());
        assert!(validator.validate_token("henna-2023").is_err());
        assert!(validator.validate_token("").is_err());
    }
}
