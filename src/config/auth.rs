//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Hosted auth service (Supabase GoTrue) settings.
///
/// Tokens are HS256 JWTs signed with the project's JWT secret and verified
/// locally; no call to the auth service is made per request.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Project URL, e.g. `https://abc.supabase.co`
    pub supabase_url: String,

    /// Project JWT secret
    pub jwt_secret: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Clock skew tolerated on `exp`, in seconds
    #[serde(default = "default_leeway")]
    pub leeway_secs: u64,
}

impl AuthConfig {
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if self.supabase_url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SUPABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.jwt_secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if environment == Environment::Production && !self.supabase_url.starts_with("https://") {
            return Err(ValidationError::AuthUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            supabase_url: String::new(),
            jwt_secret: String::new(),
            audience: default_audience(),
            leeway_secs: default_leeway(),
        }
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}

fn default_leeway() -> u64 {
    30
}
