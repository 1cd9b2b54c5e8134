//! Supabase auth adapter for JWT validation.
//!
//! Supabase (GoTrue) signs access tokens with the project's HS256 JWT secret,
//! so tokens are verified locally with no network round-trip:
//!
//! 1. Verify the HS256 signature with the project secret
//! 2. Validate issuer (`{project_url}/auth/v1`), audience and expiry
//! 3. Map claims to the domain `AuthenticatedUser`
//!
//! # Example
//!
//! ```ignore
//! let config = SupabaseAuthConfig::new("https://abc.supabase.co", jwt_secret);
//! let validator = SupabaseSessionValidator::new(config);
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Audience Supabase stamps on tokens for signed-in users.
pub const DEFAULT_AUDIENCE: &str = "authenticated";

#[derive(Debug, Clone)]
pub struct SupabaseAuthConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub project_url: String,
    jwt_secret: Secret<String>,
    pub audience: String,
    /// Clock skew tolerated on `exp`, in seconds.
    pub leeway_secs: u64,
}

impl SupabaseAuthConfig {
    pub fn new(project_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            project_url: project_url.into(),
            jwt_secret: Secret::new(jwt_secret.into()),
            audience: DEFAULT_AUDIENCE.to_string(),
            leeway_secs: 30,
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    /// Issuer claim GoTrue writes into tokens.
    pub fn issuer(&self) -> String {
        format!("{}/auth/v1", self.project_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SupabaseClaims {
    sub: String,
    iss: String,
    #[serde(default)]
    aud: Audience,
    exp: i64,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
}

/// `aud` may be a single string or an array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
enum Audience {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    fn contains(&self, expected: &str) -> bool {
        match self {
            Audience::None => false,
            Audience::Single(s) => s == expected,
            Audience::Multiple(v) => v.iter().any(|s| s == expected),
        }
    }
}

/// Production `SessionValidator` for Supabase-issued tokens.
pub struct SupabaseSessionValidator {
    config: SupabaseAuthConfig,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SupabaseSessionValidator {
    pub fn new(config: SupabaseAuthConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer()]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "sub", "aud"]);
        validation.leeway = config.leeway_secs;

        Self {
            config,
            decoding_key,
            validation,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<SupabaseClaims, AuthError> {
        decode::<SupabaseClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for SupabaseSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        if !claims.aud.contains(&self.config.audience) {
            tracing::warn!(aud = ?claims.aud, "Audience mismatch after validation");
            return Err(AuthError::InvalidToken);
        }

        // Anonymous and service-role tokens carry no member identity.
        if claims.role.as_deref() != Some(self.config.audience.as_str()) {
            tracing::warn!(role = ?claims.role, "Token role is not a signed-in user");
            return Err(AuthError::InvalidToken);
        }

        let email = claims.email.filter(|e| !e.is_empty()).ok_or_else(|| {
            tracing::warn!("Token missing email claim");
            AuthError::InvalidToken
        })?;

        let user_id = UserId::parse(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(
            user_id,
            email,
            claims.user_metadata.full_name,
        ))
    }
}

impl std::fmt::Debug for SupabaseSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseSessionValidator")
            .field("issuer", &self.config.issuer())
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use uuid::Uuid;

    const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters";
    const PROJECT: &str = "https://abc.supabase.co";

    fn validator() -> SupabaseSessionValidator {
        SupabaseSessionValidator::new(SupabaseAuthConfig::new(PROJECT, SECRET))
    }

    fn token(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(sub: &str, exp_offset: i64) -> serde_json::Value {
        json!({
            "sub": sub,
            "iss": "https://abc.supabase.co/auth/v1",
            "aud": "authenticated",
            "role": "authenticated",
            "exp": Utc::now().timestamp() + exp_offset,
            "email": "ada@uni.edu",
            "user_metadata": { "full_name": "Ada Obi" }
        })
    }

    // ════════════════════════════════════════════════════════════════════════
    // Configuration
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn issuer_derived_from_project_url() {
        let config = SupabaseAuthConfig::new("https://abc.supabase.co/", SECRET);
        assert_eq!(config.issuer(), "https://abc.supabase.co/auth/v1");
    }

    #[test]
    fn audience_variants() {
        assert!(Audience::Single("authenticated".into()).contains("authenticated"));
        assert!(Audience::Multiple(vec!["a".into(), "authenticated".into()]).contains("authenticated"));
        assert!(!Audience::None.contains("authenticated"));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Validation
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_token_maps_to_user() {
        let id = Uuid::new_v4();
        let user = validator()
            .validate(&token(claims(&id.to_string(), 3600), SECRET))
            .await
            .unwrap();

        assert_eq!(user.id, UserId::from_uuid(id));
        assert_eq!(user.email, "ada@uni.edu");
        assert_eq!(user.display_name.as_deref(), Some("Ada Obi"));
    }

    #[tokio::test]
    async fn expired_token_rejected() {
        let raw = token(claims(&Uuid::new_v4().to_string(), -3600), SECRET);
        assert_eq!(validator().validate(&raw).await, Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn wrong_secret_rejected() {
        let raw = token(
            claims(&Uuid::new_v4().to_string(), 3600),
            "another-secret-that-is-also-long-enough!!",
        );
        assert_eq!(validator().validate(&raw).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn wrong_issuer_rejected() {
        let mut c = claims(&Uuid::new_v4().to_string(), 3600);
        c["iss"] = json!("https://other.supabase.co/auth/v1");
        assert_eq!(
            validator().validate(&token(c, SECRET)).await,
            Err(AuthError::InvalidToken)
        );
    }

    #[tokio::test]
    async fn anon_role_rejected() {
        let mut c = claims(&Uuid::new_v4().to_string(), 3600);
        c["role"] = json!("anon");
        assert_eq!(
            validator().validate(&token(c, SECRET)).await,
            Err(AuthError::InvalidToken)
        );
    }

    #[tokio::test]
    async fn non_uuid_subject_rejected() {
        let raw = token(claims("not-a-uuid", 3600), SECRET);
        assert_eq!(validator().validate(&raw).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn garbage_rejected() {
        assert_eq!(
            validator().validate("not.a.jwt").await,
            Err(AuthError::InvalidToken)
        );
    }
}
