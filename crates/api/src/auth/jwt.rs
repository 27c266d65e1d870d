//! JWT access-token verification.
//!
//! Tokens are either HS256 (shared secret) or RS256 (identity provider's
//! public key). Signature, `exp`, `iss` and `aud` are checked by
//! `jsonwebtoken`; the permission set is read from the `permissions` claim.

use std::fmt;
use std::path::PathBuf;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::config::ConfigError;

/// Where the token verification key comes from.
#[derive(Clone)]
pub enum KeySource {
    /// HS256 shared secret.
    Secret(String),
    /// Path to an RS256 public key in PEM format.
    RsaPublicKeyPem(PathBuf),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Secret(_) => f.write_str("Secret(<redacted>)"),
            KeySource::RsaPublicKeyPem(path) => {
                f.debug_tuple("RsaPublicKeyPem").field(path).finish()
            }
        }
    }
}

/// Configuration for token validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    pub key: KeySource,
    /// Clock skew tolerated when checking `exp`.
    pub leeway_secs: u64,
}

/// `aud` may be a single string or a list, depending on the issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Claims read from every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject -- the caller's identity at the identity provider.
    pub sub: String,
    pub iss: String,
    pub aud: Audience,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Granted permissions, e.g. `"get:movies"`. `None` when the claim is
    /// absent, which is distinct from an empty grant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// Check `required` against the granted permission set.
    pub fn require(&self, required: &'static str) -> Result<(), AuthError> {
        let granted = self
            .permissions
            .as_ref()
            .ok_or(AuthError::PermissionsMissing)?;
        if granted.iter().any(|p| p == required) {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied { required })
        }
    }
}

/// Verifies bearer tokens against one key, issuer and audience.
///
/// Built once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Build a verifier, reading the PEM file if the key source is a path.
    pub fn from_config(config: &AuthConfig) -> Result<Self, ConfigError> {
        let (key, algorithm) = match &config.key {
            KeySource::Secret(secret) => {
                (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
            }
            KeySource::RsaPublicKeyPem(path) => {
                let pem = std::fs::read(path).map_err(|source| ConfigError::KeyFile {
                    path: path.clone(),
                    source,
                })?;
                (DecodingKey::from_rsa_pem(&pem)?, Algorithm::RS256)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = config.leeway_secs;

        Ok(Self { key, validation })
    }

    /// Validate a raw token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(decode::<Claims>(token, &self.key, &self.validation)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    fn test_config() -> AuthConfig {
        AuthConfig {
            issuer: "https://issuer.test/".to_string(),
            audience: "casting".to_string(),
            key: KeySource::Secret(SECRET.to_string()),
            leeway_secs: 0,
        }
    }

    fn claims(exp_offset: i64, permissions: Option<Vec<&str>>) -> Claims {
        let now = chrono::Utc::now().timestamp();
        Claims {
            sub: "auth0|casting-director".to_string(),
            iss: "https://issuer.test/".to_string(),
            aud: Audience::One("casting".to_string()),
            exp: now + exp_offset,
            iat: Some(now),
            permissions: permissions.map(|p| p.into_iter().map(String::from).collect()),
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    fn verifier() -> TokenVerifier {
        TokenVerifier::from_config(&test_config()).expect("verifier should build")
    }

    #[test]
    fn valid_token_yields_permissions() {
        let token = sign(&claims(600, Some(vec!["get:movies"])), SECRET);
        let claims = verifier().verify(&token).expect("token should verify");

        assert_eq!(claims.sub, "auth0|casting-director");
        assert!(claims.require("get:movies").is_ok());
        assert_eq!(
            claims.require("delete:movies"),
            Err(AuthError::PermissionDenied {
                required: "delete:movies"
            })
        );
    }

    #[test]
    fn expired_token_is_token_expired() {
        // Well past the configured leeway.
        let token = sign(&claims(-300, Some(vec![])), SECRET);
        assert_eq!(verifier().verify(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn different_secret_is_invalid_token() {
        let token = sign(&claims(600, Some(vec![])), "some-other-secret");
        assert_eq!(verifier().verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn garbage_is_invalid_token() {
        assert_eq!(
            verifier().verify("not.a.jwt").unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn wrong_audience_is_invalid_claims() {
        let mut claims = claims(600, Some(vec![]));
        claims.aud = Audience::Many(vec!["someone-else".to_string()]);
        let token = sign(&claims, SECRET);
        assert_eq!(verifier().verify(&token).unwrap_err(), AuthError::InvalidClaims);
    }

    #[test]
    fn audience_list_containing_ours_is_accepted() {
        let mut claims = claims(600, Some(vec![]));
        claims.aud = Audience::Many(vec!["casting".to_string(), "userinfo".to_string()]);
        let token = sign(&claims, SECRET);
        assert!(verifier().verify(&token).is_ok());
    }

    #[test]
    fn absent_permissions_claim_is_distinct_from_empty() {
        let token = sign(&claims(600, None), SECRET);
        let claims = verifier().verify(&token).unwrap();
        assert_eq!(
            claims.require("get:movies"),
            Err(AuthError::PermissionsMissing)
        );
    }

    #[test]
    fn debug_output_redacts_secret() {
        let rendered = format!("{:?}", test_config());
        assert!(!rendered.contains(SECRET));
    }
}
